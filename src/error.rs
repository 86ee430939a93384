use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// One of the three placement text fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Size,
    X,
    Y,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Size => write!(f, "Size"),
            Self::X => write!(f, "X-position"),
            Self::Y => write!(f, "Y-position"),
        }
    }
}

/// A placement field whose text did not parse as a number
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field} must be a number.")]
pub struct FieldError {
    pub field: Field,
    pub input: String,
}

/// Every field that failed during one placement attempt, in field order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementErrors(pub Vec<FieldError>);

impl PlacementErrors {
    pub fn contains(&self, field: Field) -> bool {
        self.0.iter().any(|e| e.field == field)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }
}

impl fmt::Display for PlacementErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for PlacementErrors {}

/// Errors that can occur while loading the painter configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Brush size {0} is not one of the presets")]
    UnknownBrushSize(f64),

    #[error("Invalid canvas dimensions: {width}x{height}")]
    InvalidCanvas { width: u32, height: u32 },
}

pub type ConfigResult<T> = Result<T, ConfigError>;
