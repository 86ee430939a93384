use std::fs;
use std::path::Path;

use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::palette::{PaletteColor, SizePreset};

/// Environment variable naming an optional JSON config file
pub const CONFIG_ENV_VAR: &str = "MAGIC_PAINTER_CONFIG";

/// Largest accepted canvas edge in pixels
pub const MAX_CANVAS_EDGE: u32 = 4096;

/// Startup settings for the painter.
///
/// Every key is optional in the JSON form; missing keys fall back to the
/// defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PainterConfig {
    pub canvas_width: u32,
    pub canvas_height: u32,
    /// RGB color the canvas is cleared to
    pub background: [u8; 3],
    /// Initial brush size, must be one of the presets
    pub brush_size: f64,
    pub brush_color: PaletteColor,
    /// Show the instruction overlay until the first stroke or placement
    pub show_instructions: bool,
}

impl Default for PainterConfig {
    fn default() -> Self {
        Self {
            canvas_width: 500,
            canvas_height: 400,
            background: [255, 250, 220],
            brush_size: SizePreset::Tiny.size(),
            brush_color: PaletteColor::White,
            show_instructions: true,
        }
    }
}

impl PainterConfig {
    /// Loads the file named by [`CONFIG_ENV_VAR`], or the defaults when unset.
    pub fn from_env() -> ConfigResult<Self> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::load(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    pub fn load(path: &Path) -> ConfigResult<Self> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded painter config from {}", path.display());
        Ok(config)
    }

    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        let edge_ok = |edge: u32| (1..=MAX_CANVAS_EDGE).contains(&edge);
        if !edge_ok(self.canvas_width) || !edge_ok(self.canvas_height) {
            return Err(ConfigError::InvalidCanvas {
                width: self.canvas_width,
                height: self.canvas_height,
            });
        }
        self.initial_size()?;
        Ok(())
    }

    pub fn initial_size(&self) -> ConfigResult<SizePreset> {
        SizePreset::from_size(self.brush_size)
            .ok_or(ConfigError::UnknownBrushSize(self.brush_size))
    }

    pub fn background_color(&self) -> Color32 {
        let [r, g, b] = self.background;
        Color32::from_rgb(r, g, b)
    }
}
