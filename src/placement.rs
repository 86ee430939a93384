use crate::error::{Field, FieldError, PlacementErrors};
use crate::star::{Point, Star};

/// Raw text of the size / X / Y fields used to place a star by hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementInput {
    pub size: String,
    pub x: String,
    pub y: String,
}

impl Default for PlacementInput {
    fn default() -> Self {
        Self::new("#", "X", "Y")
    }
}

/// A validated placement request
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub size: f64,
    pub center: Point,
}

impl Placement {
    pub fn star(&self) -> Star {
        Star::new(self.size, self.center)
    }
}

impl PlacementInput {
    pub fn new(size: impl Into<String>, x: impl Into<String>, y: impl Into<String>) -> Self {
        Self {
            size: size.into(),
            x: x.into(),
            y: y.into(),
        }
    }

    /// Validates all three fields, collecting every failure rather than
    /// stopping at the first one.
    pub fn parse(&self) -> Result<Placement, PlacementErrors> {
        let size = parse_field(Field::Size, &self.size);
        let x = parse_field(Field::X, &self.x);
        let y = parse_field(Field::Y, &self.y);

        match (size, x, y) {
            (Ok(size), Ok(x), Ok(y)) => Ok(Placement {
                size,
                center: Point::new(x, y),
            }),
            (size, x, y) => Err(PlacementErrors(
                [size.err(), x.err(), y.err()].into_iter().flatten().collect(),
            )),
        }
    }
}

/// Parses one field. `inf` and `NaN` parse as `f64` but place nothing, so
/// they are rejected like any other non-number.
fn parse_field(field: Field, text: &str) -> Result<f64, FieldError> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| FieldError {
            field,
            input: text.to_owned(),
        })
}
