use std::fmt;

use egui::Color32;
use serde::{Deserialize, Serialize};

/// The six brush colors, in keyboard shortcut order (`1` to `6`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteColor {
    #[default]
    White,
    Red,
    Orange,
    Green,
    Blue,
    Purple,
}

impl PaletteColor {
    pub const ALL: [PaletteColor; 6] = [
        PaletteColor::White,
        PaletteColor::Red,
        PaletteColor::Orange,
        PaletteColor::Green,
        PaletteColor::Blue,
        PaletteColor::Purple,
    ];

    /// Maps a shortcut digit (1-based) to its color
    pub fn from_shortcut(digit: u8) -> Option<Self> {
        let index = usize::from(digit).checked_sub(1)?;
        Self::ALL.get(index).copied()
    }

    pub fn hex(self) -> &'static str {
        match self {
            PaletteColor::White => "ffffff",
            PaletteColor::Red => "ff9cba",
            PaletteColor::Orange => "ffbb19",
            PaletteColor::Green => "91fd7c",
            PaletteColor::Blue => "8aeaff",
            PaletteColor::Purple => "b79aff",
        }
    }

    pub fn color32(self) -> Color32 {
        match self {
            PaletteColor::White => Color32::from_rgb(0xff, 0xff, 0xff),
            PaletteColor::Red => Color32::from_rgb(0xff, 0x9c, 0xba),
            PaletteColor::Orange => Color32::from_rgb(0xff, 0xbb, 0x19),
            PaletteColor::Green => Color32::from_rgb(0x91, 0xfd, 0x7c),
            PaletteColor::Blue => Color32::from_rgb(0x8a, 0xea, 0xff),
            PaletteColor::Purple => Color32::from_rgb(0xb7, 0x9a, 0xff),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PaletteColor::White => "white",
            PaletteColor::Red => "red",
            PaletteColor::Orange => "orange",
            PaletteColor::Green => "green",
            PaletteColor::Blue => "blue",
            PaletteColor::Purple => "purple",
        }
    }
}

/// The six brush sizes, smallest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum SizePreset {
    #[default]
    Tiny,
    Small,
    Medium,
    Large,
    Huge,
    Giant,
}

impl SizePreset {
    pub const ALL: [SizePreset; 6] = [
        SizePreset::Tiny,
        SizePreset::Small,
        SizePreset::Medium,
        SizePreset::Large,
        SizePreset::Huge,
        SizePreset::Giant,
    ];

    /// Tip-to-tip width in pixels
    pub fn size(self) -> f64 {
        match self {
            SizePreset::Tiny => 10.0,
            SizePreset::Small => 20.0,
            SizePreset::Medium => 40.0,
            SizePreset::Large => 80.0,
            SizePreset::Huge => 160.0,
            SizePreset::Giant => 320.0,
        }
    }

    pub fn from_size(size: f64) -> Option<Self> {
        Self::ALL.into_iter().find(|preset| preset.size() == size)
    }

    /// Zero-based position among the presets
    pub fn rank(self) -> usize {
        self as usize
    }

    /// The next bigger preset, `None` at the top
    pub fn larger(self) -> Option<Self> {
        Self::ALL.get(self.rank() + 1).copied()
    }

    /// The next smaller preset, `None` at the bottom
    pub fn smaller(self) -> Option<Self> {
        self.rank().checked_sub(1).map(|i| Self::ALL[i])
    }

    pub fn step(self, step: SizeStep) -> Option<Self> {
        match step {
            SizeStep::Increase => self.larger(),
            SizeStep::Decrease => self.smaller(),
        }
    }
}

impl fmt::Display for SizePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.size())
    }
}

/// Direction for keyboard brush-size stepping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeStep {
    Increase,
    Decrease,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortcut_digits() {
        assert_eq!(PaletteColor::from_shortcut(1), Some(PaletteColor::White));
        assert_eq!(PaletteColor::from_shortcut(2), Some(PaletteColor::Red));
        assert_eq!(PaletteColor::from_shortcut(6), Some(PaletteColor::Purple));
        assert_eq!(PaletteColor::from_shortcut(0), None);
        assert_eq!(PaletteColor::from_shortcut(7), None);
    }

    #[test]
    fn test_hex_matches_color32() {
        for color in PaletteColor::ALL {
            let c = color.color32();
            assert_eq!(format!("{:02x}{:02x}{:02x}", c.r(), c.g(), c.b()), color.hex());
        }
    }

    #[test]
    fn test_preset_sizes_double() {
        let sizes: Vec<f64> = SizePreset::ALL.iter().map(|p| p.size()).collect();
        assert_eq!(sizes, vec![10.0, 20.0, 40.0, 80.0, 160.0, 320.0]);
    }

    #[test]
    fn test_stepping_clamps_at_ends() {
        assert_eq!(SizePreset::Tiny.smaller(), None);
        assert_eq!(SizePreset::Giant.larger(), None);
        assert_eq!(SizePreset::Tiny.larger(), Some(SizePreset::Small));
        assert_eq!(SizePreset::Giant.smaller(), Some(SizePreset::Huge));
        assert_eq!(SizePreset::Medium.step(SizeStep::Increase), Some(SizePreset::Large));
        assert_eq!(SizePreset::Medium.step(SizeStep::Decrease), Some(SizePreset::Small));
    }

    #[test]
    fn test_from_size() {
        assert_eq!(SizePreset::from_size(80.0), Some(SizePreset::Large));
        assert_eq!(SizePreset::from_size(15.0), None);
        assert_eq!(SizePreset::Huge.to_string(), "160");
    }
}
