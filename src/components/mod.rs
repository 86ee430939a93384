mod size_button;
mod swatch_button;

pub use size_button::SizeButton;
pub use swatch_button::SwatchButton;

use eframe::egui::Color32;

/// Outline drawn around the active swatch or size button
pub const SELECTED_OUTLINE: Color32 = Color32::from_rgb(0xff, 0xed, 0x52);
