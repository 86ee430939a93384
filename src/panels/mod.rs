mod central_panel;
mod palette_panel;
mod placement_panel;
mod size_panel;

pub use central_panel::central_panel;
pub use palette_panel::palette_panel;
pub use placement_panel::placement_panel;
pub use size_panel::size_panel;

use eframe::egui::Color32;

/// Window background around the canvas
pub const BACKGROUND: Color32 = Color32::from_rgb(75, 75, 190);
/// Band holding the placement controls
pub const BOTTOM_STRIPE: Color32 = Color32::from_rgb(50, 50, 160);
/// Band holding the status line
pub const STATUS_STRIPE: Color32 = Color32::from_rgb(25, 25, 125);

/// Width of the swatch and size-button columns
pub const SIDE_COLUMN_WIDTH: f32 = 50.0;
