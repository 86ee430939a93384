use eframe::egui;

use super::{BACKGROUND, SIDE_COLUMN_WIDTH};
use crate::components::SwatchButton;
use crate::event::PainterEvent;
use crate::palette::PaletteColor;
use crate::state::PainterState;

/// Left column of color swatches
pub fn palette_panel(ctx: &egui::Context, state: &PainterState, events: &mut Vec<PainterEvent>) {
    egui::SidePanel::left("palette_panel")
        .resizable(false)
        .exact_width(SIDE_COLUMN_WIDTH)
        .frame(egui::Frame::none().fill(BACKGROUND))
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(230.0);
                for color in PaletteColor::ALL {
                    let selected = state.brush_color() == color;
                    if SwatchButton::new(color, selected).show(ui).clicked() {
                        log::info!("Color selected from UI: {}", color.name());
                        events.push(PainterEvent::ColorSelected(color));
                    }
                    ui.add_space(10.0);
                }
            });
        });
}
