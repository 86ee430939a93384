use eframe::egui;

use super::{BACKGROUND, SIDE_COLUMN_WIDTH};
use crate::components::SizeButton;
use crate::event::PainterEvent;
use crate::palette::SizePreset;
use crate::state::PainterState;

/// Right column of brush-size buttons
pub fn size_panel(ctx: &egui::Context, state: &PainterState, events: &mut Vec<PainterEvent>) {
    egui::SidePanel::right("size_panel")
        .resizable(false)
        .exact_width(SIDE_COLUMN_WIDTH)
        .frame(egui::Frame::none().fill(BACKGROUND))
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(50.0);
                for preset in SizePreset::ALL {
                    let selected = state.brush_size() == preset;
                    if SizeButton::new(preset, selected).show(ui).clicked() {
                        log::info!("Size selected from UI: {}", preset);
                        events.push(PainterEvent::SizePresetSelected(preset));
                    }
                    ui.add_space(10.0);
                }
            });
        });
}
