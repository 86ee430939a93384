use eframe::egui;

use super::SELECTED_OUTLINE;
use crate::palette::PaletteColor;

/// A 20x20 square filled with one palette color
pub struct SwatchButton {
    pub color: PaletteColor,
    pub selected: bool,
}

impl SwatchButton {
    pub fn new(color: PaletteColor, selected: bool) -> Self {
        Self { color, selected }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let button_size = egui::vec2(20.0, 20.0);
        let (rect, response) = ui.allocate_exact_size(button_size, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            ui.painter().rect_filled(rect, 2.0, self.color.color32());

            if self.selected {
                ui.painter().rect_stroke(
                    rect.expand(2.0),
                    3.0,
                    egui::Stroke::new(2.0, SELECTED_OUTLINE),
                );
            } else if response.hovered() {
                ui.painter().rect_stroke(
                    rect.expand(1.0),
                    3.0,
                    egui::Stroke::new(1.0, egui::Color32::WHITE),
                );
            }
        }

        let shortcut = PaletteColor::ALL
            .iter()
            .position(|&c| c == self.color)
            .map_or(0, |i| i + 1);
        response.on_hover_text(format!("{} (key {})", self.color.name(), shortcut))
    }
}
