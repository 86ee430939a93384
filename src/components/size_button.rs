use eframe::egui;

use super::SELECTED_OUTLINE;
use crate::palette::SizePreset;
use crate::star::{Point, Star};

const BUTTON_BACKGROUND: egui::Color32 = egui::Color32::from_rgb(0x32, 0x32, 0xa0);

/// A 30x30 button showing a star scaled to its preset
pub struct SizeButton {
    pub preset: SizePreset,
    pub selected: bool,
}

impl SizeButton {
    pub fn new(preset: SizePreset, selected: bool) -> Self {
        Self { preset, selected }
    }

    /// Icon width inside the button; grows with the preset but always fits
    fn icon_size(&self) -> f64 {
        6.0 + 4.0 * self.preset.rank() as f64
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let button_size = egui::vec2(30.0, 30.0);
        let (rect, response) = ui.allocate_exact_size(button_size, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let bg_color = if response.hovered() {
                egui::Color32::from_rgb(0x46, 0x46, 0xb4)
            } else {
                BUTTON_BACKGROUND
            };
            ui.painter().rect_filled(rect, 4.0, bg_color);

            let icon = Star::new(self.icon_size(), Point::from(rect.center()));
            ui.painter()
                .add(egui::Shape::mesh(icon.to_mesh(egui::Color32::WHITE)));

            if self.selected {
                ui.painter().rect_stroke(
                    rect,
                    4.0,
                    egui::Stroke::new(2.0, SELECTED_OUTLINE),
                );
            }
        }

        response.on_hover_text(format!("Brush size {}", self.preset))
    }
}
