use eframe::egui::{self, Color32, RichText};

use super::{BOTTOM_STRIPE, SIDE_COLUMN_WIDTH, STATUS_STRIPE};
use crate::event::PainterEvent;
use crate::placement::PlacementInput;
use crate::state::PainterState;

const LABEL_COLOR: Color32 = Color32::from_rgb(255, 230, 80);
const BUTTON_FILL: Color32 = Color32::from_rgb(0xff, 0xed, 0x52);
const FIELD_VALID: Color32 = Color32::from_rgb(0xff, 0xfb, 0xda);
const FIELD_INVALID: Color32 = Color32::from_rgb(0xff, 0x9c, 0xba);

/// Bottom bar: size/position fields, Place! and Clear All!, and the status line.
pub fn placement_panel(
    ctx: &egui::Context,
    fields: &mut PlacementInput,
    state: &PainterState,
    events: &mut Vec<PainterEvent>,
) {
    let status = state.status();
    egui::TopBottomPanel::bottom("status_panel")
        .exact_height(25.0)
        .frame(egui::Frame::none().fill(STATUS_STRIPE))
        .show(ctx, |ui| {
            ui.centered_and_justified(|ui| {
                ui.label(
                    RichText::new(&status.text)
                        .color(status.tone.color32())
                        .size(10.0),
                );
            });
        });

    let flags = state.invalid_fields();
    egui::TopBottomPanel::bottom("placement_panel")
        .frame(
            egui::Frame::none()
                .fill(BOTTOM_STRIPE)
                .inner_margin(egui::Margin::symmetric(SIDE_COLUMN_WIDTH, 12.0)),
        )
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new("Size:").color(LABEL_COLOR));
                number_field(ui, &mut fields.size, flags.size);

                ui.add_space(20.0);
                ui.label(RichText::new("Position:").color(LABEL_COLOR));
                number_field(ui, &mut fields.x, flags.x);
                number_field(ui, &mut fields.y, flags.y);

                ui.add_space(20.0);
                if action_button(ui, "Place!", 60.0).clicked() {
                    events.push(PainterEvent::PlaceStar(fields.clone()));
                }
                if action_button(ui, "Clear All!", 80.0).clicked() {
                    events.push(PainterEvent::ClearCanvas);
                }
            });
        });
}

fn number_field(ui: &mut egui::Ui, text: &mut String, invalid: bool) -> egui::Response {
    let background = if invalid { FIELD_INVALID } else { FIELD_VALID };
    ui.add(
        egui::TextEdit::singleline(text)
            .desired_width(50.0)
            .background_color(background)
            .text_color(Color32::BLACK),
    )
}

fn action_button(ui: &mut egui::Ui, label: &str, width: f32) -> egui::Response {
    ui.add(
        egui::Button::new(RichText::new(label).color(Color32::BLACK))
            .fill(BUTTON_FILL)
            .min_size(egui::vec2(width, 20.0)),
    )
}
