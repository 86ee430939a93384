use eframe::egui::{self, Align2, Color32, FontId, Rect};

use super::BACKGROUND;
use crate::canvas::PixelCanvas;
use crate::event::PainterEvent;
use crate::input::InputHandler;
use crate::state::PainterState;

const INSTRUCTIONS: &str = "Welcome to Magic Star Painter!\n\n\
    Drag the mouse across the canvas to paint stars,\n\
    or type a size and position and click Place!\n\n\
    Click a swatch or press 1-6 to pick a color.\n\
    Click a size button or press + / - to change the brush.\n\
    Clear All! wipes the canvas without asking.\n\n\
    Click anywhere to start.";

/// The drawing area. Shows the raster and turns pointer input into strokes.
pub fn central_panel(
    ctx: &egui::Context,
    canvas: &mut PixelCanvas,
    state: &PainterState,
    input: &mut InputHandler,
    events: &mut Vec<PainterEvent>,
) {
    egui::CentralPanel::default()
        .frame(
            egui::Frame::none()
                .fill(BACKGROUND)
                .inner_margin(egui::Margin::symmetric(0.0, 40.0)),
        )
        .show(ctx, |ui| {
            let size = egui::vec2(canvas.width() as f32, canvas.height() as f32);
            let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click_and_drag());

            let texture = canvas.texture(ctx);
            ui.painter().image(
                texture.id(),
                rect,
                Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                Color32::WHITE,
            );

            if state.overlay_visible() {
                draw_instructions(ui.painter(), rect);
            }

            if response.hovered() {
                ctx.set_cursor_icon(egui::CursorIcon::Crosshair);
            }

            if let Some(event) = input.canvas_event(&response, rect) {
                events.push(event);
            }
        });
}

fn draw_instructions(painter: &egui::Painter, rect: Rect) {
    painter.rect_filled(rect, 0.0, Color32::from_rgb(50, 50, 160));
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        INSTRUCTIONS,
        FontId::proportional(14.0),
        Color32::from_rgb(255, 230, 80),
    );
}
