use crate::canvas::PixelCanvas;
use crate::config::PainterConfig;
use crate::error::ConfigResult;
use crate::event::PainterEvent;
use crate::input::InputHandler;
use crate::panels;
use crate::placement::PlacementInput;
use crate::state::PainterState;

/// Window title
pub const APP_NAME: &str = "Magic Star Painter";

#[derive(Debug)]
pub struct PaintApp {
    state: PainterState,
    canvas: PixelCanvas,
    fields: PlacementInput,
    input: InputHandler,
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: &PainterConfig) -> ConfigResult<Self> {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());
        Self::from_config(config)
    }

    pub fn from_config(config: &PainterConfig) -> ConfigResult<Self> {
        let state = PainterState::from_config(config)?;
        let canvas = PixelCanvas::new(
            config.canvas_width,
            config.canvas_height,
            config.background_color(),
        );

        Ok(Self {
            state,
            canvas,
            fields: PlacementInput::default(),
            input: InputHandler::new(),
        })
    }

    pub fn state(&self) -> &PainterState {
        &self.state
    }

    pub fn canvas(&self) -> &PixelCanvas {
        &self.canvas
    }

    /// Applies one event and runs the resulting draw commands on the canvas.
    pub fn dispatch(&mut self, event: PainterEvent) {
        for command in self.state.update(event) {
            command.execute(&mut self.canvas);
        }
    }
}

impl eframe::App for PaintApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut events = self.input.keyboard_events(ctx);

        panels::placement_panel(ctx, &mut self.fields, &self.state, &mut events);
        panels::palette_panel(ctx, &self.state, &mut events);
        panels::size_panel(ctx, &self.state, &mut events);
        panels::central_panel(ctx, &mut self.canvas, &self.state, &mut self.input, &mut events);

        if !events.is_empty() {
            for event in events {
                self.dispatch(event);
            }
            // Show the result without waiting for the next input
            ctx.request_repaint();
        }
    }
}
