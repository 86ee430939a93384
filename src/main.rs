#![warn(clippy::all, rust_2018_idioms)]

use magic_star_painter::{PainterConfig, PaintApp, APP_NAME};

fn main() -> eframe::Result<()> {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let config = PainterConfig::from_env().unwrap_or_else(|err| {
        log::warn!("{}; using default configuration", err);
        PainterConfig::default()
    });

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_NAME)
            .with_inner_size([
                config.canvas_width as f32 + 100.0,
                config.canvas_height as f32 + 250.0,
            ])
            .with_resizable(false),
        ..Default::default()
    };
    eframe::run_native(
        APP_NAME,
        native_options,
        Box::new(move |cc| {
            let app = PaintApp::new(cc, &config)?;
            Ok(Box::new(app))
        }),
    )
}
