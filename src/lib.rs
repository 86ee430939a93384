#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod canvas;
pub mod command;
pub mod components;
pub mod config;
pub mod error;
pub mod event;
pub mod input;
pub mod palette;
pub mod panels;
pub mod placement;
pub mod renderer;
pub mod star;
pub mod state;

pub use app::{PaintApp, APP_NAME};
pub use canvas::PixelCanvas;
pub use command::Command;
pub use config::PainterConfig;
pub use error::{ConfigError, FieldError, PlacementErrors};
pub use event::PainterEvent;
pub use palette::{PaletteColor, SizePreset, SizeStep};
pub use placement::{Placement, PlacementInput};
pub use renderer::RenderSurface;
pub use star::{compute_vertices, Point, Star};
pub use state::PainterState;
