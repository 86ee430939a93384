use egui::Color32;

use crate::renderer::RenderSurface;
use crate::star::Star;

/// Draw operations produced by the state update and run against a surface
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Fill one star in the given color
    FillStar { star: Star, color: Color32 },
    /// Repaint the whole surface with the background, leaving the fill color as it was
    Clear { background: Color32 },
}

impl Command {
    pub fn execute(&self, surface: &mut dyn RenderSurface) {
        match self {
            Command::FillStar { star, color } => {
                log::debug!(
                    "Filling star of size {} at ({}, {})",
                    star.size(),
                    star.center().x,
                    star.center().y
                );
                surface.set_fill(*color);
                star.draw(surface);
            }
            Command::Clear { background } => {
                log::debug!("Clearing surface");
                let old_fill = surface.fill();
                let (width, height) = surface.dimensions();
                surface.set_fill(*background);
                surface.fill_rect(0.0, 0.0, width, height);
                surface.set_fill(old_fill);
            }
        }
    }
}
