use egui::{Color32, ColorImage, Context, TextureHandle, TextureOptions};
use image::{Rgba, RgbaImage};

use crate::renderer::RenderSurface;

const TEXTURE_NAME: &str = "star_canvas";

/// A fixed-size raster the stars are painted into.
///
/// Pixels live in an [`RgbaImage`]; the egui texture is re-uploaded lazily
/// whenever something was drawn since the last frame.
pub struct PixelCanvas {
    pixels: RgbaImage,
    fill: Color32,
    texture: Option<TextureHandle>,
    dirty: bool,
}

impl std::fmt::Debug for PixelCanvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixelCanvas")
            .field("width", &self.pixels.width())
            .field("height", &self.pixels.height())
            .field("fill", &self.fill)
            .field("dirty", &self.dirty)
            .finish()
    }
}

impl PixelCanvas {
    pub fn new(width: u32, height: u32, background: Color32) -> Self {
        Self {
            pixels: RgbaImage::from_pixel(width, height, to_rgba(background)),
            fill: Color32::WHITE,
            texture: None,
            dirty: true,
        }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Color of a single pixel, `None` outside the raster
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color32> {
        self.pixels
            .get_pixel_checked(x, y)
            .map(|&Rgba([r, g, b, a])| Color32::from_rgba_unmultiplied(r, g, b, a))
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Returns the texture for this frame, uploading pending changes first.
    pub fn texture(&mut self, ctx: &Context) -> &TextureHandle {
        if self.dirty {
            let image = color_image(&self.pixels);
            if let Some(handle) = self.texture.as_mut() {
                handle.set(image, TextureOptions::NEAREST);
            } else {
                self.texture = Some(ctx.load_texture(TEXTURE_NAME, image, TextureOptions::NEAREST));
            }
            self.dirty = false;
        }
        self.texture.get_or_insert_with(|| {
            ctx.load_texture(TEXTURE_NAME, color_image(&self.pixels), TextureOptions::NEAREST)
        })
    }

    /// Paints columns `[x0, x1)` of `row`, already clipped.
    fn fill_span(&mut self, row: u32, x0: u32, x1: u32) {
        let color = to_rgba(self.fill);
        for x in x0..x1 {
            self.pixels.put_pixel(x, row, color);
        }
    }

    /// First pixel column whose center lies at or right of `x`, clamped to the raster
    fn column_at(&self, x: f64) -> u32 {
        (x - 0.5).ceil().clamp(0.0, self.pixels.width() as f64) as u32
    }

    fn row_at(&self, y: f64) -> u32 {
        (y - 0.5).ceil().clamp(0.0, self.pixels.height() as f64) as u32
    }
}

impl RenderSurface for PixelCanvas {
    fn set_fill(&mut self, color: Color32) {
        self.fill = color;
    }

    fn fill(&self) -> Color32 {
        self.fill
    }

    /// Scanline fill sampled at pixel centers, using the non-zero winding rule.
    fn fill_polygon(&mut self, xs: &[f64], ys: &[f64], count: usize) {
        let count = count.min(xs.len()).min(ys.len());
        if count < 3 {
            return;
        }
        let (xs, ys) = (&xs[..count], &ys[..count]);
        if xs.iter().chain(ys).any(|v| !v.is_finite()) {
            return;
        }

        let min_y = ys.iter().copied().fold(f64::INFINITY, f64::min);
        let max_y = ys.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let first_row = self.row_at(min_y);
        let end_row = self.row_at(max_y);

        let mut crossings: Vec<(f64, i32)> = Vec::with_capacity(count);
        for row in first_row..end_row {
            let sample_y = row as f64 + 0.5;
            crossings.clear();

            for i in 0..count {
                let j = (i + 1) % count;
                let (x0, y0, x1, y1) = (xs[i], ys[i], xs[j], ys[j]);
                let direction = if y0 <= sample_y && y1 > sample_y {
                    1
                } else if y1 <= sample_y && y0 > sample_y {
                    -1
                } else {
                    continue;
                };
                let t = (sample_y - y0) / (y1 - y0);
                crossings.push((x0 + t * (x1 - x0), direction));
            }
            crossings.sort_by(|a, b| a.0.total_cmp(&b.0));

            let mut winding = 0;
            for k in 0..crossings.len().saturating_sub(1) {
                winding += crossings[k].1;
                if winding != 0 {
                    let x0 = self.column_at(crossings[k].0);
                    let x1 = self.column_at(crossings[k + 1].0);
                    self.fill_span(row, x0, x1);
                }
            }
        }
        self.dirty = true;
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        let values = [x, y, width, height];
        if values.iter().any(|v| !v.is_finite()) || width <= 0.0 || height <= 0.0 {
            return;
        }
        let (x0, x1) = (self.column_at(x), self.column_at(x + width));
        for row in self.row_at(y)..self.row_at(y + height) {
            self.fill_span(row, x0, x1);
        }
        self.dirty = true;
    }

    fn dimensions(&self) -> (f64, f64) {
        (self.pixels.width() as f64, self.pixels.height() as f64)
    }
}

fn color_image(pixels: &RgbaImage) -> ColorImage {
    ColorImage::from_rgba_unmultiplied(
        [pixels.width() as usize, pixels.height() as usize],
        pixels.as_raw(),
    )
}

fn to_rgba(color: Color32) -> Rgba<u8> {
    Rgba(color.to_srgba_unmultiplied())
}
