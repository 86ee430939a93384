use egui::Color32;

/// A 2D surface the painter draws onto.
///
/// Mirrors an immediate-mode graphics context: the caller sets the fill color,
/// then issues fills which use it.
pub trait RenderSurface {
    /// Sets the color used by subsequent fills
    fn set_fill(&mut self, color: Color32);

    /// The current fill color
    fn fill(&self) -> Color32;

    /// Fills the closed polygon through the first `count` points of `xs`/`ys`.
    fn fill_polygon(&mut self, xs: &[f64], ys: &[f64], count: usize);

    /// Fills an axis-aligned rectangle.
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    /// Width and height of the drawable area
    fn dimensions(&self) -> (f64, f64);
}
