use crate::palette::{PaletteColor, SizePreset, SizeStep};
use crate::placement::PlacementInput;
use crate::star::Point;

/// Everything the UI layer can ask the painter to do.
#[derive(Debug, Clone, PartialEq)]
pub enum PainterEvent {
    /// A palette swatch was clicked or a digit shortcut pressed
    ColorSelected(PaletteColor),
    /// A size button was clicked
    SizePresetSelected(SizePreset),
    /// `+` / `-` shortcut
    StepBrushSize(SizeStep),
    /// Mouse click or drag sample on the canvas, in canvas coordinates
    StrokeAt(Point),
    /// The Place! button, with the field contents at the time of the click
    PlaceStar(PlacementInput),
    /// The Clear All! button
    ClearCanvas,
}
