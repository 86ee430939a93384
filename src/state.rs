//! Application state and the update function that drives it.
//!
//! The UI never touches this state directly. Widgets and input handlers
//! produce [`PainterEvent`]s, [`PainterState::update`] applies them one at a
//! time and hands back the [`Command`]s the canvas has to run.

use egui::Color32;

use crate::command::Command;
use crate::config::PainterConfig;
use crate::error::{ConfigResult, Field};
use crate::event::PainterEvent;
use crate::palette::{PaletteColor, SizePreset, SizeStep};
use crate::placement::PlacementInput;
use crate::star::{Point, Star};

/// How the status line should be colored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Info,
    Error,
    BrushSize,
    Color(PaletteColor),
    Placed,
}

impl StatusTone {
    pub fn color32(self) -> Color32 {
        match self {
            StatusTone::Info => Color32::WHITE,
            StatusTone::Error => Color32::from_rgb(255, 192, 203),
            StatusTone::BrushSize => Color32::from_rgb(0xff, 0xed, 0x52),
            StatusTone::Color(color) => color.color32(),
            StatusTone::Placed => Color32::from_rgb(0xff, 0xfb, 0xda),
        }
    }
}

/// The one-line feedback shown under the controls
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub text: String,
    pub tone: StatusTone,
}

impl Default for Status {
    fn default() -> Self {
        Self {
            text: String::new(),
            tone: StatusTone::Info,
        }
    }
}

/// Which placement fields failed on the last attempt
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldFlags {
    pub size: bool,
    pub x: bool,
    pub y: bool,
}

impl FieldFlags {
    pub fn is_invalid(&self, field: Field) -> bool {
        match field {
            Field::Size => self.size,
            Field::X => self.x,
            Field::Y => self.y,
        }
    }

    fn flag(&mut self, field: Field) {
        match field {
            Field::Size => self.size = true,
            Field::X => self.x = true,
            Field::Y => self.y = true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PainterState {
    brush_color: PaletteColor,
    brush_size: SizePreset,
    background: Color32,
    status: Status,
    invalid_fields: FieldFlags,
    instructions_dismissed: bool,
    /// Whether the instruction text is still on the canvas. A clear wipes it
    /// without counting as the first stroke.
    overlay_visible: bool,
}

impl Default for PainterState {
    fn default() -> Self {
        Self::new(
            PaletteColor::White,
            SizePreset::Tiny,
            PainterConfig::default().background_color(),
            true,
        )
    }
}

impl PainterState {
    pub fn new(
        brush_color: PaletteColor,
        brush_size: SizePreset,
        background: Color32,
        show_instructions: bool,
    ) -> Self {
        Self {
            brush_color,
            brush_size,
            background,
            status: Status::default(),
            invalid_fields: FieldFlags::default(),
            instructions_dismissed: !show_instructions,
            overlay_visible: show_instructions,
        }
    }

    pub fn from_config(config: &PainterConfig) -> ConfigResult<Self> {
        Ok(Self::new(
            config.brush_color,
            config.initial_size()?,
            config.background_color(),
            config.show_instructions,
        ))
    }

    pub fn brush_color(&self) -> PaletteColor {
        self.brush_color
    }

    pub fn brush_size(&self) -> SizePreset {
        self.brush_size
    }

    pub fn background(&self) -> Color32 {
        self.background
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn invalid_fields(&self) -> FieldFlags {
        self.invalid_fields
    }

    pub fn instructions_dismissed(&self) -> bool {
        self.instructions_dismissed
    }

    pub fn overlay_visible(&self) -> bool {
        self.overlay_visible
    }

    /// Applies one event and returns the draw commands it causes, in order.
    pub fn update(&mut self, event: PainterEvent) -> Vec<Command> {
        let mut commands = Vec::new();
        match event {
            PainterEvent::ColorSelected(color) => {
                log::info!("Brush color set to {}", color.name());
                self.brush_color = color;
                self.set_status("Set new Color!", StatusTone::Color(color));
            }
            PainterEvent::SizePresetSelected(preset) => {
                log::info!("Brush size set to {}", preset);
                self.brush_size = preset;
                self.set_status(format!("Changed to size {}", preset), StatusTone::BrushSize);
            }
            PainterEvent::StepBrushSize(step) => self.step_brush_size(step),
            PainterEvent::StrokeAt(pos) => self.stroke_at(pos, &mut commands),
            PainterEvent::PlaceStar(input) => self.place_star(&input, &mut commands),
            PainterEvent::ClearCanvas => {
                log::info!("Canvas cleared");
                commands.push(self.clear_command());
                self.overlay_visible = false;
                self.set_status("Canvas has been cleared!", StatusTone::Info);
            }
        }
        commands
    }

    fn step_brush_size(&mut self, step: SizeStep) {
        match (self.brush_size.step(step), step) {
            (Some(preset), SizeStep::Increase) => {
                self.brush_size = preset;
                self.set_status(format!("Brush increased to {}", preset), StatusTone::Info);
            }
            (Some(preset), SizeStep::Decrease) => {
                self.brush_size = preset;
                self.set_status(format!("Brush reduced to {}", preset), StatusTone::Info);
            }
            (None, SizeStep::Increase) => {
                self.set_status("Brush can't get bigger!", StatusTone::Error);
            }
            (None, SizeStep::Decrease) => {
                self.set_status("Brush can't get smaller!", StatusTone::Error);
            }
        }
    }

    fn stroke_at(&mut self, pos: Point, commands: &mut Vec<Command>) {
        // The first stroke only wipes the instructions off the canvas.
        if self.dismiss_instructions(commands) {
            return;
        }
        commands.push(Command::FillStar {
            star: Star::new(self.brush_size.size(), pos),
            color: self.brush_color.color32(),
        });
    }

    fn place_star(&mut self, input: &PlacementInput, commands: &mut Vec<Command>) {
        self.dismiss_instructions(commands);
        self.invalid_fields = FieldFlags::default();

        match input.parse() {
            Ok(placement) => {
                log::info!(
                    "Placing star of size {} at ({}, {})",
                    placement.size,
                    placement.center.x,
                    placement.center.y
                );
                commands.push(Command::FillStar {
                    star: placement.star(),
                    color: self.brush_color.color32(),
                });
                self.set_status("Star Placed!!!", StatusTone::Placed);
            }
            Err(errors) => {
                for error in errors.iter() {
                    self.invalid_fields.flag(error.field);
                }
                self.set_status(errors.to_string(), StatusTone::Error);
            }
        }
    }

    /// Clears the instruction overlay on first use. Returns whether it did.
    fn dismiss_instructions(&mut self, commands: &mut Vec<Command>) -> bool {
        if self.instructions_dismissed {
            return false;
        }
        self.instructions_dismissed = true;
        self.overlay_visible = false;
        commands.push(self.clear_command());
        true
    }

    fn clear_command(&self) -> Command {
        Command::Clear {
            background: self.background,
        }
    }

    fn set_status(&mut self, text: impl Into<String>, tone: StatusTone) {
        self.status = Status {
            text: text.into(),
            tone,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready_state() -> PainterState {
        PainterState::new(
            PaletteColor::White,
            SizePreset::Tiny,
            Color32::from_rgb(255, 250, 220),
            false,
        )
    }

    #[test]
    fn test_color_selection() {
        let mut state = ready_state();
        let commands = state.update(PainterEvent::ColorSelected(PaletteColor::Green));
        assert!(commands.is_empty());
        assert_eq!(state.brush_color(), PaletteColor::Green);
        assert_eq!(state.status().text, "Set new Color!");
        assert_eq!(state.status().tone, StatusTone::Color(PaletteColor::Green));
    }

    #[test]
    fn test_size_selection() {
        let mut state = ready_state();
        state.update(PainterEvent::SizePresetSelected(SizePreset::Huge));
        assert_eq!(state.brush_size(), SizePreset::Huge);
        assert_eq!(state.status().text, "Changed to size 160");
        assert_eq!(state.status().tone, StatusTone::BrushSize);
    }

    #[test]
    fn test_step_messages() {
        let mut state = ready_state();
        state.update(PainterEvent::StepBrushSize(SizeStep::Increase));
        assert_eq!(state.brush_size(), SizePreset::Small);
        assert_eq!(state.status().text, "Brush increased to 20");

        state.update(PainterEvent::StepBrushSize(SizeStep::Decrease));
        assert_eq!(state.brush_size(), SizePreset::Tiny);
        assert_eq!(state.status().text, "Brush reduced to 10");
    }

    #[test]
    fn test_first_stroke_only_clears_instructions() {
        let mut state = PainterState::default();
        assert!(!state.instructions_dismissed());

        let commands = state.update(PainterEvent::StrokeAt(Point::new(5.0, 5.0)));
        assert_eq!(commands.len(), 1);
        assert!(matches!(commands[0], Command::Clear { .. }));
        assert!(state.instructions_dismissed());

        let commands = state.update(PainterEvent::StrokeAt(Point::new(5.0, 5.0)));
        assert_eq!(commands.len(), 1);
        assert!(matches!(commands[0], Command::FillStar { .. }));
    }

    #[test]
    fn test_stroke_uses_current_brush() {
        let mut state = ready_state();
        state.update(PainterEvent::ColorSelected(PaletteColor::Orange));
        state.update(PainterEvent::SizePresetSelected(SizePreset::Medium));

        let commands = state.update(PainterEvent::StrokeAt(Point::new(30.0, 40.0)));
        assert_eq!(
            commands,
            vec![Command::FillStar {
                star: Star::new(40.0, Point::new(30.0, 40.0)),
                color: PaletteColor::Orange.color32(),
            }]
        );
    }

    #[test]
    fn test_stroke_keeps_status() {
        let mut state = ready_state();
        state.update(PainterEvent::ColorSelected(PaletteColor::Blue));
        state.update(PainterEvent::StrokeAt(Point::new(1.0, 1.0)));
        assert_eq!(state.status().text, "Set new Color!");
    }

    #[test]
    fn test_failed_placement_flags_fields() {
        let mut state = ready_state();
        let commands = state.update(PainterEvent::PlaceStar(PlacementInput::new("1", "x", "y")));
        assert!(commands.is_empty());
        let flags = state.invalid_fields();
        assert!(!flags.is_invalid(Field::Size));
        assert!(flags.is_invalid(Field::X));
        assert!(flags.is_invalid(Field::Y));
        assert_eq!(state.status().tone, StatusTone::Error);

        state.update(PainterEvent::PlaceStar(PlacementInput::new("1", "2", "3")));
        assert_eq!(state.invalid_fields(), FieldFlags::default());
        assert_eq!(state.status().text, "Star Placed!!!");
        assert_eq!(state.status().tone, StatusTone::Placed);
    }

    #[test]
    fn test_first_placement_clears_then_places() {
        let mut state = PainterState::default();
        let commands = state.update(PainterEvent::PlaceStar(PlacementInput::new("10", "10", "10")));
        assert_eq!(commands.len(), 2);
        assert!(matches!(commands[0], Command::Clear { .. }));
        assert!(matches!(commands[1], Command::FillStar { .. }));
    }

    #[test]
    fn test_clear_canvas() {
        let mut state = ready_state();
        let commands = state.update(PainterEvent::ClearCanvas);
        assert_eq!(
            commands,
            vec![Command::Clear {
                background: Color32::from_rgb(255, 250, 220)
            }]
        );
        assert_eq!(state.status().text, "Canvas has been cleared!");
    }

    #[test]
    fn test_clear_hides_overlay_but_first_stroke_still_clears() {
        let mut state = PainterState::default();
        assert!(state.overlay_visible());

        state.update(PainterEvent::ClearCanvas);
        assert!(!state.overlay_visible());
        assert!(!state.instructions_dismissed());

        let commands = state.update(PainterEvent::StrokeAt(Point::new(5.0, 5.0)));
        assert_eq!(commands.len(), 1);
        assert!(matches!(commands[0], Command::Clear { .. }));
        assert!(state.instructions_dismissed());
        assert!(!state.overlay_visible());
    }

    #[test]
    fn test_from_config() {
        let config = PainterConfig {
            brush_size: 320.0,
            brush_color: PaletteColor::Red,
            show_instructions: false,
            ..Default::default()
        };
        let state = PainterState::from_config(&config).unwrap();
        assert_eq!(state.brush_size(), SizePreset::Giant);
        assert_eq!(state.brush_color(), PaletteColor::Red);
        assert!(state.instructions_dismissed());
        assert!(!state.overlay_visible());
    }
}
