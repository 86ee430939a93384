use egui::{Context, Key, Pos2, Rect, Response};

use crate::event::PainterEvent;
use crate::palette::{PaletteColor, SizeStep};
use crate::star::Point;

const SHORTCUT_KEYS: [Key; 9] = [
    Key::Num1,
    Key::Num2,
    Key::Num3,
    Key::Num4,
    Key::Num5,
    Key::Num6,
    Key::Plus,
    Key::Equals,
    Key::Minus,
];

/// Maps a pressed key to its painter shortcut, if it has one
pub fn shortcut_event(key: Key) -> Option<PainterEvent> {
    let digit = match key {
        Key::Num1 => 1,
        Key::Num2 => 2,
        Key::Num3 => 3,
        Key::Num4 => 4,
        Key::Num5 => 5,
        Key::Num6 => 6,
        Key::Plus | Key::Equals => return Some(PainterEvent::StepBrushSize(SizeStep::Increase)),
        Key::Minus => return Some(PainterEvent::StepBrushSize(SizeStep::Decrease)),
        _ => return None,
    };
    PaletteColor::from_shortcut(digit).map(PainterEvent::ColorSelected)
}

/// What the canvas widget reported about the pointer in one frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CanvasPointer {
    pub drag_started: bool,
    pub dragged: bool,
    pub clicked: bool,
    pub pos: Option<Pos2>,
}

impl CanvasPointer {
    pub fn from_response(response: &Response) -> Self {
        Self {
            drag_started: response.drag_started(),
            dragged: response.dragged(),
            clicked: response.clicked(),
            pos: response.interact_pointer_pos(),
        }
    }
}

/// Converts raw egui input into [`PainterEvent`]s.
#[derive(Debug, Default)]
pub struct InputHandler {
    /// Where the last drag sample landed, so a held but unmoving pointer
    /// does not stamp the same star every frame
    last_stroke_pos: Option<Pos2>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keyboard shortcuts pressed this frame. Skipped while a text field
    /// has focus so typing coordinates does not change the brush.
    pub fn keyboard_events(&self, ctx: &Context) -> Vec<PainterEvent> {
        let typing = ctx.wants_keyboard_input();
        ctx.input(|input| shortcut_events(typing, |key| input.key_pressed(key)))
    }

    /// Turns clicks and drags on the canvas widget into strokes.
    pub fn canvas_event(&mut self, response: &Response, canvas_rect: Rect) -> Option<PainterEvent> {
        self.pointer_event(CanvasPointer::from_response(response), canvas_rect)
    }

    /// One stroke per click, and one per frame in which a drag moved the pointer.
    pub fn pointer_event(&mut self, pointer: CanvasPointer, canvas_rect: Rect) -> Option<PainterEvent> {
        if pointer.drag_started {
            self.last_stroke_pos = None;
        }
        let pos = pointer.pos?;

        let sample = if pointer.clicked {
            Some(pos)
        } else if pointer.dragged && self.last_stroke_pos != Some(pos) {
            self.last_stroke_pos = Some(pos);
            Some(pos)
        } else {
            None
        };

        sample.map(|pos| PainterEvent::StrokeAt(canvas_local(pos, canvas_rect)))
    }
}

/// Shortcut events for the keys `is_pressed` reports, none while `typing`
pub fn shortcut_events(typing: bool, is_pressed: impl Fn(Key) -> bool) -> Vec<PainterEvent> {
    if typing {
        return Vec::new();
    }
    SHORTCUT_KEYS
        .iter()
        .filter(|&&key| is_pressed(key))
        .filter_map(|&key| shortcut_event(key))
        .collect()
}

/// Screen position relative to the canvas origin
pub fn canvas_local(pos: Pos2, canvas_rect: Rect) -> Point {
    Point::from(pos - canvas_rect.min.to_vec2())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_shortcuts() {
        assert_eq!(
            shortcut_event(Key::Num1),
            Some(PainterEvent::ColorSelected(PaletteColor::White))
        );
        assert_eq!(
            shortcut_event(Key::Num3),
            Some(PainterEvent::ColorSelected(PaletteColor::Orange))
        );
        assert_eq!(
            shortcut_event(Key::Num6),
            Some(PainterEvent::ColorSelected(PaletteColor::Purple))
        );
        assert_eq!(shortcut_event(Key::Num7), None);
        assert_eq!(shortcut_event(Key::A), None);
    }

    #[test]
    fn test_size_shortcuts() {
        assert_eq!(
            shortcut_event(Key::Plus),
            Some(PainterEvent::StepBrushSize(SizeStep::Increase))
        );
        assert_eq!(
            shortcut_event(Key::Equals),
            Some(PainterEvent::StepBrushSize(SizeStep::Increase))
        );
        assert_eq!(
            shortcut_event(Key::Minus),
            Some(PainterEvent::StepBrushSize(SizeStep::Decrease))
        );
    }

    #[test]
    fn test_canvas_local() {
        let rect = Rect::from_min_size(Pos2::new(50.0, 50.0), egui::vec2(500.0, 400.0));
        assert_eq!(canvas_local(Pos2::new(60.0, 75.0), rect), Point::new(10.0, 25.0));
    }

    #[test]
    fn test_shortcuts_ignored_while_typing() {
        let pressed = |key: Key| key == Key::Num2 || key == Key::Minus;
        assert!(shortcut_events(true, pressed).is_empty());
        assert_eq!(
            shortcut_events(false, pressed),
            vec![
                PainterEvent::ColorSelected(PaletteColor::Red),
                PainterEvent::StepBrushSize(SizeStep::Decrease),
            ]
        );
    }

    fn drag(pos: Pos2, drag_started: bool) -> CanvasPointer {
        CanvasPointer {
            drag_started,
            dragged: true,
            clicked: false,
            pos: Some(pos),
        }
    }

    #[test]
    fn test_drag_samples_only_moves() {
        let rect = Rect::from_min_size(Pos2::new(50.0, 40.0), egui::vec2(500.0, 400.0));
        let mut handler = InputHandler::new();

        let frames = [
            drag(Pos2::new(60.0, 50.0), true),
            drag(Pos2::new(70.0, 55.0), false),
            drag(Pos2::new(80.0, 60.0), false),
            drag(Pos2::new(80.0, 60.0), false),
            drag(Pos2::new(80.0, 60.0), false),
        ];
        let strokes: Vec<_> = frames
            .into_iter()
            .filter_map(|frame| handler.pointer_event(frame, rect))
            .collect();

        assert_eq!(
            strokes,
            vec![
                PainterEvent::StrokeAt(Point::new(10.0, 10.0)),
                PainterEvent::StrokeAt(Point::new(20.0, 15.0)),
                PainterEvent::StrokeAt(Point::new(30.0, 20.0)),
            ]
        );
    }

    #[test]
    fn test_new_drag_at_same_spot_stamps_again() {
        let rect = Rect::from_min_size(Pos2::ZERO, egui::vec2(100.0, 100.0));
        let mut handler = InputHandler::new();
        let spot = Pos2::new(25.0, 25.0);

        assert!(handler.pointer_event(drag(spot, true), rect).is_some());
        assert!(handler.pointer_event(drag(spot, false), rect).is_none());
        assert_eq!(
            handler.pointer_event(drag(spot, true), rect),
            Some(PainterEvent::StrokeAt(Point::new(25.0, 25.0)))
        );
    }

    #[test]
    fn test_click_and_idle_pointer() {
        let rect = Rect::from_min_size(Pos2::ZERO, egui::vec2(100.0, 100.0));
        let mut handler = InputHandler::new();

        let click = CanvasPointer {
            clicked: true,
            pos: Some(Pos2::new(5.0, 6.0)),
            ..Default::default()
        };
        assert_eq!(
            handler.pointer_event(click, rect),
            Some(PainterEvent::StrokeAt(Point::new(5.0, 6.0)))
        );
        // repeated clicks at one spot each stamp
        assert!(handler.pointer_event(click, rect).is_some());

        let hover = CanvasPointer {
            pos: Some(Pos2::new(5.0, 6.0)),
            ..Default::default()
        };
        assert_eq!(handler.pointer_event(hover, rect), None);
        assert_eq!(handler.pointer_event(CanvasPointer::default(), rect), None);
    }
}
