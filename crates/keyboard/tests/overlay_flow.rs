use core_types::{Point, SurfaceKind};
use input_core::SelectionRange;
use keyboard::{FocusedTarget, Key, KeyOutcome, KeyboardOverlay, Modifier};

/// Minimal stand-in for a host: five buffers, a caret each.
struct Fields {
    values: Vec<String>,
    carets: Vec<usize>,
}

impl Fields {
    fn new() -> Self {
        Self {
            values: vec![String::new(); 5],
            carets: vec![0; 5],
        }
    }

    fn press(&mut self, overlay: &mut KeyboardOverlay<usize>, key: Key) -> (KeyOutcome, usize) {
        let focused = overlay.focused();
        let current = focused.map(|i| (self.values[i].clone(), self.carets[i]));
        let target = current
            .as_ref()
            .map(|(value, caret)| FocusedTarget::new(value, SelectionRange::caret(*caret)));

        let mut calls = 0;
        let outcome = overlay.press(key, target, |edit| {
            calls += 1;
            if let Some(i) = focused {
                self.values[i] = edit.value.clone();
                self.carets[i] = edit.caret;
            }
        });
        (outcome, calls)
    }
}

#[test]
fn keys_before_any_focus_are_dropped() {
    let mut overlay = KeyboardOverlay::default();
    let mut fields = Fields::new();

    for key in [Key::Char('A'), Key::Shift, Key::Backspace, Key::Enter] {
        let (outcome, calls) = fields.press(&mut overlay, key);
        assert_eq!(outcome, KeyOutcome::Dropped);
        assert_eq!(calls, 0);
    }
    assert!(fields.values.iter().all(String::is_empty));
    assert!(!overlay.modifiers().is_active(Modifier::Shift));
}

#[test]
fn typing_follows_the_last_focused_field() {
    let mut overlay = KeyboardOverlay::default();
    let mut fields = Fields::new();

    overlay.focus_in(1, SurfaceKind::MultiLineInput);
    fields.press(&mut overlay, Key::Char('H'));
    fields.press(&mut overlay, Key::Char('I'));

    // Clicking a button does not steal the target.
    overlay.focus_in(99, SurfaceKind::Button);
    fields.press(&mut overlay, Key::Char('!'));

    overlay.focus_in(3, SurfaceKind::MultiLineInput);
    fields.press(&mut overlay, Key::Shift);
    let (_, calls) = fields.press(&mut overlay, Key::Char('x'));

    assert_eq!(calls, 1);
    assert_eq!(fields.values, vec!["", "hi!", "", "X", ""]);
    assert_eq!(fields.carets, vec![0, 3, 0, 1, 0]);
    assert!(overlay.modifiers().is_active(Modifier::Shift));
}

#[test]
fn backspace_at_start_does_not_call_back() {
    let mut overlay = KeyboardOverlay::default();
    let mut fields = Fields::new();

    overlay.focus_in(0, SurfaceKind::SingleLineInput);
    let (outcome, calls) = fields.press(&mut overlay, Key::Backspace);
    assert_eq!(outcome, KeyOutcome::Unchanged);
    assert_eq!(calls, 0);
}

#[test]
fn drag_moves_overlay_by_pointer_delta() {
    let mut overlay: KeyboardOverlay<usize> =
        KeyboardOverlay::default().with_position(Point::new(100.0, 50.0));

    overlay.pointer_down(Point::new(110.0, 60.0));
    overlay.pointer_move(Point::new(210.0, 90.0));
    overlay.pointer_up();
    overlay.pointer_move(Point::new(0.0, 0.0));

    assert_eq!(overlay.position(), Point::new(200.0, 80.0));
    assert!(!overlay.is_dragging());
}
