use super::*;
use core_types::SurfaceKind;
use input_core::SelectionRange;
use keyboard::{FocusedTarget, Key, KeyboardOverlay};

fn filled(values: [&str; 5]) -> HostForm {
    let mut form = HostForm::default();
    for (i, v) in values.iter().enumerate() {
        form.set_value(i, *v).unwrap();
    }
    form
}

/// Route one overlay key press into the form the way the UI does.
fn press(form: &mut HostForm, overlay: &mut KeyboardOverlay<usize>, key: Key) -> usize {
    let mut calls = 0;
    let Some(index) = overlay.focused() else {
        overlay.press(key, None, |_| calls += 1);
        return calls;
    };
    let value = form.value(index).unwrap_or_default().to_owned();
    let range = form.caret_range(index).unwrap_or(SelectionRange::caret(value.len()));
    overlay.press(key, Some(FocusedTarget::new(&value, range)), |edit| {
        calls += 1;
        form.apply_edit(index, edit.value.clone(), edit.caret).unwrap();
    });
    calls
}

#[test]
fn starts_with_five_empty_fields() {
    let form = HostForm::default();
    assert_eq!(form.len(), 5);
    assert_eq!(form.values(), vec![""; 5]);
    assert_eq!(form.phase(), FormPhase::Editing);
    assert_eq!(form.focused(), None);
}

#[test]
fn set_value_targets_one_index() {
    let mut form = HostForm::default();
    form.set_value(2, "middle").unwrap();
    assert_eq!(form.values(), vec!["", "", "middle", "", ""]);
    assert_eq!(form.caret_range(2), Some(SelectionRange::caret(6)));
}

#[test]
fn set_value_out_of_range_is_rejected_and_length_is_fixed() {
    let mut form = HostForm::default();
    assert_eq!(
        form.set_value(5, "x"),
        Err(FormError::FieldOutOfRange { index: 5, len: 5 })
    );
    assert_eq!(form.len(), 5);
    assert_eq!(form.values().len(), 5);
    assert_eq!(form.value(5), None);
}

#[test]
fn set_value_normalizes_line_endings() {
    let mut form = HostForm::default();
    form.set_value(0, "a\r\nb").unwrap();
    assert_eq!(form.value(0), Some("a\nb"));
}

#[test]
fn submit_lists_fields_with_one_based_labels() {
    let mut form = filled(["a", "b", "c", "d", "e"]);
    form.submit();

    assert!(form.is_submitted());
    assert_eq!(
        form.submitted_lines(),
        vec![
            "Text Field 1: a",
            "Text Field 2: b",
            "Text Field 3: c",
            "Text Field 4: d",
            "Text Field 5: e",
        ]
    );
}

#[test]
fn submitted_values_are_frozen() {
    let mut form = filled(["a", "b", "c", "d", "e"]);
    form.submit();

    assert_eq!(form.set_value(0, "changed"), Err(FormError::Submitted));
    assert_eq!(form.apply_edit(0, "changed", 1), Err(FormError::Submitted));
    assert_eq!(form.value(0), Some("a"));

    // A second submit keeps the original snapshot.
    assert_eq!(form.submit(), &["a", "b", "c", "d", "e"]);
}

#[test]
fn reset_after_submit_clears_and_reopens() {
    let mut form = filled(["a", "b", "c", "d", "e"]);
    form.focus(3).unwrap();
    form.submit();
    form.reset();

    assert_eq!(form.phase(), FormPhase::Editing);
    assert_eq!(form.values(), vec![""; 5]);
    assert!(form.submitted_lines().is_empty());
    assert_eq!(form.focused(), Some(3));
    form.set_value(0, "again").unwrap();
}

#[test]
fn value_message_matches_show_value_button() {
    let form = filled(["", "hi", "", "", ""]);
    assert_eq!(form.value_message(1).unwrap(), "Value from Text Field 2: hi");
    assert_eq!(form.value_message(0).unwrap(), "Value from Text Field 1: ");
    assert!(form.value_message(7).is_err());
}

#[test]
fn caret_range_can_be_synced_after_submit() {
    let mut form = filled(["abc", "", "", "", ""]);
    form.submit();
    assert_eq!(form.set_caret_range(0, SelectionRange::new(0, 2)), Ok(true));
    assert_eq!(form.caret_range(0), Some(SelectionRange::new(0, 2)));
}

#[test]
fn overlay_types_into_focused_field_at_caret() {
    let mut form = filled(["", "world", "", "", ""]);
    let mut overlay = KeyboardOverlay::default();

    form.focus(1).unwrap();
    overlay.focus_in(1, SurfaceKind::MultiLineInput);
    form.set_caret_range(1, SelectionRange::caret(0)).unwrap();

    for key in [Key::Shift, Key::Char('H'), Key::Shift, Key::Char('I'), Key::Space] {
        press(&mut form, &mut overlay, key);
    }

    assert_eq!(form.value(1), Some("Hi world"));
    assert_eq!(form.caret_range(1), Some(SelectionRange::caret(3)));
}

#[test]
fn overlay_press_without_focus_leaves_form_untouched() {
    let mut form = HostForm::default();
    let mut overlay = KeyboardOverlay::default();

    let calls = press(&mut form, &mut overlay, Key::Char('A'));

    assert_eq!(calls, 0);
    assert_eq!(form.values(), vec![""; 5]);
    assert_eq!(form.caret_range(0), Some(SelectionRange::caret(0)));
}

#[test]
fn tab_keeps_legacy_caret_through_the_form() {
    let mut form = HostForm::default();
    let mut overlay = KeyboardOverlay::default();
    form.focus(0).unwrap();
    overlay.focus_in(0, SurfaceKind::MultiLineInput);

    press(&mut form, &mut overlay, Key::Tab);
    press(&mut form, &mut overlay, Key::Char('X'));

    assert_eq!(form.value(0), Some(" x   "));
}

#[test]
fn custom_field_count() {
    let form = HostForm::new(2);
    assert_eq!(form.len(), 2);
    assert!(!form.is_empty());
    assert!(HostForm::new(0).is_empty());
}
