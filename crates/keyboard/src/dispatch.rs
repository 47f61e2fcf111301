//! Key press semantics.
//!
//! [`dispatch`] is pure apart from the modifier toggles it flips: it never
//! touches a widget. The caller hands in the focused text and caret range and
//! gets back either a modifier transition or the new `(value, caret)`.

use crate::key::Key;
use crate::modifiers::{Modifier, ModifierState};
use input_core::{SelectionRange, prev_cursor_boundary, replace_range};
use serde::{Deserialize, Serialize};

const TAB_TEXT: &str = "    ";

/// The text-entry surface a key press applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FocusedTarget<'a> {
    pub value: &'a str,
    /// Caret range in bytes. Sanitized before use.
    pub selection: SelectionRange,
}

impl<'a> FocusedTarget<'a> {
    pub fn new(value: &'a str, selection: SelectionRange) -> Self {
        Self { value, selection }
    }

    /// Target with a collapsed caret at byte offset `caret`.
    pub fn at(value: &'a str, caret: usize) -> Self {
        Self::new(value, SelectionRange::caret(caret))
    }
}

/// A computed text mutation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextEdit {
    pub value: String,
    /// Collapsed caret position (byte offset) after the edit.
    pub caret: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    /// No focused target; nothing happened.
    Dropped,
    /// A modifier was toggled; `active` is its new state.
    Modifier { modifier: Modifier, active: bool },
    /// Recognized key that leaves the text alone (Backspace at offset 0).
    Unchanged,
    Edit(TextEdit),
}

/// Where Tab leaves the caret.
///
/// Tab inserts four spaces. `Legacy` advances the caret by a single
/// position, the way the keyboard has always behaved; `AfterInsert` puts it
/// after the inserted run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TabCaret {
    #[default]
    Legacy,
    AfterInsert,
}

/// Apply one key press.
///
/// Without a focused target every key is dropped, modifiers included.
pub fn dispatch(
    key: Key,
    modifiers: &mut ModifierState,
    target: Option<FocusedTarget<'_>>,
    tab_caret: TabCaret,
) -> KeyOutcome {
    let Some(target) = target else {
        return KeyOutcome::Dropped;
    };

    let value = target.value;
    let sel = target.selection.clamped(value);

    match key {
        Key::Shift => toggle(modifiers, Modifier::Shift),
        Key::CapsLock => toggle(modifiers, Modifier::CapsLock),
        Key::Space => insert(value, sel, " "),
        Key::Enter => insert(value, sel, "\n"),
        Key::Tab => {
            let advance = match tab_caret {
                TabCaret::Legacy => 1,
                TabCaret::AfterInsert => TAB_TEXT.len(),
            };
            KeyOutcome::Edit(TextEdit {
                value: replace_range(value, sel, TAB_TEXT),
                caret: sel.start + advance,
            })
        }
        Key::Backspace => {
            if sel.start == 0 {
                return KeyOutcome::Unchanged;
            }
            let prev = prev_cursor_boundary(value, sel.start);
            KeyOutcome::Edit(TextEdit {
                value: replace_range(value, SelectionRange::new(prev, sel.end), ""),
                caret: prev,
            })
        }
        Key::Char(c) => insert(value, sel, &modifiers.apply_case(c)),
    }
}

fn toggle(modifiers: &mut ModifierState, modifier: Modifier) -> KeyOutcome {
    let active = modifiers.toggle(modifier);
    KeyOutcome::Modifier { modifier, active }
}

fn insert(value: &str, sel: SelectionRange, text: &str) -> KeyOutcome {
    KeyOutcome::Edit(TextEdit {
        value: replace_range(value, sel, text),
        caret: sel.start + text.len(),
    })
}
