//! Central store for input values, carets and selections.
//!
//! The store does no layout or measurement. Integration layers translate
//! toolkit cursor positions into byte offsets and push them in with
//! [`InputValueStore::set_selection`].

use crate::id::InputId;
use crate::selection::SelectionRange;
use crate::state::InputState;
use crate::text::clamp_to_char_boundary;
use std::collections::HashMap;

/// Text value, caret and selection for every known input.
///
/// ```
/// use input_core::{InputId, InputValueStore, SelectionRange};
///
/// let mut store = InputValueStore::new();
/// let id = InputId::field(1);
///
/// store.ensure_initial(id, "Hello".to_string());
/// store.set_with_caret(id, "Hello!".to_string(), 6);
///
/// assert_eq!(store.get(id), Some("Hello!"));
/// assert_eq!(store.selection(id), Some(SelectionRange::caret(6)));
/// ```
#[derive(Clone, Debug, Default)]
pub struct InputValueStore {
    values: HashMap<InputId, InputState>,
}

impl InputValueStore {
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Returns the stored value for this input, if any.
    pub fn get(&self, id: InputId) -> Option<&str> {
        self.values.get(&id).map(|s| s.value.as_str())
    }

    /// The caret range: the selection when there is one, otherwise the
    /// collapsed caret.
    pub fn selection(&self, id: InputId) -> Option<SelectionRange> {
        self.values.get(&id).map(|s| {
            selection_range(&s.value, s.selection_anchor, s.caret)
                .unwrap_or(SelectionRange::caret(s.caret))
        })
    }

    /// Set/overwrite the value for this input.
    ///
    /// Moves the caret to the end and clears any selection.
    pub fn set(&mut self, id: InputId, value: String) {
        let caret = value.len();
        self.set_with_caret(id, value, caret);
    }

    /// Set/overwrite the value and place a collapsed caret at `caret`.
    ///
    /// The caret is clamped into the new value.
    pub fn set_with_caret(&mut self, id: InputId, value: String, caret: usize) {
        let st = self.values.entry(id).or_default();
        st.caret = clamp_to_char_boundary(&value, caret);
        st.value = value;
        st.selection_anchor = None;
    }

    /// Ensure an entry exists; if missing, inserts the provided initial value.
    pub fn ensure_initial(&mut self, id: InputId, initial: String) {
        let caret = initial.len();
        self.values.entry(id).or_insert(InputState {
            value: initial,
            caret,
            selection_anchor: None,
        });
    }

    /// Replace the caret range.
    ///
    /// The range is clamped into the value. The caret goes to `range.end`,
    /// the anchor to `range.start`. Returns `true` if anything changed.
    pub fn set_selection(&mut self, id: InputId, range: SelectionRange) -> bool {
        let st = self.values.entry(id).or_default();
        let range = range.clamped(&st.value);
        let anchor = (!range.is_empty()).then_some(range.start);
        let changed = st.caret != range.end || st.selection_anchor != anchor;
        st.caret = range.end;
        st.selection_anchor = anchor;
        changed
    }

    /// Clear all stored input state.
    pub fn clear(&mut self) {
        self.values.clear();
    }
}

fn selection_range(value: &str, anchor: Option<usize>, caret: usize) -> Option<SelectionRange> {
    let anchor = anchor?;

    let a = clamp_to_char_boundary(value, anchor);
    let c = clamp_to_char_boundary(value, caret);
    if a == c {
        return None;
    }

    Some(SelectionRange::new(a, c))
}
