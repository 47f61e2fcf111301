//! Per-input state held by the [`InputValueStore`](crate::InputValueStore).

#[derive(Clone, Debug, Default)]
pub(crate) struct InputState {
    /// The current text value.
    pub value: String,

    /// Caret as a byte index into `value`, always on a char boundary.
    pub caret: usize,

    /// Selection anchor. When `Some(anchor)` the selection is
    /// `min(anchor, caret)..max(anchor, caret)`.
    pub selection_anchor: Option<usize>,
}
