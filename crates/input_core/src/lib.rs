//! # input_core
//!
//! UI-agnostic text editing state for the virtual keyboard form.
//!
//! This crate provides the building blocks shared by the keyboard overlay and
//! the host form:
//! - [`InputId`]: an opaque identifier for a text-entry surface
//! - [`InputValueStore`]: values, caret positions and selections per input
//! - [`SelectionRange`]: a normalized `(start, end)` byte range
//!
//! All offsets are UTF-8 byte offsets on character boundaries. Integration
//! layers that speak in character indices (egui does) convert at the edge
//! with [`byte_offset_for_char`] and [`char_offset_for_byte`].
//!
//! ```
//! use input_core::{InputId, InputValueStore, SelectionRange};
//!
//! let mut store = InputValueStore::new();
//! let id = InputId::field(0);
//! store.set(id, "hello".to_string());
//! store.set_selection(id, SelectionRange::caret(2));
//! assert_eq!(store.selection(id), Some(SelectionRange::caret(2)));
//! ```

mod id;
mod selection;
mod state;
mod store;
mod text;

pub use id::InputId;
pub use selection::SelectionRange;
pub use store::InputValueStore;

pub use text::{
    byte_offset_for_char, char_offset_for_byte, clamp_to_char_boundary, normalize_newlines,
    prev_cursor_boundary, replace_range,
};
