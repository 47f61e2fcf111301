//! Identifier for text-entry surfaces.
//!
//! Plain `u64` so the store stays decoupled from the UI toolkit's own ids.
//! The host form maps its field positions onto ids one-to-one.

use core_types::FieldIndex;

/// Opaque identifier for an input within an [`InputValueStore`](crate::InputValueStore).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InputId(u64);

impl InputId {
    /// Id of the form field at `index`.
    #[inline]
    pub const fn field(index: FieldIndex) -> Self {
        Self(index as u64)
    }
}
