//! # keyboard
//!
//! State and semantics of the on-screen keyboard overlay.
//!
//! - [`Key`] and [`KeyLayout`]: what the overlay shows
//! - [`ModifierState`]: the Shift and CapsLock toggles
//! - [`dispatch`]: the pure key-press function, `(key, target) -> outcome`
//! - [`FocusTracker`]: which text-entry surface receives input
//! - [`DragController`]: overlay repositioning
//! - [`KeyboardOverlay`]: all of the above behind one owner-facing API
//!
//! Nothing here reads or writes a widget directly. The owner passes the
//! focused text in as a [`FocusedTarget`] and applies the returned
//! [`TextEdit`] to its own state.

mod dispatch;
mod drag;
mod focus;
mod key;
mod layout;
mod modifiers;
mod overlay;

pub use dispatch::{FocusedTarget, KeyOutcome, TabCaret, TextEdit, dispatch};
pub use drag::DragController;
pub use focus::FocusTracker;
pub use key::{Key, KeyParseError};
pub use layout::KeyLayout;
pub use modifiers::{Modifier, ModifierState};
pub use overlay::KeyboardOverlay;
