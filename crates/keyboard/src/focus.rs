//! Which surface receives overlay input.

use core_types::SurfaceKind;

/// Remembers the last text-entry surface that gained focus.
///
/// Focus moving to anything that is not a text-entry surface (a key cap, a
/// button) leaves the target in place, so pressing overlay keys keeps typing
/// into the field the user last picked. Nothing clears the target.
#[derive(Clone, Debug)]
pub struct FocusTracker<T> {
    target: Option<T>,
}

impl<T> Default for FocusTracker<T> {
    fn default() -> Self {
        Self { target: None }
    }
}

impl<T: Copy + PartialEq + std::fmt::Debug> FocusTracker<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Observe a focus-in event. Returns `true` if `id` became the target.
    pub fn on_focus_in(&mut self, id: T, kind: SurfaceKind) -> bool {
        if !kind.is_text_entry() {
            return false;
        }
        if self.target != Some(id) {
            log::debug!(target: "keyboard.focus", "focus target -> {id:?} ({kind:?})");
        }
        self.target = Some(id);
        true
    }

    pub fn target(&self) -> Option<T> {
        self.target
    }
}
