//! The overlay as its owner sees it.

use crate::dispatch::{FocusedTarget, KeyOutcome, TabCaret, TextEdit, dispatch};
use crate::drag::DragController;
use crate::focus::FocusTracker;
use crate::key::Key;
use crate::layout::KeyLayout;
use crate::modifiers::ModifierState;
use core_types::{Point, SurfaceKind};
use std::fmt::Debug;

/// Keyboard overlay state, generic over the owner's surface id.
///
/// The overlay holds no text. On every press the owner looks up the
/// focused surface (see [`KeyboardOverlay::focused`]), passes its text in, and
/// receives the edit through the `on_change` callback and the returned
/// [`KeyOutcome`].
#[derive(Clone, Debug)]
pub struct KeyboardOverlay<T> {
    layout: KeyLayout,
    modifiers: ModifierState,
    focus: FocusTracker<T>,
    drag: DragController,
    visible: bool,
    tab_caret: TabCaret,
}

impl<T: Copy + PartialEq + Debug> Default for KeyboardOverlay<T> {
    fn default() -> Self {
        Self::new(KeyLayout::qwerty())
    }
}

impl<T: Copy + PartialEq + Debug> KeyboardOverlay<T> {
    pub fn new(layout: KeyLayout) -> Self {
        Self {
            layout,
            modifiers: ModifierState::default(),
            focus: FocusTracker::new(),
            drag: DragController::default(),
            visible: false,
            tab_caret: TabCaret::default(),
        }
    }

    pub fn with_tab_caret(mut self, tab_caret: TabCaret) -> Self {
        self.tab_caret = tab_caret;
        self
    }

    pub fn with_position(mut self, position: Point) -> Self {
        self.drag = DragController::new(position);
        self
    }

    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn layout(&self) -> &KeyLayout {
        &self.layout
    }

    pub fn modifiers(&self) -> ModifierState {
        self.modifiers
    }

    pub fn tab_caret(&self) -> TabCaret {
        self.tab_caret
    }

    // --- visibility ---

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Show or hide the overlay; returns the new visibility.
    pub fn toggle_visible(&mut self) -> bool {
        self.visible = !self.visible;
        self.visible
    }

    // --- focus ---

    /// Forward a focus-in event from the owner's UI.
    pub fn focus_in(&mut self, id: T, kind: SurfaceKind) -> bool {
        self.focus.on_focus_in(id, kind)
    }

    /// The surface key presses currently apply to.
    pub fn focused(&self) -> Option<T> {
        self.focus.target()
    }

    // --- drag ---

    pub fn position(&self) -> Point {
        self.drag.position()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn pointer_down(&mut self, pointer: Point) {
        self.drag.pointer_down(pointer);
    }

    pub fn pointer_move(&mut self, pointer: Point) -> bool {
        self.drag.pointer_move(pointer)
    }

    pub fn pointer_up(&mut self) {
        self.drag.pointer_up();
    }

    // --- keys ---

    /// Press `key` against `target`.
    ///
    /// `target` must describe the surface returned by [`Self::focused`]; pass
    /// `None` when nothing is focused. `on_change` runs exactly once when the
    /// press produced an edit and never otherwise.
    pub fn press(
        &mut self,
        key: Key,
        target: Option<FocusedTarget<'_>>,
        on_change: impl FnOnce(&TextEdit),
    ) -> KeyOutcome {
        let target = if self.focus.target().is_some() {
            target
        } else {
            None
        };

        let outcome = dispatch(key, &mut self.modifiers, target, self.tab_caret);
        log::debug!(target: "keyboard.dispatch", "{key} -> {outcome:?}");

        if let KeyOutcome::Edit(edit) = &outcome {
            on_change(edit);
        }
        outcome
    }
}
