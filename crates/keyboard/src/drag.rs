//! Overlay drag-to-move.

use core_types::Point;

#[derive(Clone, Debug, Default)]
pub struct DragController {
    position: Point,
    grab_offset: Point,
    dragging: bool,
}

impl DragController {
    pub fn new(position: Point) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Pointer pressed on the overlay: capture where it grabbed the panel.
    pub fn pointer_down(&mut self, pointer: Point) {
        self.grab_offset = pointer - self.position;
        self.dragging = true;
        log::debug!(target: "keyboard.drag", "drag start at {pointer:?}");
    }

    /// Pointer moved. Returns `true` if the overlay moved.
    pub fn pointer_move(&mut self, pointer: Point) -> bool {
        if !self.dragging {
            return false;
        }
        let next = pointer - self.grab_offset;
        let moved = next != self.position;
        self.position = next;
        moved
    }

    pub fn pointer_up(&mut self) {
        if self.dragging {
            log::debug!(target: "keyboard.drag", "drag end at {:?}", self.position);
        }
        self.dragging = false;
    }
}
