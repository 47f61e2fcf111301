//! Caret range representation.

use crate::text::clamp_to_char_boundary;

/// A caret range as a byte range into a UTF-8 string.
///
/// Always normalized so that `start <= end`. A collapsed range
/// (`start == end`) is a plain caret.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectionRange {
    /// Start byte offset (inclusive).
    pub start: usize,
    /// End byte offset (exclusive).
    pub end: usize,
}

impl SelectionRange {
    /// Create a range; the endpoints may be given in either order.
    #[inline]
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    /// A collapsed range at `at`.
    #[inline]
    pub fn caret(at: usize) -> Self {
        Self { start: at, end: at }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Clamp both endpoints into `value` and onto character boundaries.
    pub fn clamped(self, value: &str) -> Self {
        Self::new(
            clamp_to_char_boundary(value, self.start),
            clamp_to_char_boundary(value, self.end),
        )
    }
}
