//! UTF-8 text utilities for caret handling.
//!
//! Carets are byte offsets. These helpers keep them on character boundaries
//! and translate to and from the character indices used by UI toolkits.

use crate::selection::SelectionRange;
use std::borrow::Cow;

/// Clamp an arbitrary byte index to a valid UTF-8 character boundary.
///
/// Indices past the end clamp to `s.len()`. Indices inside a multi-byte
/// character move back to that character's first byte.
///
/// # Examples
///
/// ```
/// use input_core::clamp_to_char_boundary;
///
/// let s = "a€b"; // '€' is 3 bytes
/// assert_eq!(clamp_to_char_boundary(s, 0), 0);
/// assert_eq!(clamp_to_char_boundary(s, 2), 1); // mid '€' -> start of '€'
/// assert_eq!(clamp_to_char_boundary(s, 4), 4);
/// assert_eq!(clamp_to_char_boundary(s, 100), 5);
/// ```
#[inline]
pub fn clamp_to_char_boundary(s: &str, index: usize) -> usize {
    let mut index = index.min(s.len());
    while index > 0 && !s.is_char_boundary(index) {
        index -= 1;
    }
    index
}

/// Previous character boundary before `i`, or 0 at the start.
///
/// ```
/// use input_core::prev_cursor_boundary;
///
/// let s = "a€b";
/// assert_eq!(prev_cursor_boundary(s, 4), 1);
/// assert_eq!(prev_cursor_boundary(s, 0), 0);
/// ```
pub fn prev_cursor_boundary(s: &str, i: usize) -> usize {
    let i = clamp_to_char_boundary(s, i);
    if i == 0 {
        return 0;
    }
    s[..i]
        .char_indices()
        .last()
        .map(|(idx, _)| idx)
        .unwrap_or(0)
}

/// Normalize line endings (CRLF/CR -> LF).
///
/// Borrows when nothing needs to change.
///
/// ```
/// use input_core::normalize_newlines;
///
/// assert_eq!(normalize_newlines("a\r\nb\rc"), "a\nb\nc");
/// ```
pub fn normalize_newlines(s: &str) -> Cow<'_, str> {
    if !s.contains('\r') {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len());
    let mut it = s.chars().peekable();
    while let Some(ch) = it.next() {
        match ch {
            '\r' => {
                if it.peek() == Some(&'\n') {
                    let _ = it.next();
                }
                out.push('\n');
            }
            _ => out.push(ch),
        }
    }
    Cow::Owned(out)
}

/// Build `value[..range.start] + insert + value[range.end..]`.
///
/// The range is clamped first, so stale carets from a previous value are
/// safe to pass.
///
/// ```
/// use input_core::{replace_range, SelectionRange};
///
/// assert_eq!(replace_range("hello", SelectionRange::new(1, 4), "EY"), "hEYo");
/// assert_eq!(replace_range("ab", SelectionRange::caret(9), "c"), "abc");
/// ```
pub fn replace_range(value: &str, range: SelectionRange, insert: &str) -> String {
    let range = range.clamped(value);
    let mut out = String::with_capacity(value.len() - range.len() + insert.len());
    out.push_str(&value[..range.start]);
    out.push_str(insert);
    out.push_str(&value[range.end..]);
    out
}

/// Byte offset of the `char_index`-th character, clamped to `s.len()`.
///
/// ```
/// use input_core::byte_offset_for_char;
///
/// assert_eq!(byte_offset_for_char("a€b", 2), 4);
/// assert_eq!(byte_offset_for_char("a€b", 10), 5);
/// ```
pub fn byte_offset_for_char(s: &str, char_index: usize) -> usize {
    s.char_indices()
        .nth(char_index)
        .map(|(idx, _)| idx)
        .unwrap_or(s.len())
}

/// Number of characters before `byte_index` (clamped to a boundary first).
///
/// ```
/// use input_core::char_offset_for_byte;
///
/// assert_eq!(char_offset_for_byte("a€b", 4), 2);
/// assert_eq!(char_offset_for_byte("a€b", 3), 1);
/// ```
pub fn char_offset_for_byte(s: &str, byte_index: usize) -> usize {
    let byte_index = clamp_to_char_boundary(s, byte_index);
    s[..byte_index].chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_boundary_basic() {
        let s = "a€b";
        assert_eq!(clamp_to_char_boundary(s, 0), 0);
        assert_eq!(clamp_to_char_boundary(s, 1), 1);
        assert_eq!(clamp_to_char_boundary(s, 3), 1);
        assert_eq!(clamp_to_char_boundary(s, 5), 5);
        assert_eq!(clamp_to_char_boundary(s, 100), 5);
    }

    #[test]
    fn prev_cursor_basic() {
        let s = "a€b";
        assert_eq!(prev_cursor_boundary(s, 5), 4);
        assert_eq!(prev_cursor_boundary(s, 4), 1);
        assert_eq!(prev_cursor_boundary(s, 1), 0);
        assert_eq!(prev_cursor_boundary(s, 0), 0);
        // Inside '€' snaps to its start, then steps back one char.
        assert_eq!(prev_cursor_boundary(s, 3), 0);
    }

    #[test]
    fn normalize_newlines_basic() {
        assert_eq!(normalize_newlines("hello"), "hello");
        assert!(matches!(normalize_newlines("a\nb"), Cow::Borrowed(_)));
        assert_eq!(normalize_newlines("hello\r\nworld"), "hello\nworld");
        assert_eq!(normalize_newlines("a\r\nb\rc\nd"), "a\nb\nc\nd");
    }

    #[test]
    fn replace_range_inserts_at_caret() {
        assert_eq!(replace_range("", SelectionRange::caret(0), "x"), "x");
        assert_eq!(replace_range("ac", SelectionRange::caret(1), "b"), "abc");
        assert_eq!(replace_range("ab", SelectionRange::caret(2), "c"), "abc");
    }

    #[test]
    fn replace_range_swaps_out_selection() {
        assert_eq!(replace_range("hello world", SelectionRange::new(0, 5), "bye"), "bye world");
        assert_eq!(replace_range("abc", SelectionRange::new(0, 3), ""), "");
    }

    #[test]
    fn replace_range_respects_multibyte_chars() {
        // Range end lands inside '€' and is pulled back to its start.
        assert_eq!(replace_range("a€b", SelectionRange::new(1, 2), "x"), "ax€b");
        assert_eq!(replace_range("a€b", SelectionRange::new(1, 4), "e"), "aeb");
    }

    #[test]
    fn char_byte_conversions_round_trip_on_boundaries() {
        let s = "añ€z";
        for (chars, (bytes, _)) in s.char_indices().enumerate() {
            assert_eq!(byte_offset_for_char(s, chars), bytes);
            assert_eq!(char_offset_for_byte(s, bytes), chars);
        }
        assert_eq!(byte_offset_for_char(s, 4), s.len());
        assert_eq!(char_offset_for_byte(s, s.len()), 4);
    }
}
