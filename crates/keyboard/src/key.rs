//! Keys shown on the overlay.

use crate::modifiers::{Modifier, ModifierState};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// A printable key; letters are stored upper-case as labelled.
    Char(char),
    Space,
    Backspace,
    Enter,
    Tab,
    Shift,
    CapsLock,
}

impl Key {
    /// The layout label, e.g. `"Q"`, `"Backspace"`.
    pub fn label(self) -> String {
        match self {
            Key::Char(c) => c.to_string(),
            Key::Space => "Space".to_string(),
            Key::Backspace => "Backspace".to_string(),
            Key::Enter => "Enter".to_string(),
            Key::Tab => "Tab".to_string(),
            Key::Shift => "Shift".to_string(),
            Key::CapsLock => "CapsLock".to_string(),
        }
    }

    /// Caption to draw on the key cap for the current modifier state.
    ///
    /// Letters follow the casing they would be inserted with; every other key
    /// keeps its label.
    pub fn caption(self, modifiers: ModifierState) -> String {
        match self {
            Key::Char(c) => modifiers.apply_case(c),
            other => other.label(),
        }
    }

    /// The toggle this key flips, for Shift and CapsLock. Those keys never
    /// edit text.
    pub fn modifier(self) -> Option<Modifier> {
        match self {
            Key::Shift => Some(Modifier::Shift),
            Key::CapsLock => Some(Modifier::CapsLock),
            _ => None,
        }
    }

    /// Relative width of the key cap, in standard key units.
    pub fn width_units(self) -> f32 {
        match self {
            Key::Char(_) => 1.0,
            Key::Tab => 1.5,
            Key::Backspace | Key::Enter | Key::Shift | Key::CapsLock => 2.0,
            Key::Space => 10.0,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyParseError {
    Empty,
    UnknownLabel(String),
}

impl fmt::Display for KeyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyParseError::Empty => write!(f, "empty key label"),
            KeyParseError::UnknownLabel(label) => write!(f, "unknown key label: {label:?}"),
        }
    }
}

impl std::error::Error for KeyParseError {}

impl FromStr for Key {
    type Err = KeyParseError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        let mut chars = label.chars();
        match (chars.next(), chars.next()) {
            (None, _) => return Err(KeyParseError::Empty),
            (Some(c), None) => return Ok(Key::Char(c)),
            _ => {}
        }

        match label {
            "Space" => Ok(Key::Space),
            "Backspace" => Ok(Key::Backspace),
            "Enter" => Ok(Key::Enter),
            "Tab" => Ok(Key::Tab),
            "Shift" => Ok(Key::Shift),
            "CapsLock" => Ok(Key::CapsLock),
            _ => Err(KeyParseError::UnknownLabel(label.to_string())),
        }
    }
}
