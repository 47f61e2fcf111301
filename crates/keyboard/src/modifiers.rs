//! Shift and CapsLock toggles.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Modifier {
    Shift,
    CapsLock,
}

/// Two independent latching toggles.
///
/// Both stay latched until pressed again; typing a letter does not release
/// Shift.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModifierState {
    shift: bool,
    caps_lock: bool,
}

impl ModifierState {
    pub fn is_active(&self, modifier: Modifier) -> bool {
        match modifier {
            Modifier::Shift => self.shift,
            Modifier::CapsLock => self.caps_lock,
        }
    }

    /// Flip one toggle; returns its new state.
    pub fn toggle(&mut self, modifier: Modifier) -> bool {
        let flag = match modifier {
            Modifier::Shift => &mut self.shift,
            Modifier::CapsLock => &mut self.caps_lock,
        };
        *flag = !*flag;
        *flag
    }

    /// Letters are upper-cased when either toggle is active.
    pub fn uppercase(&self) -> bool {
        self.shift || self.caps_lock
    }

    /// Case `c` for insertion. Non-letters pass through untouched.
    pub fn apply_case(&self, c: char) -> String {
        if !c.is_alphabetic() {
            return c.to_string();
        }
        if self.uppercase() {
            c.to_uppercase().collect()
        } else {
            c.to_lowercase().collect()
        }
    }
}
