use core_types::FieldIndex;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    FieldOutOfRange { index: FieldIndex, len: usize },
    /// The form has been submitted; values are frozen until reset.
    Submitted,
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::FieldOutOfRange { index, len } => {
                write!(f, "field index {index} out of range (form has {len} fields)")
            }
            FormError::Submitted => write!(f, "form is submitted; reset it before editing"),
        }
    }
}

impl std::error::Error for FormError {}
