use crate::error::FormError;
use core_types::FieldIndex;
use input_core::{InputId, InputValueStore, SelectionRange, normalize_newlines};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormPhase {
    Editing,
    Submitted,
}

/// The form hosting the keyboard overlay.
///
/// Field values live in an [`InputValueStore`] keyed by [`InputId::field`].
/// The number of fields is fixed at construction.
#[derive(Clone, Debug)]
pub struct HostForm {
    fields: InputValueStore,
    len: usize,
    focused: Option<FieldIndex>,
    snapshot: Option<Vec<String>>,
}

impl Default for HostForm {
    fn default() -> Self {
        Self::new(Self::DEFAULT_FIELD_COUNT)
    }
}

impl HostForm {
    pub const DEFAULT_FIELD_COUNT: usize = 5;

    pub fn new(field_count: usize) -> Self {
        let mut form = Self {
            fields: InputValueStore::new(),
            len: field_count,
            focused: None,
            snapshot: None,
        };
        form.seed_empty();
        form
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn phase(&self) -> FormPhase {
        if self.snapshot.is_some() {
            FormPhase::Submitted
        } else {
            FormPhase::Editing
        }
    }

    pub fn is_submitted(&self) -> bool {
        self.snapshot.is_some()
    }

    fn check(&self, index: FieldIndex) -> Result<InputId, FormError> {
        if index < self.len {
            Ok(InputId::field(index))
        } else {
            Err(FormError::FieldOutOfRange {
                index,
                len: self.len,
            })
        }
    }

    fn check_editable(&self, index: FieldIndex) -> Result<InputId, FormError> {
        let id = self.check(index)?;
        if self.is_submitted() {
            return Err(FormError::Submitted);
        }
        Ok(id)
    }

    // --- reads ---

    pub fn value(&self, index: FieldIndex) -> Option<&str> {
        self.fields.get(InputId::field(index)).filter(|_| index < self.len)
    }

    /// All buffer values in field order.
    pub fn values(&self) -> Vec<&str> {
        (0..self.len)
            .map(|i| self.fields.get(InputId::field(i)).unwrap_or_default())
            .collect()
    }

    /// Current caret range of a field, in bytes.
    pub fn caret_range(&self, index: FieldIndex) -> Option<SelectionRange> {
        self.check(index)
            .ok()
            .and_then(|id| self.fields.selection(id))
    }

    // --- focus ---

    pub fn focused(&self) -> Option<FieldIndex> {
        self.focused
    }

    pub fn focus(&mut self, index: FieldIndex) -> Result<(), FormError> {
        self.check(index)?;
        if self.focused != Some(index) {
            log::debug!(target: "form", "focused field {}", index + 1);
        }
        self.focused = Some(index);
        Ok(())
    }

    // --- mutation ---

    /// Set the buffer at `index`. The single entry point for value changes,
    /// used both by direct typing and by the keyboard overlay.
    ///
    /// Line endings are normalized; the caret moves to the end.
    pub fn set_value(&mut self, index: FieldIndex, value: impl Into<String>) -> Result<(), FormError> {
        let id = self.check_editable(index)?;
        let mut value = value.into();
        if value.contains('\r') {
            value = normalize_newlines(&value).into_owned();
        }
        self.fields.set(id, value);
        Ok(())
    }

    /// Set the buffer and place its caret, as a keyboard edit does.
    pub fn apply_edit(
        &mut self,
        index: FieldIndex,
        value: impl Into<String>,
        caret: usize,
    ) -> Result<(), FormError> {
        self.set_value(index, value)?;
        self.fields
            .set_selection(InputId::field(index), SelectionRange::caret(caret));
        Ok(())
    }

    /// Record the caret range the UI currently shows for a field.
    ///
    /// Not a value change, so it is allowed in either phase.
    pub fn set_caret_range(&mut self, index: FieldIndex, range: SelectionRange) -> Result<bool, FormError> {
        let id = self.check(index)?;
        Ok(self.fields.set_selection(id, range))
    }

    /// Freeze the current values. Submitting twice keeps the first snapshot.
    pub fn submit(&mut self) -> &[String] {
        if self.snapshot.is_none() {
            let values: Vec<String> = self.values().into_iter().map(str::to_owned).collect();
            log::info!(target: "form", "submitted {} fields", values.len());
            self.snapshot = Some(values);
        }
        self.snapshot.as_deref().unwrap_or_default()
    }

    /// Clear every buffer and return to editing. The focused index is kept.
    pub fn reset(&mut self) {
        self.snapshot = None;
        self.seed_empty();
        log::info!(target: "form", "reset {} fields", self.len);
    }

    fn seed_empty(&mut self) {
        self.fields.clear();
        for i in 0..self.len {
            self.fields.ensure_initial(InputId::field(i), String::new());
        }
    }

    // --- display ---

    /// `Text Field {n}: {value}` for every field of the submitted snapshot.
    ///
    /// Empty while editing.
    pub fn submitted_lines(&self) -> Vec<String> {
        self.snapshot
            .iter()
            .flatten()
            .enumerate()
            .map(|(i, value)| format!("Text Field {}: {value}", i + 1))
            .collect()
    }

    /// The message shown by a field's "Show Value" button.
    pub fn value_message(&self, index: FieldIndex) -> Result<String, FormError> {
        let id = self.check(index)?;
        let value = self.fields.get(id).unwrap_or_default();
        Ok(format!("Value from Text Field {}: {value}", index + 1))
    }
}
