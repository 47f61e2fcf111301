//! Key rows rendered by the overlay.

use crate::key::{Key, KeyParseError};

const QWERTY_ROWS: [&[&str]; 5] = [
    &["`", "1", "2", "3", "4", "5", "6", "7", "8", "9", "0", "-", "=", "Backspace"],
    &["Tab", "Q", "W", "E", "R", "T", "Y", "U", "I", "O", "P", "[", "]", "\\"],
    &["CapsLock", "A", "S", "D", "F", "G", "H", "J", "K", "L", ";", "'", "Enter"],
    &["Shift", "Z", "X", "C", "V", "B", "N", "M", ",", ".", "/", "Shift"],
    &["Space"],
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyLayout {
    rows: Vec<Vec<Key>>,
}

impl KeyLayout {
    /// The US QWERTY rows the overlay ships with.
    pub fn qwerty() -> Self {
        let rows = QWERTY_ROWS
            .iter()
            .map(|row| row.iter().filter_map(|label| label.parse().ok()).collect())
            .collect();
        Self { rows }
    }

    /// Build a layout from rows of key labels.
    pub fn from_labels<R, L>(rows: R) -> Result<Self, KeyParseError>
    where
        R: IntoIterator<Item = L>,
        L: IntoIterator,
        L::Item: AsRef<str>,
    {
        let rows = rows
            .into_iter()
            .map(|row| row.into_iter().map(|label| label.as_ref().parse()).collect())
            .collect::<Result<Vec<Vec<Key>>, _>>()?;
        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[Vec<Key>] {
        &self.rows
    }

    pub fn keys(&self) -> impl Iterator<Item = Key> + '_ {
        self.rows.iter().flatten().copied()
    }
}

impl Default for KeyLayout {
    fn default() -> Self {
        Self::qwerty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qwerty_parses_every_label() {
        let layout = KeyLayout::qwerty();
        let lens: Vec<usize> = layout.rows().iter().map(Vec::len).collect();
        assert_eq!(lens, vec![14, 14, 13, 12, 1]);
    }

    #[test]
    fn qwerty_has_both_shift_keys_and_one_space() {
        let layout = KeyLayout::qwerty();
        assert_eq!(layout.keys().filter(|k| *k == Key::Shift).count(), 2);
        assert_eq!(layout.keys().filter(|k| *k == Key::Space).count(), 1);
        assert_eq!(layout.rows()[1][13], Key::Char('\\'));
    }

    #[test]
    fn from_labels_reports_bad_labels() {
        let ok = KeyLayout::from_labels([vec!["A", "Enter"]]).unwrap();
        assert_eq!(ok.rows(), &[vec![Key::Char('A'), Key::Enter]]);

        assert!(KeyLayout::from_labels([vec!["A", "Hyper"]]).is_err());
    }
}
