//! Table de contractions (grade 2) et recherche du plus long préfixe.

use std::collections::HashMap;
use std::sync::LazyLock;

use br_core::cell::BrailleCell;
use br_core::config::{ContractionSpec, check_contraction};
use br_core::error::CoreError;

/// Built-in contractions. Deliberately small, not full UEB.
const STANDARD: &[(&str, &[u8])] = &[
    ("and", &[1, 2, 3, 4, 6]),
    ("for", &[1, 2, 3, 4, 5, 6]),
    ("of", &[1, 2, 3, 5, 6]),
    ("the", &[2, 3, 4, 6]),
    ("with", &[2, 3, 4, 5, 6]),
    ("ing", &[3, 4, 6]),
    ("ch", &[1, 6]),
    ("sh", &[1, 4, 6]),
    ("th", &[1, 4, 5, 6]),
    ("wh", &[1, 5, 6]),
    ("ou", &[1, 2, 5, 6]),
    ("st", &[3, 4]),
    ("gh", &[1, 2, 6]),
    ("ed", &[1, 2, 4, 6]),
    ("er", &[1, 2, 4, 5, 6]),
    ("ow", &[2, 4, 6]),
    ("ar", &[3, 4, 5]),
];

static STANDARD_TABLE: LazyLock<ContractionTable> = LazyLock::new(|| {
    let mut table = ContractionTable::default();
    for &(key, dots) in STANDARD {
        // Clés statiques, uniques et en minuscules.
        if let Err(e) = table.insert(key, vec![BrailleCell::from_dots(dots)]) {
            log::error!("Contraction intégrée rejetée : {e}");
        }
    }
    log::debug!(
        "Table de contractions construite : {} entrées, longueur max {}",
        table.len(),
        table.max_len()
    );
    table
});

/// Substring → cells, keyed by lowercase content only.
///
/// Every entry is checked on insertion, so a built table never holds two
/// entries competing for the same substring.
///
/// # Example
/// ```
/// use br_text::contraction::ContractionTable;
/// use br_core::cell::BrailleCell;
/// let table = ContractionTable::build([
///     ("and", vec![BrailleCell::from_dots(&[1, 2, 3, 4, 6])]),
///     ("a", vec![BrailleCell::from_dots(&[1])]),
/// ]).unwrap();
/// assert_eq!(table.max_len(), 3);
/// assert!(ContractionTable::build([("a", vec![]), ]).is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct ContractionTable {
    entries: HashMap<String, Vec<BrailleCell>>,
    max_len: usize,
}

impl ContractionTable {
    /// The built-in table.
    #[must_use]
    pub fn standard() -> &'static Self {
        &STANDARD_TABLE
    }

    /// Build a table from `(key, cells)` pairs.
    ///
    /// # Errors
    /// Returns [`CoreError::DuplicateContraction`] when two entries share a
    /// key and [`CoreError::InvalidContraction`] for a malformed entry.
    pub fn build<I, S>(entries: I) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = (S, Vec<BrailleCell>)>,
        S: Into<String>,
    {
        let mut table = Self::default();
        for (key, cells) in entries {
            table.insert(key, cells)?;
        }
        Ok(table)
    }

    /// Copy of `self` with the config-declared contractions added.
    ///
    /// # Errors
    /// Same as [`ContractionTable::build`], plus bad dot positions.
    pub fn extended(&self, specs: &[ContractionSpec]) -> Result<Self, CoreError> {
        let mut table = self.clone();
        for spec in specs {
            table.insert(spec.text.as_str(), spec.cells()?)?;
        }
        Ok(table)
    }

    fn insert(&mut self, key: impl Into<String>, cells: Vec<BrailleCell>) -> Result<(), CoreError> {
        let key = key.into();
        check_contraction(&key, cells.len())?;
        if self.entries.contains_key(&key) {
            return Err(CoreError::DuplicateContraction { key });
        }
        self.max_len = self.max_len.max(key.chars().count());
        self.entries.insert(key, cells);
        Ok(())
    }

    /// Cells for an exact key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&[BrailleCell]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    /// Longest entry starting at `at` in `word` (already lowercased).
    ///
    /// Returns the matched length in chars and the cells.
    #[must_use]
    pub fn longest_match(&self, word: &[char], at: usize) -> Option<(usize, &[BrailleCell])> {
        let remaining = word.len().saturating_sub(at);
        let mut key = String::with_capacity(self.max_len * 4);
        for len in (1..=self.max_len.min(remaining)).rev() {
            key.clear();
            key.extend(&word[at..at + len]);
            if let Some(cells) = self.get(&key) {
                return Some((len, cells));
            }
        }
        None
    }

    /// Longest key, in chars.
    #[must_use]
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the table holds no entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
