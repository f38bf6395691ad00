//! Tables statiques (Braille littéraire, grade 1).
//!
//! Built once on first access, read-only afterwards.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::cell::BrailleCell;

/// Capitalization indicator: dot 6 alone.
pub const CAPITAL_SIGN: BrailleCell = BrailleCell::from_dots(&[6]);

/// Number sign: dots 3, 4, 5, 6.
pub const NUMBER_SIGN: BrailleCell = BrailleCell::from_dots(&[3, 4, 5, 6]);

/// Literary Braille: character → dot positions.
///
/// Digits reuse the a–j patterns (`1` → `a`, …, `0` → `j`).
const ENTRIES: &[(char, &[u8])] = &[
    ('a', &[1]),
    ('b', &[1, 2]),
    ('c', &[1, 4]),
    ('d', &[1, 4, 5]),
    ('e', &[1, 5]),
    ('f', &[1, 2, 4]),
    ('g', &[1, 2, 4, 5]),
    ('h', &[1, 2, 5]),
    ('i', &[2, 4]),
    ('j', &[2, 4, 5]),
    ('k', &[1, 3]),
    ('l', &[1, 2, 3]),
    ('m', &[1, 3, 4]),
    ('n', &[1, 3, 4, 5]),
    ('o', &[1, 3, 5]),
    ('p', &[1, 2, 3, 4]),
    ('q', &[1, 2, 3, 4, 5]),
    ('r', &[1, 2, 3, 5]),
    ('s', &[2, 3, 4]),
    ('t', &[2, 3, 4, 5]),
    ('u', &[1, 3, 6]),
    ('v', &[1, 2, 3, 6]),
    ('w', &[2, 4, 5, 6]),
    ('x', &[1, 3, 4, 6]),
    ('y', &[1, 3, 4, 5, 6]),
    ('z', &[1, 3, 5, 6]),
    ('1', &[1]),
    ('2', &[1, 2]),
    ('3', &[1, 4]),
    ('4', &[1, 4, 5]),
    ('5', &[1, 5]),
    ('6', &[1, 2, 4]),
    ('7', &[1, 2, 4, 5]),
    ('8', &[1, 2, 5]),
    ('9', &[2, 4]),
    ('0', &[2, 4, 5]),
    (' ', &[]),
    (',', &[2]),
    ('.', &[2, 5, 6]),
    ('!', &[2, 3, 5]),
    ('?', &[2, 3, 6]),
    (';', &[2, 3]),
    (':', &[2, 5]),
    ('\'', &[3]),
    ('-', &[3, 6]),
    ('+', &[3, 4, 6]),
    ('=', &[3, 4, 5, 6]),
    ('*', &[3, 5]),
    ('/', &[3, 4]),
    ('#', &[3, 4, 5, 6]),
];

struct Entry {
    dots: &'static [u8],
    cell: BrailleCell,
}

static CHAR_TABLE: LazyLock<HashMap<char, Entry>> = LazyLock::new(|| {
    let table: HashMap<char, Entry> = ENTRIES
        .iter()
        .map(|&(ch, dots)| {
            (
                ch,
                Entry {
                    dots,
                    cell: BrailleCell::from_dots(dots),
                },
            )
        })
        .collect();
    log::debug!("Table littéraire construite : {} entrées", table.len());
    table
});

/// Read-only access to the literary character table.
///
/// Keys are lowercase; callers lowercase before lookup.
///
/// # Example
/// ```
/// use br_core::tables::CharTable;
/// assert_eq!(CharTable::dots('d'), Some(&[1u8, 4, 5][..]));
/// assert_eq!(CharTable::cell('4'), CharTable::cell('d'));
/// assert!(CharTable::cell('€').is_none());
/// ```
pub struct CharTable;

impl CharTable {
    /// Cell for a lowercase character, `None` when unmapped.
    #[must_use]
    #[inline]
    pub fn cell(ch: char) -> Option<BrailleCell> {
        CHAR_TABLE.get(&ch).map(|e| e.cell)
    }

    /// Dot positions for a lowercase character, ascending.
    #[must_use]
    pub fn dots(ch: char) -> Option<&'static [u8]> {
        CHAR_TABLE.get(&ch).map(|e| e.dots)
    }

    /// True if the character has an entry.
    #[must_use]
    pub fn contains(ch: char) -> bool {
        CHAR_TABLE.contains_key(&ch)
    }

    /// Cell for an ASCII digit, `None` for anything else.
    #[must_use]
    pub fn digit(ch: char) -> Option<BrailleCell> {
        if ch.is_ascii_digit() {
            Self::cell(ch)
        } else {
            None
        }
    }

    /// Number of entries.
    #[must_use]
    pub fn len() -> usize {
        CHAR_TABLE.len()
    }
}
