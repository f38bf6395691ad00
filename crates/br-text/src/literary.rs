use br_core::cell::BrailleCell;
use br_core::tables::{CAPITAL_SIGN, CharTable};

use crate::symbol::{self, Symbol};

/// Single-character lowercase fold. Characters whose lowercase form spans
/// several chars are kept as-is, they never match a table key anyway.
#[inline]
pub(crate) fn fold(ch: char) -> char {
    let mut lower = ch.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(c), None) => c,
        _ => ch,
    }
}

/// Append the Grade 1 rendering of one source character.
///
/// Uppercase letters get the capital sign first; unknown characters become
/// [`Symbol::Unmapped`].
pub(crate) fn push_literal(ch: char, out: &mut Vec<Symbol>) {
    if let Some(cell) = CharTable::cell(fold(ch)) {
        if ch.is_uppercase() {
            out.push(Symbol::Cell(CAPITAL_SIGN));
        }
        out.push(Symbol::Cell(cell));
    } else {
        log::trace!("Caractère non mappé : {ch:?}");
        out.push(Symbol::Unmapped(ch));
    }
}

/// Grade 1 translation, keeping unmapped characters.
///
/// # Example
/// ```
/// use br_text::literary::translate_literal_symbols;
/// use br_text::symbol::Symbol;
/// let symbols = translate_literal_symbols("a€");
/// assert_eq!(symbols[1], Symbol::Unmapped('€'));
/// ```
#[must_use]
pub fn translate_literal_symbols(text: &str) -> Vec<Symbol> {
    let mut out = Vec::with_capacity(text.len());
    for ch in text.chars() {
        push_literal(ch, &mut out);
    }
    out
}

/// Grade 1 translation to cells. Unmapped characters yield an empty cell.
///
/// # Example
/// ```
/// use br_text::literary::translate_literal;
/// use br_core::tables::{CharTable, CAPITAL_SIGN};
/// let cells = translate_literal("Ab");
/// assert_eq!(cells, vec![CAPITAL_SIGN, CharTable::cell('a').unwrap(), CharTable::cell('b').unwrap()]);
/// ```
#[must_use]
pub fn translate_literal(text: &str) -> Vec<BrailleCell> {
    symbol::to_cells(&translate_literal_symbols(text))
}

/// Dot arrays, exactly one per source character. No capital sign is emitted.
#[must_use]
pub fn literal_dots(text: &str) -> Vec<[bool; 6]> {
    text.chars()
        .map(|ch| CharTable::cell(fold(ch)).unwrap_or(BrailleCell::EMPTY).dots())
        .collect()
}
