use br_core::cell::BrailleCell;
use br_core::tables::CAPITAL_SIGN;

use crate::contraction::ContractionTable;
use crate::literary::{fold, push_literal};
use crate::symbol::{self, Symbol};

/// Greedy longest-match Grade 2 translator.
///
/// Scans each word left to right and never backtracks: at every offset the
/// longest table entry wins, otherwise one character is encoded literally.
/// A match never spans an uppercase letter past its first, so every capital
/// keeps its sign.
///
/// # Example
/// ```
/// use br_text::grade2::Grade2Translator;
/// let cells = Grade2Translator::standard().translate("and");
/// assert_eq!(cells.len(), 1);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Grade2Translator<'t> {
    table: &'t ContractionTable,
}

impl Grade2Translator<'static> {
    /// Translator over the built-in table.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(ContractionTable::standard())
    }
}

impl<'t> Grade2Translator<'t> {
    /// Translator over any validated table.
    #[must_use]
    pub fn new(table: &'t ContractionTable) -> Self {
        Self { table }
    }

    /// Translate, keeping unmapped characters.
    ///
    /// Words are split on `' '`; each space becomes one empty cell.
    #[must_use]
    pub fn translate_symbols(&self, text: &str) -> Vec<Symbol> {
        let mut out = Vec::with_capacity(text.len());
        for (i, word) in text.split(' ').enumerate() {
            if i > 0 {
                out.push(Symbol::Cell(BrailleCell::EMPTY));
            }
            self.push_word(word, &mut out);
        }
        out
    }

    /// Translate to cells.
    #[must_use]
    pub fn translate(&self, text: &str) -> Vec<BrailleCell> {
        symbol::to_cells(&self.translate_symbols(text))
    }

    /// Translate to a display string.
    #[must_use]
    pub fn translate_display(&self, text: &str) -> String {
        symbol::to_display_string(&self.translate_symbols(text))
    }

    fn push_word(&self, word: &str, out: &mut Vec<Symbol>) {
        let source: Vec<char> = word.chars().collect();
        let lower: Vec<char> = source.iter().copied().map(fold).collect();

        let mut at = 0;
        while at < source.len() {
            // La correspondance s'arrête avant la prochaine majuscule.
            let end = source[at + 1..]
                .iter()
                .position(|c| c.is_uppercase())
                .map_or(source.len(), |i| at + 1 + i);
            if let Some((len, cells)) = self.table.longest_match(&lower[..end], at) {
                if source[at].is_uppercase() {
                    out.push(Symbol::Cell(CAPITAL_SIGN));
                }
                out.extend(cells.iter().copied().map(Symbol::Cell));
                at += len;
            } else {
                push_literal(source[at], out);
                at += 1;
            }
        }
    }
}

/// Grade 2 translation with the built-in table.
#[must_use]
pub fn translate_grade2(text: &str) -> Vec<BrailleCell> {
    Grade2Translator::standard().translate(text)
}

#[cfg(test)]
mod tests {
    use br_core::tables::CharTable;

    use super::*;
    use crate::literary::translate_literal;

    fn cell(dots: &[u8]) -> BrailleCell {
        BrailleCell::from_dots(dots)
    }

    #[test]
    fn whole_word_contraction_is_one_cell() {
        let table = ContractionTable::build([
            ("and", vec![cell(&[1, 2, 3, 4, 6])]),
            ("a", vec![cell(&[1])]),
        ])
        .unwrap();
        let cells = Grade2Translator::new(&table).translate("and");
        assert_eq!(cells, vec![cell(&[1, 2, 3, 4, 6])]);
    }

    #[test]
    fn intra_word_groups_and_fallback() {
        // s + and
        let cells = translate_grade2("sand");
        assert_eq!(cells, vec![CharTable::cell('s').unwrap(), cell(&[1, 2, 3, 4, 6])]);

        // "th" puis "ing" : t-h-i-n-g → th + ing
        let cells = translate_grade2("thing");
        assert_eq!(cells, vec![cell(&[1, 4, 5, 6]), cell(&[3, 4, 6])]);
    }

    #[test]
    fn greedy_never_backtracks() {
        // "the" gagne sur "th", puis "re" retombe en littéral.
        let cells = translate_grade2("there");
        assert_eq!(cells.len(), 3);
        assert_eq!(cells[0], cell(&[2, 3, 4, 6]));
        assert_eq!(cells[1], CharTable::cell('r').unwrap());
        assert_eq!(cells[2], CharTable::cell('e').unwrap());
    }

    #[test]
    fn spaces_become_empty_cells() {
        let cells = translate_grade2("the cat");
        assert_eq!(cells.len(), 5);
        assert_eq!(cells[1], BrailleCell::EMPTY);

        let cells = translate_grade2("a  b");
        assert_eq!(cells.len(), 4);
        assert!(cells[1].is_empty() && cells[2].is_empty());
    }

    #[test]
    fn capitalized_contraction() {
        let cells = translate_grade2("The");
        assert_eq!(cells, vec![CAPITAL_SIGN, cell(&[2, 3, 4, 6])]);
    }

    #[test]
    fn mixed_case_span_is_spelled_out() {
        assert_eq!(translate_grade2("aND"), translate_literal("aND"));
        assert_eq!(translate_grade2("aND").len(), 5);

        let cells = translate_grade2("AND");
        assert_eq!(cells.iter().filter(|&&c| c == CAPITAL_SIGN).count(), 3);

        // « the » coupe sur le E : th + E.
        let cells = translate_grade2("ThE");
        assert_eq!(cells[0], CAPITAL_SIGN);
        assert_eq!(cells[1], cell(&[1, 4, 5, 6]));
        assert_eq!(&cells[2..], &[CAPITAL_SIGN, CharTable::cell('e').unwrap()]);
    }

    #[test]
    fn unmapped_passes_through_display() {
        let out = Grade2Translator::standard().translate_display("and€");
        assert_eq!(out, "\u{282F}€");
    }

    #[test]
    fn empty_input() {
        assert!(translate_grade2("").is_empty());
    }
}
