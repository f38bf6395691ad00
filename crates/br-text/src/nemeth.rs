//! Sous-ensemble Nemeth : opérateurs, parenthèses, chiffres.
//!
//! Not real Nemeth Code. Operators live in their own table, separate from
//! the literary one; digits reuse the literary a–j patterns.

use std::collections::HashMap;
use std::sync::LazyLock;

use br_core::cell::BrailleCell;
use br_core::tables::CharTable;

use crate::literary::fold;

/// Operator token → dot positions.
const OPERATORS: &[(&str, &[u8])] = &[
    ("+", &[3, 4, 6]),
    ("-", &[3, 6]),
    ("×", &[1, 6]),
    ("÷", &[3, 4]),
    ("=", &[1, 3, 4, 6]),
    ("(", &[1, 2, 3, 5, 6]),
    (")", &[2, 3, 4, 5, 6]),
];

/// ASCII and typographic spellings of the same operators.
const ALIASES: &[(&str, &str)] = &[("*", "×"), ("/", "÷"), ("−", "-")];

/// First pair of operators sharing a pattern, if any.
fn pattern_collision(operators: &[(&'static str, &[u8])]) -> Option<(&'static str, &'static str)> {
    let mut seen: HashMap<BrailleCell, &'static str> = HashMap::with_capacity(operators.len());
    for &(token, dots) in operators {
        if let Some(other) = seen.insert(BrailleCell::from_dots(dots), token) {
            return Some((other, token));
        }
    }
    None
}

static NEMETH_TABLE: LazyLock<HashMap<&'static str, BrailleCell>> = LazyLock::new(|| {
    if let Some((a, b)) = pattern_collision(OPERATORS) {
        log::error!("Opérateurs {a:?} et {b:?} partagent le même motif");
    }
    let mut table: HashMap<&'static str, BrailleCell> = OPERATORS
        .iter()
        .map(|&(token, dots)| (token, BrailleCell::from_dots(dots)))
        .collect();
    for &(alias, target) in ALIASES {
        if let Some(&cell) = table.get(target) {
            table.insert(alias, cell);
        }
    }
    log::debug!("Table Nemeth construite : {} symboles", table.len());
    table
});

/// Cell for an operator or parenthesis token.
///
/// # Example
/// ```
/// use br_text::nemeth::operator;
/// assert_eq!(operator("*"), operator("×"));
/// assert!(operator("%").is_none());
/// ```
#[must_use]
pub fn operator(token: &str) -> Option<BrailleCell> {
    NEMETH_TABLE.get(token).copied()
}

/// Encode an expression token by token.
///
/// Operators go through the Nemeth table, digit runs digit by digit, and
/// anything else through the literary table (unknown characters → empty cell).
///
/// # Example
/// ```
/// use br_text::nemeth::encode_expression;
/// let cells = encode_expression(&["12", "+", "3"]);
/// assert_eq!(cells.len(), 4);
/// ```
#[must_use]
pub fn encode_expression<S: AsRef<str>>(tokens: &[S]) -> Vec<BrailleCell> {
    let mut out = Vec::with_capacity(tokens.len());
    for token in tokens {
        let token = token.as_ref().trim();
        if let Some(cell) = operator(token) {
            out.push(cell);
        } else if !token.is_empty() && token.chars().all(|c| c.is_ascii_digit()) {
            out.extend(token.chars().filter_map(CharTable::digit));
        } else {
            for ch in token.chars() {
                out.push(CharTable::cell(fold(ch)).unwrap_or_else(|| {
                    log::trace!("Symbole mathématique non mappé : {ch:?}");
                    BrailleCell::EMPTY
                }));
            }
        }
    }
    out
}

/// Split a plain expression into tokens: digit runs, then one token per
/// other non-blank character.
///
/// # Example
/// ```
/// use br_text::nemeth::tokenize_expression;
/// assert_eq!(tokenize_expression("12 × (3+4)"), ["12", "×", "(", "3", "+", "4", ")"]);
/// ```
#[must_use]
pub fn tokenize_expression(expr: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut number = String::new();
    for ch in expr.chars() {
        if ch.is_ascii_digit() {
            number.push(ch);
            continue;
        }
        if !number.is_empty() {
            tokens.push(std::mem::take(&mut number));
        }
        if !ch.is_whitespace() {
            tokens.push(ch.to_string());
        }
    }
    if !number.is_empty() {
        tokens.push(number);
    }
    tokens
}
