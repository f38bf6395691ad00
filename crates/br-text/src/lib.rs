/// Text, number and expression translators for brailler.
///
/// The free functions at the crate root are the surface consumed by
/// application code; the modules expose the translators themselves.
pub mod contraction;
pub mod grade2;
pub mod literary;
pub mod nemeth;
pub mod numeric;
pub mod symbol;

use br_core::config::Grade;
use br_core::error::CoreError;

pub use contraction::ContractionTable;
pub use grade2::{Grade2Translator, translate_grade2};
pub use literary::{translate_literal, translate_literal_symbols};
pub use nemeth::{encode_expression, tokenize_expression};
pub use numeric::encode_number;
pub use symbol::Symbol;

/// Display string for `text`. Unmapped characters are kept unchanged.
///
/// # Example
/// ```
/// use br_text::text_to_braille;
/// use br_core::config::Grade;
/// assert_eq!(text_to_braille("ab", Grade::One), "⠁⠃");
/// assert_eq!(text_to_braille("and", Grade::Two), "⠯");
/// ```
#[must_use]
pub fn text_to_braille(text: &str, grade: Grade) -> String {
    match grade {
        Grade::One => symbol::to_display_string(&translate_literal_symbols(text)),
        Grade::Two => Grade2Translator::standard().translate_display(text),
    }
}

/// One six-dot array per source character; unmapped → all `false`.
///
/// # Example
/// ```
/// use br_text::text_to_braille_dots;
/// assert_eq!(text_to_braille_dots("a")[0], [true, false, false, false, false, false]);
/// ```
#[must_use]
pub fn text_to_braille_dots(text: &str) -> Vec<[bool; 6]> {
    literary::literal_dots(text)
}

/// Number sign then digits, as dot arrays.
///
/// # Errors
/// Returns [`CoreError::UnsupportedValue`] for negative input.
pub fn number_to_braille_dots(n: i64) -> Result<Vec<[bool; 6]>, CoreError> {
    Ok(encode_number(n)?.into_iter().map(|c| c.dots()).collect())
}

/// Nemeth-subset expression as dot arrays.
#[must_use]
pub fn convert_nemeth_expression<S: AsRef<str>>(tokens: &[S]) -> Vec<[bool; 6]> {
    encode_expression(tokens).into_iter().map(|c| c.dots()).collect()
}

/// One Grade 1 line per label, each terminated by `\n`.
///
/// # Example
/// ```
/// use br_text::labels_to_braille;
/// assert_eq!(labels_to_braille(&["ab", "c"]), "⠁⠃\n⠉\n");
/// ```
#[must_use]
pub fn labels_to_braille<S: AsRef<str>>(labels: &[S]) -> String {
    let mut out = String::new();
    for label in labels {
        out.push_str(&text_to_braille(label.as_ref(), Grade::One));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use br_core::tables::{CAPITAL_SIGN, NUMBER_SIGN};

    use super::*;

    #[test]
    fn known_letter_dots() {
        assert_eq!(text_to_braille_dots("a")[0], [true, false, false, false, false, false]);
        assert_eq!(text_to_braille_dots("b")[0], [true, true, false, false, false, false]);
    }

    #[test]
    fn capital_then_lowercase() {
        let cells = translate_literal("Ab");
        assert_eq!(cells.len(), 3);
        assert_eq!(cells[0], CAPITAL_SIGN);
        assert_eq!(cells[1].dots(), text_to_braille_dots("a")[0]);
        assert_eq!(cells[2].dots(), text_to_braille_dots("b")[0]);
    }

    #[test]
    fn capital_sign_in_display_string() {
        assert_eq!(text_to_braille("A", Grade::One), "\u{2820}\u{2801}");
    }

    #[test]
    fn emoji_passes_through() {
        let text = "a🙂b";
        let display = text_to_braille(text, Grade::One);
        assert_eq!(display, "⠁🙂⠃");
        let dots = text_to_braille_dots(text);
        assert_eq!(dots.len(), 3);
        assert_eq!(dots[1], [false; 6]);
        assert!(text_to_braille("x§", Grade::Two).ends_with('§'));
    }

    #[test]
    fn number_dots_framing() {
        let dots = number_to_braille_dots(305).unwrap();
        assert_eq!(dots.len(), 4);
        assert_eq!(dots[0], NUMBER_SIGN.dots());
        assert_eq!(dots[0], [false, false, true, true, true, true]);
        assert!(number_to_braille_dots(-3).is_err());
    }

    #[test]
    fn nemeth_dots() {
        let dots = convert_nemeth_expression(&["1", "×", "2"]);
        assert_eq!(dots[1], [true, false, false, false, false, true]);
    }

    #[test]
    fn empty_inputs() {
        assert_eq!(text_to_braille("", Grade::One), "");
        assert_eq!(text_to_braille("", Grade::Two), "");
        assert!(text_to_braille_dots("").is_empty());
        assert_eq!(labels_to_braille::<&str>(&[]), "");
    }
}
