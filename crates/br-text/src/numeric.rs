use br_core::cell::BrailleCell;
use br_core::error::CoreError;
use br_core::tables::{CharTable, NUMBER_SIGN};

/// Number sign followed by one cell per decimal digit.
///
/// # Errors
/// Returns [`CoreError::UnsupportedValue`] for negative input.
///
/// # Example
/// ```
/// use br_text::numeric::encode_number;
/// use br_core::tables::NUMBER_SIGN;
/// let cells = encode_number(42).unwrap();
/// assert_eq!(cells.len(), 3);
/// assert_eq!(cells[0], NUMBER_SIGN);
/// assert!(encode_number(-1).is_err());
/// ```
pub fn encode_number(n: i64) -> Result<Vec<BrailleCell>, CoreError> {
    let value = u64::try_from(n).map_err(|_| CoreError::UnsupportedValue(n))?;
    Ok(encode_unsigned(value))
}

/// Infallible variant for unsigned input.
#[must_use]
pub fn encode_unsigned(n: u64) -> Vec<BrailleCell> {
    let digits = n.to_string();
    let mut cells = Vec::with_capacity(digits.len() + 1);
    cells.push(NUMBER_SIGN);
    cells.extend(digits.chars().filter_map(CharTable::digit));
    cells
}
