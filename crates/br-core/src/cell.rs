//! Codec bit à bit des cellules Braille (U+2800).
//!
//! Bits activés :
//! +---+---+
//! | 1 | 4 |
//! +---+---+
//! | 2 | 5 |
//! +---+---+
//! | 3 | 6 |
//! +---+---+
//! | 7 | 8 |
//! +---+---+
//!
//! dot 1 → bit 0, dot 2 → bit 1, … dot 8 → bit 7.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Braille base codepoint (U+2800).
pub const BRAILLE_BASE: u32 = 0x2800;

/// Cell geometry: literary six-dot or computer eight-dot Braille.
///
/// # Example
/// ```
/// use br_core::cell::CellMode;
/// assert_eq!(CellMode::default().max_dot(), 6);
/// assert_eq!(CellMode::Eight.max_dot(), 8);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum CellMode {
    /// Dots 1..=6.
    #[default]
    Six,
    /// Dots 1..=8.
    Eight,
}

impl CellMode {
    /// Highest valid dot position.
    #[must_use]
    #[inline(always)]
    pub const fn max_dot(self) -> u8 {
        match self {
            Self::Six => 6,
            Self::Eight => 8,
        }
    }

    /// Bits a mask may carry in this mode.
    #[must_use]
    #[inline(always)]
    pub const fn width_mask(self) -> u8 {
        match self {
            Self::Six => 0b0011_1111,
            Self::Eight => 0xFF,
        }
    }
}

/// Bit field of raised dots. Bit `i` is set iff dot `i + 1` is raised.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DotMask(u8);

impl DotMask {
    /// No raised dots.
    pub const EMPTY: Self = Self(0);

    /// Wrap raw bits, checking them against the mode width.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidMask`] if `bits` uses dots beyond the mode.
    ///
    /// # Example
    /// ```
    /// use br_core::cell::{CellMode, DotMask};
    /// assert!(DotMask::new(0b0100_0000, CellMode::Six).is_err());
    /// assert!(DotMask::new(0b0100_0000, CellMode::Eight).is_ok());
    /// ```
    pub fn new(bits: u8, mode: CellMode) -> Result<Self, CoreError> {
        if bits & !mode.width_mask() != 0 {
            return Err(CoreError::InvalidMask { mask: bits, mode });
        }
        Ok(Self(bits))
    }

    /// Drop bits beyond the mode width.
    ///
    /// # Example
    /// ```
    /// use br_core::cell::{CellMode, DotMask};
    /// assert_eq!(DotMask::truncate(0xFF, CellMode::Six).bits(), 0b0011_1111);
    /// ```
    #[must_use]
    #[inline(always)]
    pub const fn truncate(bits: u8, mode: CellMode) -> Self {
        Self(bits & mode.width_mask())
    }

    /// Raw bits.
    #[must_use]
    #[inline(always)]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// True if the given dot (1-based) is raised. Out-of-range dots are never raised.
    #[must_use]
    #[inline(always)]
    pub const fn has(self, dot: u8) -> bool {
        matches!(dot, 1..=8) && self.0 & (1 << (dot - 1)) != 0
    }

    /// Number of raised dots.
    #[must_use]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }
}

/// Encode a dot-position set into a mask.
///
/// Positions may come in any order; duplicates are idempotent.
///
/// # Errors
/// Returns [`CoreError::InvalidDotPosition`] for a position outside the mode.
///
/// # Example
/// ```
/// use br_core::cell::{encode, CellMode};
/// assert_eq!(encode(&[1, 4], CellMode::Six).unwrap().bits(), 0b00_1001);
/// assert!(encode(&[7], CellMode::Six).is_err());
/// ```
pub fn encode(dots: &[u8], mode: CellMode) -> Result<DotMask, CoreError> {
    let max = mode.max_dot();
    let mut bits = 0u8;
    for &position in dots {
        if !(1..=max).contains(&position) {
            return Err(CoreError::InvalidDotPosition { position, max });
        }
        bits |= 1 << (position - 1);
    }
    Ok(DotMask(bits))
}

/// Decode a mask back into its ascending dot positions.
///
/// # Errors
/// Returns [`CoreError::InvalidMask`] if the mask does not fit the mode.
///
/// # Example
/// ```
/// use br_core::cell::{decode, encode, CellMode};
/// let mask = encode(&[6, 3, 4, 5], CellMode::Six).unwrap();
/// assert_eq!(decode(mask, CellMode::Six).unwrap(), vec![3, 4, 5, 6]);
/// ```
pub fn decode(mask: DotMask, mode: CellMode) -> Result<Vec<u8>, CoreError> {
    let mask = DotMask::new(mask.bits(), mode)?;
    Ok((1..=mode.max_dot()).filter(|&d| mask.has(d)).collect())
}

/// `BRAILLE_BASE | mask`. Masks never exceed 8 bits, so the OR is an offset.
#[must_use]
#[inline(always)]
pub const fn to_display_codepoint(mask: DotMask) -> u32 {
    BRAILLE_BASE | mask.0 as u32
}

/// Display character for a mask.
#[must_use]
#[inline(always)]
pub const fn to_display_char(mask: DotMask) -> char {
    // Le bloc U+2800..=U+28FF est entièrement assigné.
    match char::from_u32(to_display_codepoint(mask)) {
        Some(c) => c,
        None => ' ',
    }
}

/// One Braille cell. Value object, immutable once built.
///
/// # Example
/// ```
/// use br_core::cell::BrailleCell;
/// let b = BrailleCell::from_dots(&[1, 2]);
/// assert_eq!(b.to_char(), '⠃');
/// assert_eq!(b.dots(), [true, true, false, false, false, false]);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct BrailleCell {
    /// Raised dots.
    pub mask: DotMask,
}

impl BrailleCell {
    /// Cell with no raised dots (space, unmapped marker).
    pub const EMPTY: Self = Self {
        mask: DotMask::EMPTY,
    };

    /// Build from a static dot list. Meant for `const` tables, where a bad
    /// position is a compile error.
    ///
    /// # Panics
    /// Panics if a position is outside `1..=8`.
    #[must_use]
    pub const fn from_dots(dots: &[u8]) -> Self {
        let mut bits = 0u8;
        let mut i = 0;
        while i < dots.len() {
            assert!(matches!(dots[i], 1..=8), "dot position out of range");
            bits |= 1 << (dots[i] - 1);
            i += 1;
        }
        Self {
            mask: DotMask(bits),
        }
    }

    /// Validated construction from a runtime dot set.
    ///
    /// # Errors
    /// Same as [`encode`].
    pub fn try_from_dots(dots: &[u8], mode: CellMode) -> Result<Self, CoreError> {
        encode(dots, mode).map(|mask| Self { mask })
    }

    /// True if no dot is raised.
    #[must_use]
    #[inline(always)]
    pub const fn is_empty(self) -> bool {
        self.mask.0 == 0
    }

    /// Display codepoint, `BRAILLE_BASE | mask`.
    #[must_use]
    #[inline(always)]
    pub const fn codepoint(self) -> u32 {
        to_display_codepoint(self.mask)
    }

    /// Display character.
    #[must_use]
    #[inline(always)]
    pub const fn to_char(self) -> char {
        to_display_char(self.mask)
    }

    /// Six-dot view; `dots()[i]` is dot `i + 1`. Dots 7 and 8 are dropped.
    #[must_use]
    pub fn dots(self) -> [bool; 6] {
        std::array::from_fn(|i| self.mask.has(i as u8 + 1))
    }

    /// Eight-dot view.
    #[must_use]
    pub fn dots8(self) -> [bool; 8] {
        std::array::from_fn(|i| self.mask.has(i as u8 + 1))
    }
}

impl fmt::Display for BrailleCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_sets(max: u8) -> impl Iterator<Item = Vec<u8>> {
        (0u16..(1 << max)).map(move |bits| (1..=max).filter(|d| bits & (1 << (d - 1)) != 0).collect())
    }

    #[test]
    fn encode_decode_bijective_six() {
        for set in all_sets(6) {
            let mask = encode(&set, CellMode::Six).unwrap();
            assert_eq!(decode(mask, CellMode::Six).unwrap(), set);
        }
    }

    #[test]
    fn encode_decode_bijective_eight() {
        let mut seen = std::collections::HashSet::new();
        for set in all_sets(8) {
            let mask = encode(&set, CellMode::Eight).unwrap();
            assert!(seen.insert(mask), "collision pour {set:?}");
            assert_eq!(decode(mask, CellMode::Eight).unwrap(), set);
        }
        assert_eq!(seen.len(), 256);
    }

    #[test]
    fn codepoint_is_base_or_mask() {
        for bits in 0..=255u8 {
            let mask = DotMask::new(bits, CellMode::Eight).unwrap();
            assert_eq!(to_display_codepoint(mask), BRAILLE_BASE | u32::from(bits));
        }
    }

    #[test]
    fn out_of_range_positions_rejected() {
        assert_eq!(
            encode(&[0], CellMode::Six),
            Err(CoreError::InvalidDotPosition { position: 0, max: 6 })
        );
        assert_eq!(
            encode(&[1, 7], CellMode::Six),
            Err(CoreError::InvalidDotPosition { position: 7, max: 6 })
        );
        assert!(encode(&[9], CellMode::Eight).is_err());
        assert!(encode(&[7, 8], CellMode::Eight).is_ok());
    }

    #[test]
    fn decode_rejects_wide_mask_in_six_mode() {
        let wide = encode(&[8], CellMode::Eight).unwrap();
        assert!(decode(wide, CellMode::Six).is_err());
    }

    #[test]
    fn duplicates_are_idempotent() {
        assert_eq!(
            encode(&[2, 2, 5], CellMode::Six).unwrap(),
            encode(&[5, 2], CellMode::Six).unwrap()
        );
    }

    #[test]
    fn braille_empty_and_full() {
        assert_eq!(BrailleCell::EMPTY.to_char(), '\u{2800}');
        let full = BrailleCell::from_dots(&[1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(full.to_char(), '\u{28FF}');
        assert_eq!(full.dots8(), [true; 8]);
        assert_eq!(full.dots(), [true; 6]);
    }
}
