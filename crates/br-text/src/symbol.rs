use br_core::cell::BrailleCell;

/// One element of a translation.
///
/// `Unmapped` keeps the source character so display strings can pass it
/// through unchanged; cell and dot views see it as an empty cell.
///
/// # Example
/// ```
/// use br_text::symbol::Symbol;
/// use br_core::cell::BrailleCell;
/// assert_eq!(Symbol::Unmapped('€').display(), '€');
/// assert_eq!(Symbol::Unmapped('€').cell(), BrailleCell::EMPTY);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Symbol {
    /// A Braille cell.
    Cell(BrailleCell),
    /// Source character absent from every table.
    Unmapped(char),
}

impl Symbol {
    /// Cell view (empty for unmapped input).
    #[must_use]
    #[inline]
    pub const fn cell(self) -> BrailleCell {
        match self {
            Self::Cell(cell) => cell,
            Self::Unmapped(_) => BrailleCell::EMPTY,
        }
    }

    /// Character to display.
    #[must_use]
    #[inline]
    pub const fn display(self) -> char {
        match self {
            Self::Cell(cell) => cell.to_char(),
            Self::Unmapped(ch) => ch,
        }
    }
}

/// Display string for a symbol run.
#[must_use]
pub fn to_display_string(symbols: &[Symbol]) -> String {
    symbols.iter().map(|s| s.display()).collect()
}

/// Cell view for a symbol run.
#[must_use]
pub fn to_cells(symbols: &[Symbol]) -> Vec<BrailleCell> {
    symbols.iter().map(|s| s.cell()).collect()
}
