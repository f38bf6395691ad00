use thiserror::Error;

use crate::cell::CellMode;

/// Errors originating from the core module.
///
/// Only structurally invalid input ends up here. A character missing from a
/// table is never an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Dot position outside `1..=max` for the active cell mode.
    #[error("Position de point invalide : {position} (attendu 1..={max})")]
    InvalidDotPosition {
        /// Offending position.
        position: u8,
        /// Highest position allowed by the cell mode.
        max: u8,
    },

    /// Mask carries bits beyond the width of the cell mode.
    #[error("Masque invalide : {mask:#010b} pour le mode {mode:?}")]
    InvalidMask {
        /// Offending mask.
        mask: u8,
        /// Cell mode the mask was checked against.
        mode: CellMode,
    },

    /// Value outside the encodable domain (negative numbers).
    #[error("Valeur non supportée : {0}")]
    UnsupportedValue(i64),

    /// Two contraction entries share the same key.
    #[error("Contraction en double : {key:?}")]
    DuplicateContraction {
        /// Duplicated key.
        key: String,
    },

    /// Contraction entry rejected at table build time.
    #[error("Contraction invalide {key:?} : {reason}")]
    InvalidContraction {
        /// Offending key.
        key: String,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// Ragged rows in a pixel grid.
    #[error("Grille invalide : ligne {row} a {found} colonnes, attendu {expected}")]
    InvalidGrid {
        /// Row index.
        row: usize,
        /// Width of the first row.
        expected: usize,
        /// Width of the offending row.
        found: usize,
    },

    /// Coordinate outside a pixel grid.
    #[error("Coordonnées hors grille : ({row}, {col}) pour {rows}×{cols}")]
    OutOfBounds {
        /// Row index.
        row: usize,
        /// Column index.
        col: usize,
        /// Grid height.
        rows: usize,
        /// Grid width.
        cols: usize,
    },

    /// Invalid configuration value or structure.
    #[error("Configuration invalide : {0}")]
    Config(String),
}
