/// Cell codec, static tables, errors and configuration for brailler.
///
/// Every other crate of the workspace builds on the types defined here.

pub mod cell;
pub mod config;
pub mod error;
pub mod tables;

pub use cell::{BRAILLE_BASE, BrailleCell, CellMode, DotMask};
pub use config::{EngineConfig, Grade};
pub use error::CoreError;
pub use tables::{CAPITAL_SIGN, CharTable, NUMBER_SIGN};
