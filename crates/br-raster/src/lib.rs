/// Pixel grids and their Braille rendering for brailler.
///
/// Converts boolean rasters (drawings, thresholded images) to grids of
/// six-dot cells.
pub mod downsample;
pub mod grid;
pub mod stats;
pub mod templates;
pub mod threshold;

pub use downsample::{convert_grid_to_braille, downsample};
pub use grid::{PixelGrid, Tool};
pub use stats::{Density, count_active_dots, count_column, count_row, density};
pub use templates::Template;
