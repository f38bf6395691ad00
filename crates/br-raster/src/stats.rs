use std::fmt;

use crate::grid::PixelGrid;

/// Qualitative density bucket.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Density {
    /// Below 10 %.
    VerySparse,
    /// 10 % to below 25 %.
    Sparse,
    /// 25 % to below 50 %.
    Moderate,
    /// 50 % to below 75 %.
    Dense,
    /// 75 % and above.
    VeryDense,
}

impl Density {
    /// Human-readable label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::VerySparse => "very sparse",
            Self::Sparse => "sparse",
            Self::Moderate => "moderate",
            Self::Dense => "dense",
            Self::VeryDense => "very dense",
        }
    }
}

impl fmt::Display for Density {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lower bound of each bucket above `VerySparse`, in percent.
const CUTOFFS: [(usize, Density); 4] = [
    (10, Density::VerySparse),
    (25, Density::Sparse),
    (50, Density::Moderate),
    (75, Density::Dense),
];

/// Number of set pixels.
#[must_use]
pub fn count_active_dots(grid: &PixelGrid) -> usize {
    grid.as_slice().iter().filter(|&&p| p).count()
}

/// Set pixels in one row; 0 out of range.
#[must_use]
pub fn count_row(grid: &PixelGrid, row: usize) -> usize {
    grid.row(row).map_or(0, |r| r.iter().filter(|&&p| p).count())
}

/// Set pixels in one column; 0 out of range.
#[must_use]
pub fn count_column(grid: &PixelGrid, col: usize) -> usize {
    (0..grid.rows()).filter(|&r| grid.get(r, col)).count()
}

/// Density bucket of the active ratio. Cutoffs are exact: a ratio equal to
/// a cutoff lands in the upper bucket. Empty grids are `VerySparse`.
///
/// # Example
/// ```
/// use br_raster::grid::PixelGrid;
/// use br_raster::stats::{density, Density};
/// let mut grid = PixelGrid::new(2, 2);
/// grid.set(0, 0, true).unwrap();
/// assert_eq!(density(&grid), Density::Moderate);
/// ```
#[must_use]
pub fn density(grid: &PixelGrid) -> Density {
    let total = grid.len();
    if total == 0 {
        return Density::VerySparse;
    }
    let active = count_active_dots(grid);
    // Arithmétique entière : pas d'arrondi flottant aux bornes.
    CUTOFFS
        .iter()
        .find(|&&(percent, _)| active * 100 < percent * total)
        .map_or(Density::VeryDense, |&(_, bucket)| bucket)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with(active: usize, total: usize) -> PixelGrid {
        let mut grid = PixelGrid::new(1, total);
        for c in 0..active {
            grid.set(0, c, true).unwrap();
        }
        grid
    }

    #[test]
    fn thresholds_are_exact() {
        assert_eq!(density(&grid_with(9, 100)), Density::VerySparse);
        assert_eq!(density(&grid_with(10, 100)), Density::Sparse);
        assert_eq!(density(&grid_with(24, 100)), Density::Sparse);
        assert_eq!(density(&grid_with(25, 100)), Density::Moderate);
        assert_eq!(density(&grid_with(49, 100)), Density::Moderate);
        assert_eq!(density(&grid_with(50, 100)), Density::Dense);
        assert_eq!(density(&grid_with(74, 100)), Density::Dense);
        assert_eq!(density(&grid_with(75, 100)), Density::VeryDense);
        assert_eq!(density(&grid_with(100, 100)), Density::VeryDense);
    }

    #[test]
    fn empty_grid_is_very_sparse() {
        assert_eq!(density(&PixelGrid::new(0, 0)), Density::VerySparse);
    }

    #[test]
    fn labels() {
        assert_eq!(Density::VerySparse.to_string(), "very sparse");
        assert_eq!(Density::VeryDense.as_str(), "very dense");
    }

    #[test]
    fn counts() {
        let grid = PixelGrid::parse("#.#\n.##\n...");
        assert_eq!(count_active_dots(&grid), 4);
        assert_eq!(count_row(&grid, 0), 2);
        assert_eq!(count_row(&grid, 2), 0);
        assert_eq!(count_row(&grid, 9), 0);
        assert_eq!(count_column(&grid, 2), 2);
        assert_eq!(count_column(&grid, 9), 0);
    }
}
