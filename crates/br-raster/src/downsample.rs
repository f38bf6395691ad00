use br_core::cell::{BrailleCell, CellMode, DotMask};
use rayon::prelude::*;

use crate::grid::PixelGrid;

/// Block height in source pixels.
pub const BLOCK_ROWS: usize = 3;
/// Block width in source pixels.
pub const BLOCK_COLS: usize = 2;

/// Sub-pixel offsets `(dr, dc)` for dots 1..=6, in bit order.
///
/// ```text
///  1 2
///  3 4
///  5 6
/// ```
const DOT_OFFSETS: [(usize, usize); 6] = [(0, 0), (0, 1), (1, 0), (1, 1), (2, 0), (2, 1)];

/// Output dimensions `(rows, cols)` for a grid: `ceil(R/3) × ceil(C/2)`.
#[must_use]
pub fn output_size(grid: &PixelGrid) -> (usize, usize) {
    (grid.rows().div_ceil(BLOCK_ROWS), grid.cols().div_ceil(BLOCK_COLS))
}

/// Cell for the block whose top-left pixel is `(r, c)`.
/// Samples outside the grid read as unset.
#[inline(always)]
#[must_use]
pub fn encode_block(grid: &PixelGrid, r: usize, c: usize) -> BrailleCell {
    let mut bits = 0u8;
    for (bit, &(dr, dc)) in DOT_OFFSETS.iter().enumerate() {
        if grid.get(r + dr, c + dc) {
            bits |= 1 << bit;
        }
    }
    BrailleCell {
        mask: DotMask::truncate(bits, CellMode::Six),
    }
}

/// Partition the grid into 3×2 blocks, one cell each.
///
/// Outer vector = output rows. Always rectangular, including for grids whose
/// size is not a multiple of the block.
///
/// # Example
/// ```
/// use br_raster::grid::PixelGrid;
/// use br_raster::downsample::downsample;
/// let cells = downsample(&PixelGrid::new(7, 5));
/// assert_eq!(cells.len(), 3);
/// assert!(cells.iter().all(|row| row.len() == 3));
/// ```
#[must_use]
pub fn downsample(grid: &PixelGrid) -> Vec<Vec<BrailleCell>> {
    let (out_rows, out_cols) = output_size(grid);
    (0..out_rows)
        .into_par_iter()
        .map(|br| {
            (0..out_cols)
                .map(|bc| encode_block(grid, br * BLOCK_ROWS, bc * BLOCK_COLS))
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Display string, `\n` after each output row.
///
/// # Example
/// ```
/// use br_raster::grid::PixelGrid;
/// use br_raster::downsample::convert_grid_to_braille;
/// let grid = PixelGrid::parse("##\n##\n##");
/// assert_eq!(convert_grid_to_braille(&grid), "⠿\n");
/// ```
#[must_use]
pub fn convert_grid_to_braille(grid: &PixelGrid) -> String {
    let cells = downsample(grid);
    let (out_rows, out_cols) = output_size(grid);
    let mut out = String::with_capacity(out_rows * (out_cols * 3 + 1));
    for row in &cells {
        out.extend(row.iter().map(|c| c.to_char()));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use br_core::cell::BRAILLE_BASE;

    use super::*;

    #[test]
    fn partition_sizes() {
        for (rows, cols) in [(0, 0), (1, 1), (3, 2), (4, 3), (20, 40), (21, 41), (2, 7)] {
            let cells = downsample(&PixelGrid::new(rows, cols));
            assert_eq!(cells.len(), rows.div_ceil(3), "{rows}×{cols}");
            for row in &cells {
                assert_eq!(row.len(), cols.div_ceil(2), "{rows}×{cols}");
            }
        }
    }

    #[test]
    fn dot_placement_is_positional() {
        for (bit, &(dr, dc)) in DOT_OFFSETS.iter().enumerate() {
            let mut grid = PixelGrid::new(3, 2);
            grid.set(dr, dc, true).unwrap();
            let cells = downsample(&grid);
            assert_eq!(cells[0][0].mask.bits(), 1 << bit);
        }
    }

    #[test]
    fn every_pixel_hits_exactly_one_dot() {
        let (rows, cols) = (7, 5);
        for r in 0..rows {
            for c in 0..cols {
                let mut grid = PixelGrid::new(rows, cols);
                grid.set(r, c, true).unwrap();
                let raised: u32 = downsample(&grid)
                    .iter()
                    .flatten()
                    .map(|cell| cell.mask.count())
                    .sum();
                assert_eq!(raised, 1, "pixel ({r}, {c})");
                assert!(downsample(&grid)[r / 3][c / 2].mask.count() == 1);
            }
        }
    }

    #[test]
    fn edge_blocks_are_bounds_safe() {
        let mut grid = PixelGrid::new(4, 3);
        grid.set(3, 2, true).unwrap();
        let cells = downsample(&grid);
        assert_eq!(cells[1][1].mask.bits(), 0b00_0001);
        assert!(cells[0].iter().all(|c| c.is_empty()));
    }

    #[test]
    fn single_top_left_cell_scenario() {
        let mut grid = PixelGrid::new(20, 40);
        grid.set(0, 0, true).unwrap();
        grid.set(1, 1, true).unwrap();
        let cells = downsample(&grid);
        assert_eq!(cells[0][0].mask.bits(), 0b00_1001);
        assert_eq!(cells[0][0].codepoint(), BRAILLE_BASE | 0b00_1001);
        let others = cells.iter().flatten().skip(1).all(|c| c.is_empty());
        assert!(others);

        let text = convert_grid_to_braille(&grid);
        assert_eq!(text.lines().count(), 7);
        assert!(text.starts_with('\u{2809}'));
        assert!(text.ends_with('\n'));
        assert_eq!(text.lines().next().map(|l| l.chars().count()), Some(20));
    }
}
