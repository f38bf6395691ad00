use std::fmt;

use br_core::error::CoreError;

/// Drawing tool applied to a single pixel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tool {
    /// Raise the pixel.
    #[default]
    Draw,
    /// Clear the pixel.
    Erase,
}

/// Rectangular boolean grid, row-major.
///
/// No size constraint: partial 3×2 blocks at the edges are handled by the
/// downsampler.
///
/// # Example
/// ```
/// use br_raster::grid::PixelGrid;
/// let mut grid = PixelGrid::new(4, 5);
/// grid.set(3, 4, true).unwrap();
/// assert!(grid.get(3, 4));
/// assert!(!grid.get(10, 10));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct PixelGrid {
    data: Vec<bool>,
    rows: usize,
    cols: usize,
}

impl PixelGrid {
    /// All-unset grid.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![false; rows * cols],
            rows,
            cols,
        }
    }

    /// Build from nested rows.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidGrid`] if rows differ in length.
    ///
    /// # Example
    /// ```
    /// use br_raster::grid::PixelGrid;
    /// let grid = PixelGrid::from_rows(vec![vec![true, false], vec![false, true]]).unwrap();
    /// assert_eq!((grid.rows(), grid.cols()), (2, 2));
    /// assert!(PixelGrid::from_rows(vec![vec![true], vec![]]).is_err());
    /// ```
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self, CoreError> {
        let cols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(rows.len() * cols);
        for (row, values) in rows.iter().enumerate() {
            if values.len() != cols {
                return Err(CoreError::InvalidGrid {
                    row,
                    expected: cols,
                    found: values.len(),
                });
            }
            data.extend_from_slice(values);
        }
        Ok(Self {
            data,
            rows: rows.len(),
            cols,
        })
    }

    /// Wrap row-major pixels; `data.len()` must be `rows * cols`.
    pub(crate) fn from_flat(rows: usize, cols: usize, data: Vec<bool>) -> Self {
        debug_assert_eq!(data.len(), rows * cols);
        Self { data, rows, cols }
    }

    /// Parse a text drawing: one line per row, `#`, `1`, `*`, `●` or `⣿` set.
    ///
    /// Short lines are padded with unset pixels.
    ///
    /// # Example
    /// ```
    /// use br_raster::grid::PixelGrid;
    /// let grid = PixelGrid::parse("#.\n.#\n#");
    /// assert_eq!((grid.rows(), grid.cols()), (3, 2));
    /// assert!(grid.get(1, 1) && grid.get(2, 0) && !grid.get(2, 1));
    /// ```
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let lines: Vec<&str> = text.lines().collect();
        let cols = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        let mut grid = Self::new(lines.len(), cols);
        for (r, line) in lines.iter().enumerate() {
            for (c, ch) in line.chars().enumerate() {
                grid.data[r * cols + c] = matches!(ch, '#' | '1' | '*' | '●' | '⣿');
            }
        }
        grid
    }

    /// Height.
    #[must_use]
    #[inline(always)]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Width.
    #[must_use]
    #[inline(always)]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total pixel count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True for a zero-sized grid.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Pixel value; coordinates outside the grid read as unset.
    #[must_use]
    #[inline(always)]
    pub fn get(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols && self.data[row * self.cols + col]
    }

    /// Set a pixel.
    ///
    /// # Errors
    /// Returns [`CoreError::OutOfBounds`] outside the grid.
    pub fn set(&mut self, row: usize, col: usize, value: bool) -> Result<(), CoreError> {
        if row >= self.rows || col >= self.cols {
            return Err(CoreError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        self.data[row * self.cols + col] = value;
        Ok(())
    }

    /// Apply a drawing tool at one pixel.
    ///
    /// # Errors
    /// Returns [`CoreError::OutOfBounds`] outside the grid.
    ///
    /// # Example
    /// ```
    /// use br_raster::grid::{PixelGrid, Tool};
    /// let mut grid = PixelGrid::new(2, 2);
    /// grid.apply(Tool::Draw, 0, 1).unwrap();
    /// grid.apply(Tool::Erase, 0, 1).unwrap();
    /// assert!(!grid.get(0, 1));
    /// assert!(grid.apply(Tool::Draw, 2, 0).is_err());
    /// ```
    pub fn apply(&mut self, tool: Tool, row: usize, col: usize) -> Result<(), CoreError> {
        self.set(row, col, matches!(tool, Tool::Draw))
    }

    /// Unset every pixel.
    pub fn clear(&mut self) {
        self.data.fill(false);
    }

    /// One row as a slice; `None` out of range.
    #[must_use]
    pub fn row(&self, row: usize) -> Option<&[bool]> {
        (row < self.rows).then(|| &self.data[row * self.cols..(row + 1) * self.cols])
    }

    /// Flat row-major pixels.
    #[must_use]
    pub fn as_slice(&self) -> &[bool] {
        &self.data
    }
}

impl fmt::Debug for PixelGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "PixelGrid {}×{}", self.rows, self.cols)?;
        for r in 0..self.rows {
            for c in 0..self.cols {
                f.write_str(if self.get(r, c) { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
