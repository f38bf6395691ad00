use crate::grid::PixelGrid;

/// Luminance perceptuelle BT.709 d'un pixel RGB.
#[inline(always)]
#[must_use]
pub fn luminance(r: u8, g: u8, b: u8) -> u8 {
    ((u32::from(r) * 2126 + u32::from(g) * 7152 + u32::from(b) * 722) / 10000) as u8
}

/// Threshold an RGBA buffer (row-major, 4 bytes per pixel) into a grid.
///
/// A pixel is set when its luminance is above `threshold`, or below it when
/// `invert` is on. A truncated buffer leaves the missing pixels unset.
///
/// # Example
/// ```
/// use br_raster::threshold::grid_from_rgba;
/// let data = [255, 255, 255, 255, 0, 0, 0, 255];
/// let grid = grid_from_rgba(&data, 2, 1, 128, false);
/// assert!(grid.get(0, 0) && !grid.get(0, 1));
/// ```
#[must_use]
pub fn grid_from_rgba(data: &[u8], width: u32, height: u32, threshold: u8, invert: bool) -> PixelGrid {
    let (cols, rows) = (width as usize, height as usize);
    let mut pixels = vec![false; rows * cols];
    for (pixel, px) in pixels.iter_mut().zip(data.chunks_exact(4)) {
        let lum = luminance(px[0], px[1], px[2]);
        *pixel = if invert { lum < threshold } else { lum > threshold };
    }
    PixelGrid::from_flat(rows, cols, pixels)
}

/// Load an image from disk and threshold it.
///
/// # Errors
/// Returns an error if the image cannot be opened or decoded.
///
/// # Example
/// ```no_run
/// use br_raster::threshold::load_image_grid;
/// use std::path::Path;
/// let grid = load_image_grid(Path::new("logo.png"), 128, false).unwrap();
/// ```
#[cfg(feature = "image-source")]
pub fn load_image_grid(path: &std::path::Path, threshold: u8, invert: bool) -> anyhow::Result<PixelGrid> {
    use anyhow::Context;

    let img = image::open(path).with_context(|| format!("Impossible de charger {}", path.display()))?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    log::debug!("Image {} chargée : {width}×{height}", path.display());
    Ok(grid_from_rgba(rgba.as_raw(), width, height, threshold, invert))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn luminance_extremes() {
        assert_eq!(luminance(0, 0, 0), 0);
        assert_eq!(luminance(255, 255, 255), 255);
    }

    #[test]
    fn invert_flips_selection() {
        let data = [250, 250, 250, 255, 10, 10, 10, 255, 0, 0, 0, 255];
        let grid = grid_from_rgba(&data, 3, 1, 128, true);
        assert!(!grid.get(0, 0));
        assert!(grid.get(0, 1) && grid.get(0, 2));
    }

    #[test]
    fn pixels_land_in_row_major_order() {
        let mut data = vec![0u8; 3 * 2 * 4];
        data[5 * 4..6 * 4].copy_from_slice(&[255, 255, 255, 255]);
        data[4..8].copy_from_slice(&[255, 255, 255, 255]);
        let grid = grid_from_rgba(&data, 2, 3, 128, false);
        assert_eq!((grid.rows(), grid.cols()), (3, 2));
        let set: Vec<_> = (0..3)
            .flat_map(|r| (0..2).map(move |c| (r, c)))
            .filter(|&(r, c)| grid.get(r, c))
            .collect();
        assert_eq!(set, vec![(0, 1), (2, 1)]);
    }

    #[test]
    fn oversized_buffer_is_ignored_past_the_grid() {
        let data = [255u8; 4 * 5];
        let grid = grid_from_rgba(&data, 2, 2, 10, false);
        assert_eq!(grid.len(), 4);
        assert!(grid.as_slice().iter().all(|&p| p));
    }

    #[test]
    fn truncated_buffer_is_safe() {
        let data = [255, 255, 255, 255];
        let grid = grid_from_rgba(&data, 2, 2, 10, false);
        assert_eq!((grid.rows(), grid.cols()), (2, 2));
        assert!(grid.get(0, 0));
        assert!(!grid.get(1, 1));
    }

    #[cfg(feature = "image-source")]
    #[test]
    fn loads_png_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dot.png");
        let mut img = image::RgbaImage::new(2, 3);
        img.put_pixel(1, 2, image::Rgba([255, 255, 255, 255]));
        img.save(&path).unwrap();

        let grid = load_image_grid(&path, 128, false).unwrap();
        assert_eq!((grid.rows(), grid.cols()), (3, 2));
        assert!(grid.get(2, 1));
        assert!(!grid.get(0, 0));
    }
}
