//! Dessins prédéfinis pour la toile Braille (20 × 40).

use std::str::FromStr;

use br_core::error::CoreError;

use crate::grid::PixelGrid;

/// Template height.
pub const TEMPLATE_ROWS: usize = 20;
/// Template width.
pub const TEMPLATE_COLS: usize = TEMPLATE_ROWS * 2;

/// Built-in drawings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Template {
    /// Empty canvas.
    Blank,
    /// Flower with stem and leaves.
    Flower,
    /// Heart outline.
    Heart,
    /// Five-point star.
    Star,
    /// House with door and window.
    House,
}

const FLOWER: &[(usize, usize)] = &[
    (10, 20),
    (8, 20),
    (12, 20),
    (10, 18),
    (10, 22),
    (14, 18),
    (14, 22),
    (15, 20),
    (16, 20),
    (17, 20),
];

const HEART: &[(usize, usize)] = &[
    (5, 18),
    (5, 22),
    (6, 17),
    (6, 19),
    (6, 21),
    (6, 23),
    (7, 18),
    (7, 20),
    (7, 22),
    (8, 19),
    (8, 21),
    (9, 20),
];

const STAR: &[(usize, usize)] = &[
    (5, 20),
    (6, 20),
    (7, 18),
    (7, 20),
    (7, 22),
    (8, 19),
    (8, 21),
    (9, 15),
    (9, 17),
    (9, 23),
    (9, 25),
    (10, 16),
    (10, 20),
    (10, 24),
    (11, 17),
    (11, 23),
    (12, 18),
    (12, 22),
    (13, 19),
    (13, 21),
    (14, 20),
];

const HOUSE: &[(usize, usize)] = &[
    // Toit
    (5, 20),
    (6, 19),
    (6, 21),
    (7, 18),
    (7, 22),
    // Murs
    (8, 18),
    (8, 22),
    (9, 18),
    (9, 22),
    (10, 18),
    (10, 22),
    (11, 18),
    (11, 22),
    (12, 18),
    (12, 22),
    (13, 18),
    (13, 22),
    (14, 18),
    (14, 22),
    (14, 19),
    (14, 20),
    (14, 21),
    // Porte
    (11, 20),
    (12, 20),
    (13, 20),
    // Fenêtre
    (9, 20),
];

impl Template {
    /// Every template, in menu order.
    pub const ALL: [Self; 5] = [Self::Blank, Self::Flower, Self::Heart, Self::Star, Self::House];

    /// Lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Blank => "blank",
            Self::Flower => "flower",
            Self::Heart => "heart",
            Self::Star => "star",
            Self::House => "house",
        }
    }

    fn points(self) -> &'static [(usize, usize)] {
        match self {
            Self::Blank => &[],
            Self::Flower => FLOWER,
            Self::Heart => HEART,
            Self::Star => STAR,
            Self::House => HOUSE,
        }
    }

    /// Fresh `TEMPLATE_ROWS × TEMPLATE_COLS` grid holding the drawing.
    ///
    /// # Example
    /// ```
    /// use br_raster::templates::Template;
    /// let grid = Template::Heart.grid();
    /// assert_eq!((grid.rows(), grid.cols()), (20, 40));
    /// assert!(grid.get(9, 20));
    /// ```
    #[must_use]
    pub fn grid(self) -> PixelGrid {
        let mut grid = PixelGrid::new(TEMPLATE_ROWS, TEMPLATE_COLS);
        for &(r, c) in self.points() {
            if let Err(e) = grid.set(r, c, true) {
                log::warn!("Point de gabarit ignoré : {e}");
            }
        }
        grid
    }
}

impl FromStr for Template {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| CoreError::Config(format!("gabarit inconnu : {s}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::count_active_dots;

    #[test]
    fn point_counts() {
        assert_eq!(count_active_dots(&Template::Blank.grid()), 0);
        assert_eq!(count_active_dots(&Template::Flower.grid()), 10);
        assert_eq!(count_active_dots(&Template::Heart.grid()), 12);
        assert_eq!(count_active_dots(&Template::Star.grid()), 21);
        assert_eq!(count_active_dots(&Template::House.grid()), 26);
    }

    #[test]
    fn all_points_inside_canvas() {
        for template in Template::ALL {
            for &(r, c) in template.points() {
                assert!(r < TEMPLATE_ROWS && c < TEMPLATE_COLS, "{}", template.name());
            }
        }
    }

    #[test]
    fn parse_names() {
        assert_eq!("Star".parse::<Template>().unwrap(), Template::Star);
        assert!("castle".parse::<Template>().is_err());
    }
}
