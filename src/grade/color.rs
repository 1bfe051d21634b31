//! Stroke colors for grade categories.

use std::fmt;

use super::Category;

/// Simple RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl fmt::Display for Rgb {
    /// Format as CSS: rgb(r,g,b)
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}

impl Category {
    /// CSS color name the map strokes this category with.
    pub fn css_name(self) -> &'static str {
        match self {
            Category::Unknown => "gray",
            Category::Category1 => "blue",
            Category::Category2 => "lightgreen",
            Category::Category3 => "darkgreen",
            Category::Category4 => "yellow",
            Category::Category5 => "red",
        }
    }

    /// RGB value of [`Category::css_name`].
    pub fn rgb(self) -> Rgb {
        match self {
            Category::Unknown => Rgb { r: 128, g: 128, b: 128 },
            Category::Category1 => Rgb { r: 0, g: 0, b: 255 },
            Category::Category2 => Rgb { r: 144, g: 238, b: 144 },
            Category::Category3 => Rgb { r: 0, g: 100, b: 0 },
            Category::Category4 => Rgb { r: 255, g: 255, b: 0 },
            Category::Category5 => Rgb { r: 255, g: 0, b: 0 },
        }
    }
}

/// Legend rows shown next to the map, lowest grade first.
pub const LEGEND: &[(&str, Category)] = &[
    ("1 - 1.49", Category::Category1),
    ("1.5 - 2.49", Category::Category2),
    ("2.5 - 3.49", Category::Category3),
    ("3.5 - 4.49", Category::Category4),
    ("4.5 - 5.0", Category::Category5),
];
