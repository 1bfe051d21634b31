//! Grade classification into discrete visual categories.

mod color;

use std::fmt;

use serde::Serialize;

pub use color::{Rgb, LEGEND};

/// Visual class of a road grade.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Unknown,
    #[serde(rename = "category_1")]
    Category1,
    #[serde(rename = "category_2")]
    Category2,
    #[serde(rename = "category_3")]
    Category3,
    #[serde(rename = "category_4")]
    Category4,
    #[serde(rename = "category_5")]
    Category5,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Unknown,
        Category::Category1,
        Category::Category2,
        Category::Category3,
        Category::Category4,
        Category::Category5,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Unknown => "unknown",
            Category::Category1 => "category_1",
            Category::Category2 => "category_2",
            Category::Category3 => "category_3",
            Category::Category4 => "category_4",
            Category::Category5 => "category_5",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

/// Upper bounds (exclusive) of each graded category; anything above the last is category 5.
const BREAKS: &[(f64, Category)] = &[
    (1.5, Category::Category1),
    (2.5, Category::Category2),
    (3.5, Category::Category3),
    (4.5, Category::Category4),
];

/// Map a grade to its category. Missing, zero and NaN grades are `Unknown`.
pub fn classify(grade: Option<f64>) -> Category {
    let Some(x) = grade else { return Category::Unknown };
    if x == 0.0 || x.is_nan() { return Category::Unknown }

    for &(hi, category) in BREAKS {
        if x < hi { return category }
    }
    Category::Category5
}
