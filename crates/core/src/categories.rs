//! Furniture categories the intake flow knows about.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A recognized furniture category.
///
/// The declaration order is the detection order: when a message mentions
/// several categories, the one listed first here wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Chair,
    Table,
    Sofa,
    Desk,
    Bed,
    Dresser,
}

impl Category {
    /// All categories in detection order.
    pub const ALL: [Category; 6] = [
        Category::Chair,
        Category::Table,
        Category::Sofa,
        Category::Desk,
        Category::Bed,
        Category::Dresser,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Chair => "chair",
            Category::Table => "table",
            Category::Sofa => "sofa",
            Category::Desk => "desk",
            Category::Bed => "bed",
            Category::Dresser => "dresser",
        }
    }

    /// Whether forms for this category ask for a seat count.
    pub fn has_seats(&self) -> bool {
        matches!(self, Category::Chair | Category::Sofa | Category::Bed)
    }

    /// The categories joined for display, e.g. `"chair / table / ..."`.
    pub fn display_list() -> String {
        Self::ALL
            .iter()
            .map(Category::as_str)
            .collect::<Vec<_>>()
            .join(" / ")
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    /// Case-insensitive, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| format!("Unknown category: {}", s))
    }
}
