//! The closed category set for cataloged series.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A genre tag from the fixed, closed category set.
///
/// The presentation layer offers exactly these values as choices; records
/// arriving from the remote store may carry anything, which is why
/// `SeriesRecord::category` stays a string and membership is checked at
/// validation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Drama,
    Comedy,
    Action,
    Thriller,
    Horror,
    ScienceFiction,
    Fantasy,
    Romance,
    Documentary,
    Animation,
    Crime,
    Mystery,
    Adventure,
    Western,
    War,
    Musical,
    Biography,
    Sports,
    Family,
    Other,
}

impl Category {
    /// All recognized categories, in presentation order.
    pub const ALL: [Category; 20] = [
        Category::Drama,
        Category::Comedy,
        Category::Action,
        Category::Thriller,
        Category::Horror,
        Category::ScienceFiction,
        Category::Fantasy,
        Category::Romance,
        Category::Documentary,
        Category::Animation,
        Category::Crime,
        Category::Mystery,
        Category::Adventure,
        Category::Western,
        Category::War,
        Category::Musical,
        Category::Biography,
        Category::Sports,
        Category::Family,
        Category::Other,
    ];

    /// Fallback used when a record arrives without a usable category.
    pub const FALLBACK: Category = Category::Drama;

    /// The display/wire name of this category.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Drama => "Drama",
            Category::Comedy => "Comedy",
            Category::Action => "Action",
            Category::Thriller => "Thriller",
            Category::Horror => "Horror",
            Category::ScienceFiction => "Science-Fiction",
            Category::Fantasy => "Fantasy",
            Category::Romance => "Romance",
            Category::Documentary => "Documentary",
            Category::Animation => "Animation",
            Category::Crime => "Crime",
            Category::Mystery => "Mystery",
            Category::Adventure => "Adventure",
            Category::Western => "Western",
            Category::War => "War",
            Category::Musical => "Musical",
            Category::Biography => "Biography",
            Category::Sports => "Sports",
            Category::Family => "Family",
            Category::Other => "Other",
        }
    }

    /// Whether the given string names a recognized category.
    pub fn is_recognized(name: &str) -> bool {
        name.parse::<Category>().is_ok()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Error returned when parsing a string that is not in the category set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown category: {}", self.0)
    }
}

impl std::error::Error for UnknownCategory {}
