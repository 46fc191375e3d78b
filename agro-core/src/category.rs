//! The closed vocabulary of producer categories.
//!
//! Scoring and itinerary building operate on raw category tags so that
//! datasets can carry tags the vocabulary does not know yet. The enum is
//! used at the load boundary to flag such tags.
//!
//! # Examples
//! ```
//! use agro_core::Category;
//!
//! assert_eq!(Category::Maple.as_str(), "maple");
//! assert_eq!(Category::Dairy.to_string(), "dairy");
//! assert_eq!("Fruits".parse::<Category>(), Ok(Category::Fruits));
//! ```

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A category a producer can be listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// Market gardens and vegetable farms.
    Vegetables,
    /// Orchards, berry farms and pick-your-own fruit.
    Fruits,
    /// Cheese makers and dairies.
    Dairy,
    /// Livestock farms and butchers.
    Meat,
    /// Sugar shacks and maple syrup producers.
    Maple,
    /// Apiaries.
    Honey,
    /// Artisans and craft producers.
    Artisan,
    /// Wineries, cideries, breweries and distilleries.
    Beverages,
    /// Bakeries.
    Bakery,
    /// Egg farms.
    Eggs,
    /// Grain and flour mills.
    Grains,
    /// Flower and lavender farms.
    Flowers,
    /// Jams, pickles and other preserves.
    Preserves,
}

impl Category {
    /// Every category in the vocabulary, in declaration order.
    pub const ALL: [Self; 13] = [
        Self::Vegetables,
        Self::Fruits,
        Self::Dairy,
        Self::Meat,
        Self::Maple,
        Self::Honey,
        Self::Artisan,
        Self::Beverages,
        Self::Bakery,
        Self::Eggs,
        Self::Grains,
        Self::Flowers,
        Self::Preserves,
    ];

    /// Return the category tag as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Vegetables => "vegetables",
            Self::Fruits => "fruits",
            Self::Dairy => "dairy",
            Self::Meat => "meat",
            Self::Maple => "maple",
            Self::Honey => "honey",
            Self::Artisan => "artisan",
            Self::Beverages => "beverages",
            Self::Bakery => "bakery",
            Self::Eggs => "eggs",
            Self::Grains => "grains",
            Self::Flowers => "flowers",
            Self::Preserves => "preserves",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a tag is outside the category vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category '{tag}'")]
pub struct UnknownCategory {
    /// The tag that failed to parse.
    pub tag: String,
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| UnknownCategory { tag: s.to_owned() })
    }
}
