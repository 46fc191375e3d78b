//! Visitor preferences: desired categories and an optional starting point.
//!
//! Categories keep the order the visitor chose them in, because the
//! itinerary builder covers them in that order.

use geo::Coord;

/// What a visitor is looking for.
///
/// # Examples
/// ```
/// use agro_core::{VisitPreferences, lat_lng};
///
/// let prefs = VisitPreferences::new()
///     .with_category("fruits")
///     .with_category("dairy")
///     .with_category("fruits")
///     .with_location(lat_lng(45.4215, -75.6972));
/// assert_eq!(prefs.categories(), ["fruits", "dairy"]);
/// assert!(prefs.location().is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VisitPreferences {
    categories: Vec<String>,
    location: Option<Coord<f64>>,
}

impl VisitPreferences {
    /// Construct empty preferences.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct preferences from a list of categories.
    ///
    /// Repeated categories keep their first position.
    #[must_use]
    pub fn from_categories<I, S>(categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        categories
            .into_iter()
            .fold(Self::new(), |prefs, category| prefs.with_category(category))
    }

    /// Append a desired category unless it is already present.
    pub fn add_category(&mut self, category: impl Into<String>) {
        let category = category.into();
        if !self.categories.contains(&category) {
            self.categories.push(category);
        }
    }

    /// Append a desired category while returning `self` for chaining.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.add_category(category);
        self
    }

    /// Set or clear the visitor's location.
    pub const fn set_location(&mut self, location: Option<Coord<f64>>) {
        self.location = location;
    }

    /// Set the visitor's location while returning `self` for chaining.
    #[must_use]
    pub const fn with_location(mut self, location: Coord<f64>) -> Self {
        self.location = Some(location);
        self
    }

    /// Desired categories in the order they were chosen.
    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// The visitor's location, when known.
    #[must_use]
    pub const fn location(&self) -> Option<Coord<f64>> {
        self.location
    }
}
