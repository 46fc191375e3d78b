//! Browsing helpers over a producer dataset.
//!
//! [`ProducerQuery`] filters producers the way the browse page does;
//! [`nearest`] orders them by distance from a point.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use geo::Coord;

use crate::{Producer, distance_km};

/// Filter over producers. Empty criteria match everything.
///
/// All criteria must hold for a producer to match. Category criteria match
/// when the producer carries any of them.
///
/// # Examples
/// ```
/// use agro_core::{Producer, ProducerQuery, lat_lng};
///
/// # fn main() -> Result<(), agro_core::ProducerError> {
/// let producers = vec![
///     Producer::new("p1", "Maple Hollow", lat_lng(45.0, -75.0))?
///         .with_categories(["maple"])
///         .with_address("1 Sugarbush Rd", "Lanark"),
///     Producer::new("p2", "Hive Farm", lat_lng(45.1, -75.1))?.with_categories(["honey"]),
/// ];
///
/// let query = ProducerQuery::new().with_category("maple").with_region("lanark");
/// let found: Vec<&str> = query.apply(&producers).map(|p| p.id.as_str()).collect();
/// assert_eq!(found, ["p1"]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProducerQuery {
    categories: Vec<String>,
    region: Option<String>,
    activity: Option<String>,
    text: Option<String>,
    featured_only: bool,
}

impl ProducerQuery {
    /// Construct a query that matches every producer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Require any of the added categories.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.categories.push(category.into());
        self
    }

    /// Require the region to match, ignoring case.
    #[must_use]
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Require the producer to offer `activity`.
    #[must_use]
    pub fn with_activity(mut self, activity: impl Into<String>) -> Self {
        self.activity = Some(activity.into());
        self
    }

    /// Require `text` in the name or description, ignoring case.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into().to_lowercase());
        self
    }

    /// Restrict results to featured producers.
    #[must_use]
    pub const fn featured_only(mut self) -> Self {
        self.featured_only = true;
        self
    }

    /// Report whether `producer` satisfies every criterion.
    #[must_use]
    pub fn matches(&self, producer: &Producer) -> bool {
        if self.featured_only && !producer.featured {
            return false;
        }
        if !self.categories.is_empty() && producer.matching_categories(&self.categories) == 0 {
            return false;
        }
        if let Some(region) = &self.region
            && !producer.location.region.eq_ignore_ascii_case(region)
        {
            return false;
        }
        if let Some(activity) = &self.activity
            && !producer.activities.contains(activity)
        {
            return false;
        }
        if let Some(text) = &self.text {
            let haystack = format!("{} {}", producer.name, producer.description).to_lowercase();
            return haystack.contains(text.as_str());
        }
        true
    }

    /// Producers matching the query, in dataset order.
    pub fn apply<'a>(&'a self, producers: &'a [Producer]) -> impl Iterator<Item = &'a Producer> {
        producers.iter().filter(|producer| self.matches(producer))
    }
}

/// Up to `limit` producers ordered by distance from `origin`.
///
/// Producers at equal distance keep their input order.
#[must_use]
pub fn nearest(producers: &[Producer], origin: Coord<f64>, limit: usize) -> Vec<(&Producer, f64)> {
    let mut by_distance: Vec<(&Producer, f64)> = producers
        .iter()
        .map(|producer| (producer, distance_km(origin, producer.coord())))
        .collect();
    by_distance.sort_by(|(_, lhs), (_, rhs)| lhs.partial_cmp(rhs).unwrap_or(Ordering::Equal));
    by_distance.truncate(limit);
    by_distance
}

/// Number of producers carrying each category tag.
#[must_use]
pub fn category_counts(producers: &[Producer]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for category in producers.iter().flat_map(|producer| &producer.categories) {
        *counts.entry(category.clone()).or_insert(0) += 1;
    }
    counts
}
