//! Agricultural producers that can be visited on an itinerary.

use std::collections::BTreeSet;

use geo::Coord;
use thiserror::Error;

use crate::distance::is_valid_coordinate;

/// Category or activity tags attached to a producer.
pub type Tags = BTreeSet<String>;

/// Where a producer can be found.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    /// Geospatial position.
    pub coord: Coord<f64>,
    /// Street address shown to visitors.
    pub address: String,
    /// Administrative or tourism region.
    pub region: String,
}

/// Optional ways to reach a producer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Contact {
    /// Telephone number.
    pub phone: Option<String>,
    /// Email address.
    pub email: Option<String>,
    /// Website URL.
    pub website: Option<String>,
}

/// A farm, orchard, sugar shack or other producer open to visitors.
///
/// # Examples
/// ```
/// use agro_core::{Producer, lat_lng};
///
/// # fn main() -> Result<(), agro_core::ProducerError> {
/// let producer = Producer::new("orchard-1", "Blue Hill Orchard", lat_lng(45.3, -75.9))?
///     .with_categories(["fruits", "beverages"])
///     .with_seasonal("Year-round cider tastings");
///
/// assert!(producer.has_category("fruits"));
/// assert!(producer.is_year_round());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Producer {
    /// Identifier, unique across a dataset.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Position, address and region.
    pub location: Location,
    /// Category tags such as `fruits` or `maple`.
    pub categories: Tags,
    /// Activity tags such as `u-pick` or `tours`.
    pub activities: Tags,
    /// Opening hours as published by the producer.
    pub hours: Option<String>,
    /// Contact details.
    pub contact: Contact,
    /// Seasonal availability, e.g. `"Year-round"` or `"June to October"`.
    pub seasonal: Option<String>,
    /// Whether the producer is promoted by the regional tourism office.
    pub featured: bool,
}

/// Errors returned by [`Producer::new`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProducerError {
    /// The identifier was empty or whitespace.
    #[error("producer id must not be empty")]
    EmptyId,
    /// The coordinate was non-finite or outside WGS84 ranges.
    #[error("producer {id} has invalid coordinate (lat {lat}, lng {lng})")]
    InvalidCoordinate {
        /// Identifier of the rejected producer.
        id: String,
        /// Latitude supplied.
        lat: f64,
        /// Longitude supplied.
        lng: f64,
    },
}

impl Producer {
    /// Validate and construct a producer with no tags.
    ///
    /// # Errors
    /// Returns [`ProducerError::EmptyId`] for a blank identifier and
    /// [`ProducerError::InvalidCoordinate`] when the position is not a
    /// finite WGS84 coordinate.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        coord: Coord<f64>,
    ) -> Result<Self, ProducerError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ProducerError::EmptyId);
        }
        if !is_valid_coordinate(coord) {
            return Err(ProducerError::InvalidCoordinate {
                id,
                lat: coord.y,
                lng: coord.x,
            });
        }
        Ok(Self {
            id,
            name: name.into(),
            description: String::new(),
            location: Location {
                coord,
                ..Location::default()
            },
            categories: Tags::new(),
            activities: Tags::new(),
            hours: None,
            contact: Contact::default(),
            seasonal: None,
            featured: false,
        })
    }

    /// Replace the category tags.
    #[must_use]
    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the activity tags.
    #[must_use]
    pub fn with_activities<I, S>(mut self, activities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.activities = activities.into_iter().map(Into::into).collect();
        self
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the street address and region.
    #[must_use]
    pub fn with_address(mut self, address: impl Into<String>, region: impl Into<String>) -> Self {
        self.location.address = address.into();
        self.location.region = region.into();
        self
    }

    /// Set the published opening hours.
    #[must_use]
    pub fn with_hours(mut self, hours: impl Into<String>) -> Self {
        self.hours = Some(hours.into());
        self
    }

    /// Set the contact details.
    #[must_use]
    pub fn with_contact(mut self, contact: Contact) -> Self {
        self.contact = contact;
        self
    }

    /// Set the seasonal availability descriptor.
    #[must_use]
    pub fn with_seasonal(mut self, seasonal: impl Into<String>) -> Self {
        self.seasonal = Some(seasonal.into());
        self
    }

    /// Mark the producer as featured or not.
    #[must_use]
    pub const fn with_featured(mut self, featured: bool) -> Self {
        self.featured = featured;
        self
    }

    /// The producer's position.
    #[must_use]
    pub const fn coord(&self) -> Coord<f64> {
        self.location.coord
    }

    /// Report whether the producer carries `category`.
    #[must_use]
    pub fn has_category(&self, category: &str) -> bool {
        self.categories.contains(category)
    }

    /// Count how many of `desired` the producer carries.
    ///
    /// Each distinct desired tag counts once.
    #[must_use]
    pub fn matching_categories<S: AsRef<str>>(&self, desired: &[S]) -> usize {
        let wanted: BTreeSet<&str> = desired.iter().map(AsRef::as_ref).collect();
        wanted
            .into_iter()
            .filter(|category| self.has_category(category))
            .count()
    }

    /// Report whether the producer is open all year.
    ///
    /// Matches `year-round` anywhere in the seasonal descriptor, ignoring
    /// case.
    #[must_use]
    pub fn is_year_round(&self) -> bool {
        self.seasonal
            .as_deref()
            .is_some_and(|text| text.to_lowercase().contains("year-round"))
    }
}
