//! Wire records for the producer dataset.
//!
//! These mirror the JSON schema one-to-one and carry no invariants; the
//! conversion into [`Producer`] is where validation happens.

use std::str::FromStr;

use agro_core::{Category, Contact, Producer, lat_lng};
use log::warn;
use serde::Deserialize;

use crate::DatasetError;

/// One producer as it appears in the dataset.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ProducerRecord {
    pub(crate) id: String,
    pub(crate) name: String,
    #[serde(default)]
    pub(crate) description: String,
    pub(crate) location: LocationRecord,
    #[serde(default)]
    pub(crate) categories: Vec<String>,
    #[serde(default)]
    pub(crate) activities: Vec<String>,
    #[serde(default)]
    pub(crate) hours: Option<String>,
    #[serde(default)]
    pub(crate) contact: Option<ContactRecord>,
    #[serde(default)]
    pub(crate) seasonal: Option<String>,
    #[serde(default)]
    pub(crate) featured: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct LocationRecord {
    pub(crate) lat: f64,
    pub(crate) lng: f64,
    #[serde(default)]
    pub(crate) address: String,
    #[serde(default)]
    pub(crate) region: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ContactRecord {
    #[serde(default)]
    pub(crate) phone: Option<String>,
    #[serde(default)]
    pub(crate) email: Option<String>,
    #[serde(default)]
    pub(crate) website: Option<String>,
}

/// Dataset wrapper form: `{ "producers": [...] }`.
#[derive(Debug, Deserialize)]
pub(crate) struct WrappedDataset {
    pub(crate) producers: Vec<ProducerRecord>,
}

impl ProducerRecord {
    /// Validate the record and convert it into a [`Producer`].
    ///
    /// Category and activity tags are trimmed and lowercased, and blank
    /// tags are dropped. Categories outside the known vocabulary are kept
    /// but logged.
    pub(crate) fn into_producer(self, index: usize) -> Result<Producer, DatasetError> {
        let id = self.id.trim().to_owned();
        if id.is_empty() {
            return Err(DatasetError::EmptyId { index });
        }
        let categories: Vec<String> = self
            .categories
            .iter()
            .map(|tag| tag.trim().to_lowercase())
            .filter(|tag| !tag.is_empty())
            .collect();
        if categories.is_empty() {
            return Err(DatasetError::NoCategories { id });
        }
        for tag in &categories {
            if Category::from_str(tag).is_err() {
                warn!("producer {id}: unknown category tag {tag:?}");
            }
        }

        let activities: Vec<String> = self
            .activities
            .iter()
            .map(|tag| tag.trim().to_lowercase())
            .filter(|tag| !tag.is_empty())
            .collect();

        let LocationRecord {
            lat,
            lng,
            address,
            region,
        } = self.location;
        let mut producer = Producer::new(id.as_str(), self.name, lat_lng(lat, lng))
            .map_err(|source| DatasetError::InvalidProducer { id, source })?
            .with_description(self.description)
            .with_address(address, region)
            .with_categories(categories)
            .with_activities(activities)
            .with_featured(self.featured);
        if let Some(hours) = self.hours {
            producer = producer.with_hours(hours);
        }
        if let Some(seasonal) = self.seasonal {
            producer = producer.with_seasonal(seasonal);
        }
        if let Some(contact) = self.contact {
            producer = producer.with_contact(Contact {
                phone: contact.phone,
                email: contact.email,
                website: contact.website,
            });
        }
        Ok(producer)
    }
}
