//! Producer dataset loading for the agritourism itinerary engine.
//!
//! Responsibilities:
//! - Parse the JSON producer dataset (a bare array or `{ "producers": [...] }`).
//! - Validate records into [`agro_core::Producer`] values.
//!
//! Boundaries:
//! - Do not encode itinerary rules (live in `agro-core`).
//! - Files are opened through `cap-std` with ambient authority.
//!
//! Invariants:
//! - Every returned producer has a unique, non-empty id, a valid coordinate
//!   and at least one category.

#![forbid(unsafe_code)]

use std::collections::HashSet;
use std::io::Read;

use agro_core::{Producer, ProducerError};
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};
use log::debug;
use serde_json::Value;
use thiserror::Error;

mod record;

use record::{ProducerRecord, WrappedDataset};

/// Errors raised while loading a producer dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The dataset file could not be read.
    #[error("failed to read dataset at {path}")]
    Read {
        /// Path of the dataset file.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The text was not valid JSON or did not match the record schema.
    #[error("failed to parse dataset: {source}")]
    Parse {
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
    /// The document was neither an array nor an object with `producers`.
    #[error("dataset must be an array of producers or an object with a `producers` array")]
    Shape,
    /// A record had a blank id.
    #[error("producer record {index} has an empty id")]
    EmptyId {
        /// Zero-based position of the record.
        index: usize,
    },
    /// Two records shared an id.
    #[error("duplicate producer id {id:?}")]
    DuplicateId {
        /// The repeated id.
        id: String,
    },
    /// A record listed no categories.
    #[error("producer {id:?} has no categories")]
    NoCategories {
        /// Id of the offending record.
        id: String,
    },
    /// A record failed producer validation, typically a bad coordinate.
    #[error("producer {id:?} is invalid: {source}")]
    InvalidProducer {
        /// Id of the offending record.
        id: String,
        /// Validation failure.
        #[source]
        source: ProducerError,
    },
}

/// Load and validate the producer dataset at `path`.
///
/// # Errors
/// Returns [`DatasetError::Read`] when the file cannot be opened or read,
/// and the validation errors of [`parse_dataset`] otherwise.
pub fn load_dataset(path: &Utf8Path) -> Result<Vec<Producer>, DatasetError> {
    let read_error = |source| DatasetError::Read {
        path: path.to_path_buf(),
        source,
    };
    let mut file = fs_utf8::File::open_ambient(path, ambient_authority()).map_err(read_error)?;
    let mut text = String::new();
    file.read_to_string(&mut text).map_err(read_error)?;
    let producers = parse_dataset(&text)?;
    debug!("loaded {} producers from {path}", producers.len());
    Ok(producers)
}

/// Parse and validate producer dataset text.
///
/// # Errors
/// Returns [`DatasetError`] for malformed JSON, an unexpected document
/// shape, or the first record that fails validation.
///
/// # Examples
/// ```
/// use agro_data::parse_dataset;
///
/// # fn main() -> Result<(), agro_data::DatasetError> {
/// let producers = parse_dataset(
///     r#"[{"id": "p1", "name": "Farm", "location": {"lat": 45.0, "lng": -75.0}, "categories": ["honey"]}]"#,
/// )?;
/// assert_eq!(producers.len(), 1);
/// assert!(producers.iter().all(|p| p.has_category("honey")));
/// # Ok(())
/// # }
/// ```
pub fn parse_dataset(text: &str) -> Result<Vec<Producer>, DatasetError> {
    let document: Value =
        serde_json::from_str(text).map_err(|source| DatasetError::Parse { source })?;
    let is_wrapped = matches!(&document, Value::Object(map) if map.contains_key("producers"));
    let parsed: Result<Vec<ProducerRecord>, _> = if document.is_array() {
        serde_json::from_value(document)
    } else if is_wrapped {
        serde_json::from_value::<WrappedDataset>(document).map(|wrapped| wrapped.producers)
    } else {
        return Err(DatasetError::Shape);
    };
    let records = parsed.map_err(|source| DatasetError::Parse { source })?;

    let mut seen = HashSet::with_capacity(records.len());
    let mut producers = Vec::with_capacity(records.len());
    for (index, record) in records.into_iter().enumerate() {
        let producer = record.into_producer(index)?;
        if !seen.insert(producer.id.clone()) {
            return Err(DatasetError::DuplicateId { id: producer.id });
        }
        producers.push(producer);
    }
    Ok(producers)
}

#[cfg(test)]
mod tests;
