//! Facade crate for the agritourism itinerary engine.
//!
//! This crate re-exports the core domain types and exposes the dataset
//! loader behind the `data` feature.

#![forbid(unsafe_code)]

pub use agro_core::{
    BuilderConfig, Category, CategoryItineraryBuilder, CategoryScorer, GroupSize,
    ItineraryMetrics, ItineraryPlan, ItineraryPlanner, ItineraryState, MetricsConfig,
    NearestNeighbourSequencer, Producer, ProducerError, ProducerQuery, Route, RouteStop,
    ScoreWeights, Scorer, SelectionEvent, SelectionObserver, Sequencer, TripMetrics, TripSummary,
    VisitPreferences, directions_url, distance_km, lat_lng,
};

#[cfg(feature = "data")]
pub use agro_data::{DatasetError, load_dataset, parse_dataset};
