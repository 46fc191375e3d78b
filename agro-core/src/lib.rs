//! Core itinerary engine for agritourism trip planning.
//!
//! The crate turns a set of farm and artisan producers plus a visitor's
//! category preferences into a short, ordered day trip:
//!
//! - [`CategoryScorer`] ranks producers against [`VisitPreferences`].
//! - [`CategoryItineraryBuilder`] picks a bounded, category-covering set.
//! - [`NearestNeighbourSequencer`] orders the picks into a [`Route`].
//! - [`ItineraryMetrics`] estimates duration, fuel, cost and carbon.
//! - [`ItineraryState`] holds a visitor's hand-curated selection.
//!
//! Everything is synchronous and free of I/O. Constructors return `Result`
//! so invalid coordinates are rejected before they reach the algorithms.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod builder;
pub mod catalogue;
pub mod category;
pub mod distance;
pub mod metrics;
pub mod navigation;
pub mod planner;
pub mod preferences;
pub mod producer;
pub mod route;
pub mod scorer;
pub mod sequencer;
pub mod state;
#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use builder::{BuilderConfig, CategoryItineraryBuilder, DEFAULT_MAX_STOPS, ItineraryPlan};
pub use catalogue::{ProducerQuery, category_counts, nearest};
pub use category::{Category, UnknownCategory};
pub use distance::{EARTH_RADIUS_KM, distance_km, is_valid_coordinate, lat_lng};
pub use metrics::{GroupSize, ItineraryMetrics, MetricsConfig, TripMetrics};
pub use navigation::{DIRECTIONS_BASE_URL, directions_url};
pub use planner::{ItineraryPlanner, TripSummary};
pub use preferences::VisitPreferences;
pub use producer::{Contact, Location, Producer, ProducerError, Tags};
pub use route::{Route, RouteStop};
pub use scorer::{CategoryScorer, ScoreWeights, ScoredProducer, Scorer, rank};
pub use sequencer::{NearestNeighbourSequencer, Sequencer, loop_distance_km};
pub use state::{
    DEFAULT_CAPACITY, ItineraryState, LogObserver, SelectionEvent, SelectionObserver,
};
