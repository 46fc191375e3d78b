//! Trip summaries: a sequenced route plus its metrics.

use geo::Coord;

use crate::{
    GroupSize, ItineraryMetrics, NearestNeighbourSequencer, Producer, Route, Sequencer,
    TripMetrics,
};

/// A sequenced route with round-trip statistics.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TripSummary {
    /// Stops in visiting order.
    pub route: Route,
    /// Kilometres from the start to the last stop.
    pub one_way_distance_km: f64,
    /// Kilometres including the return to the start.
    pub round_trip_distance_km: f64,
    /// Metrics for the round trip.
    pub metrics: TripMetrics,
}

/// Sequences a selection and derives its metrics.
///
/// # Examples
/// ```
/// use agro_core::{GroupSize, ItineraryPlanner, Producer, lat_lng};
///
/// # fn main() -> Result<(), agro_core::ProducerError> {
/// let stops = vec![Producer::new("p1", "Farm", lat_lng(45.1, -75.0))?];
/// let summary = ItineraryPlanner::new().summarise(&stops, Some(lat_lng(45.0, -75.0)), GroupSize::Standard);
///
/// assert_eq!(summary.route.len(), 1);
/// assert!(summary.round_trip_distance_km > summary.one_way_distance_km);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ItineraryPlanner<Q = NearestNeighbourSequencer>
where
    Q: Sequencer,
{
    sequencer: Q,
    metrics: ItineraryMetrics,
}

impl ItineraryPlanner<NearestNeighbourSequencer> {
    /// Construct a planner with the nearest-neighbour sequencer and default
    /// metrics.
    #[must_use]
    pub fn new() -> Self {
        Self::with_parts(NearestNeighbourSequencer, ItineraryMetrics::default())
    }
}

impl Default for ItineraryPlanner<NearestNeighbourSequencer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Q> ItineraryPlanner<Q>
where
    Q: Sequencer,
{
    /// Construct a planner from explicit parts.
    #[must_use]
    pub const fn with_parts(sequencer: Q, metrics: ItineraryMetrics) -> Self {
        Self { sequencer, metrics }
    }

    /// Sequence `selection` from `start` and compute round-trip metrics.
    ///
    /// Without a start the first selected producer is the origin. An empty
    /// selection without a start yields an empty route at the null island
    /// coordinate and zero metrics.
    #[must_use]
    pub fn summarise(
        &self,
        selection: &[Producer],
        start: Option<Coord<f64>>,
        group: GroupSize,
    ) -> TripSummary {
        let origin = start
            .or_else(|| selection.first().map(Producer::coord))
            .unwrap_or_default();
        let route = self.sequencer.sequence(selection, origin);
        let one_way_distance_km = route.one_way_distance_km();
        let round_trip_distance_km = route.total_distance_km();
        let metrics = self
            .metrics
            .compute(round_trip_distance_km, route.len(), group);
        TripSummary {
            route,
            one_way_distance_km,
            round_trip_distance_km,
            metrics,
        }
    }
}
