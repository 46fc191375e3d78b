//! Ordered driving routes through producers.
//!
//! A [`Route`] holds stops in visiting order together with the leg that
//! returns to the starting point.

use geo::Coord;

use crate::Producer;

/// One stop on a sequenced route.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteStop {
    /// The producer visited at this stop.
    pub producer: Producer,
    /// 1-based position in the route.
    pub order: usize,
    /// Kilometres driven from the previous stop, or from the start for the
    /// first stop.
    pub distance_from_previous_km: f64,
}

/// An ordered path from a starting point through every selected producer.
///
/// # Examples
/// ```
/// use agro_core::{Route, lat_lng};
///
/// let route = Route::empty(lat_lng(45.4215, -75.6972));
/// assert!(route.stops().is_empty());
/// assert_eq!(route.total_distance_km(), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    start: Coord<f64>,
    stops: Vec<RouteStop>,
    return_leg_km: f64,
}

impl Route {
    /// Construct a route from already-ordered stops.
    #[must_use]
    pub const fn new(start: Coord<f64>, stops: Vec<RouteStop>, return_leg_km: f64) -> Self {
        Self {
            start,
            stops,
            return_leg_km,
        }
    }

    /// Construct a route with no stops.
    #[must_use]
    pub const fn empty(start: Coord<f64>) -> Self {
        Self::new(start, Vec::new(), 0.0)
    }

    /// Where the route starts and, for round trips, ends.
    #[must_use]
    pub const fn start(&self) -> Coord<f64> {
        self.start
    }

    /// Stops in visiting order.
    #[must_use]
    pub fn stops(&self) -> &[RouteStop] {
        &self.stops
    }

    /// Number of stops.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Report whether the route visits no producers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Producers in visiting order.
    pub fn producers(&self) -> impl Iterator<Item = &Producer> {
        self.stops.iter().map(|stop| &stop.producer)
    }

    /// Kilometres from the last stop back to the start.
    #[must_use]
    pub const fn return_leg_km(&self) -> f64 {
        self.return_leg_km
    }

    /// Kilometres from the start to the last stop.
    #[must_use]
    pub fn one_way_distance_km(&self) -> f64 {
        self.stops
            .iter()
            .map(|stop| stop.distance_from_previous_km)
            .sum()
    }

    /// Round-trip kilometres, including the return leg.
    #[expect(
        clippy::float_arithmetic,
        reason = "route lengths are summed in floating-point kilometres"
    )]
    #[must_use]
    pub fn total_distance_km(&self) -> f64 {
        self.one_way_distance_km() + self.return_leg_km
    }
}
