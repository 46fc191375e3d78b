//! Ordering selected producers into a drivable route.
//!
//! [`NearestNeighbourSequencer`] repeatedly drives to the closest unvisited
//! producer. It is greedy and makes no optimality claim; itineraries hold a
//! handful of stops, where the heuristic's simplicity outweighs exhaustive
//! search.

use geo::Coord;
use log::debug;

use crate::{Producer, Route, RouteStop, distance_km};

/// Order producers into a route starting at `start`.
///
/// Implementations must return every input producer exactly once, with
/// `order` values running `1..=n`.
pub trait Sequencer: Send + Sync {
    /// Sequence `stops` into a route beginning at `start`.
    fn sequence(&self, stops: &[Producer], start: Coord<f64>) -> Route;
}

/// Greedy nearest-neighbour sequencer.
///
/// Exact distance ties go to the producer that appears first in the input.
///
/// # Examples
/// ```
/// use agro_core::{NearestNeighbourSequencer, Producer, Sequencer, lat_lng};
///
/// # fn main() -> Result<(), agro_core::ProducerError> {
/// let far = Producer::new("far", "Far Farm", lat_lng(45.0, -75.2))?;
/// let near = Producer::new("near", "Near Farm", lat_lng(45.0, -75.1))?;
///
/// let route = NearestNeighbourSequencer.sequence(&[far, near], lat_lng(45.0, -75.0));
/// let ids: Vec<&str> = route.producers().map(|p| p.id.as_str()).collect();
/// assert_eq!(ids, ["near", "far"]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct NearestNeighbourSequencer;

impl Sequencer for NearestNeighbourSequencer {
    fn sequence(&self, stops: &[Producer], start: Coord<f64>) -> Route {
        let mut remaining: Vec<&Producer> = stops.iter().collect();
        let mut ordered = Vec::with_capacity(stops.len());
        let mut current = start;

        while let Some((index, km)) = closest(&remaining, current) {
            let producer = remaining.remove(index);
            debug!("leg {}: {} at {km:.2} km", ordered.len() + 1, producer.id);
            current = producer.coord();
            ordered.push(RouteStop {
                producer: producer.clone(),
                order: ordered.len() + 1,
                distance_from_previous_km: km,
            });
        }

        let return_leg_km = if ordered.is_empty() {
            0.0
        } else {
            distance_km(current, start)
        };
        Route::new(start, ordered, return_leg_km)
    }
}

/// Index and distance of the closest producer, first occurrence on ties.
fn closest(candidates: &[&Producer], from: Coord<f64>) -> Option<(usize, f64)> {
    candidates
        .iter()
        .map(|producer| distance_km(from, producer.coord()))
        .enumerate()
        .fold(None, |best, (index, km)| match best {
            Some((_, best_km)) if best_km <= km => best,
            _ => Some((index, km)),
        })
}

/// Round-trip kilometres for producers visited in the given order.
///
/// Sums each leg from `start` through `ordered` and back to `start`. An
/// empty slice is zero kilometres.
#[expect(
    clippy::float_arithmetic,
    reason = "route lengths are summed in floating-point kilometres"
)]
#[must_use]
pub fn loop_distance_km(ordered: &[Producer], start: Coord<f64>) -> f64 {
    let mut total = 0.0;
    let mut current = start;
    for producer in ordered {
        total += distance_km(current, producer.coord());
        current = producer.coord();
    }
    total + distance_km(current, start)
}
