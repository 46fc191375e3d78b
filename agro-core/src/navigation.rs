//! Hand-off links for an external turn-by-turn navigation service.
//!
//! The engine does not produce driving directions itself. It builds a maps
//! URL that opens the sequenced route in the visitor's navigation app.

use geo::Coord;

use crate::Route;

/// Base URL of the directions endpoint.
pub const DIRECTIONS_BASE_URL: &str = "https://www.google.com/maps/dir/?api=1";

/// Build a driving-directions URL for a round trip along `route`.
///
/// The route's start is both origin and destination; stops become
/// waypoints in visiting order. Returns `None` for an empty route.
///
/// # Examples
/// ```
/// use agro_core::{NearestNeighbourSequencer, Producer, Sequencer, directions_url, lat_lng};
///
/// # fn main() -> Result<(), agro_core::ProducerError> {
/// let stops = vec![Producer::new("p1", "Farm", lat_lng(45.1, -75.2))?];
/// let route = NearestNeighbourSequencer.sequence(&stops, lat_lng(45.0, -75.0));
/// let url = directions_url(&route).expect("route has stops");
/// assert!(url.contains("origin=45,-75"));
/// assert!(url.contains("waypoints=45.1,-75.2"));
/// # Ok(())
/// # }
/// ```
#[must_use]
pub fn directions_url(route: &Route) -> Option<String> {
    if route.is_empty() {
        return None;
    }
    let start = format_coord(route.start());
    let waypoints: Vec<String> = route
        .producers()
        .map(|producer| format_coord(producer.coord()))
        .collect();
    Some(format!(
        "{DIRECTIONS_BASE_URL}&origin={start}&destination={start}&waypoints={}&travelmode=driving",
        waypoints.join("%7C")
    ))
}

fn format_coord(coord: Coord<f64>) -> String {
    format!("{},{}", coord.y, coord.x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{NearestNeighbourSequencer, Producer, Sequencer, lat_lng};

    #[test]
    fn waypoints_follow_visiting_order() {
        let stops = vec![
            Producer::new("far", "far", lat_lng(45.3, -75.0)).expect("valid producer"),
            Producer::new("near", "near", lat_lng(45.1, -75.0)).expect("valid producer"),
        ];
        let route = NearestNeighbourSequencer.sequence(&stops, lat_lng(45.0, -75.0));
        let url = directions_url(&route).expect("route has stops");
        assert_eq!(
            url,
            "https://www.google.com/maps/dir/?api=1&origin=45,-75&destination=45,-75\
             &waypoints=45.1,-75%7C45.3,-75&travelmode=driving"
        );
    }

    #[test]
    fn empty_route_has_no_link() {
        assert!(directions_url(&Route::empty(lat_lng(45.0, -75.0))).is_none());
    }
}
