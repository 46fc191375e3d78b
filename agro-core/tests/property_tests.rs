//! Property-based tests for the itinerary engine.
//!
//! # Invariants tested
//!
//! - **Distance:** non-negative and symmetric.
//! - **Builder:** bounded by the stop limit, id-unique, and covering every
//!   desired category that has candidates when the limit allows.
//! - **Sequencer:** visits every input exactly once with orders `1..=n`.
//! - **Metrics:** monotone in distance and stop count; large groups never
//!   shorten a trip.
//! - **State:** never exceeds capacity and never holds duplicate ids.

use std::collections::HashSet;

use agro_core::test_support::{OTTAWA, producer};
use agro_core::{
    BuilderConfig, CategoryItineraryBuilder, CategoryScorer, GroupSize, ItineraryMetrics,
    ItineraryState, NearestNeighbourSequencer, Producer, Sequencer, VisitPreferences,
    distance_km, lat_lng,
};
use geo::Coord;
use proptest::prelude::*;

const CATEGORIES: [&str; 5] = ["fruits", "dairy", "maple", "honey", "bakery"];

fn coord_strategy() -> impl Strategy<Value = Coord<f64>> {
    (-89.0_f64..89.0, -179.0_f64..179.0).prop_map(|(lat, lng)| lat_lng(lat, lng))
}

/// Producers within roughly 50 km of Ottawa, each tagged with one or two
/// categories and given a position-based id.
fn producer_set_strategy(max_count: usize) -> impl Strategy<Value = Vec<Producer>> {
    let one = (
        -0.5_f64..0.5,
        -0.5_f64..0.5,
        prop::sample::subsequence(CATEGORIES.to_vec(), 1..=2),
        any::<bool>(),
    );
    proptest::collection::vec(one, 0..=max_count).prop_map(|raw| {
        raw.into_iter()
            .enumerate()
            .map(|(idx, (dlat, dlng, categories, featured))| {
                #[expect(clippy::float_arithmetic, reason = "offsetting fixture coordinates")]
                let (lat, lng) = (OTTAWA.y + dlat, OTTAWA.x + dlng);
                producer(&format!("p{idx}"), lat, lng, &categories).with_featured(featured)
            })
            .collect()
    })
}

fn categories_strategy() -> impl Strategy<Value = Vec<&'static str>> {
    prop::sample::subsequence(CATEGORIES.to_vec(), 0..=CATEGORIES.len())
}

fn unique_ids(producers: &[Producer]) -> bool {
    let ids: HashSet<&str> = producers.iter().map(|p| p.id.as_str()).collect();
    ids.len() == producers.len()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property: distance is symmetric and non-negative.
    #[test]
    fn distance_is_symmetric(a in coord_strategy(), b in coord_strategy()) {
        let ab = distance_km(a, b);
        let ba = distance_km(b, a);
        prop_assert!(ab >= 0.0);
        #[expect(clippy::float_arithmetic, reason = "comparing within tolerance")]
        let diff = (ab - ba).abs();
        prop_assert!(diff < 1e-9, "d(a,b)={ab} d(b,a)={ba}");
    }

    /// Property: the builder respects the limit, never repeats a producer and
    /// covers each desired category that has candidates when the limit is
    /// at least the number of desired categories.
    #[test]
    fn builder_is_bounded_unique_and_covering(
        producers in producer_set_strategy(12),
        categories in categories_strategy(),
        max_stops in 0_usize..=6,
    ) {
        let builder = CategoryItineraryBuilder::with_config(
            CategoryScorer::default(),
            BuilderConfig { max_stops },
        );
        let prefs = VisitPreferences::from_categories(categories.iter().copied())
            .with_location(OTTAWA);
        let plan = builder.build(&producers, &prefs);

        prop_assert!(plan.selected.len() <= max_stops);
        prop_assert!(unique_ids(&plan.selected));
        for picked in &plan.selected {
            prop_assert!(picked.matching_categories(&categories) > 0);
        }
        if categories.len() <= max_stops {
            for category in &categories {
                let available = producers.iter().any(|p| p.has_category(category));
                let covered = plan.selected.iter().any(|p| p.has_category(category));
                prop_assert_eq!(available, covered, "category {}", category);
            }
        }
    }

    /// Property: sequencing is a permutation with consecutive stop orders.
    #[test]
    fn sequencer_visits_every_stop_once(producers in producer_set_strategy(10)) {
        let route = NearestNeighbourSequencer.sequence(&producers, OTTAWA);

        prop_assert_eq!(route.len(), producers.len());
        let orders: Vec<usize> = route.stops().iter().map(|s| s.order).collect();
        prop_assert_eq!(orders, (1..=producers.len()).collect::<Vec<_>>());
        let mut visited: Vec<&str> = route.producers().map(|p| p.id.as_str()).collect();
        let mut expected: Vec<&str> = producers.iter().map(|p| p.id.as_str()).collect();
        visited.sort_unstable();
        expected.sort_unstable();
        prop_assert_eq!(visited, expected);
        prop_assert!(route.total_distance_km() >= route.one_way_distance_km());
    }

    /// Property: metrics never decrease when distance or stops grow.
    #[test]
    fn metrics_are_monotone(
        km in 0.0_f64..2_000.0,
        extra_km in 0.0_f64..500.0,
        stops in 0_usize..10,
        large in any::<bool>(),
    ) {
        let metrics = ItineraryMetrics::default();
        let group = GroupSize::from_large(large);
        let base = metrics.compute(km, stops, group);
        #[expect(clippy::float_arithmetic, reason = "extending the trip distance")]
        let longer = metrics.compute(km + extra_km, stops, group);
        let more_stops = metrics.compute(km, stops + 1, group);

        prop_assert!(longer.duration_minutes >= base.duration_minutes);
        prop_assert!(longer.fuel_liters >= base.fuel_liters);
        prop_assert!(longer.fuel_cost >= base.fuel_cost);
        prop_assert!(longer.carbon_kg >= base.carbon_kg);
        prop_assert!(more_stops.duration_minutes >= base.duration_minutes);

        let standard = metrics.compute(km, stops, GroupSize::Standard);
        let large_group = metrics.compute(km, stops, GroupSize::Large);
        prop_assert!(large_group.duration_minutes >= standard.duration_minutes);
    }

    /// Property: any sequence of adds and removes keeps the state bounded and
    /// id-unique.
    #[test]
    fn state_stays_bounded_and_unique(
        capacity in 0_usize..6,
        ops in proptest::collection::vec((any::<bool>(), 0_usize..8), 0..40),
    ) {
        let mut state = ItineraryState::with_capacity(capacity);
        for (is_add, id) in ops {
            let id = format!("p{id}");
            if is_add {
                let was_full = !state.can_add_more();
                let was_present = state.contains(&id);
                let accepted = state.add(producer(&id, 45.0, -75.0, &["fruits"]));
                prop_assert_eq!(accepted, !was_full && !was_present);
            } else {
                state.remove(&id);
                prop_assert!(!state.contains(&id));
            }
            prop_assert!(state.len() <= capacity);
            prop_assert!(unique_ids(state.producers()));
        }
    }
}
