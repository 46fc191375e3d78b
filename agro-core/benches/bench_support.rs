//! Deterministic producer generation for the itinerary benchmarks.
//!
//! Producers are clustered around a handful of rural centres east of
//! Ottawa so the builder and sequencer see realistic spreads.

use agro_core::test_support::{OTTAWA, producer};
use agro_core::{Category, Producer};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seed for deterministic random number generation in benchmarks.
pub const BENCHMARK_SEED: u64 = 42;

/// Number of cluster centres.
const CLUSTER_COUNT: usize = 6;

/// Spread around each cluster centre in degrees (about 5 km).
const CLUSTER_SPREAD: f64 = 0.05;

/// Area around Ottawa holding the cluster centres, in degrees.
const AREA_SIZE: f64 = 1.0;

/// Generate `count` producers with one or two categories each.
#[must_use]
pub fn generate_producers(count: usize, seed: u64) -> Vec<Producer> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let centres: Vec<(f64, f64)> = (0..CLUSTER_COUNT)
        .map(|_| {
            #[expect(clippy::float_arithmetic, reason = "offsetting cluster centres")]
            let centre = (
                OTTAWA.y + rng.gen_range(-AREA_SIZE..AREA_SIZE),
                OTTAWA.x + rng.gen_range(-AREA_SIZE..AREA_SIZE),
            );
            centre
        })
        .collect();

    (0..count)
        .map(|i| {
            #[expect(
                clippy::integer_division_remainder_used,
                reason = "modulo for round-robin cluster assignment is intentional"
            )]
            let (centre_lat, centre_lng) = centres
                .get(i % CLUSTER_COUNT)
                .copied()
                .unwrap_or((OTTAWA.y, OTTAWA.x));
            #[expect(clippy::float_arithmetic, reason = "jittering around the centre")]
            let (lat, lng) = (
                centre_lat + rng.gen_range(-CLUSTER_SPREAD..CLUSTER_SPREAD),
                centre_lng + rng.gen_range(-CLUSTER_SPREAD..CLUSTER_SPREAD),
            );
            let primary = pick_category(&mut rng);
            let secondary = pick_category(&mut rng);
            producer(&format!("p{i}"), lat, lng, &[primary, secondary])
                .with_featured(rng.gen_bool(0.1))
        })
        .collect()
}

fn pick_category(rng: &mut ChaCha8Rng) -> &'static str {
    let index = rng.gen_range(0..Category::ALL.len());
    Category::ALL
        .get(index)
        .map_or("vegetables", |category| category.as_str())
}
