//! Deterministic producer fixtures shared by unit tests, behaviour tests,
//! benchmarks and downstream crates.

use geo::Coord;

use crate::{Producer, lat_lng};

/// Downtown Ottawa, the default visitor location in fixtures.
pub const OTTAWA: Coord<f64> = lat_lng(45.4215, -75.6972);

/// Build a fixture producer tagged with `categories`.
///
/// # Panics
/// Panics if `lat`/`lng` are out of range.
#[expect(clippy::expect_used, reason = "fixtures use known-valid coordinates")]
#[must_use]
pub fn producer(id: &str, lat: f64, lng: f64, categories: &[&str]) -> Producer {
    Producer::new(id, id, lat_lng(lat, lng))
        .expect("fixture coordinates are valid")
        .with_categories(categories.iter().copied())
}

/// Eight producers east of Ottawa covering the common categories.
#[must_use]
pub fn sample_producers() -> Vec<Producer> {
    vec![
        producer("orchard-hill", 45.30, -75.90, &["fruits"])
            .with_activities(["u-pick", "tastings"])
            .with_seasonal("August to October")
            .with_featured(true),
        producer("berry-patch", 45.35, -75.45, &["fruits", "preserves"])
            .with_activities(["u-pick"]),
        producer("apple-barn", 45.10, -75.30, &["fruits", "beverages"])
            .with_seasonal("Year-round"),
        producer("creamery", 45.38, -75.60, &["dairy"]).with_activities(["tours", "tastings"]),
        producer("goat-cheese", 45.20, -75.75, &["dairy"]),
        producer("sugar-bush", 45.05, -76.10, &["maple"])
            .with_activities(["tours"])
            .with_seasonal("March and April"),
        producer("hive-farm", 45.45, -75.30, &["honey"]),
        producer("bakehouse", 45.42, -75.70, &["bakery", "eggs"]).with_seasonal("year-round"),
    ]
}
