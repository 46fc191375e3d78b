//! Trip statistics derived from distance and stop count.
//!
//! Driving time assumes an average rural speed with a penalty for slower
//! country roads; each stop adds a fixed dwell time that grows for large
//! groups. Fuel, cost and carbon follow from average consumption.

/// Whether the visiting party is large enough to linger longer at stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum GroupSize {
    /// Individuals, couples and families.
    #[default]
    Standard,
    /// Groups whose dwell time is stretched by the group multiplier.
    Large,
}

impl GroupSize {
    /// Map a "large group" flag onto a group size.
    #[must_use]
    pub const fn from_large(is_large: bool) -> Self {
        if is_large { Self::Large } else { Self::Standard }
    }
}

/// Constants used to derive [`TripMetrics`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricsConfig {
    /// Fuel price in currency units per litre.
    pub fuel_price_per_liter: f64,
    /// Average consumption in litres per 100 km.
    pub liters_per_100_km: f64,
    /// Kilograms of CO2 emitted per litre of fuel.
    pub co2_kg_per_liter: f64,
    /// Average rural driving speed in km/h.
    pub average_speed_kmh: f64,
    /// Minutes spent at each stop.
    pub dwell_minutes_per_stop: f64,
    /// Multiplier applied to driving time for rural roads.
    pub rural_time_factor: f64,
    /// Multiplier applied to dwell time for large groups.
    pub large_group_dwell_factor: f64,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            fuel_price_per_liter: 1.50,
            liters_per_100_km: 9.0,
            co2_kg_per_liter: 2.3,
            average_speed_kmh: 65.0,
            dwell_minutes_per_stop: 45.0,
            rural_time_factor: 1.15,
            large_group_dwell_factor: 1.2,
        }
    }
}

/// Aggregate statistics for a trip.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TripMetrics {
    /// Distance driven, passed through unchanged.
    pub distance_km: f64,
    /// Driving plus dwell time, rounded to whole minutes.
    pub duration_minutes: u32,
    /// Fuel used in litres.
    pub fuel_liters: f64,
    /// Fuel cost rounded to two decimals.
    pub fuel_cost: f64,
    /// CO2 emitted in kilograms, rounded to one decimal.
    pub carbon_kg: f64,
}

impl TripMetrics {
    /// Render the duration as `"Xh Ym"`, or `"Ym"` under an hour.
    ///
    /// # Examples
    /// ```
    /// use agro_core::TripMetrics;
    ///
    /// let metrics = TripMetrics { duration_minutes: 241, ..TripMetrics::default() };
    /// assert_eq!(metrics.duration_label(), "4h 1m");
    /// ```
    #[expect(
        clippy::integer_division,
        clippy::integer_division_remainder_used,
        reason = "splitting minutes into hours and minutes is exact integer division"
    )]
    #[must_use]
    pub fn duration_label(&self) -> String {
        let hours = self.duration_minutes / 60;
        let minutes = self.duration_minutes % 60;
        if hours == 0 {
            format!("{minutes}m")
        } else {
            format!("{hours}h {minutes}m")
        }
    }
}

/// Derives [`TripMetrics`] from a distance, stop count and group size.
///
/// # Examples
/// ```
/// use agro_core::{GroupSize, ItineraryMetrics};
///
/// let metrics = ItineraryMetrics::default().compute(100.0, 3, GroupSize::Standard);
/// assert_eq!(metrics.duration_minutes, 241);
/// assert_eq!(metrics.fuel_liters, 9.0);
/// assert_eq!(metrics.fuel_cost, 13.5);
/// assert_eq!(metrics.carbon_kg, 20.7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ItineraryMetrics {
    config: MetricsConfig,
}

impl ItineraryMetrics {
    /// Construct a calculator with explicit constants.
    #[must_use]
    pub const fn with_config(config: MetricsConfig) -> Self {
        Self { config }
    }

    /// The constants in use.
    #[must_use]
    pub const fn config(&self) -> &MetricsConfig {
        &self.config
    }

    /// Compute trip metrics.
    ///
    /// `distance_km` must be finite and non-negative. Negative inputs are a
    /// caller bug and trip a debug assertion; they are not clamped.
    #[expect(
        clippy::float_arithmetic,
        reason = "trip metrics are floating-point physical estimates"
    )]
    #[must_use]
    pub fn compute(&self, distance_km: f64, stop_count: usize, group: GroupSize) -> TripMetrics {
        debug_assert!(
            distance_km.is_finite() && distance_km >= 0.0,
            "distance must be finite and non-negative, got {distance_km}"
        );
        let c = &self.config;

        let driving_minutes = distance_km / c.average_speed_kmh * 60.0 * c.rural_time_factor;
        let group_factor = match group {
            GroupSize::Standard => 1.0,
            GroupSize::Large => c.large_group_dwell_factor,
        };
        let dwell_minutes = count_as_f64(stop_count) * c.dwell_minutes_per_stop * group_factor;

        let fuel_liters = distance_km / 100.0 * c.liters_per_100_km;
        TripMetrics {
            distance_km,
            duration_minutes: whole_minutes(driving_minutes + dwell_minutes),
            fuel_liters,
            fuel_cost: round_to(fuel_liters * c.fuel_price_per_liter, 2),
            carbon_kg: round_to(fuel_liters * c.co2_kg_per_liter, 1),
        }
    }
}

#[expect(
    clippy::cast_precision_loss,
    reason = "stop counts are tiny and exactly representable"
)]
const fn count_as_f64(count: usize) -> f64 {
    count as f64
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "durations are rounded, non-negative and far below u32::MAX minutes"
)]
fn whole_minutes(minutes: f64) -> u32 {
    minutes.round().max(0.0) as u32
}

#[expect(
    clippy::float_arithmetic,
    reason = "decimal rounding scales by a power of ten"
)]
fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10_f64.powi(decimals);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn metrics() -> ItineraryMetrics {
        ItineraryMetrics::default()
    }

    #[rstest]
    fn reference_trip(metrics: ItineraryMetrics) {
        let trip = metrics.compute(100.0, 3, GroupSize::Standard);
        assert_eq!(trip.distance_km, 100.0);
        assert_eq!(trip.duration_minutes, 241);
        assert_eq!(trip.fuel_liters, 9.0);
        assert_eq!(trip.fuel_cost, 13.5);
        assert_eq!(trip.carbon_kg, 20.7);
    }

    #[rstest]
    fn zero_inputs_yield_zero_metrics(metrics: ItineraryMetrics) {
        let trip = metrics.compute(0.0, 0, GroupSize::Large);
        assert_eq!(trip, TripMetrics::default());
    }

    #[rstest]
    #[case(0.0, 3)]
    #[case(42.0, 0)]
    #[case(180.5, 5)]
    fn large_groups_never_shorten_trips(
        metrics: ItineraryMetrics,
        #[case] km: f64,
        #[case] stops: usize,
    ) {
        let standard = metrics.compute(km, stops, GroupSize::Standard);
        let large = metrics.compute(km, stops, GroupSize::Large);
        assert!(large.duration_minutes >= standard.duration_minutes);
        assert_eq!(large.fuel_liters, standard.fuel_liters);
    }

    #[rstest]
    fn large_group_stretches_dwell_only(metrics: ItineraryMetrics) {
        // 4 stops * 45 min * 1.2 = 216 minutes, no driving.
        let trip = metrics.compute(0.0, 4, GroupSize::Large);
        assert_eq!(trip.duration_minutes, 216);
    }

    #[rstest]
    #[case(0, "0m")]
    #[case(59, "59m")]
    #[case(60, "1h 0m")]
    #[case(241, "4h 1m")]
    fn formats_duration(#[case] minutes: u32, #[case] expected: &str) {
        let trip = TripMetrics {
            duration_minutes: minutes,
            ..TripMetrics::default()
        };
        assert_eq!(trip.duration_label(), expected);
    }

    #[rstest]
    fn group_size_from_flag() {
        assert_eq!(GroupSize::from_large(true), GroupSize::Large);
        assert_eq!(GroupSize::from_large(false), GroupSize::Standard);
    }
}
