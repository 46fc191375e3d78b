//! Score producers against a visitor's preferences.
//!
//! The `Scorer` trait assigns a relevance score to a
//! [`Producer`](crate::Producer) given a visitor's
//! [`VisitPreferences`](crate::VisitPreferences). [`CategoryScorer`] is the
//! additive point system used by the itinerary builder.

use std::cmp::Ordering;

use crate::{Producer, VisitPreferences, distance_km};

/// Calculate a relevance score for a producer.
///
/// Higher scores indicate a better match. Implementations must be
/// thread-safe (`Send` + `Sync`), must return finite, non-negative values,
/// and must return `0.0` when nothing matches. Use [`Scorer::sanitise`] to
/// apply these guards.
///
/// # Examples
///
/// ```rust
/// use agro_core::{Producer, Scorer, VisitPreferences, lat_lng};
///
/// struct FeaturedOnly;
///
/// impl Scorer for FeaturedOnly {
///     fn score(&self, producer: &Producer, _prefs: &VisitPreferences) -> f64 {
///         if producer.featured { 1.0 } else { 0.0 }
///     }
/// }
///
/// let producer = Producer::new("p1", "Farm", lat_lng(45.0, -75.0))
///     .unwrap()
///     .with_featured(true);
/// assert_eq!(FeaturedOnly.score(&producer, &VisitPreferences::new()), 1.0);
/// ```
pub trait Scorer: Send + Sync {
    /// Return a score for `producer` according to `prefs`.
    fn score(&self, producer: &Producer, prefs: &VisitPreferences) -> f64;

    /// Floor a raw score at zero, mapping non-finite values to `0.0`.
    fn sanitise(score: f64) -> f64
    where
        Self: Sized,
    {
        if !score.is_finite() {
            return 0.0;
        }
        score.max(0.0)
    }
}

/// Point values used by [`CategoryScorer`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    /// Points per desired category the producer carries.
    pub category_match: f64,
    /// Extra points per matched category once more than one matches.
    pub multi_match_bonus: f64,
    /// Bonus for featured producers.
    pub featured_bonus: f64,
    /// Bonus for producers offering more than `activity_threshold` activities.
    pub activity_bonus: f64,
    /// Activity count that must be exceeded to earn `activity_bonus`.
    pub activity_threshold: usize,
    /// Bonus for producers open year-round.
    pub year_round_bonus: f64,
    /// Points deducted per kilometre from the visitor.
    pub distance_penalty_per_km: f64,
    /// Ceiling on the distance deduction.
    pub max_distance_penalty: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            category_match: 100.0,
            multi_match_bonus: 20.0,
            featured_bonus: 30.0,
            activity_bonus: 15.0,
            activity_threshold: 2,
            year_round_bonus: 10.0,
            distance_penalty_per_km: 2.0,
            max_distance_penalty: 100.0,
        }
    }
}

/// Additive scorer rewarding category overlap, promotion, variety of
/// activities and year-round opening, minus a capped distance penalty.
///
/// # Examples
///
/// ```rust
/// use agro_core::{CategoryScorer, Producer, Scorer, VisitPreferences, lat_lng};
///
/// let producer = Producer::new("p1", "Farm", lat_lng(45.0, -75.0))
///     .unwrap()
///     .with_categories(["fruits", "dairy", "maple"]);
/// let prefs = VisitPreferences::from_categories(["fruits", "dairy", "maple"]);
///
/// // Three matches: 300 base points plus a 3 x 20 multi-category bonus.
/// assert_eq!(CategoryScorer::default().score(&producer, &prefs), 360.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CategoryScorer {
    weights: ScoreWeights,
}

impl CategoryScorer {
    /// Construct a scorer with explicit weights.
    #[must_use]
    pub const fn with_weights(weights: ScoreWeights) -> Self {
        Self { weights }
    }

    /// The weights in use.
    #[must_use]
    pub const fn weights(&self) -> &ScoreWeights {
        &self.weights
    }
}

impl Scorer for CategoryScorer {
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        reason = "scores are additive floating-point points over small counts"
    )]
    fn score(&self, producer: &Producer, prefs: &VisitPreferences) -> f64 {
        let w = &self.weights;
        let matches = producer.matching_categories(prefs.categories()) as f64;

        let mut raw = matches * w.category_match;
        if matches > 1.0 {
            raw += matches * w.multi_match_bonus;
        }
        if producer.featured {
            raw += w.featured_bonus;
        }
        if producer.activities.len() > w.activity_threshold {
            raw += w.activity_bonus;
        }
        if producer.is_year_round() {
            raw += w.year_round_bonus;
        }
        if let Some(origin) = prefs.location() {
            let km = distance_km(origin, producer.coord());
            raw -= (km * w.distance_penalty_per_km).min(w.max_distance_penalty);
        }
        Self::sanitise(raw)
    }
}

/// A producer paired with its score for one request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredProducer<'a> {
    /// The scored producer.
    pub producer: &'a Producer,
    /// Non-negative relevance score.
    pub score: f64,
}

/// Score `producers` and order them from best to worst.
///
/// The sort is stable: producers with equal scores keep their input order.
#[must_use]
pub fn rank<'a, S, I>(scorer: &S, producers: I, prefs: &VisitPreferences) -> Vec<ScoredProducer<'a>>
where
    S: Scorer + ?Sized,
    I: IntoIterator<Item = &'a Producer>,
{
    let mut scored: Vec<ScoredProducer<'a>> = producers
        .into_iter()
        .map(|producer| ScoredProducer {
            producer,
            score: scorer.score(producer, prefs),
        })
        .collect();
    scored.sort_by(|lhs, rhs| {
        rhs.score
            .partial_cmp(&lhs.score)
            .unwrap_or(Ordering::Equal)
    });
    scored
}
