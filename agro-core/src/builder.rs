//! Category-driven itinerary building.
//!
//! The builder scores every producer that carries at least one desired
//! category, guarantees each desired category a stop when one is
//! available (the coverage pass), then fills the remaining slots with the
//! best-scoring producers left over.

use std::collections::{BTreeMap, HashSet};

use log::debug;

use crate::scorer::{ScoredProducer, rank};
use crate::{CategoryScorer, Producer, Scorer, VisitPreferences, distance_km};

/// Default number of stops the category builder selects.
pub const DEFAULT_MAX_STOPS: usize = 5;

/// Configuration for [`CategoryItineraryBuilder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuilderConfig {
    /// Upper bound on selected producers.
    pub max_stops: usize,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            max_stops: DEFAULT_MAX_STOPS,
        }
    }
}

/// Result of a category build.
///
/// `selected` never contains the same producer id twice and never exceeds
/// the configured maximum.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItineraryPlan {
    /// Chosen producers, coverage picks first, then by score.
    pub selected: Vec<Producer>,
    /// Human-readable explanation of the selection.
    pub reasoning: String,
    /// Number of selected producers carrying each desired category.
    pub category_breakdown: BTreeMap<String, usize>,
}

impl ItineraryPlan {
    /// Report whether no producers were selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}

/// Greedy builder that covers every desired category, then fills by score.
///
/// # Examples
/// ```
/// use agro_core::{CategoryItineraryBuilder, Producer, VisitPreferences, lat_lng};
///
/// # fn main() -> Result<(), agro_core::ProducerError> {
/// let producers = vec![
///     Producer::new("o1", "Orchard", lat_lng(45.30, -75.90))?.with_categories(["fruits"]),
///     Producer::new("d1", "Dairy", lat_lng(45.35, -75.80))?.with_categories(["dairy"]),
/// ];
/// let prefs = VisitPreferences::from_categories(["fruits", "dairy"]);
///
/// let plan = CategoryItineraryBuilder::new().build(&producers, &prefs);
/// assert_eq!(plan.selected.len(), 2);
/// assert_eq!(plan.category_breakdown.get("dairy"), Some(&1));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct CategoryItineraryBuilder<S = CategoryScorer>
where
    S: Scorer,
{
    scorer: S,
    config: BuilderConfig,
}

impl CategoryItineraryBuilder<CategoryScorer> {
    /// Construct a builder with the default scorer and configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(CategoryScorer::default(), BuilderConfig::default())
    }
}

impl Default for CategoryItineraryBuilder<CategoryScorer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> CategoryItineraryBuilder<S>
where
    S: Scorer,
{
    /// Construct a builder with an explicit scorer and configuration.
    #[must_use]
    pub const fn with_config(scorer: S, config: BuilderConfig) -> Self {
        Self { scorer, config }
    }

    /// The configuration in use.
    #[must_use]
    pub const fn config(&self) -> &BuilderConfig {
        &self.config
    }

    /// Select up to `max_stops` producers for the desired categories.
    ///
    /// An empty match set yields an empty plan with an explanatory
    /// reasoning string rather than an error.
    #[must_use]
    pub fn build(&self, producers: &[Producer], prefs: &VisitPreferences) -> ItineraryPlan {
        let desired = prefs.categories();
        let eligible = producers
            .iter()
            .filter(|producer| producer.matching_categories(desired) > 0);
        let ranked = rank(&self.scorer, eligible, prefs);
        if ranked.is_empty() {
            debug!("no producers carry any of {desired:?}");
            return ItineraryPlan {
                reasoning: no_match_reasoning(desired),
                ..ItineraryPlan::default()
            };
        }

        let max_stops = self.config.max_stops;
        let mut picks = Selection::with_limit(max_stops);
        for category in desired {
            if picks.is_full() {
                break;
            }
            let best = ranked
                .iter()
                .find(|candidate| {
                    !picks.contains(candidate.producer) && candidate.producer.has_category(category)
                })
                .copied();
            if let Some(candidate) = best {
                debug!(
                    "coverage pick for {category}: {} (score {})",
                    candidate.producer.id, candidate.score
                );
                picks.push(candidate);
            }
        }
        for candidate in &ranked {
            if picks.is_full() {
                break;
            }
            if !picks.contains(candidate.producer) {
                picks.push(*candidate);
            }
        }

        let selected: Vec<Producer> = picks
            .into_inner()
            .into_iter()
            .map(|candidate| candidate.producer.clone())
            .collect();
        let category_breakdown = breakdown(&selected, desired);
        let reasoning = compose_reasoning(&selected, &category_breakdown, prefs);
        ItineraryPlan {
            selected,
            reasoning,
            category_breakdown,
        }
    }
}

/// Bounded, id-unique list of picks.
struct Selection<'a> {
    limit: usize,
    ids: HashSet<&'a str>,
    picks: Vec<ScoredProducer<'a>>,
}

impl<'a> Selection<'a> {
    fn with_limit(limit: usize) -> Self {
        Self {
            limit,
            ids: HashSet::new(),
            picks: Vec::new(),
        }
    }

    fn is_full(&self) -> bool {
        self.picks.len() >= self.limit
    }

    fn contains(&self, producer: &Producer) -> bool {
        self.ids.contains(producer.id.as_str())
    }

    fn push(&mut self, candidate: ScoredProducer<'a>) {
        if !self.is_full() && self.ids.insert(candidate.producer.id.as_str()) {
            self.picks.push(candidate);
        }
    }

    fn into_inner(self) -> Vec<ScoredProducer<'a>> {
        self.picks
    }
}

fn breakdown(selected: &[Producer], desired: &[String]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for producer in selected {
        for category in desired.iter().filter(|c| producer.has_category(c)) {
            *counts.entry(category.clone()).or_insert(0) += 1;
        }
    }
    counts
}

fn no_match_reasoning(desired: &[String]) -> String {
    if desired.is_empty() {
        "no producers found: no categories were selected".to_owned()
    } else {
        format!("no producers found for {}", desired.join(", "))
    }
}

fn compose_reasoning(
    selected: &[Producer],
    counts: &BTreeMap<String, usize>,
    prefs: &VisitPreferences,
) -> String {
    if selected.is_empty() {
        return "no stops were selected because the stop limit is zero".to_owned();
    }
    let (covered, missing): (Vec<&String>, Vec<&String>) = prefs
        .categories()
        .iter()
        .partition(|category| counts.contains_key(category.as_str()));

    let noun = if selected.len() == 1 { "stop" } else { "stops" };
    let covered_list: Vec<String> = covered
        .iter()
        .map(|category| {
            let count = counts.get(category.as_str()).copied().unwrap_or_default();
            format!("{category} ({count})")
        })
        .collect();
    let mut text = format!(
        "Selected {} {noun} covering {}, ranked by category match, featured status, \
         activities and year-round availability.",
        selected.len(),
        covered_list.join(", ")
    );
    if !missing.is_empty() {
        let names: Vec<&str> = missing.iter().map(|c| c.as_str()).collect();
        text.push_str(&format!(" No room or no producers left for {}.", names.join(", ")));
    }
    if let Some(origin) = prefs.location() {
        let nearest = selected
            .iter()
            .map(|producer| distance_km(origin, producer.coord()))
            .min_by(f64::total_cmp);
        if let Some(km) = nearest {
            text.push_str(&format!(" The closest stop is {km:.1} km from your location."));
        }
    }
    text
}
