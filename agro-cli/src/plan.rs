//! Plan command: automatic, category-covering itineraries.

use std::io::Write;

use agro_core::{
    BuilderConfig, CategoryItineraryBuilder, CategoryScorer, DEFAULT_MAX_STOPS, GroupSize,
    ItineraryPlan, ItineraryPlanner, ItineraryState, LogObserver, Producer, TripSummary,
    VisitPreferences, directions_url,
};
use camino::Utf8PathBuf;
use clap::Parser;
use geo::Coord;
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_CATEGORY, ARG_DATASET, ARG_LAT, ARG_LNG, CliError, ENV_PLAN_CATEGORY, ENV_PLAN_DATASET,
    load_producers, resolve_coordinate, write_json,
};

/// CLI arguments for the `plan` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Pick up to --max-stops producers covering every requested \
                 category, order them into a loop from the start point and \
                 report distance, duration, fuel and carbon estimates.",
    about = "Build an itinerary from categories"
)]
#[ortho_config(prefix = "AGRO")]
pub(crate) struct PlanArgs {
    /// Path to the producer dataset (JSON).
    #[arg(long = ARG_DATASET, value_name = "path")]
    #[serde(default)]
    pub(crate) dataset: Option<Utf8PathBuf>,
    /// Category to cover; repeat for several, in priority order.
    #[arg(long = ARG_CATEGORY, value_name = "tag")]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub(crate) categories: Vec<String>,
    /// Start latitude in degrees.
    #[arg(long = ARG_LAT, value_name = "degrees", allow_hyphen_values = true)]
    #[serde(default)]
    pub(crate) lat: Option<f64>,
    /// Start longitude in degrees.
    #[arg(long = ARG_LNG, value_name = "degrees", allow_hyphen_values = true)]
    #[serde(default)]
    pub(crate) lng: Option<f64>,
    /// Maximum number of stops (default 5).
    #[arg(long, value_name = "n")]
    #[serde(default)]
    pub(crate) max_stops: Option<usize>,
    /// Stretch dwell times for a large group.
    #[arg(long)]
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub(crate) large_group: bool,
}

impl PlanArgs {
    pub(crate) fn into_config(self) -> Result<PlanConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        PlanConfig::try_from(merged)
    }
}

/// Resolved `plan` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PlanConfig {
    pub(crate) dataset: Utf8PathBuf,
    pub(crate) categories: Vec<String>,
    pub(crate) start: Option<Coord<f64>>,
    pub(crate) max_stops: usize,
    pub(crate) group: GroupSize,
}

impl TryFrom<PlanArgs> for PlanConfig {
    type Error = CliError;

    fn try_from(args: PlanArgs) -> Result<Self, Self::Error> {
        let dataset = args.dataset.ok_or(CliError::MissingArgument {
            field: ARG_DATASET,
            env: ENV_PLAN_DATASET,
        })?;
        if args.categories.is_empty() {
            return Err(CliError::MissingArgument {
                field: ARG_CATEGORY,
                env: ENV_PLAN_CATEGORY,
            });
        }
        let start = resolve_coordinate(args.lat, args.lng, (ARG_LAT, ARG_LNG))?;
        Ok(Self {
            dataset,
            categories: args.categories,
            start,
            max_stops: args.max_stops.unwrap_or(DEFAULT_MAX_STOPS),
            group: GroupSize::from_large(args.large_group),
        })
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct PlanOutput {
    pub(crate) plan: ItineraryPlan,
    pub(crate) summary: TripSummary,
    pub(crate) duration: String,
    pub(crate) directions_url: Option<String>,
}

pub(crate) fn run_plan(args: PlanArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let producers = load_producers(&config.dataset)?;
    let output = execute_plan(&config, &producers);
    write_json(writer, &output)
}

pub(crate) fn execute_plan(config: &PlanConfig, producers: &[Producer]) -> PlanOutput {
    let mut prefs = VisitPreferences::from_categories(config.categories.iter().cloned());
    prefs.set_location(config.start);
    let builder = CategoryItineraryBuilder::with_config(
        CategoryScorer::default(),
        BuilderConfig {
            max_stops: config.max_stops,
        },
    );
    let plan = builder.build(producers, &prefs);
    info!("plan: {}", plan.reasoning);

    let mut state = ItineraryState::with_capacity(config.max_stops).with_observer(LogObserver);
    state.replace_with(plan.selected.iter().cloned());
    let summary = ItineraryPlanner::new().summarise(state.producers(), config.start, config.group);
    PlanOutput {
        duration: summary.metrics.duration_label(),
        directions_url: directions_url(&summary.route),
        plan,
        summary,
    }
}
