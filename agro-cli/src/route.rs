//! Route command: sequence a hand-picked selection.

use std::io::Write;

use agro_core::{
    DEFAULT_CAPACITY, GroupSize, ItineraryPlanner, ItineraryState, LogObserver, Producer,
    TripSummary, directions_url,
};
use camino::Utf8PathBuf;
use clap::Parser;
use geo::Coord;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_DATASET, ARG_LAT, ARG_LNG, ARG_PRODUCER, CliError, ENV_ROUTE_DATASET, ENV_ROUTE_PRODUCER,
    load_producers, resolve_coordinate, write_json,
};

/// CLI arguments for the `route` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Add producers by id to an itinerary of limited capacity, \
                 in the order given, then order the accepted stops into a \
                 loop from the start point. Rejected ids are reported.",
    about = "Sequence hand-picked producers"
)]
#[ortho_config(prefix = "AGRO")]
pub(crate) struct RouteArgs {
    /// Path to the producer dataset (JSON).
    #[arg(long = ARG_DATASET, value_name = "path")]
    #[serde(default)]
    pub(crate) dataset: Option<Utf8PathBuf>,
    /// Producer id to add; repeat for several.
    #[arg(long = ARG_PRODUCER, value_name = "id")]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub(crate) producers: Vec<String>,
    /// Start latitude in degrees.
    #[arg(long = ARG_LAT, value_name = "degrees", allow_hyphen_values = true)]
    #[serde(default)]
    pub(crate) lat: Option<f64>,
    /// Start longitude in degrees.
    #[arg(long = ARG_LNG, value_name = "degrees", allow_hyphen_values = true)]
    #[serde(default)]
    pub(crate) lng: Option<f64>,
    /// Maximum number of stops (default 4).
    #[arg(long, value_name = "n")]
    #[serde(default)]
    pub(crate) capacity: Option<usize>,
    /// Stretch dwell times for a large group.
    #[arg(long)]
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub(crate) large_group: bool,
}

impl RouteArgs {
    pub(crate) fn into_config(self) -> Result<RouteConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RouteConfig::try_from(merged)
    }
}

/// Resolved `route` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RouteConfig {
    pub(crate) dataset: Utf8PathBuf,
    pub(crate) producer_ids: Vec<String>,
    pub(crate) start: Option<Coord<f64>>,
    pub(crate) capacity: usize,
    pub(crate) group: GroupSize,
}

impl TryFrom<RouteArgs> for RouteConfig {
    type Error = CliError;

    fn try_from(args: RouteArgs) -> Result<Self, Self::Error> {
        let dataset = args.dataset.ok_or(CliError::MissingArgument {
            field: ARG_DATASET,
            env: ENV_ROUTE_DATASET,
        })?;
        if args.producers.is_empty() {
            return Err(CliError::MissingArgument {
                field: ARG_PRODUCER,
                env: ENV_ROUTE_PRODUCER,
            });
        }
        let start = resolve_coordinate(args.lat, args.lng, (ARG_LAT, ARG_LNG))?;
        Ok(Self {
            dataset,
            producer_ids: args.producers,
            start,
            capacity: args.capacity.unwrap_or(DEFAULT_CAPACITY),
            group: GroupSize::from_large(args.large_group),
        })
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct RouteOutput {
    pub(crate) accepted: Vec<String>,
    pub(crate) rejected: Vec<String>,
    pub(crate) summary: TripSummary,
    pub(crate) duration: String,
    pub(crate) directions_url: Option<String>,
}

pub(crate) fn run_route(args: RouteArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let producers = load_producers(&config.dataset)?;
    let output = execute_route(&config, &producers)?;
    write_json(writer, &output)
}

pub(crate) fn execute_route(
    config: &RouteConfig,
    producers: &[Producer],
) -> Result<RouteOutput, CliError> {
    let mut state = ItineraryState::with_capacity(config.capacity).with_observer(LogObserver);
    let mut rejected = Vec::new();
    for id in &config.producer_ids {
        let producer = producers
            .iter()
            .find(|producer| &producer.id == id)
            .ok_or_else(|| CliError::UnknownProducer { id: id.clone() })?;
        if !state.add(producer.clone()) {
            rejected.push(id.clone());
        }
    }

    let summary = ItineraryPlanner::new().summarise(state.producers(), config.start, config.group);
    Ok(RouteOutput {
        accepted: state.ids().map(str::to_owned).collect(),
        rejected,
        duration: summary.metrics.duration_label(),
        directions_url: directions_url(&summary.route),
        summary,
    })
}
