//! Command-line interface for browsing producers and planning farm trips.
#![forbid(unsafe_code)]

use std::io::Write;

use agro_core::{Producer, is_valid_coordinate, lat_lng};
use camino::Utf8Path;
use clap::{Parser, Subcommand};
use geo::Coord;
use serde::Serialize;

mod browse;
mod error;
mod plan;
mod route;

pub use error::CliError;

use browse::BrowseArgs;
use plan::PlanArgs;
use route::RouteArgs;

pub(crate) const ARG_DATASET: &str = "dataset";
pub(crate) const ARG_CATEGORY: &str = "category";
pub(crate) const ARG_PRODUCER: &str = "producer";
pub(crate) const ARG_LAT: &str = "lat";
pub(crate) const ARG_LNG: &str = "lng";
pub(crate) const ARG_NEAR_LAT: &str = "near-lat";
pub(crate) const ARG_NEAR_LNG: &str = "near-lng";
pub(crate) const ENV_BROWSE_DATASET: &str = "AGRO_CMDS_BROWSE_DATASET";
pub(crate) const ENV_PLAN_DATASET: &str = "AGRO_CMDS_PLAN_DATASET";
pub(crate) const ENV_PLAN_CATEGORY: &str = "AGRO_CMDS_PLAN_CATEGORIES";
pub(crate) const ENV_ROUTE_DATASET: &str = "AGRO_CMDS_ROUTE_DATASET";
pub(crate) const ENV_ROUTE_PRODUCER: &str = "AGRO_CMDS_ROUTE_PRODUCERS";

/// Run the agro CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments, configuration, the dataset or
/// output writing fail.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Command::Browse(args) => browse::run_browse(args, &mut stdout),
        Command::Plan(args) => plan::run_plan(args, &mut stdout),
        Command::Route(args) => route::run_route(args, &mut stdout),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "agro",
    about = "Browse farm producers and plan agritourism day trips",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Filter and list producers from a dataset.
    Browse(BrowseArgs),
    /// Build a category-covering itinerary automatically.
    Plan(PlanArgs),
    /// Sequence a hand-picked list of producers.
    Route(RouteArgs),
}

/// Combine optional latitude and longitude flags into a coordinate.
pub(crate) fn resolve_coordinate(
    lat: Option<f64>,
    lng: Option<f64>,
    flags: (&'static str, &'static str),
) -> Result<Option<Coord<f64>>, CliError> {
    let (lat_flag, lng_flag) = flags;
    match (lat, lng) {
        (None, None) => Ok(None),
        (Some(_), None) => Err(CliError::IncompleteCoordinate {
            present: lat_flag,
            missing: lng_flag,
        }),
        (None, Some(_)) => Err(CliError::IncompleteCoordinate {
            present: lng_flag,
            missing: lat_flag,
        }),
        (Some(lat_deg), Some(lng_deg)) => {
            let coord = lat_lng(lat_deg, lng_deg);
            if is_valid_coordinate(coord) {
                Ok(Some(coord))
            } else {
                Err(CliError::InvalidCoordinate {
                    lat: lat_deg,
                    lng: lng_deg,
                })
            }
        }
    }
}

pub(crate) fn load_producers(path: &Utf8Path) -> Result<Vec<Producer>, CliError> {
    Ok(agro_data::load_dataset(path)?)
}

pub(crate) fn write_json<T: Serialize>(writer: &mut dyn Write, value: &T) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
mod tests;
