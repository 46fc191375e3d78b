//! Error types emitted by the agro CLI.
//!
//! Keep this error type reasonably small, as every subcommand returns
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use agro_data::DatasetError;
use thiserror::Error;

/// Errors emitted by the agro CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Flag name without the leading dashes.
        field: &'static str,
        /// Environment variable that can supply the value.
        env: &'static str,
    },
    /// Only one half of a latitude/longitude pair was supplied.
    #[error("--{present} requires --{missing}")]
    IncompleteCoordinate {
        /// Flag that was supplied.
        present: &'static str,
        /// Flag that is missing.
        missing: &'static str,
    },
    /// A coordinate was outside the valid range.
    #[error("coordinate ({lat}, {lng}) is out of range")]
    InvalidCoordinate {
        /// Latitude in degrees.
        lat: f64,
        /// Longitude in degrees.
        lng: f64,
    },
    /// Loading the producer dataset failed.
    #[error(transparent)]
    Dataset(#[from] DatasetError),
    /// A requested producer id is not in the dataset.
    #[error("producer {id:?} is not in the dataset")]
    UnknownProducer {
        /// The requested id.
        id: String,
    },
    /// Serialising command output failed.
    #[error("failed to serialise output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
