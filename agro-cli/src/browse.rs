//! Browse command: filter a dataset the way the listing page does.

use std::collections::BTreeMap;
use std::io::Write;

use agro_core::{Producer, ProducerQuery, category_counts, nearest};
use camino::Utf8PathBuf;
use clap::Parser;
use geo::Coord;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_CATEGORY, ARG_DATASET, ARG_NEAR_LAT, ARG_NEAR_LNG, CliError, ENV_BROWSE_DATASET,
    load_producers, resolve_coordinate, write_json,
};

/// CLI arguments for the `browse` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "List producers from a dataset, optionally filtered by \
                 category, region, activity, free text or featured status, \
                 and optionally ordered by distance from a point.",
    about = "Filter and list producers"
)]
#[ortho_config(prefix = "AGRO")]
pub(crate) struct BrowseArgs {
    /// Path to the producer dataset (JSON).
    #[arg(long = ARG_DATASET, value_name = "path")]
    #[serde(default)]
    pub(crate) dataset: Option<Utf8PathBuf>,
    /// Category to include; repeat to match any of several.
    #[arg(long = ARG_CATEGORY, value_name = "tag")]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub(crate) categories: Vec<String>,
    /// Region name, matched case-insensitively.
    #[arg(long, value_name = "name")]
    #[serde(default)]
    pub(crate) region: Option<String>,
    /// Activity the producer must offer (e.g. "u-pick").
    #[arg(long, value_name = "tag")]
    #[serde(default)]
    pub(crate) activity: Option<String>,
    /// Text to find in the name or description.
    #[arg(long, value_name = "text")]
    #[serde(default)]
    pub(crate) query: Option<String>,
    /// Only list featured producers.
    #[arg(long)]
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub(crate) featured: bool,
    /// Latitude to order results by distance from.
    #[arg(long = ARG_NEAR_LAT, value_name = "degrees", allow_hyphen_values = true)]
    #[serde(default)]
    pub(crate) near_lat: Option<f64>,
    /// Longitude to order results by distance from.
    #[arg(long = ARG_NEAR_LNG, value_name = "degrees", allow_hyphen_values = true)]
    #[serde(default)]
    pub(crate) near_lng: Option<f64>,
    /// Maximum number of producers to list.
    #[arg(long, value_name = "n")]
    #[serde(default)]
    pub(crate) limit: Option<usize>,
}

impl BrowseArgs {
    pub(crate) fn into_config(self) -> Result<BrowseConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        BrowseConfig::try_from(merged)
    }
}

/// Resolved `browse` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct BrowseConfig {
    pub(crate) dataset: Utf8PathBuf,
    pub(crate) query: ProducerQuery,
    pub(crate) near: Option<Coord<f64>>,
    pub(crate) limit: Option<usize>,
}

impl TryFrom<BrowseArgs> for BrowseConfig {
    type Error = CliError;

    fn try_from(args: BrowseArgs) -> Result<Self, Self::Error> {
        let dataset = args.dataset.ok_or(CliError::MissingArgument {
            field: ARG_DATASET,
            env: ENV_BROWSE_DATASET,
        })?;
        let near = resolve_coordinate(args.near_lat, args.near_lng, (ARG_NEAR_LAT, ARG_NEAR_LNG))?;

        let mut query = args
            .categories
            .into_iter()
            .fold(ProducerQuery::new(), ProducerQuery::with_category);
        if let Some(region) = args.region {
            query = query.with_region(region);
        }
        if let Some(activity) = args.activity {
            query = query.with_activity(activity);
        }
        if let Some(text) = args.query {
            query = query.with_text(text);
        }
        if args.featured {
            query = query.featured_only();
        }

        Ok(Self {
            dataset,
            query,
            near,
            limit: args.limit,
        })
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct BrowseEntry<'a> {
    #[serde(flatten)]
    pub(crate) producer: &'a Producer,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) distance_km: Option<f64>,
}

#[derive(Debug, Serialize)]
struct BrowseOutput<'a> {
    count: usize,
    category_counts: BTreeMap<String, usize>,
    producers: Vec<BrowseEntry<'a>>,
}

pub(crate) fn run_browse(args: BrowseArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let producers = load_producers(&config.dataset)?;
    let matched: Vec<Producer> = config.query.apply(&producers).cloned().collect();
    let entries = browse_entries(&matched, config.near, config.limit);
    let output = BrowseOutput {
        count: entries.len(),
        category_counts: category_counts(&matched),
        producers: entries,
    };
    write_json(writer, &output)
}

pub(crate) fn browse_entries(
    matched: &[Producer],
    near: Option<Coord<f64>>,
    limit: Option<usize>,
) -> Vec<BrowseEntry<'_>> {
    let cap = limit.unwrap_or(matched.len());
    match near {
        Some(origin) => nearest(matched, origin, cap)
            .into_iter()
            .map(|(producer, km)| BrowseEntry {
                producer,
                distance_km: Some(km),
            })
            .collect(),
        None => matched
            .iter()
            .take(cap)
            .map(|producer| BrowseEntry {
                producer,
                distance_km: None,
            })
            .collect(),
    }
}
