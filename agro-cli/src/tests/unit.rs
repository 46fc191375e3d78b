//! Configuration resolution and argument parsing.

use super::*;
use crate::browse::BrowseConfig;
use crate::plan::PlanConfig;
use crate::route::RouteConfig;
use agro_core::{DEFAULT_CAPACITY, DEFAULT_MAX_STOPS, GroupSize, ProducerQuery};
use camino::Utf8PathBuf;
use rstest::rstest;

fn plan_args() -> PlanArgs {
    PlanArgs {
        dataset: Some(Utf8PathBuf::from("producers.json")),
        categories: vec!["fruits".into(), "dairy".into()],
        ..PlanArgs::default()
    }
}

#[rstest]
fn plan_requires_a_dataset() {
    let args = PlanArgs {
        dataset: None,
        ..plan_args()
    };
    let err = PlanConfig::try_from(args).expect_err("missing dataset should error");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_DATASET);
            assert_eq!(env, ENV_PLAN_DATASET);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn plan_requires_a_category() {
    let args = PlanArgs {
        categories: Vec::new(),
        ..plan_args()
    };
    let err = PlanConfig::try_from(args).expect_err("missing category should error");
    assert!(matches!(
        err,
        CliError::MissingArgument {
            field: ARG_CATEGORY,
            ..
        }
    ));
}

#[rstest]
fn plan_defaults_stop_limit_and_group() {
    let config = PlanConfig::try_from(plan_args()).expect("config should build");
    assert_eq!(config.max_stops, DEFAULT_MAX_STOPS);
    assert_eq!(config.group, GroupSize::Standard);
    assert_eq!(config.start, None);
    assert_eq!(config.categories, ["fruits", "dairy"]);
}

#[rstest]
fn plan_honours_overrides() {
    let args = PlanArgs {
        lat: Some(45.4),
        lng: Some(-75.7),
        max_stops: Some(3),
        large_group: true,
        ..plan_args()
    };
    let config = PlanConfig::try_from(args).expect("config should build");
    assert_eq!(config.max_stops, 3);
    assert_eq!(config.group, GroupSize::Large);
    assert_eq!(config.start, Some(agro_core::lat_lng(45.4, -75.7)));
}

#[rstest]
fn route_requires_producers() {
    let args = RouteArgs {
        dataset: Some(Utf8PathBuf::from("producers.json")),
        ..RouteArgs::default()
    };
    let err = RouteConfig::try_from(args).expect_err("missing producers should error");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_PRODUCER);
            assert_eq!(env, ENV_ROUTE_PRODUCER);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn route_defaults_capacity() {
    let args = RouteArgs {
        dataset: Some(Utf8PathBuf::from("producers.json")),
        producers: vec!["a".into()],
        ..RouteArgs::default()
    };
    let config = RouteConfig::try_from(args).expect("config should build");
    assert_eq!(config.capacity, DEFAULT_CAPACITY);
}

#[rstest]
fn browse_builds_query_from_flags() {
    let args = BrowseArgs {
        dataset: Some(Utf8PathBuf::from("producers.json")),
        categories: vec!["honey".into()],
        region: Some("Lanark".into()),
        featured: true,
        ..BrowseArgs::default()
    };
    let config = BrowseConfig::try_from(args).expect("config should build");
    let expected = ProducerQuery::new()
        .with_category("honey")
        .with_region("Lanark")
        .featured_only();
    assert_eq!(config.query, expected);
    assert_eq!(config.near, None);
}

#[rstest]
fn browse_requires_a_dataset() {
    let err = BrowseConfig::try_from(BrowseArgs::default()).expect_err("missing dataset");
    assert!(matches!(
        err,
        CliError::MissingArgument {
            env: ENV_BROWSE_DATASET,
            ..
        }
    ));
}

#[rstest]
#[case(Some(45.0), None, ARG_LAT)]
#[case(None, Some(-75.0), ARG_LNG)]
fn half_coordinates_are_rejected(
    #[case] lat: Option<f64>,
    #[case] lng: Option<f64>,
    #[case] present_flag: &str,
) {
    let err = resolve_coordinate(lat, lng, (ARG_LAT, ARG_LNG)).expect_err("incomplete pair");
    match err {
        CliError::IncompleteCoordinate { present, .. } => assert_eq!(present, present_flag),
        other => panic!("expected IncompleteCoordinate, found {other:?}"),
    }
}

#[rstest]
fn out_of_range_coordinates_are_rejected() {
    let err = resolve_coordinate(Some(95.0), Some(0.0), (ARG_LAT, ARG_LNG))
        .expect_err("latitude out of range");
    assert!(matches!(err, CliError::InvalidCoordinate { .. }));
}

#[rstest]
fn parses_negative_longitudes() {
    let cli = Cli::try_parse_from([
        "agro",
        "plan",
        "--dataset",
        "producers.json",
        "--category",
        "fruits",
        "--category",
        "dairy",
        "--lat",
        "45.42",
        "--lng",
        "-75.70",
        "--large-group",
    ])
    .expect("arguments should parse");
    let Command::Plan(args) = cli.command else {
        panic!("expected plan subcommand");
    };
    assert_eq!(args.categories, ["fruits", "dairy"]);
    assert_eq!(args.lng, Some(-75.70));
    assert!(args.large_group);
}

#[rstest]
fn browse_repeats_the_category_flag() {
    let category_flag = format!("--{ARG_CATEGORY}");
    let cli = Cli::try_parse_from([
        "agro",
        "browse",
        "--dataset",
        "producers.json",
        category_flag.as_str(),
        "maple",
        category_flag.as_str(),
        "honey",
    ])
    .expect("arguments should parse");
    let Command::Browse(args) = cli.command else {
        panic!("expected browse subcommand");
    };
    assert_eq!(args.categories, ["maple", "honey"]);
}
