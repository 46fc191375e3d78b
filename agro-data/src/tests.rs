use super::*;
use agro_core::lat_lng;
use rstest::{fixture, rstest};
use std::io::Write;
use tempfile::NamedTempFile;

#[fixture]
fn fixture_path() -> Utf8PathBuf {
    Utf8PathBuf::from(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/fixtures/producers.json"
    ))
}

fn record(id: &str, lat: f64, lng: f64, categories: &str) -> String {
    format!(
        r#"{{"id": "{id}", "name": "Farm {id}", "location": {{"lat": {lat}, "lng": {lng}}}, "categories": {categories}}}"#
    )
}

#[rstest]
fn loads_wrapped_fixture(fixture_path: Utf8PathBuf) -> Result<(), DatasetError> {
    let producers = load_dataset(&fixture_path)?;
    let ids: Vec<&str> = producers.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["orchard-hill", "creamery", "sugar-bush"]);

    let orchard = producers.first().expect("fixture has producers");
    assert!(orchard.featured);
    assert_eq!(orchard.coord(), lat_lng(45.30, -75.90));
    assert_eq!(orchard.location.region, "Ottawa Valley");
    assert_eq!(orchard.contact.email, None);
    assert!(orchard.activities.contains("u-pick"));
    Ok(())
}

#[rstest]
fn normalises_category_tags(fixture_path: Utf8PathBuf) -> Result<(), DatasetError> {
    let producers = load_dataset(&fixture_path)?;
    let creamery = producers.get(1).expect("fixture has a creamery");
    assert!(creamery.has_category("dairy"));

    // Unknown tags are kept; the loader only warns about them.
    let sugar = producers.get(2).expect("fixture has a sugar bush");
    assert!(sugar.has_category("pancakes"));
    assert!(sugar.is_year_round());
    Ok(())
}

#[rstest]
fn drops_blank_activity_tags() -> Result<(), DatasetError> {
    let text = r#"[{"id": "a", "name": "Farm a", "location": {"lat": 45.0, "lng": -75.0},
        "categories": ["fruits"], "activities": ["U-Pick", " ", "", " Tours "]}]"#;
    let producers = parse_dataset(text)?;
    let farm = producers.first().expect("one producer");
    assert_eq!(farm.activities.len(), 2);
    assert!(farm.activities.contains("u-pick"));
    assert!(farm.activities.contains("tours"));
    assert!(!farm.activities.contains(""));
    Ok(())
}

#[rstest]
fn accepts_bare_arrays() -> Result<(), DatasetError> {
    let text = format!("[{}]", record("a", 45.0, -75.0, r#"["honey"]"#));
    let producers = parse_dataset(&text)?;
    assert_eq!(producers.len(), 1);
    Ok(())
}

#[rstest]
fn reads_from_temp_file() -> Result<(), Box<dyn std::error::Error>> {
    let mut file = NamedTempFile::new()?;
    write!(file, "[{}]", record("a", 45.0, -75.0, r#"["eggs"]"#))?;
    let path = Utf8Path::from_path(file.path()).expect("temp path is UTF-8");
    let producers = load_dataset(path)?;
    assert!(producers.iter().any(|p| p.has_category("eggs")));
    Ok(())
}

#[rstest]
fn missing_file_is_a_read_error() {
    let err = load_dataset(Utf8Path::new("does/not/exist.json")).expect_err("missing file");
    assert!(matches!(err, DatasetError::Read { .. }));
}

#[rstest]
#[case::malformed("{not json", "parse")]
#[case::wrong_shape(r#"{"farms": []}"#, "shape")]
#[case::scalar("42", "shape")]
#[case::bad_field_type(r#"[{"id": 1, "name": "x", "location": {"lat": 0, "lng": 0}, "categories": ["eggs"]}]"#, "parse")]
fn rejects_malformed_documents(#[case] text: &str, #[case] kind: &str) {
    let err = parse_dataset(text).expect_err("document should be rejected");
    match kind {
        "parse" => assert!(matches!(err, DatasetError::Parse { .. }), "{err}"),
        _ => assert!(matches!(err, DatasetError::Shape), "{err}"),
    }
}

#[rstest]
fn rejects_empty_ids() {
    let text = format!(
        "[{}, {}]",
        record("a", 45.0, -75.0, r#"["eggs"]"#),
        record("  ", 45.0, -75.0, r#"["eggs"]"#)
    );
    let err = parse_dataset(&text).expect_err("blank id");
    assert!(matches!(err, DatasetError::EmptyId { index: 1 }));
}

#[rstest]
fn rejects_duplicate_ids() {
    let text = format!(
        "[{}, {}]",
        record("a", 45.0, -75.0, r#"["eggs"]"#),
        record("a", 45.1, -75.1, r#"["honey"]"#)
    );
    let err = parse_dataset(&text).expect_err("duplicate id");
    assert!(matches!(err, DatasetError::DuplicateId { ref id } if id == "a"));
}

#[rstest]
#[case::empty_list(r#"[]"#)]
#[case::blank_tags(r#"["", "  "]"#)]
fn rejects_producers_without_categories(#[case] categories: &str) {
    let text = format!("[{}]", record("a", 45.0, -75.0, categories));
    let err = parse_dataset(&text).expect_err("no categories");
    assert!(matches!(err, DatasetError::NoCategories { .. }));
}

#[rstest]
#[case(91.0, 0.0)]
#[case(0.0, -180.5)]
fn rejects_out_of_range_coordinates(#[case] lat: f64, #[case] lng: f64) {
    let text = format!("[{}]", record("a", lat, lng, r#"["eggs"]"#));
    let err = parse_dataset(&text).expect_err("bad coordinate");
    assert!(matches!(
        err,
        DatasetError::InvalidProducer {
            source: ProducerError::InvalidCoordinate { .. },
            ..
        }
    ));
}
