//! Loading question content from JSON overrides.

use std::io::Write;

use readiness_assessor::assessment::{
    CatalogError, CatalogView, ContentCatalog, Framework, Locale,
};

fn standard_json() -> serde_json::Value {
    serde_json::to_value(ContentCatalog::standard()).expect("catalog serializes")
}

#[test]
fn override_file_is_loaded_and_versioned() {
    let mut json = standard_json();
    json["version"] = "2026.1-pilot".into();
    json["locales"]["english"]["irl"][0]["title"] = "Opportunity Spotted".into();

    let path = std::env::temp_dir().join(format!(
        "readiness-catalog-{}.json",
        std::process::id()
    ));
    let mut file = std::fs::File::create(&path).expect("create temp catalog");
    file.write_all(json.to_string().as_bytes())
        .expect("write temp catalog");

    let catalog = ContentCatalog::from_path(&path).expect("catalog loads");
    std::fs::remove_file(&path).ok();

    assert_eq!(catalog.version(), "2026.1-pilot");
    match catalog.view(Framework::Irl, Locale::English) {
        CatalogView::Levels(levels) => assert_eq!(levels[0].title, "Opportunity Spotted"),
        other => panic!("expected levels, got {other:?}"),
    }
}

#[test]
fn override_with_level_outside_range_is_rejected() {
    let mut json = standard_json();
    json["locales"]["filipino"]["irl"][8]["index"] = 12.into();

    let err = ContentCatalog::from_reader(json.to_string().as_bytes())
        .expect_err("range enforced");
    assert!(matches!(
        err,
        CatalogError::LevelOutOfRange {
            locale: Locale::Filipino,
            index: 12,
            ..
        }
    ));
}

#[test]
fn override_with_shuffled_pathways_is_rejected() {
    let mut json = standard_json();
    let pathways = json["locales"]["english"]["tcp"]["pathways"]
        .as_array_mut()
        .expect("pathway list");
    pathways.swap(0, 6);

    let err = ContentCatalog::from_reader(json.to_string().as_bytes())
        .expect_err("order enforced");
    assert!(matches!(err, CatalogError::PathwayOrder { .. }));
}

#[test]
fn unreadable_override_is_an_io_error() {
    let err = ContentCatalog::from_path("./missing-catalog.json").expect_err("missing file");
    assert!(matches!(err, CatalogError::Io(_)));

    let err = ContentCatalog::from_reader("{ not json".as_bytes()).expect_err("bad json");
    assert!(matches!(err, CatalogError::Parse(_)));
}
