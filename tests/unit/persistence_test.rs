//! Unit tests for vector history persistence.

use rustour::intelligence::store::VectorStore;
use rustour::intelligence::vector::TelemetryVector;
use rustour::{RouteDifficulty, RouteIntelligenceEngine, RouteMetadata, TripSummary};

fn recorded(route_name: &str) -> TelemetryVector {
    let route = RouteMetadata::new("r-1", route_name, 60.0, RouteDifficulty::Intermediate);
    let trip = TripSummary::new(60.0, 3600.0, 55.0, 105.0)
        .with_elevation(200.0, vec![120.0, 180.0, 140.0]);
    TelemetryVector::from_trip(&route, &trip, None)
}

#[test]
fn test_save_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");

    let mut store = VectorStore::new(path.clone());
    store.append(recorded("Alpine Run"));
    store.append(recorded("Coastal Loop"));
    store.save().unwrap();

    let reloaded = VectorStore::load(path).unwrap();
    assert_eq!(reloaded.len(), 2);
    assert_eq!(reloaded.all()[0].route_name, "Alpine Run");
    assert_eq!(reloaded.all()[1].route_name, "Coastal Loop");
    assert_eq!(reloaded.all()[0].distance_km, 60.0);
}

#[test]
fn test_missing_file_loads_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = VectorStore::load(dir.path().join("nothing_here.json")).unwrap();
    assert!(store.is_empty());
}

#[test]
fn test_corrupt_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");
    std::fs::write(&path, "not json {{{").unwrap();

    assert!(VectorStore::load(path).is_err());
}

#[test]
fn test_engine_over_corrupt_file_starts_empty_and_works() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");
    std::fs::write(&path, "not json {{{").unwrap();

    let mut engine = RouteIntelligenceEngine::open_seeded(path, 7);
    assert_eq!(engine.vectors().len(), 0);
    assert!(engine.clusters().is_empty());

    // behaves exactly like a fresh engine afterwards
    let route = RouteMetadata::new("r-1", "Alpine Run", 60.0, RouteDifficulty::Intermediate);
    let trip = TripSummary::new(60.0, 3600.0, 55.0, 105.0);
    engine.ingest(&route, &trip, None).unwrap();
    assert_eq!(engine.sample_count("Alpine Run"), 1);

    let recommendations = engine.recommend(&route, &[route.clone()], 3);
    assert!(recommendations.is_empty());
}

#[test]
fn test_engine_history_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");
    let route = RouteMetadata::new("r-1", "Alpine Run", 60.0, RouteDifficulty::Intermediate);
    let trip = TripSummary::new(60.0, 3600.0, 55.0, 105.0);

    {
        let mut engine = RouteIntelligenceEngine::open_seeded(path.clone(), 7);
        engine.ingest(&route, &trip, None).unwrap();
        engine.ingest(&route, &trip, None).unwrap();
    }

    let reopened = RouteIntelligenceEngine::open_seeded(path, 7);
    assert_eq!(reopened.vectors().len(), 2);
    assert_eq!(reopened.sample_count("Alpine Run"), 2);
}

#[test]
fn test_unknown_json_fields_are_ignored() {
    // field-tagged format stays readable when newer builds add fields
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");

    let mut store = VectorStore::new(path.clone());
    store.append(recorded("Alpine Run"));
    store.save().unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let patched = content.replacen(
        "\"route_name\"",
        "\"future_field\": 1.5, \"route_name\"",
        1,
    );
    std::fs::write(&path, patched).unwrap();

    let reloaded = VectorStore::load(path).unwrap();
    assert_eq!(reloaded.len(), 1);
}
