//! Unit tests for the route intelligence engine facade.

use rustour::{RouteDifficulty, RouteIntelligenceEngine, RouteMetadata, TelemetrySnapshot, TripSummary};

/// Test helper: engine persisting into a fresh temp directory.
fn fresh_engine(dir: &tempfile::TempDir) -> RouteIntelligenceEngine {
    RouteIntelligenceEngine::open_seeded(dir.path().join("history.json"), 42)
}

fn route(id: &str, name: &str, difficulty: RouteDifficulty) -> RouteMetadata {
    RouteMetadata::new(id, name, 75.0, difficulty).with_highlights(4)
}

fn trip() -> TripSummary {
    TripSummary::new(75.0, 4500.0, 60.0, 115.0)
        .with_elevation(450.0, vec![300.0, 420.0, 380.0, 510.0, 470.0])
}

fn snapshot(turns: f64, surface: f64) -> TelemetrySnapshot {
    let mut snapshot = TelemetrySnapshot::placeholder();
    snapshot.turn_density_per_10km = turns;
    snapshot.average_surface_quality = surface;
    snapshot.max_lean_left = -28.0;
    snapshot.max_lean_right = 31.0;
    snapshot
}

#[test]
fn test_ingest_grows_history_and_sample_count() {
    let dir = tempfile::tempdir().unwrap();
    let mut engine = fresh_engine(&dir);
    let alpine = route("r-1", "Alpine Run", RouteDifficulty::Advanced);

    assert_eq!(engine.vectors().len(), 0);
    engine.ingest(&alpine, &trip(), Some(&snapshot(5.0, 0.85))).unwrap();
    engine.ingest(&alpine, &trip(), None).unwrap();

    assert_eq!(engine.vectors().len(), 2);
    assert_eq!(engine.sample_count("Alpine Run"), 2);
    assert_eq!(engine.sample_count("alpine run"), 0);
}

#[test]
fn test_quality_reflects_new_ingestions_immediately() {
    let dir = tempfile::tempdir().unwrap();
    let mut engine = fresh_engine(&dir);
    let alpine = route("r-1", "Alpine Run", RouteDifficulty::Advanced);

    let before = engine.route_quality(&alpine);
    assert_eq!(before.data_confidence, 0.0);

    engine.ingest(&alpine, &trip(), Some(&snapshot(5.0, 0.85))).unwrap();
    let after = engine.route_quality(&alpine);
    assert!((after.data_confidence - 0.2).abs() < 1e-9);
    assert_eq!(after.smoothness, 0.85);
}

#[test]
fn test_clusters_appear_at_six_vectors() {
    let dir = tempfile::tempdir().unwrap();
    let mut engine = fresh_engine(&dir);

    for i in 0..5 {
        let r = route(&format!("r-{i}"), &format!("Route {i}"), RouteDifficulty::Intermediate);
        engine.ingest(&r, &trip(), Some(&snapshot(3.0 + i as f64, 0.8))).unwrap();
        assert!(engine.clusters().is_empty());
    }

    let sixth = route("r-5", "Route 5", RouteDifficulty::Intermediate);
    engine.ingest(&sixth, &trip(), Some(&snapshot(7.0, 0.4))).unwrap();

    let clusters = engine.clusters();
    assert!(!clusters.is_empty());
    assert!(clusters.iter().all(|c| !c.member_route_names.is_empty()));
    let members: usize = clusters.iter().map(|c| c.member_route_names.len()).sum();
    assert_eq!(members, 6);
}

#[test]
fn test_recommendations_rank_similar_history() {
    let dir = tempfile::tempdir().unwrap();
    let mut engine = fresh_engine(&dir);

    let alpine = route("r-1", "Alpine Run", RouteDifficulty::Advanced);
    let twin = route("r-2", "Alpine Twin", RouteDifficulty::Advanced);
    let cruise = route("r-3", "Flatland Cruise", RouteDifficulty::Easy);

    engine.ingest(&alpine, &trip(), Some(&snapshot(7.0, 0.9))).unwrap();
    engine.ingest(&twin, &trip(), Some(&snapshot(6.8, 0.88))).unwrap();
    engine.ingest(&cruise, &trip(), Some(&snapshot(0.5, 0.6))).unwrap();

    let candidates = vec![alpine.clone(), twin.clone(), cruise.clone()];
    let recommendations = engine.recommend(&alpine, &candidates, 5);

    assert!(!recommendations.is_empty());
    assert!(recommendations.iter().all(|r| r.route_id != "r-1"));
    assert_eq!(recommendations[0].route_name, "Alpine Twin");
    for pair in recommendations.windows(2) {
        assert!(pair[0].similarity >= pair[1].similarity);
    }
    for r in &recommendations {
        assert!(r.similarity > 0.4 && r.similarity <= 1.0);
    }
}

#[test]
fn test_seeded_engines_cluster_identically() {
    let dir_a = tempfile::tempdir().unwrap();
    let dir_b = tempfile::tempdir().unwrap();
    let mut first = fresh_engine(&dir_a);
    let mut second = fresh_engine(&dir_b);

    for i in 0..8 {
        let r = route(&format!("r-{i}"), &format!("Route {i}"), RouteDifficulty::Intermediate);
        let s = snapshot((i % 8) as f64, 0.4 + 0.05 * i as f64);
        first.ingest(&r, &trip(), Some(&s)).unwrap();
        second.ingest(&r, &trip(), Some(&s)).unwrap();
    }

    let labels_a: Vec<_> = first.clusters().iter().map(|c| c.label.clone()).collect();
    let labels_b: Vec<_> = second.clusters().iter().map(|c| c.label.clone()).collect();
    assert_eq!(labels_a, labels_b);

    let members_a: Vec<_> =
        first.clusters().iter().map(|c| c.member_route_names.clone()).collect();
    let members_b: Vec<_> =
        second.clusters().iter().map(|c| c.member_route_names.clone()).collect();
    assert_eq!(members_a, members_b);
}

#[test]
fn test_riding_style_available_without_history() {
    let dir = tempfile::tempdir().unwrap();
    let engine = fresh_engine(&dir);
    let tour = route("r-9", "Lakeside Tour", RouteDifficulty::Easy);

    // synthetic fallback keeps the classifier total
    let _ = engine.riding_style(&tour);
}
