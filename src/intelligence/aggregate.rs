//! Per-route aggregation of the recorded vector history.
//!
//! Quality scoring and recommendations never read individual rides; they
//! read one representative vector per route, or a synthetic stand-in for
//! routes that have never been ridden.

use chrono::Utc;

use super::vector::{clamp01, TelemetryVector};
use crate::routes::types::RouteMetadata;

/// Count of recorded rides matching `route_name` exactly.
pub fn sample_count(vectors: &[TelemetryVector], route_name: &str) -> usize {
    vectors.iter().filter(|v| v.route_name == route_name).count()
}

/// Mean vector of every ride recorded under `route_name`.
///
/// Matching is exact and case-sensitive. Each raw and normalized field is
/// the arithmetic mean of the matching vectors' fields, so the feature
/// vector of the result equals the per-dimension mean of their feature
/// vectors. Returns `None` when the route has no recorded rides.
pub fn representative_vector(
    vectors: &[TelemetryVector],
    route_name: &str,
) -> Option<TelemetryVector> {
    let matches: Vec<&TelemetryVector> =
        vectors.iter().filter(|v| v.route_name == route_name).collect();
    if matches.is_empty() {
        return None;
    }

    let n = matches.len() as f64;
    let mean =
        |field: fn(&TelemetryVector) -> f64| matches.iter().map(|v| field(v)).sum::<f64>() / n;

    Some(TelemetryVector {
        route_name: route_name.to_string(),
        source_route_id: matches[0].source_route_id.clone(),
        // the mean aggregates several trips, none of which it belongs to
        trip_id: None,
        date: matches.iter().map(|v| v.date).max().unwrap_or_else(Utc::now),
        distance_km: mean(|v| v.distance_km),
        duration_seconds: mean(|v| v.duration_seconds),
        average_speed: mean(|v| v.average_speed),
        max_speed: mean(|v| v.max_speed),
        elevation_gain: mean(|v| v.elevation_gain),
        elevation_variance: mean(|v| v.elevation_variance),
        twistiness_index: mean(|v| v.twistiness_index),
        lean_aggression: mean(|v| v.lean_aggression),
        surface_quality: mean(|v| v.surface_quality),
        pothole_density: mean(|v| v.pothole_density),
        lateral_g: mean(|v| v.lateral_g),
        flow_score: mean(|v| v.flow_score),
        braking_intensity: mean(|v| v.braking_intensity),
    })
}

/// Deterministic stand-in vector for a route with no recorded rides.
///
/// Every field is a fixed function of the difficulty weight, the route
/// distance, and the highlight count, so quality scoring and
/// recommendations stay functional before the first ride. Data confidence
/// for such routes is zero.
pub fn synthetic_vector(route: &RouteMetadata) -> TelemetryVector {
    let weight = route.difficulty.weight();
    let average_speed = (80.0 * (1.0 - weight / 2.0)).max(35.0);
    let max_speed = 80.0 + (1.0 - weight) * 40.0;
    let highlight_bonus = (route.highlight_count as f64 * 0.01).min(0.2);

    TelemetryVector {
        route_name: route.name.clone(),
        source_route_id: Some(route.id.clone()),
        trip_id: None,
        date: Utc::now(),
        distance_km: route.distance_km,
        duration_seconds: route.distance_km / average_speed * 3600.0,
        average_speed,
        max_speed,
        elevation_gain: route.distance_km * weight * 12.0,
        elevation_variance: (route.distance_km * weight * 600.0).min(250_000.0),
        twistiness_index: clamp01(weight + highlight_bonus),
        lean_aggression: clamp01(weight * 0.9),
        surface_quality: clamp01(0.9 - weight * 0.3),
        pothole_density: clamp01(weight * 0.3),
        lateral_g: clamp01(0.3 + weight * 0.5),
        flow_score: clamp01(average_speed / max_speed.max(1.0)),
        braking_intensity: clamp01(0.2 + weight * 0.5),
    }
}
