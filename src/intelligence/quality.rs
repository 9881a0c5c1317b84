//! Route quality scoring.

use serde::{Deserialize, Serialize};

use super::aggregate;
use super::vector::{clamp01, TelemetryVector};
use crate::routes::types::RouteMetadata;

/// Quality sub-scores and overall score for a route, all in [0,1].
///
/// Computed on demand from the store contents and never persisted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RouteQualityScore {
    /// Weighted blend of the sub-scores
    pub overall: f64,
    /// Surface quality of the representative vector
    pub smoothness: f64,
    /// Sustained-pace character
    pub flow: f64,
    /// Corner density and lean usage
    pub technicality: f64,
    /// Inverse of pothole and lateral-G exposure
    pub safety: f64,
    /// Statistical reliability, saturating at 5 recorded rides
    pub data_confidence: f64,
}

/// Score a route from its representative vector, falling back to the
/// synthetic vector when no rides are recorded.
///
/// Pure function of the store contents at call time; a new ingestion is
/// reflected by the next call with no caching in between.
pub fn route_quality(vectors: &[TelemetryVector], route: &RouteMetadata) -> RouteQualityScore {
    let samples = aggregate::sample_count(vectors, &route.name);
    let representative = aggregate::representative_vector(vectors, &route.name)
        .unwrap_or_else(|| aggregate::synthetic_vector(route));

    let smoothness = representative.surface_quality;
    let flow = representative.flow_score;
    let technicality = (representative.twistiness_index + representative.lean_aggression) / 2.0;
    let safety = clamp01(
        1.0 - (representative.pothole_density * 0.7 + representative.lateral_g * 0.3),
    );
    let data_confidence = (samples as f64 / 5.0).min(1.0);

    let overall = clamp01(
        smoothness * 0.25
            + flow * 0.2
            + technicality * 0.2
            + safety * 0.25
            + data_confidence * 0.1,
    );

    RouteQualityScore {
        overall,
        smoothness,
        flow,
        technicality,
        safety,
        data_confidence,
    }
}
