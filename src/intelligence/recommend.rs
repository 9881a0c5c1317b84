//! Similarity-based route recommendations.

use serde::{Deserialize, Serialize};

use super::aggregate;
use super::vector::{clamp01, TelemetryVector, FEATURE_DIMENSIONS};
use crate::routes::types::RouteMetadata;

/// Candidates at or below this similarity are discarded.
const SIMILARITY_FLOOR: f64 = 0.4;

/// A recommended route with its similarity to the reference route.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteRecommendation {
    /// Stable id of the recommended route
    pub route_id: String,
    /// Display name of the recommended route
    pub route_name: String,
    /// Cosine similarity to the reference route (0-1)
    pub similarity: f64,
    /// Why this route was recommended; advisory text, never parsed
    pub rationale: String,
}

/// Rank `candidates` by riding-character similarity to `reference`.
///
/// The reference route is excluded by id, candidates with similarity at or
/// below the floor are dropped, and the remainder is sorted descending.
/// The sort is stable, so ties keep their input order.
pub fn recommend(
    vectors: &[TelemetryVector],
    reference: &RouteMetadata,
    candidates: &[RouteMetadata],
    limit: usize,
) -> Vec<RouteRecommendation> {
    let reference_vector = vector_for(vectors, reference);
    let reference_features = reference_vector.feature_vector();

    let mut recommendations: Vec<RouteRecommendation> = candidates
        .iter()
        .filter(|candidate| candidate.id != reference.id)
        .filter_map(|candidate| {
            let candidate_vector = vector_for(vectors, candidate);
            let similarity =
                cosine_similarity(&reference_features, &candidate_vector.feature_vector());
            if similarity <= SIMILARITY_FLOOR {
                return None;
            }
            Some(RouteRecommendation {
                route_id: candidate.id.clone(),
                route_name: candidate.name.clone(),
                similarity,
                rationale: rationale(&reference_vector, &candidate_vector),
            })
        })
        .collect();

    recommendations.sort_by(|a, b| {
        b.similarity
            .partial_cmp(&a.similarity)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    recommendations.truncate(limit);
    recommendations
}

/// Cosine similarity of two feature vectors, clamped to [0,1].
///
/// The clamp guards against floating-point overshoot above 1; a zero-norm
/// vector compares as 0 to everything.
pub fn cosine_similarity(
    a: &[f64; FEATURE_DIMENSIONS],
    b: &[f64; FEATURE_DIMENSIONS],
) -> f64 {
    let dot: f64 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    clamp01(dot / (norm_a * norm_b))
}

/// Representative vector of a route, or its synthetic stand-in.
fn vector_for(vectors: &[TelemetryVector], route: &RouteMetadata) -> TelemetryVector {
    aggregate::representative_vector(vectors, &route.name)
        .unwrap_or_else(|| aggregate::synthetic_vector(route))
}

/// Join the matching human-readable clauses into a rationale string.
fn rationale(reference: &TelemetryVector, candidate: &TelemetryVector) -> String {
    let mut clauses: Vec<&'static str> = Vec::new();

    if (reference.twistiness_index - candidate.twistiness_index).abs() < 0.1 {
        clauses.push("similar corner density");
    }
    if (reference.surface_quality - candidate.surface_quality).abs() < 0.15 {
        clauses.push("matching surface quality");
    }
    if (reference.elevation_variance - candidate.elevation_variance).abs() < 30_000.0 {
        clauses.push("comparable elevation profile");
    }
    if reference.flow_score > 0.6 && candidate.flow_score > 0.6 {
        clauses.push("fast flowing character");
    } else if reference.flow_score < 0.4 && candidate.flow_score < 0.4 {
        clauses.push("technical riding pace");
    }

    if clauses.is_empty() {
        "Similar overall riding character".to_string()
    } else {
        clauses.join(", ")
    }
}
