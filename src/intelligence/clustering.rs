//! Unsupervised clustering of the recorded vector history.
//!
//! Rides are regrouped by k-means after every ingestion once enough history
//! exists. Clusters are full snapshots: membership is recomputed from
//! scratch each time and carries no identity across recomputes.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::vector::{TelemetryVector, FEATURE_DIMENSIONS};

/// Clustering is disabled below this many recorded vectors.
pub const MIN_VECTORS_FOR_CLUSTERING: usize = 6;

/// Fixed Lloyd iteration count; termination needs no convergence check.
const KMEANS_ITERATIONS: usize = 8;

// Feature-space dimensions read by cluster labeling.
const DIM_TWISTINESS: usize = 1;
const DIM_SURFACE: usize = 3;
const DIM_FLOW: usize = 7;
const DIM_BRAKING: usize = 8;

/// One group of rides with similar riding character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteCluster {
    /// Partition index within the latest recompute
    pub id: usize,
    /// Descriptive label derived from the centroid
    pub label: String,
    /// Cluster centroid in the normalized feature space
    pub centroid: [f64; FEATURE_DIMENSIONS],
    /// Route names of the member rides; duplicates mean repeat rides
    pub member_route_names: Vec<String>,
}

/// Regroup the full vector history into k clusters.
///
/// Returns an empty list below [`MIN_VECTORS_FOR_CLUSTERING`] vectors.
/// k = clamp(n / 6, 2, 6). Centroids are seeded from vectors sampled
/// without replacement through `rng`, so membership varies run to run
/// unless the caller pins the seed. A centroid that loses all members
/// retains its previous position and emits no cluster.
pub fn recompute_clusters<R: Rng>(
    vectors: &[TelemetryVector],
    rng: &mut R,
) -> Vec<RouteCluster> {
    if vectors.len() < MIN_VECTORS_FOR_CLUSTERING {
        return Vec::new();
    }

    let features: Vec<[f64; FEATURE_DIMENSIONS]> =
        vectors.iter().map(|v| v.feature_vector()).collect();
    let k = (vectors.len() / MIN_VECTORS_FOR_CLUSTERING).clamp(2, 6);

    let mut centroids: Vec<[f64; FEATURE_DIMENSIONS]> =
        features.choose_multiple(rng, k).copied().collect();
    let mut assignments = vec![0usize; features.len()];

    for _ in 0..KMEANS_ITERATIONS {
        for (i, feature) in features.iter().enumerate() {
            assignments[i] = nearest_centroid(feature, &centroids);
        }

        for (cluster, centroid) in centroids.iter_mut().enumerate() {
            let mut mean = [0.0; FEATURE_DIMENSIONS];
            let mut members = 0usize;
            for (feature, &assigned) in features.iter().zip(&assignments) {
                if assigned != cluster {
                    continue;
                }
                for (dimension, value) in feature.iter().enumerate() {
                    mean[dimension] += value;
                }
                members += 1;
            }
            if members == 0 {
                continue;
            }
            for value in mean.iter_mut() {
                *value /= members as f64;
            }
            *centroid = mean;
        }
    }

    let mut clusters = Vec::new();
    for (cluster, centroid) in centroids.iter().enumerate() {
        let member_route_names: Vec<String> = vectors
            .iter()
            .zip(&assignments)
            .filter(|(_, &assigned)| assigned == cluster)
            .map(|(v, _)| v.route_name.clone())
            .collect();
        if member_route_names.is_empty() {
            continue;
        }
        clusters.push(RouteCluster {
            id: cluster,
            label: label_for(centroid),
            centroid: *centroid,
            member_route_names,
        });
    }
    clusters
}

/// Index of the centroid closest to `feature` by squared Euclidean distance.
fn nearest_centroid(
    feature: &[f64; FEATURE_DIMENSIONS],
    centroids: &[[f64; FEATURE_DIMENSIONS]],
) -> usize {
    let mut best = 0;
    let mut best_distance = f64::MAX;
    for (i, centroid) in centroids.iter().enumerate() {
        let distance = squared_distance(feature, centroid);
        if distance < best_distance {
            best_distance = distance;
            best = i;
        }
    }
    best
}

fn squared_distance(a: &[f64; FEATURE_DIMENSIONS], b: &[f64; FEATURE_DIMENSIONS]) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| (x - y) * (x - y)).sum()
}

/// Descriptive label from the centroid's riding-character dimensions.
/// Rules are checked in order; first match wins.
fn label_for(centroid: &[f64; FEATURE_DIMENSIONS]) -> String {
    let twistiness = centroid[DIM_TWISTINESS];
    let surface = centroid[DIM_SURFACE];
    let flow = centroid[DIM_FLOW];
    let braking = centroid[DIM_BRAKING];

    if twistiness > 0.7 && surface > 0.6 {
        "High-grip twisties"
    } else if twistiness > 0.7 && braking > 0.6 {
        "Technical mountain"
    } else if surface > 0.8 && flow > 0.6 {
        "Silky fast sweepers"
    } else if surface < 0.5 && braking > 0.5 {
        "Rugged adventure"
    } else {
        "Balanced explorer"
    }
    .to_string()
}
