//! Route intelligence engine facade.
//!
//! One engine instance owns the vector store, the cluster cache, and the
//! clustering RNG. The hosting application constructs it once at startup
//! and passes it by reference to all call sites; there is no ambient
//! global state. All operations run on one logical thread of control.

use std::path::PathBuf;

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::aggregate;
use super::clustering::{self, RouteCluster};
use super::insights::RidingStyle;
use super::quality::{self, RouteQualityScore};
use super::recommend::{self, RouteRecommendation};
use super::store::{StoreError, VectorStore};
use super::vector::TelemetryVector;
use crate::routes::types::RouteMetadata;
use crate::telemetry::types::{TelemetrySnapshot, TripSummary};

/// The route telemetry intelligence engine.
///
/// Ingestion is the only write path; quality and recommendation queries
/// read the store at call time and never block on clustering.
pub struct RouteIntelligenceEngine {
    store: VectorStore,
    clusters: Vec<RouteCluster>,
    rng: StdRng,
}

impl RouteIntelligenceEngine {
    /// Open the engine over the vector history at `path`.
    ///
    /// An unreadable history is logged and replaced with an empty store;
    /// the engine stays usable with zero history. Cluster membership
    /// varies run to run because the clustering seed comes from entropy.
    pub fn open(path: PathBuf) -> Self {
        Self::with_rng(path, StdRng::from_entropy())
    }

    /// Open with a fixed clustering seed, for reproducible cluster output.
    pub fn open_seeded(path: PathBuf, seed: u64) -> Self {
        Self::with_rng(path, StdRng::seed_from_u64(seed))
    }

    fn with_rng(path: PathBuf, rng: StdRng) -> Self {
        let store = match VectorStore::load(path.clone()) {
            Ok(store) => store,
            Err(e) => {
                tracing::warn!("Telemetry history unreadable, starting empty: {}", e);
                VectorStore::new(path)
            }
        };

        let mut engine = Self {
            store,
            clusters: Vec::new(),
            rng,
        };
        engine.clusters = clustering::recompute_clusters(engine.store.all(), &mut engine.rng);
        engine
    }

    /// Record a completed ride and refresh the clustering.
    ///
    /// The vector is appended and clusters are recomputed even when
    /// persisting the history fails; the error is returned so the caller
    /// can surface it, and the ride stays queryable in the running engine.
    pub fn ingest(
        &mut self,
        route: &RouteMetadata,
        trip: &TripSummary,
        snapshot: Option<&TelemetrySnapshot>,
    ) -> Result<TelemetryVector, StoreError> {
        let vector = TelemetryVector::from_trip(route, trip, snapshot);
        self.store.append(vector.clone());
        self.clusters = clustering::recompute_clusters(self.store.all(), &mut self.rng);
        tracing::info!(
            "Recorded ride on {} ({} rides total, {} clusters)",
            vector.route_name,
            self.store.len(),
            self.clusters.len()
        );

        self.store.save()?;
        Ok(vector)
    }

    /// Quality score for a route, from its recorded history or the
    /// synthetic fallback.
    pub fn route_quality(&self, route: &RouteMetadata) -> RouteQualityScore {
        quality::route_quality(self.store.all(), route)
    }

    /// Rank `candidates` by riding-character similarity to `reference`.
    pub fn recommend(
        &self,
        reference: &RouteMetadata,
        candidates: &[RouteMetadata],
        limit: usize,
    ) -> Vec<RouteRecommendation> {
        recommend::recommend(self.store.all(), reference, candidates, limit)
    }

    /// Cluster list from the last recompute; empty below the minimum
    /// history size.
    pub fn clusters(&self) -> &[RouteCluster] {
        &self.clusters
    }

    /// Riding style shown by a route's representative telemetry.
    pub fn riding_style(&self, route: &RouteMetadata) -> RidingStyle {
        let representative = aggregate::representative_vector(self.store.all(), &route.name)
            .unwrap_or_else(|| aggregate::synthetic_vector(route));
        RidingStyle::classify(&representative)
    }

    /// Count of recorded rides for a route name.
    pub fn sample_count(&self, route_name: &str) -> usize {
        aggregate::sample_count(self.store.all(), route_name)
    }

    /// Read-only snapshot of the full recorded history.
    pub fn vectors(&self) -> &[TelemetryVector] {
        self.store.all()
    }

    /// Rewrite the history file from the in-memory store.
    pub fn save(&self) -> Result<(), StoreError> {
        self.store.save()
    }
}
