//! Rustour - Motorcycle Touring Companion
//!
//! The route telemetry intelligence engine behind the touring companion.
//! Converts per-ride sensor aggregates into a normalized feature space,
//! maintains an unsupervised clustering of routes by riding character,
//! scores route quality, and produces similarity-based recommendations.

pub mod export;
pub mod intelligence;
pub mod routes;
pub mod storage;
pub mod telemetry;

// Re-export commonly used types
pub use intelligence::clustering::RouteCluster;
pub use intelligence::engine::RouteIntelligenceEngine;
pub use intelligence::insights::RidingStyle;
pub use intelligence::quality::RouteQualityScore;
pub use intelligence::recommend::RouteRecommendation;
pub use intelligence::vector::TelemetryVector;
pub use routes::types::{RouteDifficulty, RouteMetadata};
pub use telemetry::types::{TelemetrySnapshot, TripSummary};
