//! Telemetry feature vectors.
//!
//! One `TelemetryVector` is recorded per completed ride. It keeps the raw
//! trip aggregates alongside sensor-derived fields normalized into [0,1],
//! and projects both into a fixed 11-dimensional feature space shared by
//! quality scoring, recommendations, and clustering.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::routes::types::RouteMetadata;
use crate::telemetry::types::{TelemetrySnapshot, TripSummary};

/// Number of dimensions in the feature space.
pub const FEATURE_DIMENSIONS: usize = 11;

/// One recorded ride, normalized for the feature space.
///
/// Normalized fields are clamped to [0,1] here at construction time and
/// nowhere else; downstream consumers rely on that invariant instead of
/// re-clamping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryVector {
    /// Route this ride was recorded under; history is grouped by this name
    pub route_name: String,
    /// Stable catalog route id, if the ride was linked to one
    #[serde(default)]
    pub source_route_id: Option<String>,
    /// Originating trip record, if any
    #[serde(default)]
    pub trip_id: Option<Uuid>,
    /// When the vector was created
    pub date: DateTime<Utc>,

    /// Distance in kilometers
    pub distance_km: f64,
    /// Riding time in seconds
    pub duration_seconds: f64,
    /// Average speed in km/h
    pub average_speed: f64,
    /// Maximum speed in km/h
    pub max_speed: f64,
    /// Cumulative elevation gain in meters
    pub elevation_gain: f64,
    /// Population variance of the elevation samples in m^2
    pub elevation_variance: f64,

    /// Corner density, 0-1 (turns per 10 km / 8)
    pub twistiness_index: f64,
    /// Lean usage, 0-1 (combined max lean / 120 degrees)
    pub lean_aggression: f64,
    /// Surface quality, 0-1 (1 = smooth)
    pub surface_quality: f64,
    /// Pothole density, 0-1 (hits per 100 km / 25)
    pub pothole_density: f64,
    /// Lateral acceleration, 0-1 (mean g / 1.5)
    pub lateral_g: f64,
    /// Ratio of average to maximum speed, 0-1
    pub flow_score: f64,
    /// Braking intensity, 0-1
    pub braking_intensity: f64,
}

impl TelemetryVector {
    /// Build a vector from a completed trip.
    ///
    /// Total over its numeric domain: out-of-range inputs clamp to the
    /// extremes, and a missing snapshot is replaced by
    /// [`TelemetrySnapshot::placeholder`], so construction never fails.
    pub fn from_trip(
        route: &RouteMetadata,
        trip: &TripSummary,
        snapshot: Option<&TelemetrySnapshot>,
    ) -> Self {
        let placeholder;
        let snapshot = match snapshot {
            Some(snapshot) => snapshot,
            None => {
                placeholder = TelemetrySnapshot::placeholder();
                &placeholder
            }
        };

        Self {
            route_name: route.name.clone(),
            source_route_id: Some(route.id.clone()),
            trip_id: trip.trip_id,
            date: Utc::now(),
            distance_km: trip.distance_km,
            duration_seconds: trip.duration_seconds,
            average_speed: trip.average_speed,
            max_speed: trip.max_speed,
            elevation_gain: trip.elevation_gain,
            elevation_variance: population_variance(&trip.elevation_samples),
            twistiness_index: clamp01(snapshot.turn_density_per_10km / 8.0),
            lean_aggression: clamp01(
                (snapshot.max_lean_left.abs() + snapshot.max_lean_right) / 120.0,
            ),
            surface_quality: clamp01(snapshot.average_surface_quality),
            pothole_density: clamp01(snapshot.pothole_density_per_100km / 25.0),
            lateral_g: clamp01(snapshot.average_lateral_g / 1.5),
            flow_score: clamp01(trip.average_speed / trip.max_speed.max(1.0)),
            braking_intensity: clamp01(snapshot.braking_intensity),
        }
    }

    /// Project this ride into the 11-dimensional feature space.
    ///
    /// Dimension order is fixed; every component lies in [0,1].
    pub fn feature_vector(&self) -> [f64; FEATURE_DIMENSIONS] {
        [
            normalize(self.distance_km, 0.0, 600.0),
            self.twistiness_index,
            self.lean_aggression,
            self.surface_quality,
            self.pothole_density,
            self.lateral_g,
            normalize(self.elevation_variance, 0.0, 250_000.0),
            self.flow_score,
            self.braking_intensity,
            normalize(self.average_speed, 10.0, 140.0),
            normalize(self.max_speed, 30.0, 200.0),
        ]
    }
}

/// Clamp a value into [0,1].
pub(crate) fn clamp01(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

/// Linearly map `value` from [min,max] into [0,1], clamped at both ends.
fn normalize(value: f64, min: f64, max: f64) -> f64 {
    clamp01((value - min) / (max - min))
}

/// Population variance; 0 for fewer than two samples.
fn population_variance(samples: &[f64]) -> f64 {
    if samples.len() < 2 {
        return 0.0;
    }
    let mean = samples.iter().sum::<f64>() / samples.len() as f64;
    samples.iter().map(|s| (s - mean) * (s - mean)).sum::<f64>() / samples.len() as f64
}
