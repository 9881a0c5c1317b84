//! Trip summary and telemetry snapshot types.
//!
//! The trip-recording state machine delivers a `TripSummary` when a ride
//! completes. Sensor fusion optionally delivers a condensed
//! `TelemetrySnapshot` alongside it; when no snapshot arrives the engine
//! substitutes [`TelemetrySnapshot::placeholder`] so ingestion never fails
//! for missing sensor data.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Summary of one completed trip as delivered by the trip recorder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripSummary {
    /// Originating trip record, if the recorder assigned one
    pub trip_id: Option<Uuid>,
    /// Total distance in kilometers
    pub distance_km: f64,
    /// Riding time in seconds
    pub duration_seconds: f64,
    /// Average speed in km/h
    pub average_speed: f64,
    /// Maximum speed in km/h
    pub max_speed: f64,
    /// Cumulative elevation gain in meters
    pub elevation_gain: f64,
    /// Ordered elevation samples in meters
    pub elevation_samples: Vec<f64>,
}

impl TripSummary {
    /// Create a summary with the given core aggregates and no elevation data.
    pub fn new(distance_km: f64, duration_seconds: f64, average_speed: f64, max_speed: f64) -> Self {
        Self {
            trip_id: None,
            distance_km,
            duration_seconds,
            average_speed,
            max_speed,
            elevation_gain: 0.0,
            elevation_samples: Vec::new(),
        }
    }

    /// Attach elevation data to this summary.
    pub fn with_elevation(mut self, gain: f64, samples: Vec<f64>) -> Self {
        self.elevation_gain = gain;
        self.elevation_samples = samples;
        self
    }
}

/// Aggregate metrics captured from the ride sensors during one trip.
///
/// All densities are pre-aggregated upstream; the engine never sees raw
/// accelerometer or GPS streams.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetrySnapshot {
    /// When the snapshot was captured
    pub timestamp: DateTime<Utc>,
    /// Mean lean angle over the ride in degrees
    pub average_lean_angle: f64,
    /// Deepest left lean in degrees (negative by convention)
    pub max_lean_left: f64,
    /// Deepest right lean in degrees
    pub max_lean_right: f64,
    /// Mean surface quality, 0-1 (1 = smooth)
    pub average_surface_quality: f64,
    /// Pothole hits per 100 km
    pub pothole_density_per_100km: f64,
    /// Turns per 10 km
    pub turn_density_per_10km: f64,
    /// Hairpins per 10 km
    pub hairpin_density_per_10km: f64,
    /// Mean lateral acceleration in g
    pub average_lateral_g: f64,
    /// Peak lateral acceleration in g
    pub max_lateral_g: f64,
    /// Chassis vibration score, 0-1
    pub vibration_score: f64,
    /// Braking intensity, 0-1
    pub braking_intensity: f64,
}

impl TelemetrySnapshot {
    /// Near-neutral stand-in used when a ride has no sensor capture.
    pub fn placeholder() -> Self {
        Self {
            timestamp: Utc::now(),
            average_lean_angle: 0.0,
            max_lean_left: 0.0,
            max_lean_right: 0.0,
            average_surface_quality: 0.85,
            pothole_density_per_100km: 0.0,
            turn_density_per_10km: 0.2,
            hairpin_density_per_10km: 0.02,
            average_lateral_g: 0.35,
            max_lateral_g: 0.8,
            vibration_score: 0.15,
            braking_intensity: 0.2,
        }
    }
}
