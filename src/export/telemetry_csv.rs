//! CSV export of the recorded telemetry history.

use std::io::Write;

use thiserror::Error;

use crate::intelligence::vector::TelemetryVector;

/// Errors during telemetry export.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Nothing recorded yet
    #[error("No telemetry data to export")]
    NoData,

    /// Failed to write export data
    #[error("Failed to write data: {0}")]
    WriteFailed(String),
}

/// Export the recorded vector history to CSV, one row per ride.
pub fn export_vectors_csv(vectors: &[TelemetryVector]) -> Result<String, ExportError> {
    if vectors.is_empty() {
        return Err(ExportError::NoData);
    }

    let mut output = Vec::new();

    writeln!(
        output,
        "date,route_name,distance_km,duration_seconds,average_speed,max_speed,elevation_gain,elevation_variance,twistiness_index,lean_aggression,surface_quality,pothole_density,lateral_g,flow_score,braking_intensity"
    )
    .map_err(|e| ExportError::WriteFailed(e.to_string()))?;

    for vector in vectors {
        writeln!(
            output,
            "{},{},{:.2},{:.0},{:.1},{:.1},{:.0},{:.0},{:.3},{:.3},{:.3},{:.3},{:.3},{:.3},{:.3}",
            vector.date.to_rfc3339(),
            vector.route_name,
            vector.distance_km,
            vector.duration_seconds,
            vector.average_speed,
            vector.max_speed,
            vector.elevation_gain,
            vector.elevation_variance,
            vector.twistiness_index,
            vector.lean_aggression,
            vector.surface_quality,
            vector.pothole_density,
            vector.lateral_g,
            vector.flow_score,
            vector.braking_intensity,
        )
        .map_err(|e| ExportError::WriteFailed(e.to_string()))?;
    }

    String::from_utf8(output).map_err(|e| ExportError::WriteFailed(e.to_string()))
}
