//! Export of recorded telemetry data.

pub mod telemetry_csv;

pub use telemetry_csv::{export_vectors_csv, ExportError};
