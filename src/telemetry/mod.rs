//! Collaborator input shapes delivered to the intelligence engine.

pub mod types;

pub use types::{TelemetrySnapshot, TripSummary};
