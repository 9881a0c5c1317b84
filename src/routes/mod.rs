//! Route catalog metadata and ride-over-ride comparison.

pub mod comparison;
pub mod types;

pub use comparison::RouteComparison;
pub use types::{RouteDifficulty, RouteMetadata};
