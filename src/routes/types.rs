//! Route metadata consumed by quality scoring and recommendations.

use serde::{Deserialize, Serialize};

/// Difficulty tier of a catalog route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RouteDifficulty {
    /// Relaxed touring pace, forgiving roads
    Easy,
    /// Some technical sections
    Intermediate,
    /// Demanding corners and elevation
    Advanced,
    /// Sustained technical riding
    Expert,
}

impl RouteDifficulty {
    /// Get the display name for this tier.
    pub fn label(&self) -> &'static str {
        match self {
            RouteDifficulty::Easy => "Easy",
            RouteDifficulty::Intermediate => "Intermediate",
            RouteDifficulty::Advanced => "Advanced",
            RouteDifficulty::Expert => "Expert",
        }
    }

    /// Get the UI accent color name for this tier.
    pub fn color(&self) -> &'static str {
        match self {
            RouteDifficulty::Easy => "green",
            RouteDifficulty::Intermediate => "blue",
            RouteDifficulty::Advanced => "orange",
            RouteDifficulty::Expert => "red",
        }
    }

    /// Numeric weight used by the synthetic vector fallback.
    pub fn weight(&self) -> f64 {
        match self {
            RouteDifficulty::Easy => 0.25,
            RouteDifficulty::Intermediate => 0.45,
            RouteDifficulty::Advanced => 0.65,
            RouteDifficulty::Expert => 0.85,
        }
    }
}

impl std::fmt::Display for RouteDifficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Metadata for a catalog route.
///
/// Routes are displayed and grouped by `name`; `id` is the stable catalog
/// identifier used to exclude a route from its own recommendations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteMetadata {
    /// Stable catalog identifier
    pub id: String,
    /// Display name; recorded rides are grouped under this name
    pub name: String,
    /// Route length in kilometers
    pub distance_km: f64,
    /// Difficulty tier
    pub difficulty: RouteDifficulty,
    /// Number of scenic highlights along the route
    pub highlight_count: u32,
}

impl RouteMetadata {
    /// Create route metadata with no highlights.
    pub fn new(id: impl Into<String>, name: impl Into<String>, distance_km: f64, difficulty: RouteDifficulty) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            distance_km,
            difficulty,
            highlight_count: 0,
        }
    }

    /// Set the highlight count.
    pub fn with_highlights(mut self, highlight_count: u32) -> Self {
        self.highlight_count = highlight_count;
        self
    }
}
