//! Riding-style classification from recorded telemetry.
//!
//! Classifies the riding character a route's telemetry shows and offers
//! skill suggestions derived from the same fields. Advisory output for the
//! rider profile screens; nothing downstream consumes it.

use serde::{Deserialize, Serialize};

use super::vector::TelemetryVector;

/// Riding style observed on a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RidingStyle {
    /// Deep lean angles at high pace
    Aggressive,
    /// Spirited riding without aggressive lean
    Sport,
    /// High corner speed carried with little drama
    Smooth,
    /// Relaxed pace, shallow lean
    Touring,
}

impl RidingStyle {
    /// Get the display name for this style.
    pub fn name(&self) -> &'static str {
        match self {
            RidingStyle::Aggressive => "Aggressive",
            RidingStyle::Sport => "Sport",
            RidingStyle::Smooth => "Smooth",
            RidingStyle::Touring => "Touring",
        }
    }

    /// Get a brief description of this style.
    pub fn description(&self) -> &'static str {
        match self {
            RidingStyle::Aggressive => "Deep lean angles at sustained high pace",
            RidingStyle::Sport => "Spirited cornering with margin in reserve",
            RidingStyle::Smooth => "High corner speed carried with minimal braking",
            RidingStyle::Touring => "Relaxed cruising pace with shallow lean",
        }
    }

    /// Classify the riding style a telemetry vector shows.
    pub fn classify(vector: &TelemetryVector) -> RidingStyle {
        if vector.lean_aggression > 0.6 && vector.average_speed > 80.0 {
            return RidingStyle::Aggressive;
        }
        if vector.lean_aggression < 0.25 && vector.average_speed < 60.0 {
            return RidingStyle::Touring;
        }
        if vector.flow_score > 0.7 {
            return RidingStyle::Smooth;
        }
        RidingStyle::Sport
    }
}

impl std::fmt::Display for RidingStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Skill suggestions derived from a route's telemetry character.
pub fn skill_suggestions(vector: &TelemetryVector) -> Vec<String> {
    let mut suggestions = Vec::new();

    if vector.braking_intensity > 0.6 {
        suggestions
            .push("Try smoother braking into corners - trail braking technique".to_string());
    }

    if vector.lateral_g < 0.35 {
        suggestions.push("You can carry more speed through corners".to_string());
    } else if vector.lateral_g > 0.8 {
        suggestions.push("Consider smoother turn-in for better tire grip".to_string());
    }

    suggestions
}
