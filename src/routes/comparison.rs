//! Comparison of two recorded rides of the same route.

use serde::{Deserialize, Serialize};

/// Previous-vs-current ride comparison for one route.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteComparison {
    /// Route both rides were recorded on
    pub route_name: String,
    /// Previous ride duration in seconds
    pub previous_time: f64,
    /// Current ride duration in seconds
    pub current_time: f64,
    /// Previous ride maximum speed in km/h
    pub previous_max_speed: f64,
    /// Current ride maximum speed in km/h
    pub current_max_speed: f64,
    /// Previous ride average speed in km/h
    pub previous_avg_speed: f64,
    /// Current ride average speed in km/h
    pub current_avg_speed: f64,
}

impl RouteComparison {
    /// Seconds saved over the previous ride (negative when slower).
    pub fn time_improvement(&self) -> f64 {
        self.previous_time - self.current_time
    }

    /// Average speed gained over the previous ride in km/h.
    pub fn speed_improvement(&self) -> f64 {
        self.current_avg_speed - self.previous_avg_speed
    }

    /// Time improvement as a percentage of the previous ride.
    pub fn improvement_percentage(&self) -> f64 {
        if self.previous_time <= 0.0 {
            return 0.0;
        }
        (self.time_improvement() / self.previous_time) * 100.0
    }
}
