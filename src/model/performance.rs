use serde::{Deserialize, Serialize};

/// Engine performance for one geometry/flow pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerformanceResults {
    pub thrust: f64,                  // N
    pub specific_impulse: f64,        // s
    pub exit_velocity: f64,           // m/s
    pub exit_pressure: f64,           // Pa
    pub exit_temperature: f64,        // K
    pub mass_flow_rate: f64,          // kg/s
    pub characteristic_velocity: f64, // m/s
    pub thrust_coefficient: f64,
    pub exit_mach: f64,
    pub throat_pressure: f64,    // Pa
    pub throat_temperature: f64, // K
}
