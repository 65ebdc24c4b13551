use std::ops::Sub;

use serde::{Deserialize, Serialize};

/// A sample on the nozzle wall: axial position `x` and radius `y`, in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContourPoint {
    pub x: f64,
    pub y: f64,
}

impl ContourPoint {
    pub fn new(x: f64, y: f64) -> Self {
        ContourPoint { x, y }
    }

    /// Same axial station on the opposite wall, for symmetric display.
    pub fn mirrored(&self) -> Self {
        ContourPoint::new(self.x, -self.y)
    }

    pub fn distance_to(&self, other: &ContourPoint) -> f64 {
        let delta = *other - *self;
        (delta.x.powi(2) + delta.y.powi(2)).sqrt()
    }
}

impl Sub for ContourPoint {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        ContourPoint::new(self.x - other.x, self.y - other.y)
    }
}
