use std::f64::consts::PI;

use serde::Serialize;

use crate::utils::point::ContourPoint;

/// Cross-sectional flow area of a circular station.
pub fn nozzle_area(radius: f64) -> f64 {
    PI * radius * radius
}

/// Exit-to-throat area ratio for circular sections.
pub fn expansion_ratio(throat_radius: f64, exit_radius: f64) -> f64 {
    (exit_radius / throat_radius).powi(2)
}

/// Nozzle shape. Built as a seed holding only the radii, then replaced by
/// the fully populated record the contour generator returns. Serialize only;
/// a populated record can only come from the generator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NozzleGeometry {
    throat_radius: f64,
    exit_radius: f64,
    throat_x: f64,
    exit_x: f64,
    expansion_ratio: f64,
    contour: Vec<ContourPoint>,
}

impl NozzleGeometry {
    /// Geometry with radii only; no contour yet and zero length.
    pub fn seed(throat_radius: f64, exit_radius: f64) -> Self {
        NozzleGeometry {
            throat_radius,
            exit_radius,
            throat_x: 0.0,
            exit_x: 0.0,
            expansion_ratio: expansion_ratio(throat_radius, exit_radius),
            contour: Vec::new(),
        }
    }

    pub(crate) fn with_contour(
        throat_radius: f64,
        exit_radius: f64,
        exit_x: f64,
        contour: Vec<ContourPoint>,
    ) -> Self {
        NozzleGeometry {
            throat_radius,
            exit_radius,
            throat_x: 0.0,
            exit_x,
            expansion_ratio: expansion_ratio(throat_radius, exit_radius),
            contour,
        }
    }

    pub fn throat_radius(&self) -> f64 {
        self.throat_radius
    }

    pub fn exit_radius(&self) -> f64 {
        self.exit_radius
    }

    pub fn throat_x(&self) -> f64 {
        self.throat_x
    }

    /// Axial nozzle length from the throat.
    pub fn exit_x(&self) -> f64 {
        self.exit_x
    }

    pub fn expansion_ratio(&self) -> f64 {
        self.expansion_ratio
    }

    pub fn contour(&self) -> &[ContourPoint] {
        &self.contour
    }

    pub fn num_points(&self) -> usize {
        self.contour.len()
    }

    pub fn throat_area(&self) -> f64 {
        nozzle_area(self.throat_radius)
    }

    pub fn exit_area(&self) -> f64 {
        nozzle_area(self.exit_radius)
    }

    /// Lower wall, mirrored across the axis.
    pub fn mirrored_contour(&self) -> Vec<ContourPoint> {
        self.contour.iter().map(ContourPoint::mirrored).collect()
    }

    /// Length of the sampled wall line from throat to exit.
    pub fn wall_length(&self) -> f64 {
        self.contour
            .windows(2)
            .map(|pair| pair[0].distance_to(&pair[1]))
            .sum()
    }
}
