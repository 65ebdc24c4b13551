use std::f64::consts::FRAC_PI_2;

use log::debug;

use crate::constants::{CONICAL_HALF_ANGLE_DEG, MAX_CONTOUR_POINTS, SAMPLE_POINTS_CEILING};
use crate::errors::{NozzleError, Parameter};
use crate::model::geometry::NozzleGeometry;
use crate::utils::point::ContourPoint;
use crate::validation::{validate_length_fraction, validate_radii};

/// Bell contour generator using a parabolic approximation of Rao's method.
///
/// The bell length is a fraction of the length of a conical nozzle with the
/// same radii and a reference half-angle (15° by default). The wall radius is
/// blended from throat to exit along `2t - t²`, where `t` is the normalized
/// axial position, so the wall leaves the throat at its steepest and meets
/// the exit with zero slope.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContourGenerator {
    pub max_points: usize,
    pub conical_half_angle: f64, // radians
}

impl Default for ContourGenerator {
    fn default() -> Self {
        ContourGenerator {
            max_points: MAX_CONTOUR_POINTS,
            conical_half_angle: CONICAL_HALF_ANGLE_DEG.to_radians(),
        }
    }
}

impl ContourGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_points(mut self, max_points: usize) -> Self {
        self.max_points = max_points;
        self
    }

    pub fn with_conical_half_angle_deg(mut self, degrees: f64) -> Self {
        self.conical_half_angle = degrees.to_radians();
        self
    }

    /// Length of the reference cone between the two radii.
    pub fn conical_length(&self, throat_radius: f64, exit_radius: f64) -> f64 {
        (exit_radius - throat_radius) / self.conical_half_angle.tan()
    }

    pub fn generate(
        &self,
        throat_radius: f64,
        exit_radius: f64,
        length_fraction: f64,
    ) -> Result<NozzleGeometry, NozzleError> {
        validate_length_fraction(length_fraction)?;
        validate_radii(throat_radius, exit_radius)?;
        if !(2..=SAMPLE_POINTS_CEILING).contains(&self.max_points) {
            return Err(NozzleError::invalid(Parameter::SampleCount));
        }
        if !(self.conical_half_angle > 0.0 && self.conical_half_angle < FRAC_PI_2) {
            return Err(NozzleError::invalid(Parameter::ConicalHalfAngle));
        }

        let bell_length = self.conical_length(throat_radius, exit_radius) * length_fraction;
        if !(bell_length.is_finite() && bell_length > 0.0) {
            return Err(NozzleError::invalid(Parameter::ConicalHalfAngle));
        }
        let radius_ratio = exit_radius / throat_radius;
        let last = (self.max_points - 1) as f64;

        let contour: Vec<ContourPoint> = (0..self.max_points)
            .map(|i| {
                let x = bell_length * (i as f64 / last);
                let radius = if x <= 0.0 {
                    throat_radius
                } else {
                    let t = x / bell_length;
                    let blended = throat_radius * (1.0 + (radius_ratio - 1.0) * (2.0 * t - t * t));
                    blended.min(exit_radius)
                };
                ContourPoint::new(x, radius)
            })
            .collect();

        debug!(
            "Generated bell contour: {} points, length {:.6} m, expansion ratio {:.3}",
            contour.len(),
            bell_length,
            radius_ratio * radius_ratio
        );

        Ok(NozzleGeometry::with_contour(
            throat_radius,
            exit_radius,
            bell_length,
            contour,
        ))
    }
}

/// Generates a contour with the default sample cap and reference cone.
pub fn generate_bell_contour(
    throat_radius: f64,
    exit_radius: f64,
    length_fraction: f64,
) -> Result<NozzleGeometry, NozzleError> {
    ContourGenerator::default().generate(throat_radius, exit_radius, length_fraction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_example_geometry() {
        let geometry = generate_bell_contour(0.008, 0.032, 0.8).unwrap();

        assert_eq!(geometry.expansion_ratio(), 16.0);
        assert_eq!(geometry.throat_x(), 0.0);
        assert_relative_eq!(geometry.exit_x(), 0.07165537550532246, epsilon = 1e-12);
        assert_eq!(geometry.num_points(), MAX_CONTOUR_POINTS);
    }

    #[test]
    fn test_contour_endpoints() {
        let geometry = generate_bell_contour(0.01, 0.03, 0.8).unwrap();
        let contour = geometry.contour();

        let first = contour.first().unwrap();
        let last = contour.last().unwrap();
        assert_eq!(first.x, 0.0);
        assert_eq!(first.y, 0.01);
        assert_eq!(last.x, geometry.exit_x());
        assert!(last.y <= 0.03 + EPSILON);
        assert_abs_diff_eq!(last.y, 0.03, epsilon = 1e-12);
    }

    #[test]
    fn test_conical_length_uses_fifteen_degrees() {
        let generator = ContourGenerator::default();
        let expected = 0.02 / (15.0_f64).to_radians().tan();
        assert_relative_eq!(generator.conical_length(0.01, 0.03), expected, epsilon = EPSILON);

        let full = generate_bell_contour(0.01, 0.03, 1.0).unwrap();
        assert_relative_eq!(full.exit_x(), expected, epsilon = EPSILON);
    }

    #[test]
    fn test_contour_midpoint_follows_parabola() {
        let generator = ContourGenerator::default().with_max_points(3);
        let geometry = generator.generate(0.01, 0.03, 0.5).unwrap();
        let mid = geometry.contour()[1];

        // t = 0.5 → 2t - t² = 0.75
        assert_relative_eq!(mid.x, geometry.exit_x() / 2.0, epsilon = EPSILON);
        assert_relative_eq!(mid.y, 0.01 * (1.0 + 2.0 * 0.75), epsilon = EPSILON);
    }

    #[test]
    fn test_contour_is_deterministic() {
        let a = generate_bell_contour(0.012, 0.05, 0.7).unwrap();
        let b = generate_bell_contour(0.012, 0.05, 0.7).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_length_fraction_bounds() {
        for fraction in [0.0, -0.1, 1.5] {
            assert_eq!(
                generate_bell_contour(0.01, 0.03, fraction),
                Err(NozzleError::invalid(Parameter::LengthFraction))
            );
        }
        assert!(generate_bell_contour(0.01, 0.03, 1.0).is_ok());
    }

    #[test]
    fn test_generator_checks_own_radii() {
        assert_eq!(
            generate_bell_contour(0.0, 0.03, 0.8),
            Err(NozzleError::invalid(Parameter::ThroatRadius))
        );
        assert_eq!(
            generate_bell_contour(0.03, 0.03, 0.8),
            Err(NozzleError::invalid(Parameter::ExitRadius))
        );
    }

    #[test]
    fn test_sample_cap() {
        let generator = ContourGenerator::default().with_max_points(1);
        assert_eq!(
            generator.generate(0.01, 0.03, 0.8),
            Err(NozzleError::invalid(Parameter::SampleCount))
        );

        let generator = ContourGenerator::default().with_max_points(SAMPLE_POINTS_CEILING + 1);
        assert_eq!(
            generator.generate(0.01, 0.03, 0.8),
            Err(NozzleError::invalid(Parameter::SampleCount))
        );

        let generator = ContourGenerator::default().with_max_points(50);
        let geometry = generator.generate(0.01, 0.03, 0.8).unwrap();
        assert_eq!(geometry.num_points(), 50);
    }

    #[test]
    fn test_reference_cone_angle_must_be_acute() {
        for degrees in [0.0, -15.0, 90.0, 120.0, f64::NAN] {
            let generator = ContourGenerator::default().with_conical_half_angle_deg(degrees);
            assert_eq!(
                generator.generate(0.01, 0.03, 0.8),
                Err(NozzleError::invalid(Parameter::ConicalHalfAngle)),
                "half-angle {degrees}° should be rejected"
            );
        }

        let shallow = ContourGenerator::default()
            .with_conical_half_angle_deg(1.0)
            .generate(0.01, 0.03, 0.8)
            .unwrap();
        let first = shallow.contour()[0];
        assert_eq!((first.x, first.y), (0.0, 0.01));
        assert!(shallow.exit_x().is_finite() && shallow.exit_x() > 0.0);
    }

    #[test]
    fn test_steeper_reference_cone_shortens_nozzle() {
        let default = generate_bell_contour(0.01, 0.03, 0.8).unwrap();
        let steep = ContourGenerator::default()
            .with_conical_half_angle_deg(30.0)
            .generate(0.01, 0.03, 0.8)
            .unwrap();
        assert!(steep.exit_x() < default.exit_x());
    }

    #[test]
    fn test_random_contours_hold_invariants() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..200 {
            let throat_radius = rng.gen_range(1e-4..1.0);
            let exit_radius = throat_radius * rng.gen_range(1.01..20.0);
            let fraction = rng.gen_range(0.05..=1.0);

            let geometry = generate_bell_contour(throat_radius, exit_radius, fraction).unwrap();
            let contour = geometry.contour();

            assert_relative_eq!(
                geometry.expansion_ratio(),
                (exit_radius / throat_radius).powi(2),
                max_relative = 1e-12
            );
            assert_eq!(contour[0].x, 0.0);
            assert_eq!(contour[0].y, throat_radius);
            assert_eq!(contour[contour.len() - 1].x, geometry.exit_x());

            for pair in contour.windows(2) {
                assert!(pair[1].x >= pair[0].x);
                assert!(pair[1].y >= pair[0].y);
            }
            assert!(contour.iter().all(|p| p.y <= exit_radius));
        }
    }
}
