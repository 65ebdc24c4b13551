use std::fmt;

use crate::model::flow::FlowConditions;
use crate::model::geometry::NozzleGeometry;
use crate::model::performance::PerformanceResults;

/// Console block echoing the design inputs.
pub struct InputSummary<'a> {
    pub seed: &'a NozzleGeometry,
    pub flow: &'a FlowConditions,
    pub length_fraction: f64,
}

impl fmt::Display for InputSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Input Parameters:")?;
        writeln!(f, "  Throat radius:       {:.6} m", self.seed.throat_radius())?;
        writeln!(f, "  Exit radius:         {:.6} m", self.seed.exit_radius())?;
        writeln!(f, "  Chamber pressure:    {:.0} Pa", self.flow.chamber_pressure)?;
        writeln!(f, "  Ambient pressure:    {:.0} Pa", self.flow.ambient_pressure)?;
        writeln!(f, "  Chamber temperature: {:.0} K", self.flow.chamber_temperature)?;
        writeln!(f, "  Molecular weight:    {:.6} kg/mol", self.flow.molecular_weight)?;
        writeln!(f, "  Specific heat ratio: {:.3}", self.flow.gamma)?;
        writeln!(f, "  Length fraction:     {:.3}", self.length_fraction)
    }
}

pub struct GeometrySummary<'a>(pub &'a NozzleGeometry);

impl fmt::Display for GeometrySummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let geometry = self.0;
        writeln!(f, "Nozzle geometry calculated:")?;
        writeln!(f, "  Expansion ratio:     {:.3}", geometry.expansion_ratio())?;
        writeln!(f, "  Nozzle length:       {}", format_length(geometry.exit_x()))?;
        writeln!(f, "  Wall length:         {}", format_length(geometry.wall_length()))?;
        writeln!(f, "  Number of points:    {}", geometry.num_points())
    }
}

impl fmt::Display for PerformanceResults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== NOZZLE PERFORMANCE RESULTS ===")?;
        writeln!(f, "Thrust:                  {:.2} N", self.thrust)?;
        writeln!(f, "Specific Impulse:        {:.2} s", self.specific_impulse)?;
        writeln!(f, "Exit Velocity:           {:.2} m/s", self.exit_velocity)?;
        writeln!(f, "Exit Mach Number:        {:.4}", self.exit_mach)?;
        writeln!(f, "Exit Pressure:           {:.2} Pa", self.exit_pressure)?;
        writeln!(f, "Exit Temperature:        {:.2} K", self.exit_temperature)?;
        writeln!(f, "Throat Pressure:         {:.2} Pa", self.throat_pressure)?;
        writeln!(f, "Throat Temperature:      {:.2} K", self.throat_temperature)?;
        writeln!(f, "Mass Flow Rate:          {:.6} kg/s", self.mass_flow_rate)?;
        writeln!(f, "Characteristic Velocity: {:.2} m/s", self.characteristic_velocity)?;
        writeln!(f, "Thrust Coefficient:      {:.4}", self.thrust_coefficient)?;
        writeln!(f, "==================================")
    }
}

// Short nozzles also show millimeters.
fn format_length(meters: f64) -> String {
    if meters < 0.1 {
        format!("{:.6} m ({:.2} mm)", meters, meters * 1000.0)
    } else {
        format!("{:.6} m", meters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry_system::contour::generate_bell_contour;

    fn sample_results() -> PerformanceResults {
        PerformanceResults {
            thrust: 1144.8708,
            specific_impulse: 14549.9649,
            exit_velocity: 75344.757,
            exit_pressure: 168024.931,
            exit_temperature: 2097.9216,
            mass_flow_rate: 0.0080209448,
            characteristic_velocity: 62667.783,
            thrust_coefficient: 2.2776481,
            exit_mach: 2.3932975,
            throat_pressure: 1387322.39,
            throat_temperature: 3200.0,
        }
    }

    #[test]
    fn test_performance_report() {
        let report = sample_results().to_string();
        assert!(report.starts_with("=== NOZZLE PERFORMANCE RESULTS ===\n"));
        assert!(report.contains("Thrust:                  1144.87 N\n"));
        assert!(report.contains("Specific Impulse:        14549.96 s\n"));
        assert!(report.contains("Mass Flow Rate:          0.008021 kg/s\n"));
        assert!(report.contains("Thrust Coefficient:      2.2776\n"));
    }

    #[test]
    fn test_input_summary() {
        let seed = NozzleGeometry::seed(0.008, 0.032);
        let flow = FlowConditions::new(2.5e6, 0.0, 3600.0, 0.022, 1.25);
        let text = InputSummary {
            seed: &seed,
            flow: &flow,
            length_fraction: 0.8,
        }
        .to_string();

        assert!(text.contains("  Throat radius:       0.008000 m\n"));
        assert!(text.contains("  Chamber pressure:    2500000 Pa\n"));
        assert!(text.contains("  Specific heat ratio: 1.250\n"));
        assert!(text.contains("  Length fraction:     0.800\n"));
    }

    #[test]
    fn test_geometry_summary() {
        let geometry = generate_bell_contour(0.008, 0.032, 0.8).unwrap();
        let text = GeometrySummary(&geometry).to_string();
        assert!(text.contains("  Expansion ratio:     16.000\n"));
        assert!(text.contains("  Nozzle length:       0.071655 m (71.66 mm)\n"));
        assert!(text.contains("  Number of points:    1000\n"));
    }

    #[test]
    fn test_format_length() {
        assert_eq!(format_length(0.05), "0.050000 m (50.00 mm)");
        assert_eq!(format_length(1.5), "1.500000 m");
    }
}
