use log::debug;

use crate::constants::GRAVITY;
use crate::errors::{NozzleError, Parameter, SolverStage};
use crate::flow_system::isentropic::{
    characteristic_velocity, finite, station_at_mach, throat_conditions, velocity_at,
};
use crate::flow_system::mach::MachSolver;
use crate::model::flow::FlowConditions;
use crate::model::geometry::NozzleGeometry;
use crate::model::performance::PerformanceResults;
use crate::validation::validate_radii;

/// Ideal frozen-flow performance of a choked nozzle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PerformanceSolver {
    pub mach_solver: MachSolver,
}

impl PerformanceSolver {
    pub fn new(mach_solver: MachSolver) -> Self {
        PerformanceSolver { mach_solver }
    }

    fn check_preconditions(
        geometry: &NozzleGeometry,
        flow: &FlowConditions,
    ) -> Result<(), NozzleError> {
        validate_radii(geometry.throat_radius(), geometry.exit_radius())?;
        if !(geometry.expansion_ratio() > 1.0) {
            return Err(NozzleError::invalid(Parameter::ExitRadius));
        }
        if !(flow.chamber_pressure > 0.0) {
            return Err(NozzleError::invalid(Parameter::ChamberPressure));
        }
        if !(flow.gamma > 1.0) {
            return Err(NozzleError::invalid(Parameter::Gamma));
        }
        Ok(())
    }

    pub fn solve(
        &self,
        geometry: &NozzleGeometry,
        flow: &FlowConditions,
    ) -> Result<PerformanceResults, NozzleError> {
        Self::check_preconditions(geometry, flow)?;

        let throat = throat_conditions(flow)?;
        let exit_mach = self
            .mach_solver
            .solve(flow.gamma, geometry.expansion_ratio())?;
        let exit = station_at_mach(flow, exit_mach)?;
        let exit_velocity = velocity_at(flow, exit_mach, exit.temperature)?;
        let characteristic_velocity = characteristic_velocity(flow)?;

        let throat_area = geometry.throat_area();
        let exit_area = geometry.exit_area();

        let throat_energy = flow.specific_gas_constant() * throat.temperature;
        if !(throat_energy > 0.0) {
            return Err(NozzleError::domain(SolverStage::MassFlow));
        }
        let mass_flow_rate = finite(
            throat_area * throat.pressure / throat_energy.sqrt(),
            SolverStage::MassFlow,
        )?;
        if !(mass_flow_rate > 0.0) {
            return Err(NozzleError::domain(SolverStage::MassFlow));
        }

        let thrust = finite(
            mass_flow_rate * exit_velocity + (exit.pressure - flow.ambient_pressure) * exit_area,
            SolverStage::Thrust,
        )?;
        let specific_impulse = finite(thrust / (mass_flow_rate * GRAVITY), SolverStage::Thrust)?;
        let thrust_coefficient = finite(
            thrust / (flow.chamber_pressure * throat_area),
            SolverStage::Thrust,
        )?;

        debug!(
            "Solved performance: M_exit = {exit_mach:.4}, F = {thrust:.2} N, Isp = {specific_impulse:.2} s"
        );

        Ok(PerformanceResults {
            thrust,
            specific_impulse,
            exit_velocity,
            exit_pressure: exit.pressure,
            exit_temperature: exit.temperature,
            mass_flow_rate,
            characteristic_velocity,
            thrust_coefficient,
            exit_mach,
            throat_pressure: throat.pressure,
            throat_temperature: throat.temperature,
        })
    }
}

/// Solves with the default ten-step Mach iteration.
pub fn calculate_performance(
    geometry: &NozzleGeometry,
    flow: &FlowConditions,
) -> Result<PerformanceResults, NozzleError> {
    PerformanceSolver::default().solve(geometry, flow)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry_system::contour::generate_bell_contour;
    use approx::assert_relative_eq;

    const TOLERANCE: f64 = 1e-9;

    fn example() -> (NozzleGeometry, FlowConditions) {
        (
            generate_bell_contour(0.008, 0.032, 0.8).unwrap(),
            FlowConditions::new(2.5e6, 0.0, 3600.0, 0.022, 1.25),
        )
    }

    #[test]
    fn test_example_performance() {
        let (geometry, flow) = example();
        let results = calculate_performance(&geometry, &flow).unwrap();

        assert_relative_eq!(results.exit_mach, 2.3935811980007715, max_relative = TOLERANCE);
        assert_relative_eq!(results.exit_temperature, 2097.7140017456954, max_relative = TOLERANCE);
        assert_relative_eq!(results.exit_pressure, 167941.8333831898, max_relative = TOLERANCE);
        assert_relative_eq!(results.exit_velocity, 75349.96209350985, max_relative = TOLERANCE);
        assert_relative_eq!(results.mass_flow_rate, 0.008020944763003043, max_relative = TOLERANCE);
        assert_relative_eq!(results.thrust, 1144.6452297531346, max_relative = TOLERANCE);
        assert_relative_eq!(results.specific_impulse, 14547.098174899036, max_relative = TOLERANCE);
        assert_relative_eq!(results.thrust_coefficient, 2.27719933002212, max_relative = TOLERANCE);
        assert_relative_eq!(
            results.characteristic_velocity,
            62667.78283935879,
            max_relative = TOLERANCE
        );
    }

    #[test]
    fn test_thrust_decomposition() {
        let (geometry, flow) = example();
        let r = calculate_performance(&geometry, &flow).unwrap();

        let momentum = r.mass_flow_rate * r.exit_velocity;
        let pressure = (r.exit_pressure - flow.ambient_pressure) * geometry.exit_area();
        assert_relative_eq!(r.thrust, momentum + pressure, max_relative = 1e-12);
        assert_relative_eq!(
            r.specific_impulse,
            r.thrust / (r.mass_flow_rate * GRAVITY),
            max_relative = 1e-12
        );
        assert_relative_eq!(
            r.thrust_coefficient,
            r.thrust / (flow.chamber_pressure * geometry.throat_area()),
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_ambient_pressure_reduces_thrust() {
        let (geometry, vacuum) = example();
        let mut sea_level = vacuum;
        sea_level.ambient_pressure = 101325.0;

        let in_vacuum = calculate_performance(&geometry, &vacuum).unwrap();
        let at_sea_level = calculate_performance(&geometry, &sea_level).unwrap();

        assert!(at_sea_level.thrust < in_vacuum.thrust);
        assert_relative_eq!(
            in_vacuum.thrust - at_sea_level.thrust,
            101325.0 * geometry.exit_area(),
            max_relative = 1e-9
        );
        assert_eq!(at_sea_level.mass_flow_rate, in_vacuum.mass_flow_rate);
    }

    #[test]
    fn test_solve_is_bit_identical() {
        let (geometry, flow) = example();
        let solver = PerformanceSolver::default();
        let a = solver.solve(&geometry, &flow).unwrap();
        let b = solver.solve(&geometry, &flow).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.thrust.to_bits(), b.thrust.to_bits());
        assert_eq!(a.specific_impulse.to_bits(), b.specific_impulse.to_bits());
    }

    #[test]
    fn test_seed_geometry_is_enough() {
        let (geometry, flow) = example();
        let seed = NozzleGeometry::seed(0.008, 0.032);
        assert_eq!(
            calculate_performance(&seed, &flow).unwrap(),
            calculate_performance(&geometry, &flow).unwrap()
        );
    }

    #[test]
    fn test_solver_checks_own_preconditions() {
        let (_, flow) = example();

        let flat = NozzleGeometry::seed(0.01, 0.01);
        assert_eq!(
            calculate_performance(&flat, &flow),
            Err(NozzleError::invalid(Parameter::ExitRadius))
        );

        let (geometry, mut isothermal) = example();
        isothermal.gamma = 1.0;
        assert_eq!(
            calculate_performance(&geometry, &isothermal),
            Err(NozzleError::invalid(Parameter::Gamma))
        );
    }

    #[test]
    fn test_negative_exit_radius_rejected() {
        // Squaring the radii would hide the sign in the expansion ratio.
        let (_, flow) = example();
        let mirrored = NozzleGeometry::seed(0.008, -0.032);
        assert_eq!(mirrored.expansion_ratio(), 16.0);
        assert_eq!(
            calculate_performance(&mirrored, &flow),
            Err(NozzleError::invalid(Parameter::ExitRadius))
        );
        assert_eq!(
            calculate_performance(&NozzleGeometry::seed(-0.008, 0.032), &flow),
            Err(NozzleError::invalid(Parameter::ThroatRadius))
        );
    }

    #[test]
    fn test_non_positive_chamber_pressure_rejected() {
        let (geometry, mut flow) = example();
        for pressure in [-2.5e6, 0.0, f64::NAN] {
            flow.chamber_pressure = pressure;
            assert_eq!(
                calculate_performance(&geometry, &flow),
                Err(NozzleError::invalid(Parameter::ChamberPressure)),
                "chamber pressure {pressure} should be rejected"
            );
        }
    }

    #[test]
    fn test_non_physical_flow_is_domain_error() {
        let (geometry, mut flow) = example();
        flow.chamber_temperature = -3600.0;
        assert!(matches!(
            calculate_performance(&geometry, &flow),
            Err(NozzleError::DomainError { .. })
        ));
    }
}
