use log::info;
use serde::Serialize;

use crate::errors::{NozzleError, OutputError};
use crate::flow_system::performance::PerformanceSolver;
use crate::geometry_system::contour::ContourGenerator;
use crate::model::flow::FlowConditions;
use crate::model::geometry::NozzleGeometry;
use crate::model::performance::PerformanceResults;
use crate::validation::validate;

/// Generated geometry together with the performance it delivers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NozzleDesign {
    pub geometry: NozzleGeometry,
    pub performance: PerformanceResults,
}

impl NozzleDesign {
    /// Validate, generate the contour, then solve, with default settings.
    pub fn compute(
        seed: &NozzleGeometry,
        flow: &FlowConditions,
        length_fraction: f64,
    ) -> Result<Self, NozzleError> {
        Self::with_config(
            &ContourGenerator::default(),
            &PerformanceSolver::default(),
            seed,
            flow,
            length_fraction,
        )
    }

    pub fn with_config(
        generator: &ContourGenerator,
        solver: &PerformanceSolver,
        seed: &NozzleGeometry,
        flow: &FlowConditions,
        length_fraction: f64,
    ) -> Result<Self, NozzleError> {
        validate(seed, flow)?;

        info!("Calculating nozzle geometry");
        let geometry =
            generator.generate(seed.throat_radius(), seed.exit_radius(), length_fraction)?;

        info!("Calculating performance");
        let performance = solver.solve(&geometry, flow)?;

        Ok(NozzleDesign {
            geometry,
            performance,
        })
    }

    pub fn to_json(&self) -> Result<String, OutputError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
