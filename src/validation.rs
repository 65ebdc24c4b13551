use log::debug;

use crate::errors::{NozzleError, Parameter};
use crate::model::flow::FlowConditions;
use crate::model::geometry::NozzleGeometry;

// Each check states the condition that must hold, so NaN fails it.
fn require(holds: bool, parameter: Parameter) -> Result<(), NozzleError> {
    if holds {
        Ok(())
    } else {
        Err(NozzleError::invalid(parameter))
    }
}

/// Checks geometry and flow inputs in a fixed order, stopping at the first
/// field that is out of range.
pub fn validate(geometry: &NozzleGeometry, flow: &FlowConditions) -> Result<(), NozzleError> {
    validate_radii(geometry.throat_radius(), geometry.exit_radius())?;
    validate_flow(flow)?;

    debug!("Input parameters validated successfully");
    Ok(())
}

pub fn validate_radii(throat_radius: f64, exit_radius: f64) -> Result<(), NozzleError> {
    require(throat_radius > 0.0, Parameter::ThroatRadius)?;
    require(exit_radius > throat_radius, Parameter::ExitRadius)
}

pub fn validate_flow(flow: &FlowConditions) -> Result<(), NozzleError> {
    require(flow.chamber_pressure > 0.0, Parameter::ChamberPressure)?;
    require(flow.ambient_pressure >= 0.0, Parameter::AmbientPressure)?;
    require(flow.chamber_temperature > 0.0, Parameter::ChamberTemperature)?;
    require(flow.molecular_weight > 0.0, Parameter::MolecularWeight)?;
    require(flow.gamma > 1.0, Parameter::Gamma)?;
    require(flow.gas_constant > 0.0, Parameter::GasConstant)
}

/// Bell length is a fraction of the reference cone, so it must lie in (0, 1].
pub fn validate_length_fraction(length_fraction: f64) -> Result<(), NozzleError> {
    require(
        length_fraction > 0.0 && length_fraction <= 1.0,
        Parameter::LengthFraction,
    )
}
