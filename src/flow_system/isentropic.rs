//! Perfect-gas isentropic relations referenced to chamber (stagnation)
//! conditions.

use crate::errors::{NozzleError, SolverStage};
use crate::model::flow::FlowConditions;

/// Static state at a nozzle station.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StationState {
    pub pressure: f64,    // Pa
    pub temperature: f64, // K
}

pub(crate) fn finite(value: f64, stage: SolverStage) -> Result<f64, NozzleError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(NozzleError::domain(stage))
    }
}

/// Choked throat: sonic static pressure and temperature.
pub fn throat_conditions(flow: &FlowConditions) -> Result<StationState, NozzleError> {
    let gamma = flow.gamma;
    let temperature_ratio = 2.0 / (gamma + 1.0);
    let pressure_ratio = temperature_ratio.powf(gamma / (gamma - 1.0));

    Ok(StationState {
        pressure: finite(
            flow.chamber_pressure * pressure_ratio,
            SolverStage::ThroatConditions,
        )?,
        temperature: finite(
            flow.chamber_temperature * temperature_ratio,
            SolverStage::ThroatConditions,
        )?,
    })
}

/// Static temperature ratio T/T0 at Mach `mach`.
pub fn temperature_ratio(gamma: f64, mach: f64) -> f64 {
    1.0 / (1.0 + (gamma - 1.0) / 2.0 * mach * mach)
}

/// Static pressure ratio p/p0 at Mach `mach`.
pub fn pressure_ratio(gamma: f64, mach: f64) -> f64 {
    temperature_ratio(gamma, mach).powf(gamma / (gamma - 1.0))
}

/// Static state at Mach `mach`.
pub fn station_at_mach(flow: &FlowConditions, mach: f64) -> Result<StationState, NozzleError> {
    let temperature = flow.chamber_temperature * temperature_ratio(flow.gamma, mach);
    let pressure = flow.chamber_pressure * pressure_ratio(flow.gamma, mach);

    Ok(StationState {
        pressure: finite(pressure, SolverStage::ExitConditions)?,
        temperature: finite(temperature, SolverStage::ExitConditions)?,
    })
}

/// Flow velocity at Mach `mach` and static temperature `temperature`.
pub fn velocity_at(flow: &FlowConditions, mach: f64, temperature: f64) -> Result<f64, NozzleError> {
    let sound_speed_sq = flow.gamma * flow.specific_gas_constant() * temperature;
    if !(sound_speed_sq >= 0.0) {
        return Err(NozzleError::domain(SolverStage::ExitConditions));
    }
    finite(mach * sound_speed_sq.sqrt(), SolverStage::ExitConditions)
}

/// Characteristic velocity c*, independent of the nozzle.
pub fn characteristic_velocity(flow: &FlowConditions) -> Result<f64, NozzleError> {
    let gamma = flow.gamma;
    let numerator = gamma * flow.specific_gas_constant() * flow.chamber_temperature;
    let denominator = gamma * (2.0 / (gamma + 1.0)).powf((gamma + 1.0) / (gamma - 1.0));
    if !(numerator >= 0.0 && denominator > 0.0) {
        return Err(NozzleError::domain(SolverStage::CharacteristicVelocity));
    }
    finite(
        numerator.sqrt() / denominator.sqrt(),
        SolverStage::CharacteristicVelocity,
    )
}
