use serde::{Deserialize, Serialize};

use crate::constants::UNIVERSAL_GAS_CONSTANT;

/// Chamber and ambient conditions for a single perfect-gas propellant.
///
/// `gas_constant` is in J/(kmol·K) and `molecular_weight` in kg/mol; the
/// specific gas constant is their plain quotient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlowConditions {
    pub chamber_pressure: f64,    // Pa
    pub ambient_pressure: f64,    // Pa
    pub chamber_temperature: f64, // K
    pub molecular_weight: f64,    // kg/mol
    pub gamma: f64,               // specific heat ratio
    pub gas_constant: f64,        // J/(kmol·K)
}

impl FlowConditions {
    pub fn new(
        chamber_pressure: f64,
        ambient_pressure: f64,
        chamber_temperature: f64,
        molecular_weight: f64,
        gamma: f64,
    ) -> Self {
        FlowConditions {
            chamber_pressure,
            ambient_pressure,
            chamber_temperature,
            molecular_weight,
            gamma,
            gas_constant: UNIVERSAL_GAS_CONSTANT,
        }
    }

    pub fn with_gas_constant(mut self, gas_constant: f64) -> Self {
        self.gas_constant = gas_constant;
        self
    }

    pub fn specific_gas_constant(&self) -> f64 {
        self.gas_constant / self.molecular_weight
    }
}
