use std::fmt;

use thiserror::Error;

/// Input field that failed a range check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parameter {
    ThroatRadius,
    ExitRadius,
    ChamberPressure,
    AmbientPressure,
    ChamberTemperature,
    MolecularWeight,
    Gamma,
    GasConstant,
    LengthFraction,
    ConicalHalfAngle,
    SampleCount,
    MachIterations,
}

impl Parameter {
    /// Requirement the field failed to meet, suitable for user-facing text.
    pub fn requirement(&self) -> &'static str {
        match self {
            Parameter::ThroatRadius => "throat radius must be positive",
            Parameter::ExitRadius => "exit radius must be greater than throat radius",
            Parameter::ChamberPressure => "chamber pressure must be positive",
            Parameter::AmbientPressure => "ambient pressure cannot be negative",
            Parameter::ChamberTemperature => "chamber temperature must be positive",
            Parameter::MolecularWeight => "molecular weight must be positive",
            Parameter::Gamma => "specific heat ratio must be greater than 1.0",
            Parameter::GasConstant => "gas constant must be positive",
            Parameter::LengthFraction => "length fraction must be in (0, 1]",
            Parameter::ConicalHalfAngle => "reference cone half-angle must be in (0°, 90°)",
            Parameter::SampleCount => "contour needs between 2 and 100000 sample points",
            Parameter::MachIterations => "mach solver needs at least 1 iteration",
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Parameter::ThroatRadius => "throat_radius",
            Parameter::ExitRadius => "exit_radius",
            Parameter::ChamberPressure => "chamber_pressure",
            Parameter::AmbientPressure => "ambient_pressure",
            Parameter::ChamberTemperature => "chamber_temperature",
            Parameter::MolecularWeight => "molecular_weight",
            Parameter::Gamma => "gamma",
            Parameter::GasConstant => "gas_constant",
            Parameter::LengthFraction => "length_fraction",
            Parameter::ConicalHalfAngle => "conical_half_angle",
            Parameter::SampleCount => "sample_count",
            Parameter::MachIterations => "mach_iterations",
        };
        f.write_str(name)
    }
}

/// Computation step that produced a non-physical value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverStage {
    ThroatConditions,
    MachSeed,
    MachIteration,
    ExitConditions,
    CharacteristicVelocity,
    MassFlow,
    Thrust,
}

impl fmt::Display for SolverStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SolverStage::ThroatConditions => "throat conditions",
            SolverStage::MachSeed => "exit mach seed",
            SolverStage::MachIteration => "exit mach iteration",
            SolverStage::ExitConditions => "exit conditions",
            SolverStage::CharacteristicVelocity => "characteristic velocity",
            SolverStage::MassFlow => "mass flow rate",
            SolverStage::Thrust => "thrust",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum NozzleError {
    #[error("Invalid parameter {parameter}: {}", .parameter.requirement())]
    InvalidParameter { parameter: Parameter },

    #[error("Domain error in {stage}: non-finite or non-physical intermediate value")]
    DomainError { stage: SolverStage },
}

impl NozzleError {
    pub fn invalid(parameter: Parameter) -> Self {
        NozzleError::InvalidParameter { parameter }
    }

    pub fn domain(stage: SolverStage) -> Self {
        NozzleError::DomainError { stage }
    }
}

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl OutputError {
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        OutputError::Io {
            path: path.into(),
            source,
        }
    }
}
