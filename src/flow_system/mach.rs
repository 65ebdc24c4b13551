use log::trace;

use crate::constants::DEFAULT_MACH_ITERATIONS;
use crate::errors::{NozzleError, Parameter, SolverStage};

/// Slope used in each Newton step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NewtonSlope {
    /// `-C · (1/M² + (γ+1)/2 · g^(-k-1))`. Not the exact derivative, so ten
    /// steps stop short of the root.
    #[default]
    Simplified,
    /// Exact derivative of the residual; ten steps reach the root.
    Exact,
}

/// Supersonic exit Mach number for a given expansion ratio.
///
/// Starts from a closed-form approximate inverse and refines it with a fixed
/// number of Newton steps. There is no convergence test; the count is what
/// makes results reproducible. Every iterate must stay positive and finite,
/// otherwise the solve fails instead of handing NaN downstream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MachSolver {
    pub iterations: usize,
    pub slope: NewtonSlope,
}

impl Default for MachSolver {
    fn default() -> Self {
        MachSolver {
            iterations: DEFAULT_MACH_ITERATIONS,
            slope: NewtonSlope::default(),
        }
    }
}

impl MachSolver {
    pub fn new(iterations: usize) -> Result<Self, NozzleError> {
        if iterations == 0 {
            return Err(NozzleError::invalid(Parameter::MachIterations));
        }
        Ok(MachSolver {
            iterations,
            ..Self::default()
        })
    }

    pub fn with_slope(mut self, slope: NewtonSlope) -> Self {
        self.slope = slope;
        self
    }

    /// Approximate inverse: M0 = sqrt(2/(γ-1) · (AR^((γ-1)/γ) - 1)).
    pub fn seed(gamma: f64, expansion_ratio: f64) -> Result<f64, NozzleError> {
        let mach = (2.0 / (gamma - 1.0)
            * (expansion_ratio.powf((gamma - 1.0) / gamma) - 1.0))
            .sqrt();
        if mach.is_finite() && mach > 0.0 {
            Ok(mach)
        } else {
            Err(NozzleError::domain(SolverStage::MachSeed))
        }
    }

    pub fn solve(&self, gamma: f64, expansion_ratio: f64) -> Result<f64, NozzleError> {
        let mut mach = Self::seed(gamma, expansion_ratio)?;
        let residual = AreaMachResidual::new(gamma, expansion_ratio);
        trace!("Exit Mach seed: {mach}");

        for iteration in 0..self.iterations {
            let value = residual.value(mach);
            let slope = match self.slope {
                NewtonSlope::Simplified => residual.simplified_slope(mach),
                NewtonSlope::Exact => residual.derivative(mach),
            };
            if !value.is_finite() || !slope.is_finite() || slope == 0.0 {
                return Err(NozzleError::domain(SolverStage::MachIteration));
            }

            mach -= value / slope;
            trace!("Exit Mach iteration {}: M = {mach}, f = {value:e}", iteration + 1);

            if !(mach.is_finite() && mach > 0.0) {
                return Err(NozzleError::domain(SolverStage::MachIteration));
            }
        }

        Ok(mach)
    }
}

/// f(M) = C · (1 + (γ-1)/2 · M²)^(-k) / M - 1/AR,
/// with C = ((γ+1)/2)^k and k = (γ+1) / (2(γ-1)).
#[derive(Debug, Clone, Copy)]
struct AreaMachResidual {
    gamma: f64,
    coefficient: f64,
    exponent: f64,
    target: f64,
}

impl AreaMachResidual {
    fn new(gamma: f64, expansion_ratio: f64) -> Self {
        let exponent = (gamma + 1.0) / (2.0 * (gamma - 1.0));
        AreaMachResidual {
            gamma,
            coefficient: ((gamma + 1.0) / 2.0).powf(exponent),
            exponent,
            target: 1.0 / expansion_ratio,
        }
    }

    fn base(&self, mach: f64) -> f64 {
        1.0 + (self.gamma - 1.0) / 2.0 * mach * mach
    }

    fn value(&self, mach: f64) -> f64 {
        self.coefficient * self.base(mach).powf(-self.exponent) / mach - self.target
    }

    fn simplified_slope(&self, mach: f64) -> f64 {
        -self.coefficient
            * (1.0 / (mach * mach)
                + (self.gamma + 1.0) / 2.0 * self.base(mach).powf(-self.exponent - 1.0))
    }

    fn derivative(&self, mach: f64) -> f64 {
        let base = self.base(mach);
        -self.coefficient
            * (base.powf(-self.exponent) / (mach * mach)
                + (self.gamma + 1.0) / 2.0 * base.powf(-self.exponent - 1.0))
    }
}
