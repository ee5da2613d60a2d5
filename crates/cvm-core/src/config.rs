use crate::error::{CvmError, Result};
use serde::{Deserialize, Serialize};

/// How sample values are produced from the increment.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum Accumulation {
    /// Running sum: each sample adds `increment` to the previous one.
    /// Reproduces the published tables bit for bit.
    #[default]
    Additive,
    /// Direct product `(k + 1) * increment`.
    Scaled,
}

/// Enthalpy coefficients, fixed for an entire run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coefficients {
    /// Activation enthalpy per unit of x.
    pub eps0: f64,
    /// Pairwise interaction strength; the interaction enthalpy is `-eps1 * x^2`.
    pub eps1: f64,
}

impl Coefficients {
    pub fn new(eps0: f64, eps1: f64) -> Self {
        Self { eps0, eps1 }
    }

    /// Coefficients for the analytic equilibrium case, where
    /// `h = exp(beta * epsilon / 4)` with `beta = 1` and no activation term.
    pub fn equilibrium(h: f64) -> Result<Self> {
        if !h.is_finite() || h <= 0.0 {
            return Err(CvmError::InvalidConfig(format!(
                "h must be finite and positive, got {h}"
            )));
        }
        Ok(Self {
            eps0: 0.0,
            eps1: 4.0 * h.ln(),
        })
    }

    pub fn validate(&self) -> Result<()> {
        if !self.eps0.is_finite() {
            return Err(CvmError::InvalidConfig(format!(
                "eps0 must be finite, got {}",
                self.eps0
            )));
        }
        if !self.eps1.is_finite() {
            return Err(CvmError::InvalidConfig(format!(
                "eps1 must be finite, got {}",
                self.eps1
            )));
        }
        Ok(())
    }
}

impl Default for Coefficients {
    fn default() -> Self {
        Self {
            eps0: 1.0,
            eps1: 1.0,
        }
    }
}

/// Everything a run depends on. Constructed once, validated, then read by
/// every stage of the pipeline.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SweepConfig {
    /// Upper bound of the sample index range.
    pub count: usize,
    /// Stride through the index range; 1 samples every index.
    pub step: usize,
    /// Spacing between consecutive x values.
    pub increment: f64,
    pub accumulation: Accumulation,
    pub coefficients: Coefficients,
}

impl SweepConfig {
    pub const CANONICAL_COUNT: usize = 99;
    pub const CANONICAL_STEP: usize = 1;
    pub const CANONICAL_INCREMENT: f64 = 0.01;

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    pub fn with_step(mut self, step: usize) -> Self {
        self.step = step;
        self
    }

    pub fn with_increment(mut self, increment: f64) -> Self {
        self.increment = increment;
        self
    }

    pub fn with_accumulation(mut self, accumulation: Accumulation) -> Self {
        self.accumulation = accumulation;
        self
    }

    pub fn with_coefficients(mut self, coefficients: Coefficients) -> Self {
        self.coefficients = coefficients;
        self
    }

    /// Rejects non-positive count, step or increment and non-finite
    /// coefficients. Must pass before any array is allocated.
    pub fn validate(&self) -> Result<()> {
        if self.count == 0 {
            return Err(CvmError::InvalidConfig(
                "sample count must be positive".into(),
            ));
        }
        if self.step == 0 {
            return Err(CvmError::InvalidConfig("step must be positive".into()));
        }
        if !self.increment.is_finite() || self.increment <= 0.0 {
            return Err(CvmError::InvalidConfig(format!(
                "increment must be finite and positive, got {}",
                self.increment
            )));
        }
        self.coefficients.validate()
    }
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            count: Self::CANONICAL_COUNT,
            step: Self::CANONICAL_STEP,
            increment: Self::CANONICAL_INCREMENT,
            accumulation: Accumulation::default(),
            coefficients: Coefficients::default(),
        }
    }
}
