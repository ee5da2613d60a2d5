use crate::config::{Accumulation, SweepConfig};
use crate::error::{CvmError, Result};
use serde::{Deserialize, Serialize};

/// Ordered x values of one sweep, strictly increasing and strictly inside
/// (0, 1), together with the parameters that produced them.
///
/// The first sample sits one increment above zero, never at zero itself.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "SampleRecord")]
pub struct SampleSet {
    values: Vec<f64>,
    count: usize,
    step: usize,
    increment: f64,
}

impl SampleSet {
    /// Visits indices `0, step, 2 * step, ...` below `count`; the k-th
    /// visited index gets `x = (k + 1) * increment`.
    pub fn generate(config: &SweepConfig) -> Result<Self> {
        config.validate()?;

        let len = config.count.div_ceil(config.step);
        let mut values = Vec::with_capacity(len);
        let mut running = 0.0_f64;
        for k in 0..len {
            let x = match config.accumulation {
                Accumulation::Additive => {
                    running += config.increment;
                    running
                }
                Accumulation::Scaled => (k + 1) as f64 * config.increment,
            };
            if !(x > 0.0 && x < 1.0) {
                return Err(CvmError::DomainViolation { index: k, x });
            }
            values.push(x);
        }

        Ok(Self {
            values,
            count: config.count,
            step: config.step,
            increment: config.increment,
        })
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn increment(&self) -> f64 {
        self.increment
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().copied()
    }
}

/// Wire form of a [`SampleSet`]; re-checked before it becomes one.
#[derive(Deserialize)]
struct SampleRecord {
    values: Vec<f64>,
    count: usize,
    step: usize,
    increment: f64,
}

impl TryFrom<SampleRecord> for SampleSet {
    type Error = CvmError;

    fn try_from(record: SampleRecord) -> Result<Self> {
        if record.count == 0 || record.step == 0 {
            return Err(CvmError::InvalidConfig(
                "sample count and step must be positive".into(),
            ));
        }
        if !record.increment.is_finite() || record.increment <= 0.0 {
            return Err(CvmError::InvalidConfig(format!(
                "increment must be finite and positive, got {}",
                record.increment
            )));
        }
        let expected = record.count.div_ceil(record.step);
        if record.values.len() != expected {
            return Err(CvmError::LengthMismatch {
                expected,
                found: record.values.len(),
            });
        }
        for (index, &x) in record.values.iter().enumerate() {
            if !(x > 0.0 && x < 1.0) {
                return Err(CvmError::DomainViolation { index, x });
            }
        }
        if record.values.windows(2).any(|w| w[0] >= w[1]) {
            return Err(CvmError::InvalidConfig(
                "sample values must be strictly increasing".into(),
            ));
        }
        Ok(Self {
            values: record.values,
            count: record.count,
            step: record.step,
            increment: record.increment,
        })
    }
}
