//! Single-site, pair and triplet negative entropies.
//!
//! Each term is a sum of `p ln p` over the configuration variables of one
//! cluster type, with every probability built from `x` and `q = 1 - x`.
//! The multiplicity coefficients count degenerate configurations and must
//! not be normalised: the published curves depend on them exactly.

use crate::error::{CvmError, Result};
use crate::sampler::SampleSet;
use serde::{Deserialize, Serialize};

/// `x ln x + (1 - x) ln(1 - x)`, the Bernoulli entropy of one site, negated.
pub fn neg_x_entropy(x: f64) -> f64 {
    let q = 1.0 - x;
    x * x.ln() + q * q.ln()
}

/// Nearest-neighbour pair entropy, negated. `y2` covers the two mixed pairs
/// (A-B and B-A), hence its factor of 2.
pub fn neg_y_entropy(x: f64) -> f64 {
    let q = 1.0 - x;
    let y1 = x * x;
    let y2 = x * q;
    let y3 = q * q;
    y1 * y1.ln() + 2.0 * y2 * y2.ln() + y3 * y3.ln()
}

/// Triplet entropy, negated.
///
/// `z2` (A-A-B) and `z3` (A-B-A) are equal in value but enter as separate
/// terms, `z2` with weight 2 and `z3` with weight 1; `z5` also carries
/// weight 2. Kept exactly as derived so the output matches prior results.
pub fn neg_z_entropy(x: f64) -> f64 {
    let q = 1.0 - x;
    let z1 = x * x * x;
    let z2 = x * x * q;
    let z3 = x * q * x;
    let z4 = q * x * q;
    let z5 = q * q * x;
    let z6 = q * q * q;
    z1 * z1.ln()
        + 2.0 * z2 * z2.ln()
        + z3 * z3.ln()
        + z4 * z4.ln()
        + 2.0 * z5 * z5.ln()
        + z6 * z6.ln()
}

/// Per-sample entropy terms, index-aligned with the [`SampleSet`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EntropyFields {
    pub neg_x: Vec<f64>,
    pub neg_y: Vec<f64>,
    pub neg_z: Vec<f64>,
}

impl EntropyFields {
    pub fn evaluate(samples: &SampleSet) -> Result<Self> {
        Ok(Self {
            neg_x: map_finite(samples, "neg_x", neg_x_entropy)?,
            neg_y: map_finite(samples, "neg_y", neg_y_entropy)?,
            neg_z: map_finite(samples, "neg_z", neg_z_entropy)?,
        })
    }

    pub fn len(&self) -> usize {
        self.neg_x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neg_x.is_empty()
    }
}

fn map_finite(
    samples: &SampleSet,
    field: &'static str,
    f: impl Fn(f64) -> f64,
) -> Result<Vec<f64>> {
    samples
        .iter()
        .enumerate()
        .map(|(index, x)| ensure_finite(field, index, x, f(x)))
        .collect()
}

pub(crate) fn ensure_finite(field: &'static str, index: usize, x: f64, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CvmError::NonFinite { field, index, x })
    }
}
