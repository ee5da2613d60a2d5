use crate::config::Coefficients;
use crate::entropy::{ensure_finite, EntropyFields};
use crate::error::Result;
use crate::sampler::SampleSet;
use serde::{Deserialize, Serialize};

pub fn activation_enthalpy(eps0: f64, x: f64) -> f64 {
    eps0 * x
}

pub fn interaction_enthalpy(eps1: f64, x: f64) -> f64 {
    -eps1 * x * x
}

/// Simple Ising free energy: both enthalpy terms plus the single-site
/// negative entropy.
pub fn free_energy(activation: f64, interaction: f64, neg_x: f64) -> f64 {
    activation + interaction + neg_x
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ThermoFields {
    pub activation: Vec<f64>,
    pub interaction: Vec<f64>,
    pub free_energy: Vec<f64>,
}

impl ThermoFields {
    /// Independent of the aggregate terms; only `neg_x` is read from the
    /// entropy fields. Fails if a very large coefficient overflows.
    pub fn evaluate(
        coefficients: &Coefficients,
        samples: &SampleSet,
        entropy: &EntropyFields,
    ) -> Result<Self> {
        let activation: Vec<f64> = samples
            .iter()
            .map(|x| activation_enthalpy(coefficients.eps0, x))
            .collect();
        let interaction: Vec<f64> = samples
            .iter()
            .map(|x| interaction_enthalpy(coefficients.eps1, x))
            .collect();
        let free = samples
            .iter()
            .zip(activation.iter().zip(&interaction))
            .zip(&entropy.neg_x)
            .enumerate()
            .map(|(index, ((x, (&a, &i)), &s))| {
                ensure_finite("free_energy", index, x, free_energy(a, i, s))
            })
            .collect::<Result<Vec<f64>>>()?;
        Ok(Self {
            activation,
            interaction,
            free_energy: free,
        })
    }
}
