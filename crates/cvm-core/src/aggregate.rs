use crate::entropy::EntropyFields;
use serde::{Deserialize, Serialize};

/// Numerator of the total entropy, `2 * negY + negW`.
///
/// The W pairs (next-nearest neighbours) are modelled as having the same
/// distribution as the Y pairs, so `negY` stands in for `negW`.
pub fn neg_yw(neg_y: f64) -> f64 {
    let neg_w = neg_y;
    2.0 * neg_y + neg_w
}

/// Denominator of the total entropy, `2 * negZ + negX`.
pub fn neg_xz(neg_x: f64, neg_z: f64) -> f64 {
    2.0 * neg_z + neg_x
}

/// Signed total configurational entropy, `-(negYW - negXZ)`.
pub fn neg_tot(neg_yw: f64, neg_xz: f64) -> f64 {
    -(neg_yw - neg_xz)
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AggregateFields {
    pub neg_yw: Vec<f64>,
    pub neg_xz: Vec<f64>,
    pub neg_tot: Vec<f64>,
}

impl AggregateFields {
    pub fn combine(entropy: &EntropyFields) -> Self {
        let neg_yw: Vec<f64> = entropy.neg_y.iter().map(|&y| neg_yw(y)).collect();
        let neg_xz: Vec<f64> = entropy
            .neg_x
            .iter()
            .zip(&entropy.neg_z)
            .map(|(&x, &z)| neg_xz(x, z))
            .collect();
        let neg_tot = neg_yw
            .iter()
            .zip(&neg_xz)
            .map(|(&yw, &xz)| neg_tot(yw, xz))
            .collect();
        Self {
            neg_yw,
            neg_xz,
            neg_tot,
        }
    }
}
