use crate::aggregate::AggregateFields;
use crate::config::{Coefficients, SweepConfig};
use crate::entropy::EntropyFields;
use crate::error::{CvmError, Result};
use crate::sampler::SampleSet;
use crate::thermo::ThermoFields;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Every per-sample array a sweep produces, the x values included.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    X,
    NegX,
    NegY,
    NegZ,
    NegYW,
    NegXZ,
    NegTot,
    ActivationEnthalpy,
    InteractionEnthalpy,
    FreeEnergy,
}

impl Field {
    pub const ALL: [Field; 10] = [
        Field::X,
        Field::NegX,
        Field::NegY,
        Field::NegZ,
        Field::NegYW,
        Field::NegXZ,
        Field::NegTot,
        Field::ActivationEnthalpy,
        Field::InteractionEnthalpy,
        Field::FreeEnergy,
    ];

    /// Column name used in tables, figures, metrics labels and manifests.
    pub fn name(self) -> &'static str {
        match self {
            Field::X => "x",
            Field::NegX => "negXEntropy",
            Field::NegY => "negYEntropy",
            Field::NegZ => "negZEntropy",
            Field::NegYW => "negYWEntropy",
            Field::NegXZ => "negXZEntropy",
            Field::NegTot => "negTotEntropy",
            Field::ActivationEnthalpy => "activEnthalpy",
            Field::InteractionEnthalpy => "interactEnthalpy",
            Field::FreeEnergy => "freeEnergy",
        }
    }
}

/// One sample index read across every array.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SweepRow {
    pub index: usize,
    pub x: f64,
    pub neg_x: f64,
    pub neg_y: f64,
    pub neg_z: f64,
    pub neg_yw: f64,
    pub neg_xz: f64,
    pub neg_tot: f64,
    pub activation: f64,
    pub interaction: f64,
    pub free_energy: f64,
}

impl SweepRow {
    pub fn get(&self, field: Field) -> f64 {
        match field {
            Field::X => self.x,
            Field::NegX => self.neg_x,
            Field::NegY => self.neg_y,
            Field::NegZ => self.neg_z,
            Field::NegYW => self.neg_yw,
            Field::NegXZ => self.neg_xz,
            Field::NegTot => self.neg_tot,
            Field::ActivationEnthalpy => self.activation,
            Field::InteractionEnthalpy => self.interaction,
            Field::FreeEnergy => self.free_energy,
        }
    }
}

/// A finished run: configuration plus every array, all index-aligned with
/// the sample set. Immutable once built.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "SweepRecord")]
pub struct Sweep {
    config: SweepConfig,
    samples: SampleSet,
    entropy: EntropyFields,
    aggregate: AggregateFields,
    thermo: ThermoFields,
}

impl Sweep {
    pub fn evaluate(config: &SweepConfig) -> Result<Self> {
        config.validate()?;

        let samples = SampleSet::generate(config)?;
        debug!(
            samples = samples.len(),
            first = ?samples.values().first(),
            last = ?samples.values().last(),
            "generated sample set"
        );

        let entropy = EntropyFields::evaluate(&samples)?;
        debug!("evaluated single-site, pair and triplet entropies");

        let aggregate = AggregateFields::combine(&entropy);
        debug!("combined numerator and denominator entropies");

        let thermo = ThermoFields::evaluate(&config.coefficients, &samples, &entropy)?;
        debug!(
            eps0 = config.coefficients.eps0,
            eps1 = config.coefficients.eps1,
            "evaluated enthalpies and free energy"
        );

        info!(
            samples = samples.len(),
            step = config.step,
            increment = config.increment,
            "cvm sweep complete"
        );

        Ok(Self {
            config: *config,
            samples,
            entropy,
            aggregate,
            thermo,
        })
    }

    pub fn config(&self) -> &SweepConfig {
        &self.config
    }

    pub fn coefficients(&self) -> &Coefficients {
        &self.config.coefficients
    }

    pub fn samples(&self) -> &SampleSet {
        &self.samples
    }

    pub fn entropy(&self) -> &EntropyFields {
        &self.entropy
    }

    pub fn aggregate(&self) -> &AggregateFields {
        &self.aggregate
    }

    pub fn thermo(&self) -> &ThermoFields {
        &self.thermo
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn field(&self, field: Field) -> &[f64] {
        match field {
            Field::X => self.samples.values(),
            Field::NegX => &self.entropy.neg_x,
            Field::NegY => &self.entropy.neg_y,
            Field::NegZ => &self.entropy.neg_z,
            Field::NegYW => &self.aggregate.neg_yw,
            Field::NegXZ => &self.aggregate.neg_xz,
            Field::NegTot => &self.aggregate.neg_tot,
            Field::ActivationEnthalpy => &self.thermo.activation,
            Field::InteractionEnthalpy => &self.thermo.interaction,
            Field::FreeEnergy => &self.thermo.free_energy,
        }
    }

    pub fn row(&self, index: usize) -> Option<SweepRow> {
        let x = *self.samples.values().get(index)?;
        Some(SweepRow {
            index,
            x,
            neg_x: self.entropy.neg_x[index],
            neg_y: self.entropy.neg_y[index],
            neg_z: self.entropy.neg_z[index],
            neg_yw: self.aggregate.neg_yw[index],
            neg_xz: self.aggregate.neg_xz[index],
            neg_tot: self.aggregate.neg_tot[index],
            activation: self.thermo.activation[index],
            interaction: self.thermo.interaction[index],
            free_energy: self.thermo.free_energy[index],
        })
    }

    pub fn rows(&self) -> impl Iterator<Item = SweepRow> + '_ {
        (0..self.len()).filter_map(move |i| self.row(i))
    }

    /// Largest absolute per-sample difference between two sweeps, taken
    /// over every field.
    pub fn max_deviation(&self, other: &Sweep) -> Result<f64> {
        if self.len() != other.len() {
            return Err(CvmError::LengthMismatch {
                expected: self.len(),
                found: other.len(),
            });
        }
        let deviation = Field::ALL
            .iter()
            .flat_map(|&f| {
                self.field(f)
                    .iter()
                    .zip(other.field(f))
                    .map(|(a, b)| (a - b).abs())
            })
            .fold(0.0_f64, f64::max);
        Ok(deviation)
    }
}

/// Wire form of a [`Sweep`]. A deserialized sweep must satisfy the same
/// alignment and finiteness guarantees as an evaluated one.
#[derive(Deserialize)]
struct SweepRecord {
    config: SweepConfig,
    samples: SampleSet,
    entropy: EntropyFields,
    aggregate: AggregateFields,
    thermo: ThermoFields,
}

impl TryFrom<SweepRecord> for Sweep {
    type Error = CvmError;

    fn try_from(record: SweepRecord) -> Result<Self> {
        record.config.validate()?;
        let samples = &record.samples;
        if samples.count() != record.config.count
            || samples.step() != record.config.step
            || samples.increment() != record.config.increment
        {
            return Err(CvmError::InvalidConfig(
                "sample set was not generated by the recorded configuration".into(),
            ));
        }

        let sweep = Self {
            config: record.config,
            samples: record.samples,
            entropy: record.entropy,
            aggregate: record.aggregate,
            thermo: record.thermo,
        };
        let xs = sweep.samples.values();
        for field in Field::ALL {
            let values = sweep.field(field);
            if values.len() != xs.len() {
                return Err(CvmError::LengthMismatch {
                    expected: xs.len(),
                    found: values.len(),
                });
            }
            if let Some(index) = values.iter().position(|v| !v.is_finite()) {
                return Err(CvmError::NonFinite {
                    field: field.name(),
                    index,
                    x: xs[index],
                });
            }
        }
        Ok(sweep)
    }
}
