//! Configuration entropies and a simple Ising free energy for the 2-D
//! Cluster Variation Method, swept over the fraction `x` of A-state units.
//!
//! The pipeline runs strictly forward:
//!
//! ```text
//! SweepConfig -> SampleSet -> EntropyFields -> AggregateFields
//!                                  \-> ThermoFields
//! ```
//!
//! Every stage is a pure elementwise map over the sample index domain; the
//! assembled [`Sweep`] owns every array, all aligned on the sample index.

pub mod aggregate;
pub mod config;
pub mod entropy;
pub mod error;
pub mod sampler;
pub mod sweep;
pub mod thermo;

#[cfg(test)]
mod tests;

pub use aggregate::*;
pub use config::*;
pub use entropy::*;
pub use error::*;
pub use sampler::*;
pub use sweep::*;
pub use thermo::*;
