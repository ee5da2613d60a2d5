use crate::SweepMetrics;
use cvm_core::{Result, Sweep};
use tracing::warn;

/// Records how far `candidate` is from `reference` and returns `true` when
/// it drifts beyond `tolerance`. Misaligned sweeps are an error, not drift.
pub fn reject_if_parity_drifts(
    metrics: &SweepMetrics,
    reference_id: &str,
    reference: &Sweep,
    candidate: &Sweep,
    tolerance: f64,
) -> Result<bool> {
    let deviation = reference.max_deviation(candidate)?;
    metrics.observe_deviation(reference_id, deviation);
    let drifted = deviation > tolerance;
    if drifted {
        warn!(
            reference = reference_id,
            deviation, tolerance, "sweep drifted from reference"
        );
    }
    Ok(drifted)
}
