use cvm_core::{Field, Sweep};
use prometheus::{Gauge, GaugeVec, Opts, Registry};

pub struct SweepMetrics {
    pub sweep_samples: Gauge,
    pub field_min: GaugeVec,
    pub field_max: GaugeVec,
    pub parity_deviation: GaugeVec,
}

impl SweepMetrics {
    pub fn new(registry: &Registry) -> prometheus::Result<Self> {
        let sweep_samples = Gauge::new("cvm_sweep_samples", "Number of x samples in the last sweep")?;

        let field_min = GaugeVec::new(
            Opts::new("cvm_field_min", "Smallest value of each sweep array"),
            &["field"],
        )?;

        let field_max = GaugeVec::new(
            Opts::new("cvm_field_max", "Largest value of each sweep array"),
            &["field"],
        )?;

        let parity_deviation = GaugeVec::new(
            Opts::new(
                "cvm_parity_deviation",
                "Largest absolute difference from a reference sweep",
            ),
            &["reference"],
        )?;

        registry.register(Box::new(sweep_samples.clone()))?;
        registry.register(Box::new(field_min.clone()))?;
        registry.register(Box::new(field_max.clone()))?;
        registry.register(Box::new(parity_deviation.clone()))?;

        Ok(Self {
            sweep_samples,
            field_min,
            field_max,
            parity_deviation,
        })
    }

    pub fn observe_sweep(&self, sweep: &Sweep) {
        self.sweep_samples.set(sweep.len() as f64);
        for field in Field::ALL {
            let values = sweep.field(field);
            if values.is_empty() {
                continue;
            }
            let (lo, hi) = values
                .iter()
                .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                    (lo.min(v), hi.max(v))
                });
            self.field_min.with_label_values(&[field.name()]).set(lo);
            self.field_max.with_label_values(&[field.name()]).set(hi);
        }
    }

    pub fn observe_deviation(&self, reference_id: &str, deviation: f64) {
        self.parity_deviation
            .with_label_values(&[reference_id])
            .set(deviation);
    }
}
