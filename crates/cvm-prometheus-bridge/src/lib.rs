pub mod guards;
pub mod metrics;


pub use guards::reject_if_parity_drifts;
pub use metrics::SweepMetrics;
