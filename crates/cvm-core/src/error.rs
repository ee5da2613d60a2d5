use thiserror::Error;

/// Everything that can stop a sweep. There is no partial result: either
/// every sample is valid or the run fails.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CvmError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("sample {index} has x = {x}, outside the open interval (0, 1)")]
    DomainViolation { index: usize, x: f64 },
    #[error("{field} is not finite at sample {index} (x = {x})")]
    NonFinite {
        field: &'static str,
        index: usize,
        x: f64,
    },
    #[error("arrays are not index-aligned: expected {expected} samples, found {found}")]
    LengthMismatch { expected: usize, found: usize },
}

pub type Result<T> = std::result::Result<T, CvmError>;
