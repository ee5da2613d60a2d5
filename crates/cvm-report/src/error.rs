use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("figure {figure} could not be rendered: {reason}")]
    Plot { figure: u8, reason: String },
    #[error("manifest serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("manifest drops previously published entries: {}", .0.join(", "))]
    Incompatible(Vec<String>),
}
