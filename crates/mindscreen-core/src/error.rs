use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid risk level: {0}")]
    InvalidRiskLevel(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
