/// Rejected tuning-surface writes
#[derive(Debug, thiserror::Error)]
pub enum TuningError {
    /// No slider is registered under this name.
    #[error("unknown parameter: {0}")]
    UnknownParameter(String),
    /// NaN or infinity was written to a parameter.
    #[error("parameter {name} must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },
    /// A constants document could not be parsed.
    #[error("invalid constants json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Asset loader outcomes the scene has to remember
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AssetError {
    #[error("boat model failed to load: {0}")]
    LoadFailed(String),
}
