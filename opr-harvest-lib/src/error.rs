/// Errors that end a harvest run. Per-system and per-book fetch failures are
/// not errors at this level; they are logged and skipped.
#[derive(Debug, thiserror::Error)]
pub enum HarvestError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Inconsistent records: {0}")]
    Shape(String),
}

impl HarvestError {
    pub fn shape(msg: impl Into<String>) -> Self {
        Self::Shape(msg.into())
    }
}
