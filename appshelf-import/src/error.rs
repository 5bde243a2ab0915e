/// Errors that can occur while fetching or parsing a remote feed.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("{source_name} did not respond within {seconds}s")]
    Timeout { source_name: String, seconds: u64 },

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),
}

impl ImportError {
    pub fn source_unavailable(msg: impl Into<String>) -> Self {
        Self::SourceUnavailable(msg.into())
    }
}
