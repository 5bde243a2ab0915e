use appshelf_vdf::VdfError;

/// Errors that can occur during store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Corrupt snapshot {path}: {reason}")]
    CorruptSnapshot { path: String, reason: String },

    #[error("Source unavailable: {0}")]
    SourceUnavailable(String),

    /// A default-path operation on a store created without one.
    #[error("Store has no default snapshot path")]
    NoDefaultPath,

    #[error("Cache decode error: {0}")]
    Vdf(#[from] VdfError),

    #[error("Snapshot serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl StoreError {
    pub fn corrupt(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::CorruptSnapshot {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn source_unavailable(msg: impl Into<String>) -> Self {
        Self::SourceUnavailable(msg.into())
    }
}
