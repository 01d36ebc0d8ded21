use thiserror::Error;

#[derive(Error, Debug)]
pub enum SaveError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] rmp_serde::encode::Error),

    #[error("Deserialization error: {0}")]
    Deserialization(#[from] rmp_serde::decode::Error),

    #[error("JSON snapshot error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Decompression error")]
    Decompression,

    #[error("Corrupted data: {reason}")]
    Corrupted { reason: String },

    #[error("Version mismatch: found {found}, expected {expected}")]
    VersionMismatch { found: u32, expected: u32 },

    #[error("Checksum mismatch")]
    ChecksumMismatch,

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Save data too large: {size} deliveries")]
    DataTooLarge { size: usize },
}

impl SaveError {
    pub fn corrupted(reason: impl Into<String>) -> Self {
        SaveError::Corrupted { reason: reason.into() }
    }

    pub fn is_recoverable(&self) -> bool {
        matches!(self, SaveError::Io(_) | SaveError::FileNotFound { .. })
    }
}
