use thiserror::Error;

/// Errors raised at the edges of the scorer: setup documents, snapshots and
/// files. Scoring a delivery itself never fails.
#[derive(Error, Debug)]
pub enum ScoringError {
    #[error("Invalid match setup: {0}")]
    InvalidSetup(#[from] validator::ValidationErrors),

    #[error("Invalid match setup: {0}")]
    InvalidTeams(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unsupported setup file: {path}")]
    UnsupportedFormat { path: String },
}

impl ScoringError {
    /// Whether the caller can fix the input and try again.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            ScoringError::InvalidSetup(_)
                | ScoringError::InvalidTeams(_)
                | ScoringError::UnsupportedFormat { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ScoringError>;
