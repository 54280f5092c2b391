use thiserror::Error;

/// Rejected configuration values
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config field `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, reason: &'static str) -> Self {
        Self::Invalid { field, reason }
    }
}

/// Failure reported by a score sink
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("score sink unavailable: {0}")]
    Unavailable(String),

    #[error("score submission for `{player}` rejected: {reason}")]
    Rejected { player: String, reason: String },
}
