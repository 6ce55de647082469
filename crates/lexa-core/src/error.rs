use std::time::Duration;

/// Classified failure of a single provider call
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("HTTP {0}")]
    Status(u16),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Timed out after {0:?}")]
    Timeout(Duration),

    #[error("Malformed response: {0}")]
    Malformed(String),
}

impl ProviderError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ProviderError::Status(404))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("No definitions found for '{0}'")]
    NotFound(String),

    #[error("Transient network error: {0}")]
    Transient(#[from] ProviderError),

    /// Superseded by a newer request, never reported
    #[error("Request superseded")]
    Cancelled,
}

impl LookupError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, LookupError::Cancelled)
    }
}
