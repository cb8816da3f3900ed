use thiserror::Error;

/// Errors from the HTTP layer.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP status {status} for {url}")]
    Status { status: u16, url: String },

    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}

/// Why a decoded payload could not become a complete record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NormalizationError {
    #[error("payload has no name")]
    MissingName,

    #[error("payload has no id")]
    MissingId,

    #[error("thumbnail sprite missing or unreadable")]
    MissingThumbnail,

    #[error("official artwork missing or unreadable")]
    MissingArtwork,
}

/// Outcome of a failed lookup.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("decode error: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("incomplete record: {0}")]
    Incomplete(#[from] NormalizationError),
}

impl LookupError {
    /// Message shown to the user. Every failure kind reads the same; the
    /// variant only matters for logs.
    pub fn user_message(&self, name: &str) -> String {
        format!("Could not find details for a pokemon named {name}. Please try again.")
    }
}
