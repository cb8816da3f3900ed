use thiserror::Error;

#[derive(Debug, Error)]
pub enum PokedexError {
    #[error("config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures of the bookmark store.
///
/// Callers log these and carry on; the in-memory catch list stays the
/// source of truth for the session.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("no bookmark named {name:?}")]
    Missing { name: String },

    #[error("{count} bookmarks share the name {name:?}, refusing to delete")]
    Ambiguous { name: String, count: usize },

    #[error("bookmark store unavailable: {0}")]
    Unavailable(String),
}
