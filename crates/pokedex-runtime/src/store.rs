//! Bookmark persistence seam used by the catch list.

use std::future::Future;

use pokedex_core::error::StoreError;

use crate::db::DbHandle;

/// Durable set of bookmarked names.
pub trait BookmarkStore: Send + Sync {
    /// Every stored name.
    fn list(&self) -> impl Future<Output = Result<Vec<String>, StoreError>> + Send;

    /// Store `name`. Idempotent: an existing entry is left alone.
    fn add(&self, name: &str) -> impl Future<Output = Result<(), StoreError>> + Send;

    /// Delete the one entry stored under `name`. Zero or several matches
    /// delete nothing and return an error.
    fn remove(&self, name: &str) -> impl Future<Output = Result<(), StoreError>> + Send;
}

impl BookmarkStore for DbHandle {
    async fn list(&self) -> Result<Vec<String>, StoreError> {
        Ok(self
            .list_bookmarks()
            .await?
            .into_iter()
            .map(|entry| entry.name)
            .collect())
    }

    async fn add(&self, name: &str) -> Result<(), StoreError> {
        if !self.add_bookmark(name).await? {
            tracing::debug!(name, "Bookmark already stored");
        }
        Ok(())
    }

    async fn remove(&self, name: &str) -> Result<(), StoreError> {
        self.remove_bookmark(name).await
    }
}
