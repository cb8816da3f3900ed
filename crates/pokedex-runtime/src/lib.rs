//! Wires the lookup client and the bookmark database into a catch list.

pub mod catch_list;
mod db;
mod store;

use pokedex_api::PokeApiClient;
use pokedex_core::config::AppConfig;

pub use catch_list::{CatchList, Observer};
pub use db::DbHandle;
pub use store::BookmarkStore;

#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    #[error("config error: {0}")]
    Config(String),
    #[error("database error: {0}")]
    Database(String),
    #[error("api client error: {0}")]
    Api(String),
}

/// The catch list as the application uses it.
pub type AppCatchList = CatchList<PokeApiClient, DbHandle>;

/// Owns the configuration and the live catch list.
pub struct Runtime {
    config: AppConfig,
    catch_list: AppCatchList,
}

impl Runtime {
    /// Build the HTTP client and open the bookmark database.
    ///
    /// The catch list starts empty; call
    /// [`CatchList::initialize`] to restore stored bookmarks.
    pub fn new(config: AppConfig) -> Result<Self, RuntimeError> {
        let db_path = config
            .ensure_db_path()
            .map_err(|e| RuntimeError::Config(e.to_string()))?;
        let db = DbHandle::open(&db_path).map_err(|e| RuntimeError::Database(e.to_string()))?;
        let client =
            PokeApiClient::from_config(&config.api).map_err(|e| RuntimeError::Api(e.to_string()))?;

        tracing::debug!(db = %db_path.display(), api = %config.api.base_url, "Runtime ready");
        Ok(Self {
            config,
            catch_list: CatchList::new(client, db),
        })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn catch_list(&self) -> &AppCatchList {
        &self.catch_list
    }

    pub fn catch_list_mut(&mut self) -> &mut AppCatchList {
        &mut self.catch_list
    }
}
