use url::Url;

use pokedex_core::config::ApiConfig;
use pokedex_core::models::CreatureRecord;

use crate::error::{LookupError, TransportError};
use crate::normalize::normalize;
use crate::traits::CreatureLookup;
use crate::transport::{Fetch, HttpTransport};
use crate::types::PokemonPayload;

/// PokeAPI v2 client.
pub struct PokeApiClient<F = HttpTransport> {
    base_url: Url,
    fetch: F,
}

impl PokeApiClient<HttpTransport> {
    pub fn from_config(config: &ApiConfig) -> Result<Self, TransportError> {
        Self::with_transport(&config.base_url, HttpTransport::new(&config.user_agent)?)
    }
}

impl<F: Fetch> PokeApiClient<F> {
    pub fn with_transport(base_url: &str, fetch: F) -> Result<Self, TransportError> {
        let base_url =
            Url::parse(base_url).map_err(|e| TransportError::InvalidUrl(format!("{base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(TransportError::InvalidUrl(base_url.into()));
        }
        Ok(Self { base_url, fetch })
    }

    pub fn transport(&self) -> &F {
        &self.fetch
    }

    /// `{base}/pokemon/{name}` with the name lower-cased and escaped as a
    /// single path segment.
    pub fn pokemon_url(&self, name: &str) -> String {
        let mut url = self.base_url.clone();
        // Constructor rejected cannot-be-a-base URLs, so this always succeeds.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .push("pokemon")
                .push(&name.to_lowercase());
        }
        url.into()
    }

    /// Fetch, decode and normalize one creature.
    #[tracing::instrument(name = "lookup", skip_all, fields(name = %name))]
    pub async fn fetch_creature(&self, name: &str) -> Result<CreatureRecord, LookupError> {
        let url = self.pokemon_url(name);

        let raw = self.fetch.get(&url).await.map_err(|e| {
            tracing::warn!(url = %url, error = %e, "Lookup request failed");
            LookupError::Transport(e)
        })?;

        let payload: PokemonPayload = serde_json::from_slice(&raw).map_err(|e| {
            tracing::warn!(url = %url, error = %e, "Lookup response did not match schema");
            LookupError::Decode(e)
        })?;

        let record = normalize(&self.fetch, payload, &raw).await.map_err(|e| {
            tracing::debug!(reason = %e, "Lookup response incomplete");
            LookupError::Incomplete(e)
        })?;

        tracing::debug!(id = record.id(), resolved = record.name(), "Lookup resolved");
        Ok(record)
    }
}

impl<F: Fetch> CreatureLookup for PokeApiClient<F> {
    async fn lookup(&self, name: &str) -> Result<CreatureRecord, LookupError> {
        self.fetch_creature(name).await
    }
}
