//! PokeAPI client: fetches a creature by name and resolves it into a
//! complete [`CreatureRecord`](pokedex_core::models::CreatureRecord).

pub mod client;
pub mod error;
pub mod extras;
pub mod normalize;
pub mod traits;
pub mod transport;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;

pub use client::PokeApiClient;
pub use error::{LookupError, NormalizationError, TransportError};
pub use traits::CreatureLookup;
