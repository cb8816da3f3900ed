//! The lookup seam consumed by the catch list.

use std::future::Future;

use pokedex_core::models::CreatureRecord;

use crate::error::LookupError;

/// Resolves a creature name into a complete record.
///
/// Each call produces exactly one outcome. Implementations do not retry
/// and do not cache.
pub trait CreatureLookup: Send + Sync {
    fn lookup(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<CreatureRecord, LookupError>> + Send;
}
