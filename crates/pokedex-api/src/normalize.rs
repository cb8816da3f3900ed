//! Turns a decoded payload into a complete [`CreatureRecord`], or fails.
//!
//! Checks run in order: name, id, thumbnail, artwork. The two image
//! downloads happen concurrently, but a failure is still reported against
//! the earliest step that failed. No partial record ever escapes.

use pokedex_core::models::{CreatureRecord, Image};
use pokedex_core::title::title_case;

use crate::error::NormalizationError;
use crate::extras::ArtworkExtras;
use crate::transport::Fetch;
use crate::types::PokemonPayload;

/// Validate `payload` and download both images.
///
/// `raw` is the original response body; the artwork URL is read from it
/// because the strict schema does not model it.
pub async fn normalize<F: Fetch>(
    fetch: &F,
    payload: PokemonPayload,
    raw: &[u8],
) -> Result<CreatureRecord, NormalizationError> {
    let name = payload
        .name
        .as_deref()
        .map(title_case)
        .ok_or(NormalizationError::MissingName)?;
    let id = payload.id.ok_or(NormalizationError::MissingId)?;
    let thumbnail_url = payload
        .thumbnail_url()
        .ok_or(NormalizationError::MissingThumbnail)?;
    let extras = ArtworkExtras::from_raw(raw);

    let (thumbnail, artwork) = tokio::join!(load_image(fetch, thumbnail_url), async {
        match extras.official_artwork.as_deref() {
            Some(url) => load_image(fetch, url).await,
            None => None,
        }
    });

    let thumbnail = thumbnail.ok_or(NormalizationError::MissingThumbnail)?;
    let artwork = artwork.ok_or(NormalizationError::MissingArtwork)?;

    Ok(CreatureRecord::new(
        id,
        name,
        payload.height,
        payload.weight,
        thumbnail,
        artwork,
    ))
}

async fn load_image<F: Fetch>(fetch: &F, url: &str) -> Option<Image> {
    let bytes = match fetch.get(url).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::debug!(url, error = %e, "Image download failed");
            return None;
        }
    };
    let image = Image::decode(bytes);
    if image.is_none() {
        tracing::debug!(url, "Downloaded bytes are not a valid image");
    }
    image
}
