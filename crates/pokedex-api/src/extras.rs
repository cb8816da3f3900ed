//! Loose, optional reads of the raw response document.
//!
//! The strict [`PokemonPayload`](crate::types::PokemonPayload) schema does
//! not model the nested `sprites.other` variants. Fields needed from there
//! are pulled out of the untyped JSON here, so the strict decode path never
//! has to change when these variants do.

use serde_json::Value;

const OFFICIAL_ARTWORK_POINTER: &str = "/sprites/other/official-artwork/front_default";

/// Extra fields read from the raw document. Every field is optional and a
/// malformed document simply yields nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtworkExtras {
    pub official_artwork: Option<String>,
}

impl ArtworkExtras {
    pub fn from_raw(raw: &[u8]) -> Self {
        let Ok(doc) = serde_json::from_slice::<Value>(raw) else {
            return Self::default();
        };
        Self::from_value(&doc)
    }

    pub fn from_value(doc: &Value) -> Self {
        Self {
            official_artwork: doc
                .pointer(OFFICIAL_ARTWORK_POINTER)
                .and_then(Value::as_str)
                .map(str::to_owned),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_official_artwork() {
        let raw = br#"{
            "sprites": {
                "front_default": "https://example.test/front/1.png",
                "other": {
                    "dream_world": { "front_default": "https://example.test/dream/1.svg" },
                    "official-artwork": { "front_default": "https://example.test/art/1.png" }
                }
            }
        }"#;
        let extras = ArtworkExtras::from_raw(raw);
        assert_eq!(
            extras.official_artwork.as_deref(),
            Some("https://example.test/art/1.png")
        );
    }

    #[test]
    fn missing_path_yields_none() {
        let raw = br#"{ "sprites": { "other": {} } }"#;
        assert_eq!(ArtworkExtras::from_raw(raw), ArtworkExtras::default());

        let raw = br#"{ "sprites": { "front_default": "x" } }"#;
        assert!(ArtworkExtras::from_raw(raw).official_artwork.is_none());
    }

    #[test]
    fn wrong_type_yields_none() {
        let raw = br#"{ "sprites": { "other": { "official-artwork": { "front_default": 7 } } } }"#;
        assert!(ArtworkExtras::from_raw(raw).official_artwork.is_none());

        let raw = br#"{ "sprites": { "other": { "official-artwork": null } } }"#;
        assert!(ArtworkExtras::from_raw(raw).official_artwork.is_none());
    }

    #[test]
    fn invalid_json_yields_none() {
        assert_eq!(ArtworkExtras::from_raw(b"not json"), ArtworkExtras::default());
    }
}
