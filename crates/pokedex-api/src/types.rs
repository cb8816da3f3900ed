use serde::Deserialize;

// ── Strict payload schema ───────────────────────────────────────
//
// Only the fields the record needs are modelled; everything else in the
// document is ignored. Nested artwork variants live in `extras`.

/// `GET /pokemon/{name}` response body.
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonPayload {
    pub name: Option<String>,
    pub id: Option<u32>,
    pub height: Option<u32>,
    pub weight: Option<u32>,
    pub sprites: Option<Sprites>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Sprites {
    pub front_default: Option<String>,
}

impl PokemonPayload {
    /// URL of the small front-facing sprite, if present.
    pub fn thumbnail_url(&self) -> Option<&str> {
        self.sprites.as_ref()?.front_default.as_deref()
    }
}
