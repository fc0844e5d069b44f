use std::collections::HashMap;

use serde::Deserialize;

use super::celebration::PhrasePools;
use super::glyphs::GlyphPacks;

/// Game content bundle as shipped with the page.
///
/// `globalAudio` holds the celebration phrase pools keyed by message slot:
/// `"A"` openings, `"B"` restatements, `"C"` closings. Absent or empty slots
/// fall back to the default pools.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameContent {
    #[serde(default)]
    pub packs: GlyphPacks,
    #[serde(default)]
    pub global_audio: HashMap<String, Vec<String>>,
}

impl GameContent {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn phrase_pools(&self) -> PhrasePools {
        let slot = |key: &str| self.global_audio.get(key).cloned().unwrap_or_default();
        PhrasePools {
            openings: slot("A"),
            restatements: slot("B"),
            closings: slot("C"),
        }
        .or_defaults()
    }
}
