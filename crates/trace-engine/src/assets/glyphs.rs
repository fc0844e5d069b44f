use std::collections::HashMap;

use serde::Deserialize;

use crate::geometry::instruction::StrokeInstruction;

/// Read-only lookup from a character to the strokes that draw it.
pub trait GlyphSource {
    /// Stroke instructions for `ch` in tracing order, or `None` if the
    /// character has no glyph (the tracer skips it).
    fn strokes_for(&self, ch: char) -> Option<&[StrokeInstruction]>;

    fn has_glyph(&self, ch: char) -> bool {
        self.strokes_for(ch).is_some()
    }
}

impl GlyphSource for HashMap<char, Vec<StrokeInstruction>> {
    fn strokes_for(&self, ch: char) -> Option<&[StrokeInstruction]> {
        self.get(&ch).map(Vec::as_slice)
    }
}

/// One glyph entry: either a bare stroke list or an object with `strokes`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum GlyphEntry {
    Strokes(Vec<StrokeInstruction>),
    Detailed { strokes: Vec<StrokeInstruction> },
}

impl GlyphEntry {
    pub fn strokes(&self) -> &[StrokeInstruction] {
        match self {
            GlyphEntry::Strokes(strokes) => strokes,
            GlyphEntry::Detailed { strokes } => strokes,
        }
    }
}

/// A named set of glyphs (e.g. uppercase, lowercase, digits).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GlyphPack {
    #[serde(default)]
    pub name: Option<String>,
    /// Character (as a one-character string key) → glyph.
    #[serde(default)]
    pub items: HashMap<String, GlyphEntry>,
}

impl GlyphPack {
    pub fn get(&self, ch: char) -> Option<&GlyphEntry> {
        let mut buf = [0u8; 4];
        self.items.get(&*ch.encode_utf8(&mut buf))
    }
}

/// Ordered glyph packs; the first pack that defines a character wins.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct GlyphPacks {
    pub packs: Vec<GlyphPack>,
}

impl GlyphPacks {
    pub fn new(packs: Vec<GlyphPack>) -> Self {
        Self { packs }
    }

    /// Parse a JSON array of packs.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Every character defined by at least one pack.
    pub fn characters(&self) -> impl Iterator<Item = char> + '_ {
        self.packs
            .iter()
            .flat_map(|pack| pack.items.keys())
            .filter_map(|key| {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => Some(ch),
                    _ => None,
                }
            })
    }
}

impl GlyphSource for GlyphPacks {
    fn strokes_for(&self, ch: char) -> Option<&[StrokeInstruction]> {
        self.packs
            .iter()
            .find_map(|pack| pack.get(ch))
            .map(GlyphEntry::strokes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    const PACKS_JSON: &str = r#"[
        {
            "name": "upper",
            "items": {
                "H": [
                    { "type": "line", "start": [20, 10], "end": [20, 90] },
                    { "type": "line", "start": [80, 10], "end": [80, 90] },
                    { "type": "line", "start": [20, 50], "end": [80, 50] }
                ],
                "O": { "strokes": [
                    { "type": "arc", "cx": 50, "cy": 50, "rx": 35, "ry": 40, "start": 270, "end": 270, "direction": "ccw" }
                ] }
            }
        },
        {
            "name": "lower",
            "items": {
                "i": [
                    { "type": "line", "start": [50, 40], "end": [50, 90] }
                ],
                "H": [
                    { "type": "line", "start": [0, 0], "end": [1, 1] }
                ]
            }
        }
    ]"#;

    #[test]
    fn parse_packs() {
        let packs = GlyphPacks::from_json(PACKS_JSON).unwrap();
        assert_eq!(packs.packs.len(), 2);
        assert_eq!(packs.packs[0].name.as_deref(), Some("upper"));
    }

    #[test]
    fn bare_and_detailed_entries() {
        let packs = GlyphPacks::from_json(PACKS_JSON).unwrap();
        assert_eq!(packs.strokes_for('H').unwrap().len(), 3);
        assert_eq!(packs.strokes_for('O').unwrap().len(), 1);
    }

    #[test]
    fn first_pack_wins() {
        let packs = GlyphPacks::from_json(PACKS_JSON).unwrap();
        let h = packs.strokes_for('H').unwrap();
        assert_eq!(
            h[0],
            StrokeInstruction::line(Vec2::new(20.0, 10.0), Vec2::new(20.0, 90.0))
        );
    }

    #[test]
    fn later_packs_are_searched() {
        let packs = GlyphPacks::from_json(PACKS_JSON).unwrap();
        assert!(packs.has_glyph('i'));
    }

    #[test]
    fn missing_glyph_is_none() {
        let packs = GlyphPacks::from_json(PACKS_JSON).unwrap();
        assert!(packs.strokes_for('z').is_none());
        assert!(!packs.has_glyph('!'));
    }

    #[test]
    fn characters_lists_single_char_keys() {
        let mut chars: Vec<char> = GlyphPacks::from_json(PACKS_JSON).unwrap().characters().collect();
        chars.sort_unstable();
        chars.dedup();
        assert_eq!(chars, vec!['H', 'O', 'i']);
    }

    #[test]
    fn hash_map_source() {
        let mut map = HashMap::new();
        map.insert('x', vec![StrokeInstruction::line(Vec2::ZERO, Vec2::ONE)]);
        assert!(map.has_glyph('x'));
        assert!(map.strokes_for('y').is_none());
    }
}
