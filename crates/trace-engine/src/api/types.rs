use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Hint policy for the tracing canvas. Affects what is drawn and whether
/// strokes may be traced out of order; never the hit tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuidanceMode {
    /// No hints at all.
    Off,
    /// Faint paths only; strokes may be traced in any order.
    Loose,
    /// Faint paths, pulsing target and an animated pacing dot.
    #[default]
    GhostPlus,
    /// Faint paths and a pulsing target on the next point.
    Strict,
}

impl GuidanceMode {
    pub const ALL: [GuidanceMode; 4] = [
        Self::Off,
        Self::Loose,
        Self::GhostPlus,
        Self::Strict,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Loose => "loose",
            Self::GhostPlus => "ghost_plus",
            Self::Strict => "strict",
        }
    }
}

impl fmt::Display for GuidanceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a guidance mode name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMode(pub String);

impl fmt::Display for UnknownMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown guidance mode `{}`", self.0)
    }
}

impl std::error::Error for UnknownMode {}

impl FromStr for GuidanceMode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| UnknownMode(s.to_string()))
    }
}

/// Identifies one spoken-completion request. The host hands it back when the
/// speech ends; stale tickets are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct NarrationTicket(pub u32);

/// Something the host should react to, drained once per frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TraceEvent {
    WordStarted { word: String },
    LetterLoaded { index: usize, ch: char },
    /// No glyph data for the character; treated as already complete.
    LetterSkipped { index: usize, ch: char },
    LetterComplete { index: usize, ch: char },
    WordComplete { word: String, message: String },
    /// The celebration is over and the host should show the menu again.
    ReturnToMenu,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_names_round_trip() {
        for mode in GuidanceMode::ALL {
            assert_eq!(mode.as_str().parse::<GuidanceMode>(), Ok(mode));
        }
    }

    #[test]
    fn unknown_mode_name() {
        let err = "wild".parse::<GuidanceMode>().unwrap_err();
        assert_eq!(err, UnknownMode("wild".to_string()));
    }

    #[test]
    fn mode_serde_matches_names() {
        let json = serde_json::to_string(&GuidanceMode::GhostPlus).unwrap();
        assert_eq!(json, "\"ghost_plus\"");
    }

    #[test]
    fn event_json_is_tagged() {
        let json = serde_json::to_string(&TraceEvent::LetterComplete { index: 1, ch: 'i' }).unwrap();
        assert_eq!(json, r#"{"kind":"letter_complete","index":1,"ch":"i"}"#);
    }
}
