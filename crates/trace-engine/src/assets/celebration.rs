use serde::Deserialize;

use crate::effects::Rng;

/// Placeholder replaced by the completed word in restatement phrases.
pub const WORD_PLACEHOLDER: &str = "{word}";

/// Phrase pools for the word-complete message:
/// `"{opening}. {restatement}. {closing}"`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PhrasePools {
    pub openings: Vec<String>,
    /// May contain `{word}`.
    pub restatements: Vec<String>,
    pub closings: Vec<String>,
}

impl Default for PhrasePools {
    fn default() -> Self {
        Self {
            openings: strings(&["Great job", "Awesome"]),
            restatements: strings(&["The word is {word}"]),
            closings: strings(&["Way to go", "You did it"]),
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl PhrasePools {
    /// Parse pools from JSON; missing pools keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let pools: PhrasePools = serde_json::from_str(json)?;
        Ok(pools.or_defaults())
    }

    /// Replace any empty pool with the default one.
    pub fn or_defaults(mut self) -> Self {
        let defaults = Self::default();
        if self.openings.is_empty() {
            self.openings = defaults.openings;
        }
        if self.restatements.is_empty() {
            self.restatements = defaults.restatements;
        }
        if self.closings.is_empty() {
            self.closings = defaults.closings;
        }
        self
    }

    /// Build the celebration message, drawing each fragment independently.
    pub fn compose(&self, word: &str, rng: &mut Rng) -> String {
        let opening = rng.pick(&self.openings).map(String::as_str).unwrap_or("Great job");
        let restatement = rng
            .pick(&self.restatements)
            .map(String::as_str)
            .unwrap_or("The word is {word}")
            .replace(WORD_PLACEHOLDER, word);
        let closing = rng.pick(&self.closings).map(String::as_str).unwrap_or("You did it");
        format!("{opening}. {restatement}. {closing}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_message_shape() {
        let pools = PhrasePools::default();
        let mut rng = Rng::new(42);
        let msg = pools.compose("Cat", &mut rng);

        let parts: Vec<&str> = msg.split(". ").collect();
        assert_eq!(parts.len(), 3, "{msg}");
        assert!(pools.openings.iter().any(|o| o == parts[0]));
        assert_eq!(parts[1], "The word is Cat");
        assert!(pools.closings.iter().any(|c| c == parts[2]));
    }

    #[test]
    fn fragments_vary_independently() {
        let pools = PhrasePools::default();
        let mut rng = Rng::new(5);
        let messages: std::collections::HashSet<String> =
            (0..100).map(|_| pools.compose("Dog", &mut rng)).collect();
        // 2 openings × 2 closings
        assert_eq!(messages.len(), 4);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let pools = PhrasePools::from_json(r#"{ "openings": ["Hooray"], "closings": [] }"#).unwrap();
        assert_eq!(pools.openings, vec!["Hooray".to_string()]);
        assert_eq!(pools.closings, PhrasePools::default().closings);
        assert_eq!(pools.restatements, PhrasePools::default().restatements);
    }
}
