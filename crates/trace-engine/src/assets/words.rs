use serde::Serialize;

/// Words offered out of the box.
pub const DEFAULT_WORDS: &[&str] = &[
    "Kenzie", "Jennie", "Wayne", "Mom", "Dad", "Tammy", "Phong", "Justin", "Linda", "Ed",
    "Toijee", "Wing", "Gina", "Jinwoo", "Oliver", "Gemma", "Cat", "Dog", "Love", "Hi", "Bye",
    "Butterfly", "Giraffe", "Elephant", "Rainbow", "Unicorn",
];

/// A word as listed in the menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordEntry {
    pub word: String,
    /// Added by the user (deletable) rather than built in.
    pub custom: bool,
}

/// Built-in words plus the user's custom words.
///
/// Only the custom list is saved, as a JSON array; storing it is the
/// host's job.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordCatalog {
    custom: Vec<String>,
}

impl WordCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore a catalog from a saved JSON array of custom words. Entries are
    /// sanitized again and duplicates dropped.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let saved: Vec<String> = serde_json::from_str(json)?;
        let mut catalog = Self::new();
        for word in &saved {
            catalog.add_custom(word);
        }
        Ok(catalog)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.custom)
    }

    /// Keep ASCII letters only; mixed case is preserved.
    pub fn sanitize(raw: &str) -> String {
        raw.trim().chars().filter(char::is_ascii_alphabetic).collect()
    }

    /// Add a custom word. Returns the stored spelling, or `None` when nothing
    /// is left after sanitizing or the word is already listed.
    pub fn add_custom(&mut self, raw: &str) -> Option<String> {
        let clean = Self::sanitize(raw);
        if clean.is_empty() || self.contains(&clean) {
            return None;
        }
        self.custom.push(clean.clone());
        Some(clean)
    }

    /// Remove a custom word. Built-in words cannot be removed.
    pub fn remove_custom(&mut self, word: &str) -> bool {
        let before = self.custom.len();
        self.custom.retain(|w| w != word);
        self.custom.len() != before
    }

    pub fn contains(&self, word: &str) -> bool {
        DEFAULT_WORDS.contains(&word) || self.custom.iter().any(|w| w == word)
    }

    pub fn custom_words(&self) -> &[String] {
        &self.custom
    }

    /// Built-in words first, then custom ones in insertion order.
    pub fn entries(&self) -> Vec<WordEntry> {
        DEFAULT_WORDS
            .iter()
            .map(|w| WordEntry {
                word: w.to_string(),
                custom: false,
            })
            .chain(self.custom.iter().map(|w| WordEntry {
                word: w.clone(),
                custom: true,
            }))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_keeps_letters() {
        assert_eq!(WordCatalog::sanitize("  Mc-Donald 2 "), "McDonald");
        assert_eq!(WordCatalog::sanitize("123"), "");
    }

    #[test]
    fn add_and_remove_custom() {
        let mut catalog = WordCatalog::new();
        assert_eq!(catalog.add_custom(" Zoe! "), Some("Zoe".to_string()));
        assert!(catalog.contains("Zoe"));
        assert!(catalog.remove_custom("Zoe"));
        assert!(!catalog.contains("Zoe"));
        assert!(!catalog.remove_custom("Zoe"));
    }

    #[test]
    fn duplicates_and_empties_rejected() {
        let mut catalog = WordCatalog::new();
        assert_eq!(catalog.add_custom("Cat"), None);
        assert_eq!(catalog.add_custom("!!!"), None);
        catalog.add_custom("Zoe");
        assert_eq!(catalog.add_custom("Zoe"), None);
        assert_eq!(catalog.custom_words().len(), 1);
    }

    #[test]
    fn builtin_words_cannot_be_removed() {
        let mut catalog = WordCatalog::new();
        assert!(!catalog.remove_custom("Cat"));
        assert!(catalog.contains("Cat"));
    }

    #[test]
    fn entries_list_builtins_then_custom() {
        let mut catalog = WordCatalog::new();
        catalog.add_custom("Zoe");
        let entries = catalog.entries();
        assert_eq!(entries.len(), DEFAULT_WORDS.len() + 1);
        assert!(!entries[0].custom);
        let last = entries.last().unwrap();
        assert_eq!(last.word, "Zoe");
        assert!(last.custom);
    }

    #[test]
    fn json_round_trip_resanitizes() {
        let catalog = WordCatalog::from_json(r#"["Zoe", "Zo e", "Cat", "7"]"#).unwrap();
        assert_eq!(catalog.custom_words(), &["Zoe".to_string()]);
        assert_eq!(catalog.to_json().unwrap(), r#"["Zoe"]"#);
    }

    #[test]
    fn saved_form_is_a_plain_array() {
        let mut catalog = WordCatalog::new();
        catalog.add_custom("Zoe");
        catalog.add_custom("Max");
        let json = catalog.to_json().unwrap();
        assert_eq!(json, r#"["Zoe","Max"]"#);
        assert!(WordCatalog::from_json(r#"{"custom":["Zoe"]}"#).is_err());
    }
}
