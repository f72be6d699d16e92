#![allow(dead_code)]
//! Dictionary of accepted words and the hidden-word list
//!
//! Embeds a default wordlist and hidden-word list at build time.
//! Everything is uppercased on construction; lookups are case-insensitive.

use std::collections::HashSet;

/// Embedded wordlist. Lowercase, alphabetic only, one per line.
pub static WORDS_DATA: &str = include_str!("../../data/words.txt");

/// Embedded hidden-word candidates, one per line.
pub static HIDDEN_WORDS_DATA: &str = include_str!("../../data/hidden_words.txt");

/// Accepted words plus the ordered list of words that may be hidden in a grid.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    valid_words: HashSet<String>,
    hidden_words: Vec<String>,
}

impl Dictionary {
    /// Build a dictionary from word lists.
    ///
    /// Hidden words are de-duplicated in order and must be purely alphabetic.
    /// They are only accepted as answers if `valid_words` also holds them.
    pub fn new<V, H>(valid_words: V, hidden_words: H) -> Self
    where
        V: IntoIterator,
        V::Item: AsRef<str>,
        H: IntoIterator,
        H::Item: AsRef<str>,
    {
        let valid: HashSet<String> = valid_words
            .into_iter()
            .filter_map(|w| normalize(w.as_ref()))
            .collect();

        let mut seen = HashSet::new();
        let hidden: Vec<String> = hidden_words
            .into_iter()
            .filter_map(|w| normalize(w.as_ref()))
            .filter(|w| w.chars().all(|c| c.is_ascii_alphabetic()))
            .filter(|w| seen.insert(w.clone()))
            .collect();

        Self {
            valid_words: valid,
            hidden_words: hidden,
        }
    }

    /// Build from newline-separated text sources.
    pub fn from_text(valid_text: &str, hidden_text: &str) -> Self {
        Self::new(valid_text.lines(), hidden_text.lines())
    }

    /// The dictionary compiled into the binary.
    pub fn builtin() -> Self {
        Self::from_text(WORDS_DATA, HIDDEN_WORDS_DATA)
    }

    /// Check if a word is accepted. Case-insensitive.
    pub fn is_valid_word(&self, word: &str) -> bool {
        self.valid_words.contains(&word.trim().to_uppercase())
    }

    /// The ordered hidden-word list.
    pub fn hidden_words(&self) -> &[String] {
        &self.hidden_words
    }

    /// Returns the total number of accepted words
    pub fn word_count(&self) -> usize {
        self.valid_words.len()
    }
}

fn normalize(word: &str) -> Option<String> {
    let word = word.trim();
    if word.is_empty() {
        None
    } else {
        Some(word.to_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> Dictionary {
        Dictionary::new(["TEST", "WORD", "HELLO"], ["SECRET", "HIDDEN"])
    }

    #[test]
    fn test_valid_words() {
        let dict = small();
        assert!(dict.is_valid_word("TEST"));
        assert!(dict.is_valid_word("WORD"));
        assert!(!dict.is_valid_word("INVALID"));
    }

    #[test]
    fn test_case_insensitive() {
        let dict = Dictionary::new(["hello"], Vec::<String>::new());
        assert!(dict.is_valid_word("Hello"));
        assert!(dict.is_valid_word("HELLO"));
        assert!(dict.is_valid_word("hello"));
    }

    #[test]
    fn test_hidden_words_kept_in_order() {
        let dict = small();
        assert_eq!(dict.hidden_words(), ["SECRET", "HIDDEN"]);
    }

    #[test]
    fn test_hidden_words_not_implicitly_valid() {
        let dict = small();
        assert!(!dict.is_valid_word("SECRET"));
        assert!(!dict.is_valid_word("hidden"));
        assert_eq!(dict.word_count(), 3);

        let dict = Dictionary::new(["DOG"], ["CAT"]);
        assert_eq!(dict.hidden_words(), ["CAT"]);
        assert!(!dict.is_valid_word("CAT"));
    }

    #[test]
    fn test_text_normalization() {
        let dict = Dictionary::from_text("cat\n  dog \n\n\r\nbird\r\n", "owl\n\nOWL\nowl\nx-ray\n");
        assert!(dict.is_valid_word("CAT"));
        assert!(dict.is_valid_word("DOG"));
        assert!(dict.is_valid_word("BIRD"));
        assert!(!dict.is_valid_word(""));
        assert_eq!(dict.hidden_words(), ["OWL"]);
    }

    #[test]
    fn test_builtin_dictionary() {
        let dict = Dictionary::builtin();
        assert!(dict.word_count() > 1000, "got {}", dict.word_count());
        assert!(dict.hidden_words().len() >= 5);
        assert!(dict.is_valid_word("cat"));
        assert!(dict.is_valid_word("word"));
        for hidden in dict.hidden_words() {
            assert!(dict.is_valid_word(hidden));
            assert!(hidden.len() >= 3, "hidden word {} too short", hidden);
        }
    }
}
