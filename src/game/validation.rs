//! Word validation
//!
//! Validates a submitted word against:
//! - Minimum length (3 characters)
//! - Words already found this level
//! - Dictionary presence

use super::dictionary::Dictionary;
use super::progression::GameProgression;

/// Minimum word length for valid submissions
pub const MIN_WORD_LENGTH: usize = 3;

/// Result of word validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    /// Word is valid
    Valid,
    /// Word is too short (less than 3 characters)
    TooShort { length: usize },
    /// Word was already credited this level
    AlreadyFound,
    /// Word not found in dictionary
    NotInDictionary,
}

/// Validate a word against the found-word history and dictionary
///
/// Checks in order:
/// 1. Length >= 3
/// 2. Not already found this level
/// 3. Word exists in dictionary
pub fn validate_word(word: &str, progression: &GameProgression, dictionary: &Dictionary) -> ValidationResult {
    let length = word.chars().count();
    if length < MIN_WORD_LENGTH {
        return ValidationResult::TooShort { length };
    }

    if progression.is_word_found(word) {
        return ValidationResult::AlreadyFound;
    }

    if !dictionary.is_valid_word(word) {
        return ValidationResult::NotInDictionary;
    }

    ValidationResult::Valid
}
