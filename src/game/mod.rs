#![allow(dead_code)]
//! Game logic: letter pool, board generation, selection, scoring, levels

pub mod dictionary;
pub mod grid;
pub mod levels;
pub mod progression;
pub mod round;
pub mod scoring;
pub mod selection;
pub mod validation;

use once_cell::sync::Lazy;
use rand::prelude::*;

/// English letter frequencies in tenths of a percent.
/// Each letter appears this many times in the flattened pool, so the
/// long-run draw probability is weight / total weight.
pub const LETTER_WEIGHTS: [(char, u32); 26] = [
    ('E', 127),
    ('T', 91),
    ('A', 82),
    ('O', 75),
    ('I', 70),
    ('N', 67),
    ('S', 63),
    ('H', 61),
    ('R', 60),
    ('D', 43),
    ('L', 40),
    ('C', 28),
    ('U', 28),
    ('M', 24),
    ('W', 24),
    ('F', 22),
    ('G', 20),
    ('Y', 20),
    ('P', 19),
    ('B', 15),
    ('V', 10),
    ('K', 8),
    ('J', 2),
    ('X', 2),
    ('Q', 1),
    ('Z', 1),
];

/// Flattened pool shared by every generator.
static LETTER_POOL: Lazy<LetterPool> = Lazy::new(|| LetterPool::from_weights(&LETTER_WEIGHTS));

/// Weighted random letter source.
///
/// Every letter is repeated in a flat pool proportionally to its weight and
/// draws are uniform over the pool.
#[derive(Debug, Clone)]
pub struct LetterPool {
    pool: Vec<char>,
}

impl LetterPool {
    /// The pool built from [`LETTER_WEIGHTS`].
    pub fn english() -> &'static LetterPool {
        &LETTER_POOL
    }

    /// Build a pool from `(letter, weight)` pairs. Zero-weight letters never appear.
    pub fn from_weights(weights: &[(char, u32)]) -> Self {
        let pool = weights
            .iter()
            .flat_map(|&(letter, weight)| std::iter::repeat_n(letter, weight as usize))
            .collect();
        Self { pool }
    }

    /// Draw one letter using the thread-local RNG.
    pub fn random_letter(&self) -> char {
        self.random_letter_with_rng(&mut rand::rng())
    }

    /// Draw one letter using a specific RNG (for testing/seeding).
    pub fn random_letter_with_rng<R: Rng>(&self, rng: &mut R) -> char {
        // Empty only with all-zero weights
        self.pool.choose(rng).copied().unwrap_or('E')
    }

    /// Number of entries in the flattened pool.
    pub fn len(&self) -> usize {
        self.pool.len()
    }

    /// Check if the pool is empty.
    pub fn is_empty(&self) -> bool {
        self.pool.is_empty()
    }

    /// How many pool entries hold `letter`.
    pub fn count_of(&self, letter: char) -> usize {
        self.pool.iter().filter(|&&c| c == letter).count()
    }
}
