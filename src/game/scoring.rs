//! Word scoring
//!
//! Points grow with word length, double for hidden words, and are then
//! multiplied by the product of special-tile bonuses along the path.

use super::grid::Tile;

/// Base points by word length. Words under 3 letters score nothing.
pub fn base_points(len: usize) -> u32 {
    match len {
        0..=2 => 0,
        3 => 1,
        4 => 3,
        5 => 5,
        6 => 9,
        n => 9 + (n - 6) as u32,
    }
}

/// Score an already-validated word.
pub fn score(word: &str, is_hidden: bool, special_multiplier: u32) -> u32 {
    let mut points = base_points(word.chars().count());
    if is_hidden {
        points *= 2;
    }
    points * special_multiplier
}

/// Product of the bonuses of every tile in a selection. No special tiles gives 1.
pub fn special_multiplier<'a, I>(tiles: I) -> u32
where
    I: IntoIterator<Item = &'a Tile>,
{
    tiles.into_iter().map(|t| t.special.multiplier()).product()
}
