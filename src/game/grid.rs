#![allow(dead_code)]
//! Letter grid and puzzle generation
//!
//! A board is built in three passes:
//! 1. a random handful of hidden words is placed along self-avoiding paths
//!    of 8-way adjacent cells (randomized backtracking search),
//! 2. every remaining cell is filled from the weighted letter pool,
//! 3. exactly one cell is marked gold.

use super::LetterPool;
use rand::prelude::*;

/// Default board width and height.
pub const GRID_SIZE: usize = 5;

/// Minimum and maximum number of hidden words attempted per board.
const MIN_HIDDEN_WORDS: usize = 2;
const MAX_HIDDEN_WORDS: usize = 5;

const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// A cell position. `x` is the column, `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// True when `other` is one of the 8 surrounding cells.
    pub fn is_adjacent(&self, other: &Coord) -> bool {
        let dx = self.x.abs_diff(other.x);
        let dy = self.y.abs_diff(other.y);
        dx <= 1 && dy <= 1 && (dx, dy) != (0, 0)
    }

    /// Step by an offset, staying inside a `size` x `size` board.
    pub fn offset(&self, dx: isize, dy: isize, size: usize) -> Option<Coord> {
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;
        (x < size && y < size).then_some(Coord { x, y })
    }
}

/// Bonus marker carried by a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpecialTile {
    #[default]
    None,
    /// Doubles the score of any word passing through it.
    Gold,
}

impl SpecialTile {
    /// Score factor contributed by this tile.
    pub fn multiplier(&self) -> u32 {
        match self {
            SpecialTile::None => 1,
            SpecialTile::Gold => 2,
        }
    }
}

/// One grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub letter: char,
    pub special: SpecialTile,
}

/// Square letter matrix stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    tiles: Vec<Tile>,
}

impl Grid {
    /// Build a grid from rows of letters. Every row must be as long as the
    /// number of rows; returns `None` otherwise.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Option<Self> {
        let size = rows.len();
        let mut tiles = Vec::with_capacity(size * size);
        for row in rows {
            let letters: Vec<char> = row.as_ref().chars().collect();
            if letters.len() != size {
                return None;
            }
            tiles.extend(letters.into_iter().map(|c| Tile {
                letter: c.to_ascii_uppercase(),
                special: SpecialTile::None,
            }));
        }
        Some(Self { size, tiles })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    fn index(&self, coord: Coord) -> Option<usize> {
        (coord.x < self.size && coord.y < self.size).then(|| coord.y * self.size + coord.x)
    }

    pub fn get(&self, coord: Coord) -> Option<&Tile> {
        self.index(coord).map(|i| &self.tiles[i])
    }

    pub fn letter_at(&self, coord: Coord) -> Option<char> {
        self.get(coord).map(|t| t.letter)
    }

    /// Set a tile's special marker. Out-of-bounds coordinates are ignored.
    pub fn set_special(&mut self, coord: Coord, special: SpecialTile) {
        if let Some(i) = self.index(coord) {
            self.tiles[i].special = special;
        }
    }

    /// Iterate `(coord, tile)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, &Tile)> {
        let size = self.size;
        self.tiles
            .iter()
            .enumerate()
            .map(move |(i, t)| (Coord::new(i % size, i / size), t))
    }

    /// Iterate rows of tiles, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.tiles.chunks(self.size.max(1))
    }

    /// Coordinates of every gold tile.
    pub fn gold_tiles(&self) -> Vec<Coord> {
        self.iter()
            .filter(|(_, t)| t.special == SpecialTile::Gold)
            .map(|(c, _)| c)
            .collect()
    }

    /// Read the letters along a path. `None` if any coordinate is off the grid.
    pub fn word_along(&self, path: &[Coord]) -> Option<String> {
        path.iter().map(|&c| self.letter_at(c)).collect()
    }

    /// A copy turned a quarter turn clockwise.
    pub fn rotated_clockwise(&self) -> Grid {
        let mut tiles = self.tiles.clone();
        for (coord, tile) in self.iter() {
            let to = rotate_coord(coord, self.size);
            tiles[to.y * self.size + to.x] = *tile;
        }
        Grid {
            size: self.size,
            tiles,
        }
    }
}

/// Where `coord` lands after a quarter turn clockwise.
pub fn rotate_coord(coord: Coord, size: usize) -> Coord {
    Coord::new(size - 1 - coord.y, coord.x)
}

/// A hidden word and the cells it occupies, in letter order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedWord {
    pub word: String,
    pub path: Vec<Coord>,
}

/// A generated grid together with the hidden words placed in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub grid: Grid,
    pub placed_words: Vec<PlacedWord>,
}

impl Board {
    /// Check whether `word` is one of the words placed in this board.
    pub fn is_hidden_word(&self, word: &str) -> bool {
        self.placed_words.iter().any(|p| p.word == word)
    }

    pub fn placed_word(&self, word: &str) -> Option<&PlacedWord> {
        self.placed_words.iter().find(|p| p.word == word)
    }

    /// Turn the board a quarter turn clockwise, carrying placed paths along.
    pub fn rotate_clockwise(&mut self) {
        let size = self.grid.size();
        self.grid = self.grid.rotated_clockwise();
        for placed in &mut self.placed_words {
            for coord in &mut placed.path {
                *coord = rotate_coord(*coord, size);
            }
        }
    }
}

/// Generate a 5x5 board using the thread-local RNG.
pub fn generate(hidden_words: &[String]) -> Board {
    generate_with_rng(hidden_words, GRID_SIZE, &mut rand::rng())
}

/// Generate a `size` x `size` board using a specific RNG (for testing/seeding).
pub fn generate_with_rng<R: Rng>(hidden_words: &[String], size: usize, rng: &mut R) -> Board {
    let mut cells: Vec<Option<char>> = vec![None; size * size];
    let mut placed_words = Vec::new();

    for word in choose_words(hidden_words, rng) {
        let word = word.to_uppercase();
        match place_word(&word, &mut cells, size, rng) {
            Some(path) => placed_words.push(PlacedWord { word, path }),
            None => log::warn!("Failed to place word: {}", word),
        }
    }

    let pool = LetterPool::english();
    let mut tiles: Vec<Tile> = cells
        .into_iter()
        .map(|cell| Tile {
            letter: cell.unwrap_or_else(|| pool.random_letter_with_rng(rng)),
            special: SpecialTile::None,
        })
        .collect();

    if !tiles.is_empty() {
        let gold = rng.random_range(0..tiles.len());
        tiles[gold].special = SpecialTile::Gold;
    }

    log::debug!(
        "Generated {}x{} board with {} hidden word(s): {:?}",
        size,
        size,
        placed_words.len(),
        placed_words.iter().map(|p| p.word.as_str()).collect::<Vec<_>>()
    );

    Board {
        grid: Grid { size, tiles },
        placed_words,
    }
}

/// Pick between 2 and 5 distinct entries (fewer if the list is short).
fn choose_words<'a, R: Rng>(hidden_words: &'a [String], rng: &mut R) -> Vec<&'a String> {
    let upper = hidden_words.len().min(MAX_HIDDEN_WORDS);
    let count = if upper <= MIN_HIDDEN_WORDS {
        upper
    } else {
        rng.random_range(MIN_HIDDEN_WORDS..=upper)
    };

    let mut shuffled: Vec<&String> = hidden_words.iter().collect();
    shuffled.shuffle(rng);
    shuffled.truncate(count);
    shuffled
}

/// Try every start cell in random order and commit the first path found.
fn place_word<R: Rng>(
    word: &str,
    cells: &mut [Option<char>],
    size: usize,
    rng: &mut R,
) -> Option<Vec<Coord>> {
    let letters: Vec<char> = word.chars().collect();
    if letters.is_empty() || letters.len() > cells.len() {
        return None;
    }

    let mut starts: Vec<Coord> = (0..size)
        .flat_map(|y| (0..size).map(move |x| Coord::new(x, y)))
        .collect();
    starts.shuffle(rng);

    for start in starts {
        let mut search = PathSearch {
            letters: &letters,
            cells: &*cells,
            size,
            visited: vec![false; size * size],
            path: Vec::with_capacity(letters.len()),
        };
        if search.search(start, 0, rng) {
            let path = search.path;
            for (coord, &letter) in path.iter().zip(&letters) {
                cells[coord.y * size + coord.x] = Some(letter);
            }
            return Some(path);
        }
    }

    None
}

/// State for one randomized depth-first placement attempt.
struct PathSearch<'a> {
    letters: &'a [char],
    cells: &'a [Option<char>],
    size: usize,
    visited: Vec<bool>,
    path: Vec<Coord>,
}

impl PathSearch<'_> {
    fn search<R: Rng>(&mut self, at: Coord, index: usize, rng: &mut R) -> bool {
        let i = at.y * self.size + at.x;
        if self.visited[i] {
            return false;
        }
        if let Some(existing) = self.cells[i] {
            if existing != self.letters[index] {
                return false;
            }
        }

        self.visited[i] = true;
        self.path.push(at);

        if index == self.letters.len() - 1 {
            return true;
        }

        let mut offsets = NEIGHBOR_OFFSETS;
        offsets.shuffle(rng);
        for (dx, dy) in offsets {
            if let Some(next) = at.offset(dx, dy, self.size) {
                if self.search(next, index + 1, rng) {
                    return true;
                }
            }
        }

        self.visited[i] = false;
        self.path.pop();
        false
    }
}
