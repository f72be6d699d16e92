#![allow(dead_code)]
//! A game round: board, selection, scoring and level progression wired together
//!
//! The round owns everything a single player needs for one campaign. It
//! validates and scores submitted selections, detects the level goal, and
//! builds the board for each level.

use super::dictionary::Dictionary;
use super::grid::{self, Board, Coord, GRID_SIZE};
use super::levels::LevelTable;
use super::progression::{GameProgression, ProgressSnapshot};
use super::scoring;
use super::selection::{SelectionChange, SelectionPath};
use super::validation::{validate_word, ValidationResult, MIN_WORD_LENGTH};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Where the round is in the level cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    /// Accepting selections.
    Playing,
    /// Score reached the goal; waiting for the next level.
    LevelComplete,
    /// The level table has no entry for the current level.
    CampaignComplete,
}

/// Result of setting up a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelSetup {
    /// A fresh board is ready.
    Ready { level: u32, goal: u32 },
    /// No such level: the campaign is over.
    CampaignComplete { level: u32 },
}

/// Result of submitting the current selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Fewer than 3 letters
    TooShort,
    /// Already credited this level
    AlreadyFound,
    /// Not in the dictionary
    Invalid,
    /// Word accepted and scored
    Valid {
        is_hidden: bool,
        points: u32,
        goal_reached: bool,
    },
}

impl SubmitOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, SubmitOutcome::Valid { .. })
    }

    /// Short feedback line for the player.
    pub fn message(&self) -> String {
        match self {
            SubmitOutcome::TooShort => "TOO SHORT".to_string(),
            SubmitOutcome::AlreadyFound => "ALREADY FOUND".to_string(),
            SubmitOutcome::Invalid => "NOT A WORD".to_string(),
            SubmitOutcome::Valid {
                is_hidden: true,
                points,
                ..
            } => format!("HIDDEN WORD! +{}", points),
            SubmitOutcome::Valid { points, .. } => format!("OK +{}", points),
        }
    }
}

/// A submitted word, the tiles it used, and what happened to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub word: String,
    pub path: Vec<Coord>,
    pub outcome: SubmitOutcome,
}

/// Single-player round state.
pub struct GameRound {
    dictionary: Dictionary,
    levels: LevelTable,
    progression: GameProgression,
    /// `None` once the campaign is complete
    board: Option<Board>,
    selection: SelectionPath,
    phase: RoundPhase,
    rng: StdRng,
}

impl GameRound {
    /// Create a round and set up `start_level`.
    pub fn new(dictionary: Dictionary, levels: LevelTable, start_level: u32) -> Self {
        Self::with_rng(dictionary, levels, start_level, StdRng::from_os_rng())
    }

    /// Create a round with a specific RNG (for testing/seeding).
    pub fn with_rng(dictionary: Dictionary, levels: LevelTable, start_level: u32, rng: StdRng) -> Self {
        let mut round = Self {
            dictionary,
            levels,
            progression: GameProgression::new(start_level),
            board: None,
            selection: SelectionPath::new(),
            phase: RoundPhase::Playing,
            rng,
        };
        round.setup_level();
        round
    }

    /// Create a round whose first board is `board` instead of a generated one.
    #[cfg(test)]
    pub fn with_board(
        dictionary: Dictionary,
        levels: LevelTable,
        start_level: u32,
        rng: StdRng,
        board: Board,
    ) -> Self {
        let mut round = Self::with_rng(dictionary, levels, start_level, rng);
        if round.board.is_some() {
            round.board = Some(board);
        }
        round
    }

    /// Build the board for the progression's current level.
    ///
    /// The new board is generated completely before it replaces the old one.
    pub fn setup_level(&mut self) -> LevelSetup {
        let level = self.progression.level();
        self.selection.clear();

        let Some(info) = self.levels.get(level).copied() else {
            log::info!("No level {} in level table, campaign complete", level);
            self.board = None;
            self.phase = RoundPhase::CampaignComplete;
            return LevelSetup::CampaignComplete { level };
        };

        self.progression.reset_for_new_level();
        self.progression.set_goal(info.goal);

        let board = grid::generate_with_rng(self.dictionary.hidden_words(), GRID_SIZE, &mut self.rng);
        self.board = Some(board);
        self.phase = RoundPhase::Playing;

        log::info!("Level {} ready, goal {}", level, info.goal);
        LevelSetup::Ready {
            level,
            goal: info.goal,
        }
    }

    /// Move to the next level and set it up.
    pub fn advance_level(&mut self) -> LevelSetup {
        self.progression.advance_level();
        self.setup_level()
    }

    /// Start a new selection at `coord` (press gesture).
    pub fn begin_selection(&mut self, coord: Coord) -> SelectionChange {
        self.selection.clear();
        self.select(coord)
    }

    /// Drag over `coord`: extends the selection, or backs up one tile when
    /// `coord` is the second-to-last selected tile.
    pub fn select(&mut self, coord: Coord) -> SelectionChange {
        if self.phase != RoundPhase::Playing {
            return SelectionChange::Rejected;
        }
        let Some(letter) = self.board.as_ref().and_then(|b| b.grid.letter_at(coord)) else {
            return SelectionChange::Rejected;
        };
        self.selection.drag_over(coord, letter)
    }

    /// Remove the most recently selected tile.
    pub fn retract_last(&mut self) -> SelectionChange {
        match self.selection.second_to_last() {
            Some(previous) => {
                self.selection.try_retract_to(previous);
                SelectionChange::Retracted
            }
            None if !self.selection.is_empty() => {
                self.selection.clear();
                SelectionChange::Retracted
            }
            None => SelectionChange::Rejected,
        }
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Validate, score and record the current selection, then clear it.
    pub fn submit(&mut self) -> Submission {
        let word = self.selection.current_word();
        let path = self.selection.coords();
        self.selection.clear();

        let outcome = match validate_word(&word, &self.progression, &self.dictionary) {
            ValidationResult::TooShort { length } => {
                log::debug!("{} letters is under the minimum of {}", length, MIN_WORD_LENGTH);
                SubmitOutcome::TooShort
            }
            ValidationResult::AlreadyFound => SubmitOutcome::AlreadyFound,
            ValidationResult::NotInDictionary => SubmitOutcome::Invalid,
            ValidationResult::Valid => self.credit_word(&word, &path),
        };

        log::debug!("Submitted {:?} -> {:?}", word, outcome);
        Submission { word, path, outcome }
    }

    fn credit_word(&mut self, word: &str, path: &[Coord]) -> SubmitOutcome {
        self.progression.add_found_word(word);

        let (is_hidden, multiplier) = match &self.board {
            Some(board) => (
                board.is_hidden_word(word),
                scoring::special_multiplier(path.iter().filter_map(|&c| board.grid.get(c))),
            ),
            None => (false, 1),
        };

        let points = scoring::score(word, is_hidden, multiplier);
        self.progression.add_score(points);

        let goal_reached = self.progression.check_goal_reached();
        if goal_reached && self.phase == RoundPhase::Playing {
            log::info!(
                "Level {} complete with score {}",
                self.progression.level(),
                self.progression.score()
            );
            self.phase = RoundPhase::LevelComplete;
        }

        SubmitOutcome::Valid {
            is_hidden,
            points,
            goal_reached,
        }
    }

    /// Turn the board a quarter turn clockwise. Clears the selection.
    pub fn rotate_board(&mut self) {
        self.selection.clear();
        if let Some(board) = self.board.as_mut() {
            board.rotate_clockwise();
        }
    }

    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    pub fn selection(&self) -> &SelectionPath {
        &self.selection
    }

    pub fn progression(&self) -> &GameProgression {
        &self.progression
    }

    pub fn snapshot(&self) -> ProgressSnapshot {
        self.progression.snapshot()
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }
}
