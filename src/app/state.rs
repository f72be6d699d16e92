//! Application state management

use crate::game::grid::{rotate_coord, Coord, GRID_SIZE};
use crate::game::round::{GameRound, LevelSetup, RoundPhase, SubmitOutcome};
use crate::game::selection::SelectionChange;
use std::collections::HashSet;

/// Cursor movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Tone of the feedback line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedbackKind {
    #[default]
    Info,
    Good,
    Hidden,
    Bad,
}

/// A level the player just finished, waiting to be persisted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedLevel {
    pub level: u32,
    pub score: u32,
    pub goal: u32,
    pub words_found: u32,
}

/// Main application state
pub struct App {
    /// Whether the application should quit
    pub should_quit: bool,
    /// Feedback message from last action
    pub feedback: String,
    pub feedback_kind: FeedbackKind,
    /// Keyboard cursor on the board
    pub cursor: Coord,
    /// Show every hidden word path on the board
    pub reveal_hidden: bool,
    /// Best saved score for the level just completed
    pub best_score: Option<u32>,
    round: GameRound,
    /// Hidden words credited this level (their paths stay marked)
    found_hidden: Vec<String>,
    /// Set when a level is finished, cleared by `take_completed_level`
    completed: Option<CompletedLevel>,
}

impl App {
    /// Create a new application instance around a round
    pub fn new(round: GameRound, reveal_hidden: bool) -> Self {
        let mut app = Self {
            should_quit: false,
            feedback: String::new(),
            feedback_kind: FeedbackKind::Info,
            cursor: Coord::new(GRID_SIZE / 2, GRID_SIZE / 2),
            reveal_hidden,
            best_score: None,
            round,
            found_hidden: Vec::new(),
            completed: None,
        };
        if app.round.phase() == RoundPhase::CampaignComplete {
            app.set_feedback("You Win!", FeedbackKind::Good);
        }
        app
    }

    pub fn round(&self) -> &GameRound {
        &self.round
    }

    /// Signal the application to quit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Move the cursor one tile, stopping at the edges
    pub fn on_move(&mut self, direction: Direction) {
        let (dx, dy) = match direction {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        };
        if let Some(next) = self.cursor.offset(dx, dy, self.board_size()) {
            self.cursor = next;
        }
    }

    /// Select the tile under the cursor (or back up when it is the
    /// second-to-last selected tile)
    pub fn on_select(&mut self) {
        match self.round.select(self.cursor) {
            SelectionChange::Added | SelectionChange::Retracted => self.feedback.clear(),
            SelectionChange::Rejected => {
                if self.round.phase() == RoundPhase::Playing {
                    self.set_feedback("Can't select that tile", FeedbackKind::Bad);
                }
            }
        }
    }

    /// Handle backspace: drop the last selected tile
    pub fn on_backspace(&mut self) {
        if self.round.retract_last() == SelectionChange::Retracted {
            self.feedback.clear();
        }
    }

    /// Handle Enter: submit the selection, or continue after a level ends
    pub fn on_submit(&mut self) {
        match self.round.phase() {
            RoundPhase::Playing => self.submit_selection(),
            RoundPhase::LevelComplete => self.next_level(),
            RoundPhase::CampaignComplete => {}
        }
    }

    fn submit_selection(&mut self) {
        if self.round.selection().is_empty() {
            return;
        }

        let submission = self.round.submit();
        let kind = match submission.outcome {
            SubmitOutcome::Valid { is_hidden: true, .. } => FeedbackKind::Hidden,
            SubmitOutcome::Valid { .. } => FeedbackKind::Good,
            _ => FeedbackKind::Bad,
        };
        self.set_feedback(
            format!("{} ({})", submission.outcome.message(), submission.word),
            kind,
        );

        if let SubmitOutcome::Valid {
            is_hidden,
            goal_reached,
            ..
        } = submission.outcome
        {
            if is_hidden {
                self.found_hidden.push(submission.word);
            }
            if goal_reached && self.round.phase() == RoundPhase::LevelComplete {
                let snapshot = self.round.snapshot();
                self.completed = Some(CompletedLevel {
                    level: snapshot.level,
                    score: snapshot.score,
                    goal: snapshot.goal,
                    words_found: snapshot.found_words.len() as u32,
                });
                self.set_feedback(
                    format!("Level {} complete! Press Enter", snapshot.level),
                    FeedbackKind::Good,
                );
            }
        }
    }

    fn next_level(&mut self) {
        self.found_hidden.clear();
        self.best_score = None;
        match self.round.advance_level() {
            LevelSetup::Ready { level, goal } => {
                self.set_feedback(format!("Level {}: reach {} points", level, goal), FeedbackKind::Info);
            }
            LevelSetup::CampaignComplete { .. } => {
                self.set_feedback("You Win!", FeedbackKind::Good);
            }
        }
    }

    /// Handle Esc: clear the selection, or quit when there is nothing to clear
    pub fn on_escape(&mut self) {
        if self.round.selection().is_empty() {
            self.quit();
        } else {
            self.round.clear_selection();
            self.feedback.clear();
        }
    }

    /// Turn the board clockwise; the cursor stays on the same tile
    pub fn on_rotate(&mut self) {
        if self.round.board().is_none() {
            return;
        }
        self.round.rotate_board();
        self.cursor = rotate_coord(self.cursor, self.board_size());
    }

    /// Flip hidden-word reveal. Returns the new value.
    pub fn on_toggle_reveal(&mut self) -> bool {
        self.reveal_hidden = !self.reveal_hidden;
        self.reveal_hidden
    }

    /// Hand over the last completed level (once).
    pub fn take_completed_level(&mut self) -> Option<CompletedLevel> {
        self.completed.take()
    }

    /// Cells of hidden words found this level.
    pub fn found_hidden_coords(&self) -> HashSet<Coord> {
        let Some(board) = self.round.board() else {
            return HashSet::new();
        };
        self.found_hidden
            .iter()
            .filter_map(|word| board.placed_word(word))
            .flat_map(|placed| placed.path.iter().copied())
            .collect()
    }

    /// Cells of every hidden word, when reveal is on.
    pub fn revealed_coords(&self) -> HashSet<Coord> {
        match self.round.board() {
            Some(board) if self.reveal_hidden => board
                .placed_words
                .iter()
                .flat_map(|placed| placed.path.iter().copied())
                .collect(),
            _ => HashSet::new(),
        }
    }

    fn board_size(&self) -> usize {
        self.round.board().map(|b| b.grid.size()).unwrap_or(GRID_SIZE)
    }

    fn set_feedback(&mut self, message: impl Into<String>, kind: FeedbackKind) {
        self.feedback = message.into();
        self.feedback_kind = kind;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::dictionary::Dictionary;
    use crate::game::grid::{Board, Grid, PlacedWord, SpecialTile};
    use crate::game::levels::{LevelInfo, LevelTable};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// ```text
    /// C A T S X
    /// D O G E X
    /// W O R D S
    /// X X X X X
    /// X X X X G
    /// ```
    fn fixed_board() -> Board {
        let mut grid = Grid::from_rows(&["CATSX", "DOGEX", "WORDS", "XXXXX", "XXXXX"]).unwrap();
        grid.set_special(Coord::new(4, 4), SpecialTile::Gold);
        Board {
            grid,
            placed_words: vec![PlacedWord {
                word: "WORDS".to_string(),
                path: (0..5).map(|x| Coord::new(x, 2)).collect(),
            }],
        }
    }

    fn levels(goals: &[u32]) -> LevelTable {
        LevelTable::new(
            goals
                .iter()
                .enumerate()
                .map(|(i, &goal)| LevelInfo {
                    level: i as u32 + 1,
                    goal,
                    time_limit_sec: 0,
                })
                .collect(),
        )
    }

    /// An app playing `fixed_board()` at level 1.
    fn test_app(goals: &[u32]) -> App {
        let dict = Dictionary::new(["CAT", "CATS", "DOG", "WORDS"], ["WORDS"]);
        let round = GameRound::with_board(
            dict,
            levels(goals),
            1,
            StdRng::seed_from_u64(7),
            fixed_board(),
        );
        App::new(round, false)
    }

    /// Walk the cursor to `coord` and select it.
    fn pick(app: &mut App, x: usize, y: usize) {
        app.cursor = Coord::new(x, y);
        app.on_select();
    }

    #[test]
    fn test_cursor_starts_centered() {
        let app = test_app(&[100]);
        assert_eq!(app.cursor, Coord::new(2, 2));
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        let mut app = test_app(&[100]);
        app.cursor = Coord::new(0, 0);
        app.on_move(Direction::Up);
        app.on_move(Direction::Left);
        assert_eq!(app.cursor, Coord::new(0, 0));

        app.on_move(Direction::Right);
        app.on_move(Direction::Down);
        assert_eq!(app.cursor, Coord::new(1, 1));

        app.cursor = Coord::new(4, 4);
        app.on_move(Direction::Right);
        app.on_move(Direction::Down);
        assert_eq!(app.cursor, Coord::new(4, 4));
    }

    #[test]
    fn test_select_builds_word() {
        let mut app = test_app(&[100]);
        pick(&mut app, 0, 0);
        pick(&mut app, 1, 0);
        pick(&mut app, 2, 0);
        assert_eq!(app.round().selection().current_word(), "CAT");
    }

    #[test]
    fn test_select_non_adjacent_feedback() {
        let mut app = test_app(&[100]);
        pick(&mut app, 0, 0);
        pick(&mut app, 3, 3);
        assert_eq!(app.feedback, "Can't select that tile");
        assert_eq!(app.feedback_kind, FeedbackKind::Bad);
        assert_eq!(app.round().selection().len(), 1);
    }

    #[test]
    fn test_select_second_to_last_backs_up() {
        let mut app = test_app(&[100]);
        pick(&mut app, 0, 0);
        pick(&mut app, 1, 0);
        pick(&mut app, 0, 0);
        assert_eq!(app.round().selection().current_word(), "C");
    }

    #[test]
    fn test_backspace_retracts() {
        let mut app = test_app(&[100]);
        pick(&mut app, 0, 0);
        pick(&mut app, 1, 0);
        app.on_backspace();
        assert_eq!(app.round().selection().current_word(), "C");
        app.on_backspace();
        assert!(app.round().selection().is_empty());
    }

    #[test]
    fn test_submit_valid_word() {
        let mut app = test_app(&[100]);
        pick(&mut app, 0, 0);
        pick(&mut app, 1, 0);
        pick(&mut app, 2, 0);
        app.on_submit();

        assert_eq!(app.feedback, "OK +1 (CAT)");
        assert_eq!(app.feedback_kind, FeedbackKind::Good);
        assert_eq!(app.round().progression().score(), 1);
        assert!(app.round().selection().is_empty());
    }

    #[test]
    fn test_submit_invalid_word() {
        let mut app = test_app(&[100]);
        pick(&mut app, 0, 1);
        pick(&mut app, 1, 0);
        pick(&mut app, 2, 0);
        app.on_submit();

        assert_eq!(app.feedback, "NOT A WORD (DAT)");
        assert_eq!(app.feedback_kind, FeedbackKind::Bad);
        assert_eq!(app.round().progression().score(), 0);
    }

    #[test]
    fn test_empty_submit_does_nothing() {
        let mut app = test_app(&[100]);
        app.on_submit();
        assert!(app.feedback.is_empty());
    }

    #[test]
    fn test_hidden_word_stays_marked() {
        let mut app = test_app(&[100]);
        assert!(app.found_hidden_coords().is_empty());
        for x in 0..5 {
            pick(&mut app, x, 2);
        }
        app.on_submit();

        assert_eq!(app.feedback_kind, FeedbackKind::Hidden);
        assert_eq!(app.feedback, "HIDDEN WORD! +10 (WORDS)");
        let marked = app.found_hidden_coords();
        assert_eq!(marked.len(), 5);
        assert!(marked.contains(&Coord::new(4, 2)));
    }

    #[test]
    fn test_reveal_toggle() {
        let mut app = test_app(&[100]);
        assert!(app.revealed_coords().is_empty());
        assert!(app.on_toggle_reveal());
        assert_eq!(app.revealed_coords().len(), 5);
        assert!(!app.on_toggle_reveal());
        assert!(app.revealed_coords().is_empty());
    }

    #[test]
    fn test_rotate_moves_cursor_and_marks() {
        let mut app = test_app(&[100]);
        for x in 0..5 {
            pick(&mut app, x, 2);
        }
        app.on_submit();

        app.cursor = Coord::new(0, 0);
        app.on_rotate();
        assert_eq!(app.cursor, Coord::new(4, 0));
        // Row 2 becomes column 2
        let marked = app.found_hidden_coords();
        assert!((0..5).all(|y| marked.contains(&Coord::new(2, y))));
    }

    #[test]
    fn test_escape_clears_then_quits() {
        let mut app = test_app(&[100]);
        pick(&mut app, 0, 0);
        app.on_escape();
        assert!(app.round().selection().is_empty());
        assert!(!app.should_quit);

        app.on_escape();
        assert!(app.should_quit);
    }

    #[test]
    fn test_level_complete_and_continue() {
        let mut app = test_app(&[1, 50]);
        pick(&mut app, 0, 0);
        pick(&mut app, 1, 0);
        pick(&mut app, 2, 0);
        app.on_submit();

        assert_eq!(app.round().phase(), RoundPhase::LevelComplete);
        assert_eq!(app.feedback, "Level 1 complete! Press Enter");
        assert_eq!(
            app.take_completed_level(),
            Some(CompletedLevel {
                level: 1,
                score: 1,
                goal: 1,
                words_found: 1,
            })
        );
        // Handed over once
        assert_eq!(app.take_completed_level(), None);
        app.best_score = Some(7);

        app.on_submit();
        assert_eq!(app.best_score, None);
        assert_eq!(app.round().phase(), RoundPhase::Playing);
        assert_eq!(app.round().progression().level(), 2);
        assert_eq!(app.feedback, "Level 2: reach 50 points");
        assert!(app.found_hidden_coords().is_empty());
    }

    #[test]
    fn test_last_level_shows_win() {
        let mut app = test_app(&[1]);
        pick(&mut app, 0, 0);
        pick(&mut app, 1, 0);
        pick(&mut app, 2, 0);
        app.on_submit();
        app.on_submit();

        assert_eq!(app.round().phase(), RoundPhase::CampaignComplete);
        assert_eq!(app.feedback, "You Win!");
        assert!(app.round().board().is_none());

        // Input is ignored once the campaign is over
        app.on_rotate();
        app.on_select();
        app.on_submit();
        assert_eq!(app.feedback, "You Win!");
    }

    #[test]
    fn test_start_past_last_level() {
        let round = GameRound::with_rng(Dictionary::default(), levels(&[10]), 4, StdRng::seed_from_u64(1));
        let app = App::new(round, false);
        assert_eq!(app.feedback, "You Win!");
    }

    #[test]
    fn test_quit() {
        let mut app = test_app(&[100]);
        assert!(!app.should_quit);
        app.quit();
        assert!(app.should_quit);
    }
}
