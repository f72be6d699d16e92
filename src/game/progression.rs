//! Per-level score, goal and found-word history

/// Read-only copy of the progression for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressSnapshot {
    pub score: u32,
    pub level: u32,
    pub goal: u32,
    pub found_words: Vec<String>,
}

/// Score, level, goal and words credited during the current level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameProgression {
    score: u32,
    level: u32,
    goal: u32,
    found_words: Vec<String>,
}

impl Default for GameProgression {
    fn default() -> Self {
        Self::new(1)
    }
}

impl GameProgression {
    /// Start at `start_level` (levels below 1 are clamped to 1).
    pub fn new(start_level: u32) -> Self {
        Self {
            score: 0,
            level: start_level.max(1),
            goal: 0,
            found_words: Vec::new(),
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn goal(&self) -> u32 {
        self.goal
    }

    /// Words credited this level, in the order they were found.
    pub fn found_words(&self) -> &[String] {
        &self.found_words
    }

    pub fn set_goal(&mut self, goal: u32) {
        self.goal = goal;
    }

    pub fn add_score(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    pub fn is_word_found(&self, word: &str) -> bool {
        self.found_words.iter().any(|w| w == word)
    }

    /// Record a found word. No-op if it was already recorded.
    pub fn add_found_word(&mut self, word: &str) {
        if !self.is_word_found(word) {
            self.found_words.push(word.to_string());
        }
    }

    pub fn check_goal_reached(&self) -> bool {
        self.score >= self.goal
    }

    pub fn advance_level(&mut self) {
        self.level += 1;
    }

    /// Zero score and goal and forget found words. The level is kept.
    pub fn reset_for_new_level(&mut self) {
        self.score = 0;
        self.goal = 0;
        self.found_words.clear();
    }

    pub fn snapshot(&self) -> ProgressSnapshot {
        ProgressSnapshot {
            score: self.score,
            level: self.level,
            goal: self.goal,
            found_words: self.found_words.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let state = GameProgression::default();
        assert_eq!(state.score(), 0);
        assert_eq!(state.level(), 1);
        assert_eq!(state.goal(), 0);
        assert!(state.found_words().is_empty());
    }

    #[test]
    fn test_start_level() {
        assert_eq!(GameProgression::new(5).level(), 5);
        assert_eq!(GameProgression::new(0).level(), 1);
    }

    #[test]
    fn test_add_score_accumulates() {
        let mut state = GameProgression::default();
        state.add_score(10);
        assert_eq!(state.score(), 10);
        state.add_score(5);
        assert_eq!(state.score(), 15);
    }

    #[test]
    fn test_found_word_added_once() {
        let mut state = GameProgression::default();
        state.add_found_word("TEST");
        state.add_found_word("TEST");
        assert_eq!(state.found_words(), ["TEST"]);
        assert!(state.is_word_found("TEST"));
        assert!(!state.is_word_found("WORD"));
    }

    #[test]
    fn test_goal_transition() {
        let mut state = GameProgression::default();
        state.set_goal(10);
        state.add_score(5);
        assert!(!state.check_goal_reached());
        state.add_score(5);
        assert!(state.check_goal_reached());
    }

    #[test]
    fn test_advance_keeps_score() {
        let mut state = GameProgression::default();
        state.add_score(7);
        state.advance_level();
        assert_eq!(state.level(), 2);
        assert_eq!(state.score(), 7);
    }

    #[test]
    fn test_reset_for_new_level() {
        let mut state = GameProgression::new(3);
        state.set_goal(100);
        state.add_score(50);
        state.add_found_word("TEST");
        state.reset_for_new_level();
        assert_eq!(state.score(), 0);
        assert_eq!(state.goal(), 0);
        assert!(state.found_words().is_empty());
        assert_eq!(state.level(), 3);
    }

    #[test]
    fn test_snapshot() {
        let mut state = GameProgression::new(2);
        state.set_goal(20);
        state.add_score(4);
        state.add_found_word("WORD");
        assert_eq!(
            state.snapshot(),
            ProgressSnapshot {
                score: 4,
                level: 2,
                goal: 20,
                found_words: vec!["WORD".to_string()],
            }
        );
    }
}
