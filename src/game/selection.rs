//! The player's in-progress tile path

use super::grid::Coord;

/// What a selection gesture did to the path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionChange {
    /// The tile was appended.
    Added,
    /// The last tile was removed (back-up gesture).
    Retracted,
    /// Nothing changed.
    Rejected,
}

/// Ordered, duplicate-free sequence of adjacent tiles and their letters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionPath {
    path: Vec<(Coord, char)>,
}

impl SelectionPath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a tile if it is unused and touches the last tile.
    pub fn try_add(&mut self, coord: Coord, letter: char) -> bool {
        if self.contains(coord) {
            return false;
        }
        if let Some(last) = self.last() {
            if !last.is_adjacent(&coord) {
                return false;
            }
        }
        self.path.push((coord, letter.to_ascii_uppercase()));
        true
    }

    /// Drop the last tile when `coord` is the second-to-last one.
    ///
    /// Re-entering any earlier tile is not an undo and does nothing.
    pub fn try_retract_to(&mut self, coord: Coord) -> bool {
        if self.second_to_last() == Some(coord) {
            self.path.pop();
            true
        } else {
            false
        }
    }

    /// Apply a drag over `coord`: back up if it is the second-to-last tile,
    /// otherwise try to extend.
    pub fn drag_over(&mut self, coord: Coord, letter: char) -> SelectionChange {
        if self.contains(coord) {
            if self.try_retract_to(coord) {
                SelectionChange::Retracted
            } else {
                SelectionChange::Rejected
            }
        } else if self.try_add(coord, letter) {
            SelectionChange::Added
        } else {
            SelectionChange::Rejected
        }
    }

    /// Letters in path order.
    pub fn current_word(&self) -> String {
        self.path.iter().map(|(_, c)| *c).collect()
    }

    /// Coordinates in path order.
    pub fn coords(&self) -> Vec<Coord> {
        self.path.iter().map(|(c, _)| *c).collect()
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.path.iter().any(|(c, _)| *c == coord)
    }

    pub fn last(&self) -> Option<Coord> {
        self.path.last().map(|(c, _)| *c)
    }

    pub fn second_to_last(&self) -> Option<Coord> {
        self.path.len().checked_sub(2).map(|i| self.path[i].0)
    }

    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    pub fn clear(&mut self) {
        self.path.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(x: usize, y: usize) -> Coord {
        Coord::new(x, y)
    }

    #[test]
    fn test_first_tile_always_accepted() {
        let mut sel = SelectionPath::new();
        assert!(sel.try_add(c(4, 4), 'Q'));
        assert_eq!(sel.current_word(), "Q");
    }

    #[test]
    fn test_rejects_non_adjacent() {
        let mut sel = SelectionPath::new();
        sel.try_add(c(0, 0), 'A');
        assert!(!sel.try_add(c(2, 2), 'X'));
        assert!(sel.try_add(c(1, 1), 'X'));
        assert_eq!(sel.coords(), vec![c(0, 0), c(1, 1)]);
    }

    #[test]
    fn test_rejects_reused_tile() {
        let mut sel = SelectionPath::new();
        sel.try_add(c(0, 0), 'A');
        sel.try_add(c(1, 0), 'B');
        sel.try_add(c(1, 1), 'C');
        // (0,0) is adjacent to (1,1) but already used
        assert!(!sel.try_add(c(0, 0), 'A'));
        assert_eq!(sel.current_word(), "ABC");
    }

    #[test]
    fn test_retract_only_second_to_last() {
        let mut sel = SelectionPath::new();
        sel.try_add(c(0, 0), 'C');
        sel.try_add(c(1, 0), 'A');
        sel.try_add(c(2, 0), 'T');

        // Third-to-last is not an undo
        assert!(!sel.try_retract_to(c(0, 0)));
        assert_eq!(sel.len(), 3);

        assert!(sel.try_retract_to(c(1, 0)));
        assert_eq!(sel.current_word(), "CA");

        assert!(sel.try_retract_to(c(0, 0)));
        assert_eq!(sel.current_word(), "C");

        // A single tile has no second-to-last
        assert!(!sel.try_retract_to(c(0, 0)));
        assert_eq!(sel.len(), 1);
    }

    #[test]
    fn test_drag_over() {
        let mut sel = SelectionPath::new();
        assert_eq!(sel.drag_over(c(2, 2), 'W'), SelectionChange::Added);
        assert_eq!(sel.drag_over(c(2, 2), 'W'), SelectionChange::Rejected);
        assert_eq!(sel.drag_over(c(3, 3), 'O'), SelectionChange::Added);
        assert_eq!(sel.drag_over(c(4, 3), 'R'), SelectionChange::Added);
        assert_eq!(sel.drag_over(c(0, 0), 'D'), SelectionChange::Rejected);
        assert_eq!(sel.drag_over(c(2, 2), 'W'), SelectionChange::Rejected);
        assert_eq!(sel.drag_over(c(3, 3), 'O'), SelectionChange::Retracted);
        assert_eq!(sel.current_word(), "WO");
    }

    #[test]
    fn test_letters_uppercased() {
        let mut sel = SelectionPath::new();
        sel.try_add(c(0, 0), 'c');
        sel.try_add(c(0, 1), 'a');
        assert_eq!(sel.current_word(), "CA");
    }

    #[test]
    fn test_clear() {
        let mut sel = SelectionPath::new();
        sel.try_add(c(0, 0), 'A');
        sel.try_add(c(0, 1), 'B');
        sel.clear();
        assert!(sel.is_empty());
        assert_eq!(sel.current_word(), "");
        assert!(sel.try_add(c(4, 4), 'Z'));
    }
}
