//! Waypoint letter collection.

use crate::chars::Cell;
use crate::grid::Position;

/// Letters in first-visit order, keyed by letter and position so a letter
/// passed twice at the same spot counts once
#[derive(Debug, Clone, Default)]
pub struct LetterCollector {
    seen: Vec<(char, Position)>,
}

impl LetterCollector {
    pub fn new() -> Self {
        Self { seen: Vec::new() }
    }

    pub fn observe(&mut self, cell: Cell, pos: Position) {
        let Cell::Letter(letter) = cell else {
            return;
        };
        if !self.seen.contains(&(letter, pos)) {
            self.seen.push((letter, pos));
        }
    }

    pub fn collected(&self) -> String {
        self.seen.iter().map(|&(letter, _)| letter).collect()
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
