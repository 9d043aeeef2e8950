//! Cursor movement over a grid.
//!
//! The cursor only knows where it is. Which way it is heading belongs to the
//! steering policy, which passes a [`Direction`] in on every call.

use std::fmt;

use crate::chars::Cell;
use crate::error::{Error, Result};
use crate::grid::{Grid, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in the order starting paths are counted
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Unit offset as (dx, dy); y grows downwards
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.write_str(name)
    }
}

/// Position on a borrowed grid
#[derive(Debug, Clone)]
pub struct Cursor<'g> {
    grid: &'g Grid,
    position: Position,
}

impl<'g> Cursor<'g> {
    pub fn new(grid: &'g Grid, position: Position) -> Self {
        Self { grid, position }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Cell under the cursor
    pub fn current(&self) -> Cell {
        self.grid.at(self.position)
    }

    /// Neighbouring cell, blank when out of bounds
    pub fn peek(&self, direction: Direction) -> Cell {
        let (dx, dy) = direction.offset();
        self.grid.at(self.position.offset(dx, dy))
    }

    /// A vertical step needs `|`, `+` or a letter ahead; a horizontal step
    /// needs `-`, `+` or a letter. Perpendicular pipes are never entered
    /// this way.
    pub fn can_step(&self, direction: Direction) -> bool {
        let next = self.peek(direction);
        if next.is_letter_class() || next == Cell::Intersection {
            return true;
        }
        if direction.is_vertical() {
            next == Cell::VerticalPipe
        } else {
            next == Cell::HorizontalPipe
        }
    }

    /// Move one cell. Only blank (or out of bounds) stops the move.
    pub fn step(&mut self, direction: Direction) -> Result<()> {
        if self.peek(direction).is_blank() {
            return Err(Error::BrokenPath {
                at: self.position,
                direction,
            });
        }
        let (dx, dy) = direction.offset();
        self.position = self.position.offset(dx, dy);
        Ok(())
    }
}
