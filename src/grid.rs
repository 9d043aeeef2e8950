//! Read-only character grid.
//!
//! Rows may have different lengths. Any read outside the grid, including past
//! the end of a short row, yields [`Cell::Blank`].

use std::fmt;

use crate::chars::Cell;
use crate::error::{Error, Result};

/// Grid coordinate: `x` is the column, `y` the row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return a new position offset by dx, dy
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A diagram, one row of cells per input line
#[derive(Debug, Clone, Default)]
pub struct Grid {
    rows: Vec<Vec<Cell>>,
    /// Length of the longest row
    pub width: usize,
    pub height: usize,
}

impl Grid {
    /// Build a grid from text, one row per line
    pub fn new(input: &str) -> Self {
        Self::from_rows(input.lines())
    }

    pub fn from_rows<I, S>(rows: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rows: Vec<Vec<Cell>> = rows
            .into_iter()
            .map(|row| row.as_ref().chars().map(Cell::from_char).collect())
            .collect();
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        let height = rows.len();
        Self {
            rows,
            width,
            height,
        }
    }

    /// Cell at (x, y), blank when out of bounds
    pub fn get(&self, x: i32, y: i32) -> Cell {
        if x < 0 || y < 0 {
            return Cell::Blank;
        }
        self.rows
            .get(y as usize)
            .and_then(|row| row.get(x as usize))
            .copied()
            .unwrap_or(Cell::Blank)
    }

    pub fn at(&self, pos: Position) -> Cell {
        self.get(pos.x, pos.y)
    }

    /// Iterate all stored cells in row-major order
    fn cells(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(move |(x, &cell)| (Position::new(x as i32, y as i32), cell))
        })
    }

    fn find(&self, target: Cell) -> Option<Position> {
        self.cells()
            .find(|&(_, cell)| cell == target)
            .map(|(pos, _)| pos)
    }

    pub fn find_start(&self) -> Result<Position> {
        self.find(Cell::Start).ok_or(Error::MissingStart)
    }

    /// First end marker in row-major order
    pub fn find_end(&self) -> Result<Position> {
        self.find(Cell::End).ok_or(Error::MissingEnd)
    }

    pub fn validate_single_start(&self) -> Result<()> {
        let count = self.cells().filter(|&(_, cell)| cell == Cell::Start).count();
        if count > 1 {
            return Err(Error::MultipleStarts { count });
        }
        Ok(())
    }

    /// Reject any character outside the diagram alphabet
    pub fn validate_charset(&self) -> Result<()> {
        match self.cells().find(|&(_, cell)| !cell.is_known()) {
            Some((pos, cell)) => Err(Error::InvalidCharacter {
                ch: cell.as_char(),
                x: pos.x,
                y: pos.y,
            }),
            None => Ok(()),
        }
    }

    /// Number of cells the grid would hold if every row were padded to
    /// `width`
    pub fn area(&self) -> usize {
        self.width * self.height
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.as_char())?;
            }
        }
        Ok(())
    }
}
