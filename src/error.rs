//! Diagram errors.
//!
//! Every variant is a structural property of the input diagram. A walk stops
//! at the first one; nothing is retried.

use thiserror::Error;

use crate::cursor::Direction;
use crate::grid::Position;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("missing start character")]
    MissingStart,

    #[error("multiple starts: found {count} start characters")]
    MultipleStarts { count: usize },

    #[error("end character not found")]
    MissingEnd,

    #[error("multiple starting paths from {at}")]
    MultipleStartingPaths { at: Position },

    #[error("no valid path from start at {at}")]
    NoValidPathFromStart { at: Position },

    #[error("broken path: nothing to step onto going {direction} from {at}")]
    BrokenPath { at: Position, direction: Direction },

    #[error("fork in path at {at}")]
    ForkInPath { at: Position },

    #[error("no valid direction found at {at}")]
    NoValidDirection { at: Position },

    #[error("fake turn at {at}")]
    FakeTurn { at: Position },

    #[error("possible infinite loop: exceeded {limit} steps")]
    InfiniteLoop { limit: usize },

    #[error("invalid character {ch:?} at ({x}, {y})")]
    InvalidCharacter { ch: char, x: i32, y: i32 },
}
