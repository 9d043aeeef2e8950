//! Walk ASCII routing diagrams.
//!
//! A diagram is a grid of characters with a single start marker `@`, an end
//! marker `x`, pipes `-` and `|`, turns `+`, and waypoint letters `A`..`Z`.
//! Walking it follows the pipes from start to end and reports the letters
//! seen on the way plus every character stepped on.
//!
//! # Example
//!
//! ```rust
//! let diagram = "\
//! @---A---+
//!         |
//! x-B-+   C
//!     |   |
//!     +---+";
//!
//! let trace = pathwalk::walk(diagram).unwrap();
//! assert_eq!(trace.letters, "ACB");
//! assert_eq!(trace.path, "@---A---+|C|+---+|+-B-x");
//! ```
//!
//! Malformed diagrams are rejected with an [`Error`] naming what is wrong
//! and where:
//!
//! ```rust
//! use pathwalk::Error;
//!
//! let err = pathwalk::walk("@-A-+-B-x").unwrap_err();
//! assert!(matches!(err, Error::FakeTurn { .. }));
//! ```

mod chars;
mod cursor;
mod error;
mod grid;
mod letters;
mod steering;
mod walk;

pub use chars::Cell;
pub use cursor::{Cursor, Direction};
pub use error::{Error, Result};
pub use grid::{Grid, Position};
pub use letters::LetterCollector;
pub use steering::Steering;
pub use walk::{walk_grid, Trace, WalkOptions, Walker};

/// Walk a diagram with default options
pub fn walk(input: &str) -> Result<Trace> {
    walk_with_options(input, &WalkOptions::default())
}

/// Walk a diagram with custom options
pub fn walk_with_options(input: &str, options: &WalkOptions) -> Result<Trace> {
    let grid = Grid::new(input);
    walk_grid(&grid, options)
}
