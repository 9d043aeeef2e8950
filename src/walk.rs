//! The traversal loop.
//!
//! A [`Walker`] borrows a grid, owns its cursor, steering and letter
//! collector, and runs from the start marker to the end marker, building the
//! path trace as it goes.

use tracing::{debug, trace};

use crate::chars::{Cell, END, START};
use crate::cursor::{Cursor, Direction};
use crate::error::{Error, Result};
use crate::grid::{Grid, Position};
use crate::letters::LetterCollector;
use crate::steering::Steering;

/// Options for walking a diagram.
///
/// # Example
///
/// ```rust
/// use pathwalk::{walk_with_options, WalkOptions};
///
/// let diagram = "@-A-+\n    |\n    x";
/// let options = WalkOptions::new().with_max_steps(100).with_strict_charset(true);
/// let trace = walk_with_options(diagram, &options).unwrap();
/// assert_eq!(trace.letters, "A");
/// ```
#[derive(Debug, Clone, Default)]
pub struct WalkOptions {
    /// Upper bound on steps before the walk is declared an infinite loop.
    /// When unset, the bound is derived from the grid size.
    pub max_steps: Option<usize>,
    /// Reject characters outside the diagram alphabet before walking.
    pub strict_charset: bool,
}

impl WalkOptions {
    pub fn new() -> Self {
        Self {
            max_steps: None,
            strict_charset: false,
        }
    }

    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = Some(max_steps);
        self
    }

    pub fn with_strict_charset(mut self, strict_charset: bool) -> Self {
        self.strict_charset = strict_charset;
        self
    }

    /// The step bound for `grid`: the explicit one, or one step per
    /// (cell, direction) state plus the final arrival.
    pub fn step_limit(&self, grid: &Grid) -> usize {
        self.max_steps.unwrap_or(4 * grid.area() + 1)
    }
}

/// Result of a successful walk
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Trace {
    /// Waypoint letters in first-visit order
    pub letters: String,
    /// Every character stepped on, with repeated letters collapsed
    pub path: String,
}

#[derive(Debug)]
pub struct Walker<'g> {
    cursor: Cursor<'g>,
    steering: Steering,
    letters: LetterCollector,
    path: String,
    origin: Position,
    limit: usize,
    steps: usize,
}

impl<'g> Walker<'g> {
    /// Check the markers and set up a walk from the start cell
    pub fn new(grid: &'g Grid, options: &WalkOptions) -> Result<Self> {
        if options.strict_charset {
            grid.validate_charset()?;
        }
        let origin = grid.find_start()?;
        grid.validate_single_start()?;
        let end = grid.find_end()?;
        debug!(start = %origin, end = %end, "found markers");

        Ok(Self {
            cursor: Cursor::new(grid, origin),
            steering: Steering::new(),
            letters: LetterCollector::new(),
            path: String::new(),
            origin,
            limit: options.step_limit(grid),
            steps: 0,
        })
    }

    /// Walk to the end marker
    pub fn run(mut self) -> Result<Trace> {
        self.path.push(START);
        self.check_starting_paths()?;

        loop {
            let cell = self.cursor.current();
            if cell == Cell::End {
                if !self.path.ends_with(END) {
                    self.path.push(END);
                }
                debug!(steps = self.steps, at = %self.cursor.position(), "reached end");
                break;
            }

            self.steps += 1;
            if self.steps > self.limit {
                return Err(Error::InfiniteLoop { limit: self.limit });
            }
            self.advance(cell)?;
        }

        Ok(Trace {
            letters: self.letters.collected(),
            path: self.path,
        })
    }

    /// Only one way out of the start cell may be open
    fn check_starting_paths(&self) -> Result<()> {
        let open = Direction::ALL
            .into_iter()
            .filter(|&dir| self.cursor.can_step(dir))
            .count();
        if open > 1 {
            return Err(Error::MultipleStartingPaths { at: self.origin });
        }
        Ok(())
    }

    fn advance(&mut self, cell: Cell) -> Result<()> {
        let pos = self.cursor.position();
        self.letters.observe(cell, pos);

        let is_origin = self.steps == 1;
        let facing = self.steering.resolve(cell, &self.cursor, is_origin)?;
        self.cursor.step(facing)?;

        let next = self.cursor.current();
        self.record(next);
        trace!(
            step = self.steps,
            at = %self.cursor.position(),
            cell = %next.as_char(),
            path = %self.path,
            "stepped"
        );
        Ok(())
    }

    /// Pipes and intersections always extend the trace; anything else only
    /// when it differs from the last character.
    fn record(&mut self, cell: Cell) {
        let c = cell.as_char();
        if cell.is_track() || !self.path.ends_with(c) {
            self.path.push(c);
        }
    }
}

/// Walk a parsed grid
pub fn walk_grid(grid: &Grid, options: &WalkOptions) -> Result<Trace> {
    Walker::new(grid, options)?.run()
}
