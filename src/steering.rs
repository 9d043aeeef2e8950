//! Direction-change policy.
//!
//! [`Steering`] owns the facing for a whole walk. At every cell it decides
//! whether to keep going, turn, or reject the diagram.

use tracing::debug;

use crate::chars::Cell;
use crate::cursor::{Cursor, Direction};
use crate::error::{Error, Result};

/// Priority order for picking the first direction out of the start cell
const LAUNCH_ORDER: [Direction; 4] = [
    Direction::Down,
    Direction::Right,
    Direction::Left,
    Direction::Up,
];

#[derive(Debug, Clone)]
pub struct Steering {
    facing: Direction,
}

impl Default for Steering {
    fn default() -> Self {
        Self::new()
    }
}

impl Steering {
    pub fn new() -> Self {
        Self {
            facing: Direction::Right,
        }
    }

    pub fn facing(&self) -> Direction {
        self.facing
    }

    /// Decide the facing for the next step out of `cell`, the cell under
    /// `cursor`. `is_origin` is true only before the first step.
    pub fn resolve(
        &mut self,
        cell: Cell,
        cursor: &Cursor<'_>,
        is_origin: bool,
    ) -> Result<Direction> {
        let next = match cell {
            // Revisiting the start cell later behaves like a plain pipe
            Cell::Start if !is_origin => self.facing,
            Cell::Start => launch(cursor)?,
            _ if cursor.can_step(self.facing) => {
                if cell == Cell::Intersection {
                    return Err(Error::FakeTurn {
                        at: cursor.position(),
                    });
                }
                self.facing
            }
            Cell::Intersection | Cell::Letter(_) | Cell::End => self.turn(cursor)?,
            Cell::VerticalPipe if !self.facing.is_vertical() => {
                pick_one(cursor, [Direction::Up, Direction::Down])?
            }
            Cell::HorizontalPipe if self.facing.is_vertical() => {
                pick_one(cursor, [Direction::Left, Direction::Right])?
            }
            // A pipe along the facing keeps going and crosses whatever is
            // ahead; the step itself rejects a blank.
            Cell::VerticalPipe | Cell::HorizontalPipe | Cell::Other(_) | Cell::Blank => {
                self.facing
            }
        };

        if next != self.facing {
            debug!(
                at = %cursor.position(),
                from = %self.facing,
                to = %next,
                "changing direction"
            );
        }
        self.facing = next;
        Ok(next)
    }

    /// Exactly one of the three non-reverse directions must be open
    fn turn(&self, cursor: &Cursor<'_>) -> Result<Direction> {
        let back = self.facing.opposite();
        let mut open = Direction::ALL
            .into_iter()
            .filter(|&dir| dir != back && cursor.can_step(dir));

        match (open.next(), open.next()) {
            (Some(dir), None) => Ok(dir),
            (Some(_), Some(_)) => Err(Error::ForkInPath {
                at: cursor.position(),
            }),
            (None, _) => Err(Error::NoValidDirection {
                at: cursor.position(),
            }),
        }
    }
}

fn launch(cursor: &Cursor<'_>) -> Result<Direction> {
    LAUNCH_ORDER
        .into_iter()
        .find(|&dir| cursor.can_step(dir))
        .ok_or(Error::NoValidPathFromStart {
            at: cursor.position(),
        })
}

/// Turn on a plain pipe drawn across the facing: one of the two candidates
/// must be open, not both.
fn pick_one(cursor: &Cursor<'_>, candidates: [Direction; 2]) -> Result<Direction> {
    let [first, second] = candidates;
    match (cursor.can_step(first), cursor.can_step(second)) {
        (true, false) => Ok(first),
        (false, true) => Ok(second),
        (true, true) => Err(Error::ForkInPath {
            at: cursor.position(),
        }),
        (false, false) => Err(Error::NoValidDirection {
            at: cursor.position(),
        }),
    }
}
