//! Character classification for routing diagrams.
//!
//! Every grid cell is classified once into a [`Cell`] so the walker can match
//! on it exhaustively instead of comparing raw characters.

/// Start marker
pub const START: char = '@';
/// End marker
pub const END: char = 'x';
/// Horizontal pipe
pub const H_PIPE: char = '-';
/// Vertical pipe
pub const V_PIPE: char = '|';
/// Intersection (forced turn)
pub const CORNER: char = '+';
/// Empty cell
pub const BLANK: char = ' ';

/// A single classified grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Start,
    End,
    HorizontalPipe,
    VerticalPipe,
    Intersection,
    Blank,
    /// Waypoint letter, always `A..=Z`
    Letter(char),
    /// Anything outside the diagram alphabet. Not blank, but never a legal
    /// step target.
    Other(char),
}

impl Cell {
    pub fn from_char(c: char) -> Self {
        match c {
            START => Cell::Start,
            END => Cell::End,
            H_PIPE => Cell::HorizontalPipe,
            V_PIPE => Cell::VerticalPipe,
            CORNER => Cell::Intersection,
            BLANK => Cell::Blank,
            'A'..='Z' => Cell::Letter(c),
            _ => Cell::Other(c),
        }
    }

    /// The character this cell was read from
    pub fn as_char(self) -> char {
        match self {
            Cell::Start => START,
            Cell::End => END,
            Cell::HorizontalPipe => H_PIPE,
            Cell::VerticalPipe => V_PIPE,
            Cell::Intersection => CORNER,
            Cell::Blank => BLANK,
            Cell::Letter(c) | Cell::Other(c) => c,
        }
    }

    pub fn is_blank(self) -> bool {
        self == Cell::Blank
    }

    /// Letters, plus the end marker: cells that may be entered from any side
    pub fn is_letter_class(self) -> bool {
        matches!(self, Cell::Letter(_) | Cell::End)
    }

    /// Pipes and intersections are appended to the trace even when repeated
    pub fn is_track(self) -> bool {
        matches!(
            self,
            Cell::HorizontalPipe | Cell::VerticalPipe | Cell::Intersection
        )
    }

    /// True for every character of the diagram alphabet
    pub fn is_known(self) -> bool {
        !matches!(self, Cell::Other(_))
    }
}

impl From<char> for Cell {
    fn from(c: char) -> Self {
        Cell::from_char(c)
    }
}
