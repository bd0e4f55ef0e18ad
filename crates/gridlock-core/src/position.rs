//! Board coordinates.

use crate::direction::Direction;

/// A 0-indexed `(row, col)` board coordinate.
///
/// Positions are ordered row-major, which gives deterministic iteration
/// wherever positions are sorted.
///
/// # Examples
///
/// ```
/// use gridlock_core::{Direction, Position};
///
/// let pos = Position::new(2, 3);
/// assert_eq!(pos.step(Direction::Right), Some(Position::new(2, 4)));
/// assert_eq!(Position::new(0, 3).step(Direction::Up), None);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display,
)]
#[display("({row}, {col})")]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Creates a new position.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Returns the row index.
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column index.
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the neighboring position one step in `direction`, or `None`
    /// when the step would leave the coordinate domain.
    ///
    /// A `Some` result is not necessarily on any particular board; bounds
    /// against a grid are the board's concern.
    #[must_use]
    pub fn step(self, direction: Direction) -> Option<Self> {
        let (row, col) = match direction {
            Direction::Up => (self.row.checked_sub(1)?, self.col),
            Direction::Down => (self.row.checked_add(1)?, self.col),
            Direction::Left => (self.row, self.col.checked_sub(1)?),
            Direction::Right => (self.row, self.col.checked_add(1)?),
        };
        Some(Self { row, col })
    }
}
