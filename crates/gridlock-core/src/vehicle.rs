//! Vehicles: rigid axis-locked sliding blocks.

use std::str::FromStr;

use crate::{
    direction::{Direction, Orientation},
    error::LayoutError,
    position::Position,
};

/// A one-character vehicle identifier.
///
/// # Examples
///
/// ```
/// use gridlock_core::Symbol;
///
/// let symbol: Symbol = "R".parse()?;
/// assert_eq!(symbol.get(), 'R');
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display,
)]
#[display("{_0}")]
pub struct Symbol(char);

impl Symbol {
    /// Creates a symbol from a character.
    #[must_use]
    pub const fn new(c: char) -> Self {
        Self(c)
    }

    /// Returns the underlying character.
    #[must_use]
    pub const fn get(self) -> char {
        self.0
    }
}

/// Error returned when parsing a [`Symbol`] from text fails.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("expected a single-character vehicle symbol, got `{text}`")]
pub struct ParseSymbolError {
    /// The rejected input.
    pub text: String,
}

impl FromStr for Symbol {
    type Err = ParseSymbolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(Self(c)),
            _ => Err(ParseSymbolError { text: s.to_owned() }),
        }
    }
}

/// A rigid vehicle occupying a contiguous, axis-aligned run of cells.
///
/// The *front* cell is the occupied cell with the greatest row (vertical) or
/// column (horizontal) index; the remaining cells run toward decreasing index
/// down to the *rear*. The front is the vehicle's canonical position and the
/// coordinate the win check compares against the exit.
///
/// # Examples
///
/// ```
/// use gridlock_core::{Orientation, Position, Symbol, Vehicle};
///
/// let truck = Vehicle::new(
///     Symbol::new('T'),
///     Orientation::Vertical,
///     3,
///     Position::new(4, 0),
/// )?;
/// assert_eq!(truck.rear(), Position::new(2, 0));
/// assert_eq!(truck.cells().count(), 3);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vehicle {
    symbol: Symbol,
    orientation: Orientation,
    length: u8,
    front: Position,
}

impl Vehicle {
    /// Creates a vehicle from its canonical description.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::TooShort`] if `length < 2`, or
    /// [`LayoutError::OutOfBounds`] if the run would extend past row or
    /// column zero.
    pub fn new(
        symbol: Symbol,
        orientation: Orientation,
        length: u8,
        front: Position,
    ) -> Result<Self, LayoutError> {
        if length < 2 {
            return Err(LayoutError::TooShort { symbol, length });
        }
        let run = match orientation {
            Orientation::Horizontal => front.col(),
            Orientation::Vertical => front.row(),
        };
        if run < length - 1 {
            return Err(LayoutError::OutOfBounds { symbol });
        }
        Ok(Self {
            symbol,
            orientation,
            length,
            front,
        })
    }

    /// Creates a vehicle from a pair of endpoint cells.
    ///
    /// This is the puzzle-record form: equal rows make a horizontal vehicle,
    /// equal columns a vertical one, and the length is the inclusive span
    /// between the endpoints. The endpoints may be given in either order.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::Misaligned`] if the endpoints share neither
    /// axis, or [`LayoutError::TooShort`] if they coincide.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridlock_core::{Orientation, Position, Symbol, Vehicle};
    ///
    /// let red = Vehicle::from_endpoints(
    ///     Symbol::new('R'),
    ///     Position::new(2, 0),
    ///     Position::new(2, 1),
    /// )?;
    /// assert_eq!(red.orientation(), Orientation::Horizontal);
    /// assert_eq!(red.front(), Position::new(2, 1));
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn from_endpoints(
        symbol: Symbol,
        start: Position,
        end: Position,
    ) -> Result<Self, LayoutError> {
        if start.row() == end.row() && start.col() != end.col() {
            let length = start.col().abs_diff(end.col()) + 1;
            let front = Position::new(start.row(), start.col().max(end.col()));
            Self::new(symbol, Orientation::Horizontal, length, front)
        } else if start.col() == end.col() && start.row() != end.row() {
            let length = start.row().abs_diff(end.row()) + 1;
            let front = Position::new(start.row().max(end.row()), start.col());
            Self::new(symbol, Orientation::Vertical, length, front)
        } else if start == end {
            Err(LayoutError::TooShort { symbol, length: 1 })
        } else {
            Err(LayoutError::Misaligned { symbol })
        }
    }

    /// Returns the vehicle's symbol.
    #[must_use]
    pub const fn symbol(&self) -> Symbol {
        self.symbol
    }

    /// Returns the axis the vehicle slides along.
    #[must_use]
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Returns the number of cells the vehicle occupies.
    #[must_use]
    pub const fn length(&self) -> u8 {
        self.length
    }

    /// Returns the front cell (greatest row or column index).
    #[must_use]
    pub const fn front(&self) -> Position {
        self.front
    }

    /// Returns the rear cell (least row or column index).
    #[must_use]
    pub fn rear(&self) -> Position {
        let offset = self.length - 1;
        match self.orientation {
            Orientation::Horizontal => {
                Position::new(self.front.row(), self.front.col() - offset)
            }
            Orientation::Vertical => {
                Position::new(self.front.row() - offset, self.front.col())
            }
        }
    }

    /// Returns the occupied cells from rear to front.
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        let rear = self.rear();
        (0..self.length).map(move |offset| match self.orientation {
            Orientation::Horizontal => Position::new(rear.row(), rear.col() + offset),
            Orientation::Vertical => Position::new(rear.row() + offset, rear.col()),
        })
    }

    /// Returns whether the vehicle occupies `position`.
    #[must_use]
    pub fn contains(&self, position: Position) -> bool {
        self.cells().any(|cell| cell == position)
    }

    /// Returns the cell the leading edge would enter by sliding one step in
    /// `direction`, or `None` when the step leaves the coordinate domain.
    ///
    /// The leading edge is the front for down/right slides and the rear for
    /// up/left slides; the same rule covers every direction and length, so
    /// a vehicle can never collide with itself.
    #[must_use]
    pub fn entered_cell(&self, direction: Direction) -> Option<Position> {
        match direction {
            Direction::Down | Direction::Right => self.front.step(direction),
            Direction::Up | Direction::Left => self.rear().step(direction),
        }
    }

    /// Returns the cell vacated by sliding one step in `direction`.
    #[must_use]
    pub fn vacated_cell(&self, direction: Direction) -> Position {
        match direction {
            Direction::Down | Direction::Right => self.rear(),
            Direction::Up | Direction::Left => self.front,
        }
    }

    /// Returns the vehicle after a one-step slide in `direction`.
    ///
    /// The caller must have validated the slide first.
    pub(crate) fn slid(mut self, direction: Direction) -> Self {
        self.front = self
            .front
            .step(direction)
            .expect("a validated slide keeps the front in range");
        self
    }
}
