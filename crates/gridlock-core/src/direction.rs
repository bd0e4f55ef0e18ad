//! Slide directions and vehicle axes.

use std::str::FromStr;

/// One of the four single-step slide directions.
///
/// The declaration order (up, down, left, right) is the canonical ordering
/// used wherever moves are enumerated, so search results are reproducible.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display,
)]
pub enum Direction {
    /// Toward decreasing row index.
    #[display("up")]
    Up,
    /// Toward increasing row index.
    #[display("down")]
    Down,
    /// Toward decreasing column index.
    #[display("left")]
    Left,
    /// Toward increasing column index.
    #[display("right")]
    Right,
}

impl Direction {
    /// All directions in canonical order.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Returns the opposite direction.
    ///
    /// Undoing a slide is a slide in the opposite direction, which makes this
    /// the heart of the engine's undo.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridlock_core::Direction;
    ///
    /// assert_eq!(Direction::Up.opposite(), Direction::Down);
    /// assert_eq!(Direction::Left.opposite(), Direction::Right);
    /// ```
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns the axis this direction moves along.
    #[must_use]
    pub const fn orientation(self) -> Orientation {
        match self {
            Self::Up | Self::Down => Orientation::Vertical,
            Self::Left | Self::Right => Orientation::Horizontal,
        }
    }
}

/// Error returned when parsing a [`Direction`] from text fails.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown direction `{text}`, expected up, down, left, or right")]
pub struct ParseDirectionError {
    /// The rejected input.
    pub text: String,
}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            _ => Err(ParseDirectionError { text: s.to_owned() }),
        }
    }
}

/// The axis a vehicle is locked to.
///
/// Horizontal vehicles occupy a run of cells in one row and may only slide
/// left or right; vertical vehicles occupy one column and may only slide up
/// or down.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, derive_more::IsVariant,
)]
pub enum Orientation {
    /// A run of cells within a single row.
    #[display("horizontal")]
    Horizontal,
    /// A run of cells within a single column.
    #[display("vertical")]
    Vertical,
}

impl Orientation {
    /// Returns the two member directions in canonical order.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridlock_core::{Direction, Orientation};
    ///
    /// assert_eq!(
    ///     Orientation::Vertical.directions(),
    ///     [Direction::Up, Direction::Down],
    /// );
    /// ```
    #[must_use]
    pub const fn directions(self) -> [Direction; 2] {
        match self {
            Self::Horizontal => [Direction::Left, Direction::Right],
            Self::Vertical => [Direction::Up, Direction::Down],
        }
    }
}
