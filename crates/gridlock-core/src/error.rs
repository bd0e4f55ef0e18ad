//! Error types for layout validation and slide legality.

use crate::{direction::Direction, position::Position, vehicle::Symbol};

/// A construction-time invariant violation.
///
/// Returned when a vehicle or a whole board layout is malformed. These are
/// the only fatal conditions in the core; everything else is recoverable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum LayoutError {
    /// A vehicle is shorter than the two-cell minimum.
    #[display("vehicle {symbol} has length {length}, the minimum is 2")]
    TooShort {
        /// The offending vehicle.
        symbol: Symbol,
        /// The rejected length.
        length: u8,
    },
    /// A vehicle's endpoints share neither a row nor a column.
    #[display("vehicle {symbol} endpoints are not axis-aligned")]
    Misaligned {
        /// The offending vehicle.
        symbol: Symbol,
    },
    /// A vehicle does not fit inside the grid.
    #[display("vehicle {symbol} does not fit on the board")]
    OutOfBounds {
        /// The offending vehicle.
        symbol: Symbol,
    },
    /// Two vehicles claim the same cell.
    #[display("vehicle {symbol} overlaps another vehicle at {position}")]
    Overlap {
        /// The vehicle whose placement collided.
        symbol: Symbol,
        /// The doubly-claimed cell.
        position: Position,
    },
    /// The same symbol appears on more than one vehicle.
    #[display("vehicle {symbol} appears more than once")]
    DuplicateVehicle {
        /// The repeated symbol.
        symbol: Symbol,
    },
}

/// A rejected slide request.
///
/// All variants are recoverable and leave the board untouched.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    derive_more::Display,
    derive_more::Error,
    derive_more::IsVariant,
)]
pub enum MoveError {
    /// The requested symbol is not on the board.
    #[display("vehicle {symbol} is not on the board")]
    VehicleNotFound {
        /// The unknown symbol.
        symbol: Symbol,
    },
    /// The direction runs across the vehicle's axis.
    #[display("vehicle {symbol} cannot slide {direction} across its axis")]
    AxisMismatch {
        /// The vehicle.
        symbol: Symbol,
        /// The cross-axis direction.
        direction: Direction,
    },
    /// The entered cell would lie outside the grid.
    #[display("sliding {symbol} {direction} leaves the board")]
    OutOfBounds {
        /// The vehicle.
        symbol: Symbol,
        /// The rejected direction.
        direction: Direction,
    },
    /// The entered cell is held by another vehicle.
    #[display("sliding {symbol} {direction} is blocked by {blocker}")]
    Occupied {
        /// The vehicle.
        symbol: Symbol,
        /// The rejected direction.
        direction: Direction,
        /// The vehicle holding the entered cell.
        blocker: Symbol,
    },
}
