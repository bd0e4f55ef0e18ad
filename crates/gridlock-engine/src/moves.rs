//! Move requests.

use gridlock_core::{Direction, Symbol};

/// A request to slide one vehicle a single cell in one direction.
///
/// Moves order by symbol first and then by the canonical direction order
/// (up, down, left, right), so sorted move collections are deterministic.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display,
)]
#[display("{vehicle} {direction}")]
pub struct Move {
    /// The vehicle to slide.
    pub vehicle: Symbol,
    /// The direction to slide it.
    pub direction: Direction,
}

impl Move {
    /// Creates a move request.
    #[must_use]
    pub const fn new(vehicle: Symbol, direction: Direction) -> Self {
        Self { vehicle, direction }
    }
}
