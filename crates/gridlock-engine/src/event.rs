//! The observation channel: events and listeners.

use gridlock_core::{Direction, Position, Symbol};

/// A notification describing a completed state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A vehicle slid one cell, either as an applied move or as its undo.
    Moved {
        /// The vehicle that slid.
        vehicle: Symbol,
        /// The vehicle's front cell after the slide.
        front: Position,
        /// The direction of the original move request. For an undo this is
        /// the direction of the move being taken back, not of the restoring
        /// slide.
        direction: Direction,
        /// Whether this slide took a previous move back.
        undone: bool,
    },
    /// The distinguished vehicle reached the exit.
    Solved,
}

/// A listener on the observation channel.
///
/// Observers are invoked synchronously, in subscription order, inside the
/// call that mutated the session, and only after the board mutation has
/// fully committed. They receive the event by shared reference and have no
/// path back to the board, so a misbehaving observer cannot violate engine
/// invariants.
pub trait Observer {
    /// Called for every delivered [`Event`].
    fn notify(&mut self, event: &Event);
}
