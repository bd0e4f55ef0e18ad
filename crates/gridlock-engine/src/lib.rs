//! Game session layer for the Gridlock sliding-block puzzle.
//!
//! This crate turns the passive board of `gridlock-core` into a playable
//! game. A [`Session`] owns the board exclusively and exposes the only
//! mutation entry points: [`Session::apply`], [`Session::undo`], and
//! [`Session::reset`]. Around those it provides the exhaustive move
//! generator ([`Session::legal_moves`]), win detection
//! ([`Session::is_solved`]), a move counter, and a synchronous observer
//! channel ([`Observer`]/[`Event`]) that reports every applied move, every
//! undone move, and the transition into the solved state.
//!
//! # Examples
//!
//! ```
//! use gridlock_core::{Board, Direction, Position, Symbol, Vehicle};
//! use gridlock_engine::{Move, Session};
//!
//! let red = Vehicle::from_endpoints(
//!     Symbol::new('R'),
//!     Position::new(2, 0),
//!     Position::new(2, 1),
//! )?;
//! let board = Board::new(5, 5, Position::new(2, 4), vec![red])?;
//! let mut session = Session::new(board, Symbol::new('R'));
//!
//! session.apply(Move::new(Symbol::new('R'), Direction::Right))?;
//! assert_eq!(session.move_count(), 1);
//! assert!(!session.is_solved());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod event;
pub mod moves;
pub mod session;

pub use self::{
    event::{Event, Observer},
    moves::Move,
    session::{Session, Snapshot},
};
