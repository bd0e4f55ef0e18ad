//! Core data structures for the Gridlock sliding-block puzzle.
//!
//! This crate provides the geometric primitives, the vehicle model, and the
//! board with its invariants. It is the foundation shared by the game engine,
//! the solver, and the console front end.
//!
//! # Overview
//!
//! The crate is organized around three concepts:
//!
//! 1. **Geometry** - Coordinate and direction primitives
//!    - [`position`]: 0-indexed `(row, col)` board coordinates
//!    - [`direction`]: the four slide directions and the two vehicle axes
//!
//! 2. **Vehicles** - Rigid sliding blocks
//!    - [`vehicle`]: a vehicle identified by a one-character [`Symbol`],
//!      with an orientation, a length of at least two cells, and a front cell
//!
//! 3. **Board** - The grid and its registry
//!    - [`board`]: an arbitrary-sized grid of cells, the exit position, the
//!      symbol-to-vehicle registry, layout validation, and the slide
//!      primitive that preserves all board invariants
//!
//! Errors are covered by [`LayoutError`] (construction-time invariant
//! violations) and [`MoveError`] (rejected slides); both live in [`error`].
//!
//! # Examples
//!
//! ```
//! use gridlock_core::{Board, Direction, Orientation, Position, Symbol, Vehicle};
//!
//! let red = Vehicle::new(
//!     Symbol::new('R'),
//!     Orientation::Horizontal,
//!     2,
//!     Position::new(2, 1),
//! )?;
//! let mut board = Board::new(5, 5, Position::new(2, 4), vec![red])?;
//!
//! // The red vehicle occupies (2, 0) and (2, 1); it may slide right.
//! let front = board.slide(Symbol::new('R'), Direction::Right)?;
//! assert_eq!(front, Position::new(2, 2));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod board;
pub mod direction;
pub mod error;
pub mod position;
pub mod vehicle;

// Re-export commonly used types
pub use self::{
    board::{Board, Cell},
    direction::{Direction, Orientation},
    error::{LayoutError, MoveError},
    position::Position,
    vehicle::{Symbol, Vehicle},
};
