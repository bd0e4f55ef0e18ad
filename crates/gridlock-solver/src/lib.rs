//! Backtracking solver for the Gridlock sliding-block puzzle.
//!
//! The solver performs a depth-first search over board configurations
//! reachable by single-step slides, driving a live
//! [`Session`](gridlock_engine::Session) through its own apply/undo entry
//! points. Configurations already seen are pruned through a visited set
//! keyed by the board's canonical fingerprint, which both prevents
//! move/inverse cycles and bounds the search to each configuration once.
//!
//! The search is cooperative: a shared [`CancelToken`] may be set from
//! another thread and is checked at every recursion step. Whatever the
//! outcome, the session is returned exactly as it was found.
//!
//! # Examples
//!
//! ```
//! use gridlock_core::{Board, Position, Symbol, Vehicle};
//! use gridlock_engine::Session;
//! use gridlock_solver::Backtracker;
//!
//! let red = Vehicle::from_endpoints(
//!     Symbol::new('R'),
//!     Position::new(0, 0),
//!     Position::new(0, 1),
//! )?;
//! let board = Board::new(3, 3, Position::new(0, 2), vec![red])?;
//! let mut session = Session::new(board, Symbol::new('R'));
//!
//! let outcome = Backtracker::new().solve(&mut session);
//! assert_eq!(outcome.moves().map(<[_]>::len), Some(1));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod backtrack;

pub use self::backtrack::{Backtracker, CancelToken, SolveOutcome, SolverStats};
