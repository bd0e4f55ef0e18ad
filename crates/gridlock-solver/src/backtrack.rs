//! Depth-first backtracking search with visited-state pruning.

use std::{
    collections::HashSet,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
};

use gridlock_engine::{Move, Session};

/// A cooperative cancellation flag shared with a running solve.
///
/// Cloning the token shares the flag; any clone may cancel. The solver
/// checks the flag at every recursion step and unwinds with
/// [`SolveOutcome::Cancelled`], restoring the session on the way out.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    /// Creates a token in the not-cancelled state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// Returns whether cancellation has been requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

/// Counters collected during a solve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolverStats {
    expanded: usize,
    revisits: usize,
    max_depth: usize,
}

impl SolverStats {
    /// Returns the number of configurations expanded.
    #[must_use]
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    /// Returns the number of branches pruned by the visited set.
    #[must_use]
    pub fn revisits(&self) -> usize {
        self.revisits
    }

    /// Returns the deepest recursion reached.
    #[must_use]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}

/// The result of a solve.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum SolveOutcome {
    /// A winning sequence was found; applying it in order from the starting
    /// board reaches a solved configuration.
    Solved(Vec<Move>),
    /// The reachable state space was exhausted without finding a solution.
    Exhausted,
    /// The search was cancelled before it could finish.
    Cancelled,
}

impl SolveOutcome {
    /// Returns the winning move sequence, if one was found.
    #[must_use]
    pub fn moves(&self) -> Option<&[Move]> {
        match self {
            Self::Solved(moves) => Some(moves),
            Self::Exhausted | Self::Cancelled => None,
        }
    }
}

enum Search {
    Solved,
    Exhausted,
    Cancelled,
}

/// Depth-first backtracking solver.
///
/// The solver owns no board of its own: it drives the session it is handed
/// through apply/undo and restores the session's snapshot before returning,
/// so a solve is invisible to the caller's game state (observers do see the
/// search moves, including the undos taken while backtracking).
///
/// The found sequence is first-found under the deterministic move ordering,
/// not necessarily shortest.
///
/// # Examples
///
/// ```
/// use gridlock_core::{Board, Position, Symbol, Vehicle};
/// use gridlock_engine::Session;
/// use gridlock_solver::{Backtracker, CancelToken};
///
/// let red = Vehicle::from_endpoints(
///     Symbol::new('R'),
///     Position::new(0, 0),
///     Position::new(0, 1),
/// )?;
/// let board = Board::new(3, 3, Position::new(0, 2), vec![red])?;
/// let mut session = Session::new(board, Symbol::new('R'));
///
/// let token = CancelToken::new();
/// let solver = Backtracker::with_cancel_token(token.clone());
/// assert!(solver.solve(&mut session).is_solved());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Backtracker {
    cancel: Option<CancelToken>,
}

impl Backtracker {
    /// Creates a solver without a cancellation token.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a solver that honors the given cancellation token.
    #[must_use]
    pub fn with_cancel_token(token: CancelToken) -> Self {
        Self {
            cancel: Some(token),
        }
    }

    /// Searches for a winning move sequence.
    #[must_use]
    pub fn solve(&self, session: &mut Session) -> SolveOutcome {
        let mut stats = SolverStats::default();
        self.solve_with_stats(session, &mut stats)
    }

    /// Searches for a winning move sequence, accumulating statistics.
    ///
    /// The session is restored to its pre-call state whatever the outcome.
    pub fn solve_with_stats(
        &self,
        session: &mut Session,
        stats: &mut SolverStats,
    ) -> SolveOutcome {
        let snapshot = session.snapshot();
        let mut visited = HashSet::new();
        let mut path = Vec::new();
        let result = self.search(session, &mut visited, &mut path, stats, 0);
        session.restore(snapshot);
        log::debug!(
            "search finished: {} configurations expanded, {} revisits pruned, depth {}",
            stats.expanded,
            stats.revisits,
            stats.max_depth,
        );
        match result {
            Search::Solved => SolveOutcome::Solved(path),
            Search::Exhausted => SolveOutcome::Exhausted,
            Search::Cancelled => SolveOutcome::Cancelled,
        }
    }

    fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(CancelToken::is_cancelled)
    }

    fn search(
        &self,
        session: &mut Session,
        visited: &mut HashSet<String>,
        path: &mut Vec<Move>,
        stats: &mut SolverStats,
        depth: usize,
    ) -> Search {
        if self.is_cancelled() {
            return Search::Cancelled;
        }
        if session.is_solved() {
            return Search::Solved;
        }
        if !visited.insert(session.board().fingerprint()) {
            stats.revisits += 1;
            return Search::Exhausted;
        }
        stats.expanded += 1;
        stats.max_depth = stats.max_depth.max(depth);

        for mv in session.legal_moves() {
            if let Err(err) = session.apply(mv) {
                // A generated move must apply; anything else is an engine
                // inconsistency, so abandon the branch rather than panic.
                log::warn!("generated move {mv} rejected: {err}");
                return Search::Exhausted;
            }
            path.push(mv);
            match self.search(session, visited, path, stats, depth + 1) {
                Search::Solved => return Search::Solved,
                Search::Cancelled => return Search::Cancelled,
                Search::Exhausted => {}
            }
            path.pop();
            if let Err(err) = session.undo(mv) {
                log::warn!("undo of {mv} rejected: {err}");
                return Search::Exhausted;
            }
        }
        Search::Exhausted
    }
}
