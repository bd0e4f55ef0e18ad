//! The game session: the move engine, generator, win check, and channel.

use std::fmt;

use gridlock_core::{Board, MoveError, Symbol};

use crate::{
    event::{Event, Observer},
    moves::Move,
};

/// A point-in-time capture of a session's game state.
///
/// Produced by [`Session::snapshot`] and consumed by [`Session::restore`];
/// the solver brackets its search with the pair so the live session is
/// returned exactly as found.
#[derive(Debug, Clone)]
pub struct Snapshot {
    board: Board,
    move_count: usize,
    solved: bool,
}

/// An in-memory game of Gridlock.
///
/// The session owns the board exclusively; every mutation flows through
/// [`apply`](Session::apply), [`undo`](Session::undo), or
/// [`reset`](Session::reset), so the board invariants can never be broken
/// from outside. The session also carries the move counter, the
/// distinguished target vehicle, and the registered observers.
///
/// # Examples
///
/// ```
/// use gridlock_core::{Board, Direction, Position, Symbol, Vehicle};
/// use gridlock_engine::{Move, Session};
///
/// let red = Vehicle::from_endpoints(
///     Symbol::new('R'),
///     Position::new(0, 0),
///     Position::new(0, 1),
/// )?;
/// let board = Board::new(3, 3, Position::new(0, 2), vec![red])?;
/// let mut session = Session::new(board, Symbol::new('R'));
///
/// session.apply(Move::new(Symbol::new('R'), Direction::Right))?;
/// assert!(session.is_solved());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct Session {
    board: Board,
    initial: Board,
    target: Symbol,
    move_count: usize,
    solved: bool,
    observers: Vec<Box<dyn Observer>>,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("board", &self.board)
            .field("target", &self.target)
            .field("move_count", &self.move_count)
            .field("solved", &self.solved)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Session {
    /// Creates a session from an initial board and the target vehicle.
    ///
    /// The initial board is retained for [`reset`](Session::reset). A target
    /// symbol absent from the board is not an error; the session simply can
    /// never be solved.
    #[must_use]
    pub fn new(board: Board, target: Symbol) -> Self {
        let initial = board.clone();
        Self {
            board,
            initial,
            target,
            move_count: 0,
            solved: false,
            observers: Vec::new(),
        }
    }

    /// Returns the live board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the distinguished target vehicle's symbol.
    #[must_use]
    pub fn target(&self) -> Symbol {
        self.target
    }

    /// Returns the net number of applied moves.
    ///
    /// Incremented by [`apply`](Session::apply), decremented by
    /// [`undo`](Session::undo), zeroed by [`reset`](Session::reset).
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Registers an observer on the channel.
    ///
    /// Observers are notified synchronously in subscription order and stay
    /// registered for the lifetime of the session, across resets.
    pub fn subscribe(&mut self, observer: Box<dyn Observer>) {
        self.observers.push(observer);
    }

    fn emit(&mut self, event: &Event) {
        for observer in &mut self.observers {
            observer.notify(event);
        }
    }

    /// Checks a move for legality without mutating anything.
    ///
    /// # Errors
    ///
    /// The same [`MoveError`]s as [`apply`](Session::apply).
    pub fn check(&self, mv: Move) -> Result<(), MoveError> {
        self.board.check_slide(mv.vehicle, mv.direction).map(|_| ())
    }

    /// Applies a move: slides the vehicle one cell in the move's direction.
    ///
    /// On success the move counter is incremented, an [`Event::Moved`] with
    /// `undone: false` is delivered to the observers, and the event is
    /// returned.
    ///
    /// # Errors
    ///
    /// Returns a [`MoveError`] (unknown vehicle, cross-axis direction,
    /// entered cell off the grid or occupied); the board is untouched.
    pub fn apply(&mut self, mv: Move) -> Result<Event, MoveError> {
        let front = self.board.slide(mv.vehicle, mv.direction)?;
        self.move_count += 1;
        let event = Event::Moved {
            vehicle: mv.vehicle,
            front,
            direction: mv.direction,
            undone: false,
        };
        self.emit(&event);
        Ok(event)
    }

    /// Takes a previously applied move back.
    ///
    /// Undo is the exact geometric inverse of [`apply`](Session::apply): a
    /// slide in the opposite direction. Applying a move and then undoing it
    /// restores a bit-identical board and registry. The move counter is
    /// decremented (saturating at zero) and an [`Event::Moved`] with
    /// `undone: true` is delivered.
    ///
    /// # Errors
    ///
    /// Returns a [`MoveError`] if the inverse slide is not legal, which for
    /// a move that was actually just applied cannot happen: the vacated
    /// cell is empty by construction.
    pub fn undo(&mut self, mv: Move) -> Result<Event, MoveError> {
        let front = self.board.slide(mv.vehicle, mv.direction.opposite())?;
        self.move_count = self.move_count.saturating_sub(1);
        let event = Event::Moved {
            vehicle: mv.vehicle,
            front,
            direction: mv.direction,
            undone: true,
        };
        self.emit(&event);
        Ok(event)
    }

    /// Enumerates every legal move on the current board.
    ///
    /// For each vehicle in symbol order, both directions of its axis are
    /// tested in canonical order, so the result is deterministic,
    /// duplicate-free, and exhaustive: a move passes [`apply`] exactly when
    /// it appears here. The board is not touched.
    ///
    /// [`apply`]: Session::apply
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::new();
        for vehicle in self.board.vehicles() {
            for direction in vehicle.orientation().directions() {
                if self.board.check_slide(vehicle.symbol(), direction).is_ok() {
                    moves.push(Move::new(vehicle.symbol(), direction));
                }
            }
        }
        moves
    }

    fn target_at_exit(&self) -> bool {
        // Fronts are always on the grid, so an out-of-grid exit compares
        // unequal forever and the board is simply unsolvable.
        self.board.vehicle_position(self.target) == Some(self.board.exit())
    }

    /// Returns whether the target vehicle's front sits on the exit.
    ///
    /// On the transition into the solved state an [`Event::Solved`] is
    /// delivered before this returns `true`; the latch re-arms as soon as
    /// the board leaves the solved configuration or the session is reset.
    pub fn is_solved(&mut self) -> bool {
        let solved = self.target_at_exit();
        if solved && !self.solved {
            self.emit(&Event::Solved);
        }
        self.solved = solved;
        solved
    }

    /// Restores the initial layout and zeroes the move counter.
    ///
    /// Observer subscriptions survive a reset.
    pub fn reset(&mut self) {
        self.board = self.initial.clone();
        self.move_count = 0;
        self.solved = false;
    }

    /// Captures the current game state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board.clone(),
            move_count: self.move_count,
            solved: self.solved,
        }
    }

    /// Restores a previously captured game state.
    ///
    /// No events are emitted; the restore is invisible to observers.
    pub fn restore(&mut self, snapshot: Snapshot) {
        self.board = snapshot.board;
        self.move_count = snapshot.move_count;
        self.solved = snapshot.solved;
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use gridlock_core::{Direction, Orientation, Position, Vehicle};
    use proptest::prelude::*;

    use super::*;

    fn vehicle(
        symbol: char,
        orientation: Orientation,
        length: u8,
        front: Position,
    ) -> Vehicle {
        Vehicle::new(Symbol::new(symbol), orientation, length, front).unwrap()
    }

    /// 5x4 board, exit at the right end of row 1.
    ///
    /// ```text
    /// . . B .
    /// R R B .   exit ->
    /// . . . .
    /// . . . .
    /// . T T T
    /// ```
    fn sample_session() -> Session {
        let board = Board::new(
            5,
            4,
            Position::new(1, 3),
            vec![
                vehicle('B', Orientation::Vertical, 2, Position::new(1, 2)),
                vehicle('R', Orientation::Horizontal, 2, Position::new(1, 1)),
                vehicle('T', Orientation::Horizontal, 3, Position::new(4, 3)),
            ],
        )
        .unwrap();
        Session::new(board, Symbol::new('R'))
    }

    /// Observer that records everything it is notified of.
    #[derive(Debug, Default)]
    struct Recorder {
        events: Rc<RefCell<Vec<Event>>>,
    }

    impl Observer for Recorder {
        fn notify(&mut self, event: &Event) {
            self.events.borrow_mut().push(*event);
        }
    }

    fn recording_session() -> (Session, Rc<RefCell<Vec<Event>>>) {
        let mut session = sample_session();
        let events = Rc::new(RefCell::new(Vec::new()));
        session.subscribe(Box::new(Recorder {
            events: Rc::clone(&events),
        }));
        (session, events)
    }

    #[test]
    fn test_apply_slides_and_counts() {
        let (mut session, events) = recording_session();
        let mv = Move::new(Symbol::new('B'), Direction::Down);
        let event = session.apply(mv).unwrap();
        assert_eq!(
            event,
            Event::Moved {
                vehicle: Symbol::new('B'),
                front: Position::new(2, 2),
                direction: Direction::Down,
                undone: false,
            }
        );
        assert_eq!(session.move_count(), 1);
        assert_eq!(events.borrow().as_slice(), &[event]);
    }

    #[test]
    fn test_apply_unknown_vehicle_leaves_the_board_unchanged() {
        let mut session = sample_session();
        let before = session.board().fingerprint();
        let result = session.apply(Move::new(Symbol::new('X'), Direction::Up));
        assert_eq!(
            result,
            Err(MoveError::VehicleNotFound {
                symbol: Symbol::new('X'),
            })
        );
        assert_eq!(session.board().fingerprint(), before);
        assert_eq!(session.move_count(), 0);
    }

    #[test]
    fn test_apply_at_the_edge_is_out_of_bounds() {
        let mut session = sample_session();
        let before = session.board().fingerprint();
        // T's front is already on the last column.
        let result = session.apply(Move::new(Symbol::new('T'), Direction::Right));
        assert_eq!(
            result,
            Err(MoveError::OutOfBounds {
                symbol: Symbol::new('T'),
                direction: Direction::Right,
            })
        );
        assert_eq!(session.board().fingerprint(), before);
    }

    #[test]
    fn test_undo_is_the_exact_inverse_of_apply() {
        let mut session = sample_session();
        let before = session.board().clone();
        let mv = Move::new(Symbol::new('B'), Direction::Down);

        session.apply(mv).unwrap();
        assert_eq!(session.move_count(), 1);

        let event = session.undo(mv).unwrap();
        assert_eq!(
            event,
            Event::Moved {
                vehicle: Symbol::new('B'),
                front: Position::new(1, 2),
                direction: Direction::Down,
                undone: true,
            }
        );
        assert_eq!(session.board(), &before);
        assert_eq!(session.move_count(), 0);
    }

    #[test]
    fn test_legal_moves_is_deterministic_and_sound() {
        let mut session = sample_session();
        let moves = session.legal_moves();
        assert_eq!(
            moves,
            vec![
                Move::new(Symbol::new('B'), Direction::Down),
                Move::new(Symbol::new('T'), Direction::Left),
            ]
        );
        // Every generated move applies cleanly; re-generation is stable.
        assert_eq!(session.legal_moves(), moves);
        for mv in moves {
            session.apply(mv).unwrap();
            session.undo(mv).unwrap();
        }
    }

    #[test]
    fn test_legal_moves_is_exhaustive() {
        let session = sample_session();
        let legal = session.legal_moves();
        for bv in session.board().vehicles().copied().collect::<Vec<_>>() {
            for direction in bv.orientation().directions() {
                let mv = Move::new(bv.symbol(), direction);
                assert_eq!(session.check(mv).is_ok(), legal.contains(&mv), "{mv}");
            }
        }
    }

    #[test]
    fn test_win_check_emits_solved_once_per_transition() {
        let (mut session, events) = recording_session();
        assert!(!session.is_solved());

        // Clear the blocking vehicle, then drive R onto the exit.
        session
            .apply(Move::new(Symbol::new('B'), Direction::Down))
            .unwrap();
        session
            .apply(Move::new(Symbol::new('B'), Direction::Down))
            .unwrap();
        session
            .apply(Move::new(Symbol::new('R'), Direction::Right))
            .unwrap();
        session
            .apply(Move::new(Symbol::new('R'), Direction::Right))
            .unwrap();

        assert!(session.is_solved());
        assert!(session.is_solved());
        let solved_events = events
            .borrow()
            .iter()
            .filter(|event| matches!(event, Event::Solved))
            .count();
        assert_eq!(solved_events, 1);

        // Leaving and re-entering the solved state re-arms the latch.
        session
            .apply(Move::new(Symbol::new('R'), Direction::Left))
            .unwrap();
        assert!(!session.is_solved());
        session
            .apply(Move::new(Symbol::new('R'), Direction::Right))
            .unwrap();
        assert!(session.is_solved());
        let solved_events = events
            .borrow()
            .iter()
            .filter(|event| matches!(event, Event::Solved))
            .count();
        assert_eq!(solved_events, 2);
    }

    #[test]
    fn test_win_check_is_false_when_the_exit_is_off_grid() {
        // The original default puzzle places the exit outside its own grid.
        let board = Board::new(
            3,
            3,
            Position::new(1, 5),
            vec![vehicle('R', Orientation::Horizontal, 2, Position::new(1, 2))],
        )
        .unwrap();
        let mut session = Session::new(board, Symbol::new('R'));
        assert!(!session.is_solved());
        assert!(session.legal_moves().is_empty() || !session.is_solved());
    }

    #[test]
    fn test_reset_restores_the_initial_layout() {
        let mut session = sample_session();
        let initial = session.board().clone();
        session
            .apply(Move::new(Symbol::new('B'), Direction::Down))
            .unwrap();
        session
            .apply(Move::new(Symbol::new('T'), Direction::Left))
            .unwrap();
        assert_ne!(session.board(), &initial);

        session.reset();
        assert_eq!(session.board(), &initial);
        assert_eq!(session.move_count(), 0);
    }

    #[test]
    fn test_snapshot_restore_round_trip() {
        let mut session = sample_session();
        session
            .apply(Move::new(Symbol::new('B'), Direction::Down))
            .unwrap();
        let snapshot = session.snapshot();
        let fingerprint = session.board().fingerprint();

        session
            .apply(Move::new(Symbol::new('T'), Direction::Left))
            .unwrap();
        session
            .apply(Move::new(Symbol::new('B'), Direction::Down))
            .unwrap();

        session.restore(snapshot);
        assert_eq!(session.board().fingerprint(), fingerprint);
        assert_eq!(session.move_count(), 1);
    }

    #[test]
    fn test_observers_are_notified_in_subscription_order() {
        #[derive(Debug)]
        struct Tagger {
            tag: u8,
            log: Rc<RefCell<Vec<u8>>>,
        }

        impl Observer for Tagger {
            fn notify(&mut self, _event: &Event) {
                self.log.borrow_mut().push(self.tag);
            }
        }

        let mut session = sample_session();
        let log = Rc::new(RefCell::new(Vec::new()));
        session.subscribe(Box::new(Tagger {
            tag: 1,
            log: Rc::clone(&log),
        }));
        session.subscribe(Box::new(Tagger {
            tag: 2,
            log: Rc::clone(&log),
        }));

        session
            .apply(Move::new(Symbol::new('B'), Direction::Down))
            .unwrap();
        assert_eq!(log.borrow().as_slice(), &[1, 2]);
    }

    #[test]
    fn test_undo_on_a_fresh_session_saturates_the_counter() {
        let mut session = sample_session();
        session
            .undo(Move::new(Symbol::new('B'), Direction::Up))
            .unwrap();
        assert_eq!(session.move_count(), 0);
    }

    /// Builds an arbitrary valid board by placing vehicles greedily and
    /// skipping any that would collide or fall outside the grid.
    fn arb_session() -> impl Strategy<Value = Session> {
        (
            4u8..=7,
            4u8..=7,
            proptest::collection::vec((any::<bool>(), 0u8..7, 0u8..7, 2u8..=3), 1..8),
        )
            .prop_map(|(rows, cols, placements)| {
                let mut vehicles: Vec<Vehicle> = Vec::new();
                let mut symbol = b'A';
                for (horizontal, row, col, length) in placements {
                    let orientation = if horizontal {
                        Orientation::Horizontal
                    } else {
                        Orientation::Vertical
                    };
                    let front = Position::new(row % rows, col % cols);
                    let Ok(candidate) =
                        Vehicle::new(Symbol::new(char::from(symbol)), orientation, length, front)
                    else {
                        continue;
                    };
                    let fits = candidate.cells().all(|cell| {
                        cell.row() < rows
                            && cell.col() < cols
                            && !vehicles.iter().any(|other| other.contains(cell))
                    });
                    if !fits {
                        continue;
                    }
                    vehicles.push(candidate);
                    symbol += 1;
                }
                let board = Board::new(rows, cols, Position::new(0, 0), vehicles)
                    .expect("greedy placement produces a valid layout");
                Session::new(board, Symbol::new('A'))
            })
    }

    proptest! {
        /// Apply followed by undo restores a bit-identical board and the
        /// prior move counter, for every legal move of every board.
        #[test]
        fn test_apply_undo_inverse_law(session in arb_session()) {
            let mut session = session;
            for mv in session.legal_moves() {
                let board = session.board().clone();
                let count = session.move_count();
                session.apply(mv).unwrap();
                session.undo(mv).unwrap();
                prop_assert_eq!(session.board(), &board);
                prop_assert_eq!(session.move_count(), count);
            }
        }

        /// A move passes `apply` exactly when the generator lists it.
        #[test]
        fn test_legality_soundness(session in arb_session()) {
            let mut session = session;
            let legal = session.legal_moves();
            let vehicles: Vec<Vehicle> =
                session.board().vehicles().copied().collect();
            for bv in vehicles {
                for direction in Direction::ALL {
                    let mv = Move::new(bv.symbol(), direction);
                    let applied = session.apply(mv);
                    prop_assert_eq!(applied.is_ok(), legal.contains(&mv));
                    if applied.is_ok() {
                        session.undo(mv).unwrap();
                    }
                }
            }
        }
    }
}
