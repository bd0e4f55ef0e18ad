//! The grid, its vehicle registry, and the slide primitive.

use std::collections::BTreeMap;

use crate::{
    direction::Direction,
    error::{LayoutError, MoveError},
    position::Position,
    vehicle::{Symbol, Vehicle},
};

/// The content of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Cell {
    /// No vehicle occupies the cell.
    Empty,
    /// The cell belongs to the vehicle with this symbol.
    Occupied(Symbol),
}

/// An `rows × cols` grid of cells plus the registry of vehicles on it.
///
/// The grid and the registry are kept in lockstep: every occupied cell maps
/// to exactly one registered vehicle and every registered vehicle's cells are
/// marked on the grid. The only mutation surface is [`Board::slide`], which
/// preserves that invariant; callers cannot write cells directly.
///
/// The exit is a configured coordinate and is allowed to lie outside the
/// grid; such a board is valid but can never be solved.
///
/// # Examples
///
/// ```
/// use gridlock_core::{Board, Cell, Position, Symbol, Vehicle};
///
/// let red = Vehicle::from_endpoints(
///     Symbol::new('R'),
///     Position::new(2, 0),
///     Position::new(2, 1),
/// )?;
/// let board = Board::new(5, 5, Position::new(2, 4), vec![red])?;
///
/// assert_eq!(board.cell(Position::new(2, 0)), Cell::Occupied(Symbol::new('R')));
/// assert_eq!(board.cell(Position::new(0, 0)), Cell::Empty);
/// assert_eq!(board.vehicle_position(Symbol::new('R')), Some(Position::new(2, 1)));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: u8,
    cols: u8,
    exit: Position,
    cells: Vec<Cell>,
    vehicles: BTreeMap<Symbol, Vehicle>,
}

impl Board {
    /// Builds a board from an initial vehicle layout.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::DuplicateVehicle`] if a symbol repeats,
    /// [`LayoutError::OutOfBounds`] if a vehicle cell falls outside the
    /// grid, or [`LayoutError::Overlap`] if two vehicles claim a cell.
    pub fn new(
        rows: u8,
        cols: u8,
        exit: Position,
        vehicles: Vec<Vehicle>,
    ) -> Result<Self, LayoutError> {
        let mut board = Self {
            rows,
            cols,
            exit,
            cells: vec![Cell::Empty; usize::from(rows) * usize::from(cols)],
            vehicles: BTreeMap::new(),
        };
        for vehicle in vehicles {
            let symbol = vehicle.symbol();
            if board.vehicles.contains_key(&symbol) {
                return Err(LayoutError::DuplicateVehicle { symbol });
            }
            for cell in vehicle.cells() {
                if !board.contains(cell) {
                    return Err(LayoutError::OutOfBounds { symbol });
                }
                let index = board.index(cell);
                match board.cells[index] {
                    Cell::Empty => board.cells[index] = Cell::Occupied(symbol),
                    Cell::Occupied(_) => {
                        return Err(LayoutError::Overlap {
                            symbol,
                            position: cell,
                        });
                    }
                }
            }
            board.vehicles.insert(symbol, vehicle);
        }
        Ok(board)
    }

    /// Returns the number of rows.
    #[must_use]
    pub const fn rows(&self) -> u8 {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub const fn cols(&self) -> u8 {
        self.cols
    }

    /// Returns the exit position.
    #[must_use]
    pub const fn exit(&self) -> Position {
        self.exit
    }

    /// Returns whether `position` lies inside the grid.
    #[must_use]
    pub const fn contains(&self, position: Position) -> bool {
        position.row() < self.rows && position.col() < self.cols
    }

    fn index(&self, position: Position) -> usize {
        usize::from(position.row()) * usize::from(self.cols) + usize::from(position.col())
    }

    /// Returns the content of the cell at `position`.
    ///
    /// # Panics
    ///
    /// Panics if `position` is outside the grid.
    #[must_use]
    pub fn cell(&self, position: Position) -> Cell {
        assert!(
            self.contains(position),
            "position {position} is outside the {}x{} grid",
            self.rows,
            self.cols,
        );
        self.cells[self.index(position)]
    }

    /// Returns the vehicle registered under `symbol`, if any.
    #[must_use]
    pub fn vehicle(&self, symbol: Symbol) -> Option<&Vehicle> {
        self.vehicles.get(&symbol)
    }

    /// Returns the front cell of the vehicle registered under `symbol`.
    #[must_use]
    pub fn vehicle_position(&self, symbol: Symbol) -> Option<Position> {
        self.vehicles.get(&symbol).map(Vehicle::front)
    }

    /// Returns the registered vehicles in symbol order.
    pub fn vehicles(&self) -> impl Iterator<Item = &Vehicle> {
        self.vehicles.values()
    }

    /// Returns a row-major snapshot of the grid.
    ///
    /// The snapshot is a defensive copy; mutating it has no effect on the
    /// board.
    #[must_use]
    pub fn grid(&self) -> Vec<Vec<Cell>> {
        (0..self.rows)
            .map(|row| {
                (0..self.cols)
                    .map(|col| self.cells[self.index(Position::new(row, col))])
                    .collect()
            })
            .collect()
    }

    /// Returns the canonical serialization of the grid contents.
    ///
    /// Two boards of equal dimensions have equal fingerprints exactly when
    /// every cell matches, which makes this the visited-set key for search.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        self.cells
            .iter()
            .map(|cell| match cell {
                Cell::Empty => '-',
                Cell::Occupied(symbol) => symbol.get(),
            })
            .collect()
    }

    /// Checks whether `symbol` may slide one step in `direction`, without
    /// mutating anything.
    ///
    /// On success returns the cell the vehicle's leading edge would enter.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::VehicleNotFound`] for an unknown symbol,
    /// [`MoveError::AxisMismatch`] for a cross-axis direction,
    /// [`MoveError::OutOfBounds`] when the entered cell is off the grid, and
    /// [`MoveError::Occupied`] when another vehicle holds it.
    pub fn check_slide(
        &self,
        symbol: Symbol,
        direction: Direction,
    ) -> Result<Position, MoveError> {
        let vehicle = self
            .vehicles
            .get(&symbol)
            .ok_or(MoveError::VehicleNotFound { symbol })?;
        if direction.orientation() != vehicle.orientation() {
            return Err(MoveError::AxisMismatch { symbol, direction });
        }
        let entered = vehicle
            .entered_cell(direction)
            .filter(|cell| self.contains(*cell))
            .ok_or(MoveError::OutOfBounds { symbol, direction })?;
        match self.cell(entered) {
            Cell::Empty => Ok(entered),
            Cell::Occupied(blocker) => Err(MoveError::Occupied {
                symbol,
                direction,
                blocker,
            }),
        }
    }

    /// Slides `symbol` one step in `direction` and returns its new front.
    ///
    /// Only the trailing cell is vacated and the entered cell claimed;
    /// interior cells keep their marking, so any vehicle length is handled by
    /// the same two writes. A one-step slide is its own inverse under the
    /// opposite direction, which the engine relies on for undo.
    ///
    /// # Errors
    ///
    /// Same as [`Board::check_slide`]; on error the board is untouched.
    pub fn slide(&mut self, symbol: Symbol, direction: Direction) -> Result<Position, MoveError> {
        let entered = self.check_slide(symbol, direction)?;
        let vehicle = self.vehicles[&symbol];
        let vacated = vehicle.vacated_cell(direction);

        let vacated_index = self.index(vacated);
        let entered_index = self.index(entered);
        self.cells[vacated_index] = Cell::Empty;
        self.cells[entered_index] = Cell::Occupied(symbol);

        let slid = vehicle.slid(direction);
        self.vehicles.insert(symbol, slid);
        Ok(slid.front())
    }
}
