//! Console presentation of a board.

use gridlock_core::{Board, Cell};

/// Formats the grid as one line per row, cells separated by spaces.
///
/// Occupied cells show the vehicle's symbol and empty cells show `-`.
#[must_use]
pub fn render(board: &Board) -> String {
    let mut out = String::new();
    for row in board.grid() {
        for (index, cell) in row.iter().enumerate() {
            if index > 0 {
                out.push(' ');
            }
            match cell {
                Cell::Empty => out.push('-'),
                Cell::Occupied(symbol) => out.push(symbol.get()),
            }
        }
        out.push('\n');
    }
    out
}
