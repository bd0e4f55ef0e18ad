//! Puzzle file ingestion.
//!
//! A puzzle file is a sequence of vehicle records, one per line:
//!
//! ```text
//! symbol,startRow,startCol,endRow,endCol
//! ```
//!
//! The endpoints are the vehicle's two extreme cells, in either order.
//! Blank lines and lines starting with `#` are skipped.

use std::{fs, io, path::Path};

use gridlock_core::{Board, LayoutError, Position, Symbol, Vehicle};

/// Errors from reading or interpreting a puzzle file.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum LoadError {
    /// The file could not be read.
    #[display("failed to read puzzle file: {_0}")]
    Io(io::Error),
    /// A record does not have the five expected fields.
    #[display("line {line}: expected `symbol,startRow,startCol,endRow,endCol`")]
    #[from(ignore)]
    MalformedRecord {
        /// One-based line number of the offending record.
        line: usize,
    },
    /// A field of a record could not be parsed.
    #[display("line {line}: invalid {field}")]
    #[from(ignore)]
    InvalidField {
        /// One-based line number of the offending record.
        line: usize,
        /// Name of the field that failed to parse.
        field: &'static str,
    },
    /// The records describe an impossible layout.
    #[display("invalid layout: {_0}")]
    Layout(LayoutError),
}

/// Reads a puzzle file and builds the starting board.
///
/// # Errors
///
/// Returns a [`LoadError`] if the file cannot be read, a record is
/// malformed, or the resulting layout is invalid.
pub fn load_board(
    path: &Path,
    rows: u8,
    cols: u8,
    exit: Position,
) -> Result<Board, LoadError> {
    let text = fs::read_to_string(path)?;
    let vehicles = parse_vehicles(&text)?;
    Ok(Board::new(rows, cols, exit, vehicles)?)
}

/// Parses the vehicle records of a puzzle file.
///
/// # Errors
///
/// Returns a [`LoadError`] if a record is malformed or describes an
/// impossible vehicle.
pub fn parse_vehicles(text: &str) -> Result<Vec<Vehicle>, LoadError> {
    let mut vehicles = Vec::new();
    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        let record = raw.trim();
        if record.is_empty() || record.starts_with('#') {
            continue;
        }
        vehicles.push(parse_record(record, line)?);
    }
    Ok(vehicles)
}

fn parse_record(record: &str, line: usize) -> Result<Vehicle, LoadError> {
    let mut fields = record.split(',').map(str::trim);
    let mut next = |field| {
        fields
            .next()
            .filter(|value| !value.is_empty())
            .ok_or(LoadError::MalformedRecord { line })
            .map(|value| (field, value))
    };

    let symbol = parse_field::<Symbol>(next("symbol")?, line)?;
    let start = Position::new(
        parse_field(next("startRow")?, line)?,
        parse_field(next("startCol")?, line)?,
    );
    let end = Position::new(
        parse_field(next("endRow")?, line)?,
        parse_field(next("endCol")?, line)?,
    );
    if fields.next().is_some() {
        return Err(LoadError::MalformedRecord { line });
    }
    Ok(Vehicle::from_endpoints(symbol, start, end)?)
}

fn parse_field<T>(
    (field, value): (&'static str, &str),
    line: usize,
) -> Result<T, LoadError>
where
    T: std::str::FromStr,
{
    value
        .parse()
        .map_err(|_| LoadError::InvalidField { line, field })
}

#[cfg(test)]
mod tests {
    use gridlock_core::Orientation;

    use super::*;

    #[test]
    fn test_parses_a_record_per_line() {
        let text = "R,2,0,2,1\nA,1,2,2,2\n";
        let vehicles = parse_vehicles(text).unwrap();
        assert_eq!(vehicles.len(), 2);

        let red = vehicles[0];
        assert_eq!(red.symbol(), Symbol::new('R'));
        assert_eq!(red.orientation(), Orientation::Horizontal);
        assert_eq!(red.length(), 2);
        assert_eq!(red.front(), Position::new(2, 1));

        let a = vehicles[1];
        assert_eq!(a.orientation(), Orientation::Vertical);
        assert_eq!(a.front(), Position::new(2, 2));
    }

    #[test]
    fn test_accepts_reversed_endpoints_and_whitespace() {
        let vehicles = parse_vehicles("  T , 4 , 4 , 2 , 4  ").unwrap();
        assert_eq!(vehicles[0].length(), 3);
        assert_eq!(vehicles[0].front(), Position::new(4, 4));
    }

    #[test]
    fn test_skips_blanks_and_comments() {
        let text = "# beginner layout\n\nR,2,0,2,1\n   \n";
        assert_eq!(parse_vehicles(text).unwrap().len(), 1);
    }

    #[test]
    fn test_rejects_short_records() {
        let err = parse_vehicles("R,2,0,2").unwrap_err();
        assert!(matches!(err, LoadError::MalformedRecord { line: 1 }));
    }

    #[test]
    fn test_rejects_extra_fields() {
        let err = parse_vehicles("R,2,0,2,1,9").unwrap_err();
        assert!(matches!(err, LoadError::MalformedRecord { line: 1 }));
    }

    #[test]
    fn test_rejects_bad_coordinates() {
        let err = parse_vehicles("R,2,0,2,x").unwrap_err();
        assert!(matches!(
            err,
            LoadError::InvalidField {
                line: 1,
                field: "endCol"
            }
        ));
    }

    #[test]
    fn test_reports_the_failing_line() {
        let err = parse_vehicles("R,2,0,2,1\nbogus,record\n").unwrap_err();
        assert!(matches!(err, LoadError::MalformedRecord { line: 2 }));
    }

    #[test]
    fn test_overlapping_records_fail_board_construction() {
        let vehicles = parse_vehicles("R,2,0,2,1\nA,1,1,2,1\n").unwrap();
        let err = Board::new(5, 5, Position::new(2, 4), vehicles).unwrap_err();
        assert!(matches!(err, LayoutError::Overlap { .. }));
    }

    #[test]
    fn test_rejects_diagonal_endpoints() {
        let err = parse_vehicles("R,0,0,1,1").unwrap_err();
        assert!(matches!(
            err,
            LoadError::Layout(LayoutError::Misaligned { .. })
        ));
    }
}
