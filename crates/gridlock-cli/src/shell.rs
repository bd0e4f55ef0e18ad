//! Line oriented command shell.
//!
//! The shell reads one command per line, mutates the session, and prints
//! the board after every state change. It exits on `quit`, on end of
//! input, or once the puzzle is solved.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use gridlock_engine::{Event, Move, Observer, Session};
use gridlock_solver::{Backtracker, SolveOutcome};

use crate::render;

/// A parsed shell command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Slide a vehicle one cell.
    Move(Move),
    /// Search for a full solution and print it.
    Solve,
    /// Print the first move of a solution.
    Hint,
    /// Restore the starting layout.
    Reset,
    /// Print the command summary.
    Help,
    /// Leave the shell.
    Quit,
}

/// The error returned when a line is not a recognizable command.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unrecognized command `{text}`; try `help`")]
pub struct ParseCommandError {
    /// The rejected input line.
    text: String,
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseCommandError {
            text: s.trim().to_owned(),
        };
        let mut words = s.split_whitespace();
        let head = words.next().ok_or_else(err)?;
        let command = match head.to_ascii_lowercase().as_str() {
            "move" | "m" => {
                let vehicle = words
                    .next()
                    .and_then(|word| word.parse().ok())
                    .ok_or_else(err)?;
                let direction = words
                    .next()
                    .and_then(|word| word.parse().ok())
                    .ok_or_else(err)?;
                Self::Move(Move::new(vehicle, direction))
            }
            "solve" => Self::Solve,
            "hint" => Self::Hint,
            "reset" => Self::Reset,
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            _ => return Err(err()),
        };
        if words.next().is_some() {
            return Err(err());
        }
        Ok(command)
    }
}

/// Observer that traces every session event to the log.
struct EventLogger;

impl Observer for EventLogger {
    fn notify(&mut self, event: &Event) {
        match event {
            Event::Moved {
                vehicle,
                front,
                direction,
                undone,
            } => {
                let verb = if *undone { "undid" } else { "moved" };
                log::debug!("{verb} {vehicle} {direction}; front now at {front}");
            }
            Event::Solved => log::debug!("puzzle solved"),
        }
    }
}

/// Runs the shell until `quit`, end of input, or a win.
///
/// # Errors
///
/// Returns an [`io::Error`] if reading a command or writing output fails.
pub fn run(
    session: &mut Session,
    input: impl BufRead,
    mut output: impl Write,
) -> io::Result<()> {
    session.subscribe(Box::new(EventLogger));

    write!(output, "{}", render::render(session.board()))?;
    if session.is_solved() {
        writeln!(output, "already solved")?;
        return Ok(());
    }
    writeln!(output, "type `help` for the command list")?;

    let mut lines = input.lines();
    loop {
        write!(output, "> ")?;
        output.flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                writeln!(output, "{err}")?;
                continue;
            }
        };
        match command {
            Command::Quit => break,
            Command::Help => print_help(&mut output)?,
            Command::Reset => {
                session.reset();
                write!(output, "{}", render::render(session.board()))?;
            }
            Command::Move(mv) => {
                if apply_move(session, mv, &mut output)? {
                    break;
                }
            }
            Command::Solve => solve(session, &mut output)?,
            Command::Hint => hint(session, &mut output)?,
        }
    }
    Ok(())
}

/// Applies one move, reporting the result. Returns `true` on a win.
fn apply_move(
    session: &mut Session,
    mv: Move,
    output: &mut impl Write,
) -> io::Result<bool> {
    if let Err(err) = session.apply(mv) {
        writeln!(output, "{err}")?;
        return Ok(false);
    }
    write!(output, "{}", render::render(session.board()))?;
    if session.is_solved() {
        writeln!(output, "solved in {} moves", session.move_count())?;
        return Ok(true);
    }
    writeln!(output, "moves so far: {}", session.move_count())?;
    Ok(false)
}

fn solve(session: &mut Session, output: &mut impl Write) -> io::Result<()> {
    match Backtracker::new().solve(session) {
        SolveOutcome::Solved(moves) if moves.is_empty() => {
            writeln!(output, "already solved")
        }
        SolveOutcome::Solved(moves) => {
            writeln!(output, "solution in {} moves:", moves.len())?;
            for mv in &moves {
                writeln!(output, "  {mv}")?;
            }
            Ok(())
        }
        SolveOutcome::Exhausted => writeln!(output, "no solution from here"),
        SolveOutcome::Cancelled => writeln!(output, "search cancelled"),
    }
}

fn hint(session: &mut Session, output: &mut impl Write) -> io::Result<()> {
    match Backtracker::new().solve(session) {
        SolveOutcome::Solved(moves) => match moves.first() {
            Some(mv) => writeln!(output, "try {mv}"),
            None => writeln!(output, "already solved"),
        },
        SolveOutcome::Exhausted => writeln!(output, "no solution from here"),
        SolveOutcome::Cancelled => writeln!(output, "search cancelled"),
    }
}

fn print_help(output: &mut impl Write) -> io::Result<()> {
    writeln!(
        output,
        "commands:\n  \
         move <vehicle> <up|down|left|right>  slide a vehicle one cell\n  \
         solve                                print a full solution\n  \
         hint                                 print the next solving move\n  \
         reset                                restore the starting layout\n  \
         help                                 show this summary\n  \
         quit                                 leave the shell"
    )
}
