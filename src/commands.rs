// commands.rs

use std::io::{self, Write};

use cell_history::History;
use itertools::Itertools;

use crate::parser::{parse_command, Command, COMMAND_NAMES};
use crate::util::{flush_ignore_broken_pipe, writeln_ignore_broken_pipe};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Exit(i32),
}

/// Parses and runs one console line. Parse errors are reported to `out` and
/// never end the session.
pub fn execute_line<W: Write>(
    line: &str,
    history: &mut History<String>,
    mut out: W,
) -> io::Result<Outcome> {
    match parse_command(line) {
        Ok(Some(command)) => run_command(command, history, out),
        Ok(None) => Ok(Outcome::Continue),
        Err(err) => {
            writeln_ignore_broken_pipe(&mut out, err.to_string())?;
            Ok(Outcome::Continue)
        }
    }
}

pub fn run_command<W: Write>(
    command: Command,
    history: &mut History<String>,
    mut out: W,
) -> io::Result<Outcome> {
    match command {
        Command::Record { cell, line } => history.record(cell, line),
        Command::Back => {
            let message = match history.go_back() {
                Some(entry) => entry.to_string(),
                None => "no entry".to_string(),
            };
            writeln_ignore_broken_pipe(&mut out, message)?;
        }
        Command::CanBack => {
            writeln_ignore_broken_pipe(&mut out, history.can_go_back().to_string())?;
        }
        Command::Forget { cell } => {
            let removed = history.forget(&cell);
            writeln_ignore_broken_pipe(&mut out, format!("forgot {} entries of {}", removed, cell))?;
        }
        Command::Reset => history.reset(),
        Command::Show => {
            if history.is_empty() {
                writeln_ignore_broken_pipe(&mut out, "(empty)")?;
            }
            let cursor = history.cursor();
            for (i, entry) in history.entries().enumerate() {
                let marker = if Some(i) == cursor { '*' } else { ' ' };
                writeln_ignore_broken_pipe(&mut out, format!("{} {:>3}  {}", marker, i + 1, entry))?;
            }
        }
        Command::Current => {
            let message = match history.current() {
                Some(entry) => entry.to_string(),
                None => "no entry".to_string(),
            };
            writeln_ignore_broken_pipe(&mut out, message)?;
        }
        Command::Help => {
            writeln_ignore_broken_pipe(&mut out, format!("commands: {}", COMMAND_NAMES.iter().join(", ")))?;
            writeln_ignore_broken_pipe(
                &mut out,
                format!("capacity: {} entries", history.capacity()),
            )?;
        }
        Command::Exit(code) => return Ok(Outcome::Exit(code)),
    }
    flush_ignore_broken_pipe(&mut out)?;
    Ok(Outcome::Continue)
}
