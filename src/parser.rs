// parser.rs

use thiserror::Error;

pub const COMMAND_NAMES: [&str; 10] = [
    "record", "visit", "back", "can-back", "forget", "reset", "show", "current", "help", "exit",
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Record { cell: String, line: usize },
    Back,
    CanBack,
    Forget { cell: String },
    Reset,
    Show,
    Current,
    Help,
    Exit(i32),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("{0}: command not found")]
    UnknownCommand(String),
    #[error("{command}: missing {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },
    #[error("{command}: invalid line number `{value}`")]
    InvalidLine { command: &'static str, value: String },
    #[error("exit: invalid exit code `{0}`")]
    InvalidExitCode(String),
    #[error("{command}: unexpected argument `{value}`")]
    UnexpectedArgument { command: &'static str, value: String },
}

/// Parses one console line. Blank lines and `#` comments yield `None`.
pub fn parse_command(line: &str) -> Result<Option<Command>, ParseError> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }
    let tokens = split_line(trimmed);
    let args: Vec<&str> = tokens.iter().map(String::as_str).collect();

    let command = match args.as_slice() {
        [] => return Ok(None),
        [name @ ("record" | "visit"), rest @ ..] => {
            let command = if *name == "visit" { "visit" } else { "record" };
            let (cell, line) = match rest {
                [] => return Err(missing(command, "cell id")),
                [_] => return Err(missing(command, "line number")),
                [cell, line] => (*cell, *line),
                [_, _, extra, ..] => return Err(unexpected(command, extra)),
            };
            let line = line.parse::<usize>().map_err(|_| ParseError::InvalidLine {
                command,
                value: line.to_string(),
            })?;
            Command::Record {
                cell: cell.to_string(),
                line,
            }
        }
        ["forget", rest @ ..] => match rest {
            [] => return Err(missing("forget", "cell id")),
            [cell] => Command::Forget {
                cell: cell.to_string(),
            },
            [_, extra, ..] => return Err(unexpected("forget", extra)),
        },
        ["exit"] => Command::Exit(0),
        ["exit", code] => Command::Exit(
            code.parse()
                .map_err(|_| ParseError::InvalidExitCode(code.to_string()))?,
        ),
        ["exit", _, extra, ..] => return Err(unexpected("exit", extra)),
        [name, rest @ ..] => {
            let (command, name) = match *name {
                "back" => (Command::Back, "back"),
                "can-back" => (Command::CanBack, "can-back"),
                "reset" => (Command::Reset, "reset"),
                "show" => (Command::Show, "show"),
                "current" => (Command::Current, "current"),
                "help" => (Command::Help, "help"),
                other => return Err(ParseError::UnknownCommand(other.to_string())),
            };
            if let Some(extra) = rest.first() {
                return Err(unexpected(name, extra));
            }
            command
        }
    };
    Ok(Some(command))
}

fn missing(command: &'static str, argument: &'static str) -> ParseError {
    ParseError::MissingArgument { command, argument }
}

fn unexpected(command: &'static str, value: &str) -> ParseError {
    ParseError::UnexpectedArgument {
        command,
        value: value.to_string(),
    }
}

/// Splits on whitespace, honouring single quotes, double quotes and
/// backslash escapes so cell ids may contain spaces.
pub fn split_line(line: &str) -> Vec<String> {
    enum State {
        Normal,
        Single,
        Double,
    }

    let mut tokens = Vec::new();
    let mut cur = String::new();
    let mut quoted = false;
    let mut state = State::Normal;
    let mut chars = line.chars().peekable();
    while let Some(ch) = chars.next() {
        match state {
            State::Normal => match ch {
                '\'' => {
                    state = State::Single;
                    quoted = true;
                }
                '"' => {
                    state = State::Double;
                    quoted = true;
                }
                '\\' => {
                    if let Some(next) = chars.next() {
                        cur.push(next);
                    }
                }
                c if c.is_whitespace() => {
                    if !cur.is_empty() || quoted {
                        tokens.push(std::mem::take(&mut cur));
                        quoted = false;
                    }
                }
                _ => cur.push(ch),
            },
            State::Single => match ch {
                '\'' => state = State::Normal,
                _ => cur.push(ch),
            },
            State::Double => match ch {
                '"' => state = State::Normal,
                '\\' => match chars.peek() {
                    Some(&next) if next == '\\' || next == '"' => {
                        cur.push(next);
                        chars.next();
                    }
                    _ => cur.push('\\'),
                },
                _ => cur.push(ch),
            },
        }
    }
    if !cur.is_empty() || quoted {
        tokens.push(cur);
    }
    tokens
}
