// completion.rs

use itertools::Itertools;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::{ValidationContext, ValidationResult, Validator};
use rustyline::{Context, Helper};

use crate::parser::COMMAND_NAMES;

/// Completes command names, and cell ids after `record`, `visit` and `forget`.
#[derive(Default)]
pub struct CommandCompleter {
    cells: Vec<String>,
}

impl CommandCompleter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the known cell ids, usually with those still in the history.
    pub fn set_cells<'a, I: IntoIterator<Item = &'a String>>(&mut self, cells: I) {
        self.cells = cells.into_iter().unique().sorted().cloned().collect();
    }

    fn candidates(&self, line: &str) -> (usize, Vec<String>) {
        let start = line
            .rfind(char::is_whitespace)
            .map_or(0, |i| i + line[i..].chars().next().map_or(1, char::len_utf8));
        let word = &line[start..];
        let previous: Vec<&str> = line[..start].split_whitespace().collect();

        let names: Vec<String> = match previous.as_slice() {
            [] => COMMAND_NAMES
                .iter()
                .filter(|name| name.starts_with(word))
                .map(|name| name.to_string())
                .collect(),
            ["record" | "visit" | "forget"] => self
                .cells
                .iter()
                .filter(|cell| cell.starts_with(word) && !cell.contains(char::is_whitespace))
                .cloned()
                .collect(),
            _ => Vec::new(),
        };
        (start, names)
    }
}

impl Completer for CommandCompleter {
    type Candidate = Pair;

    fn complete(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Result<(usize, Vec<Pair>), ReadlineError> {
        let (start, names) = self.candidates(&line[..pos]);
        let completions = names
            .into_iter()
            .map(|n| Pair {
                display: n.clone(),
                replacement: format!("{} ", n),
            })
            .collect();
        Ok((start, completions))
    }
}

impl Hinter for CommandCompleter {
    type Hint = String;
    fn hint(&self, _line: &str, _pos: usize, _ctx: &Context<'_>) -> Option<String> {
        None
    }
}

impl Highlighter for CommandCompleter {}

impl Validator for CommandCompleter {
    fn validate(&self, _ctx: &mut ValidationContext) -> Result<ValidationResult, ReadlineError> {
        Ok(ValidationResult::Valid(None))
    }
}

impl Helper for CommandCompleter {}
