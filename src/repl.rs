// repl.rs

use std::fs;
use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use cell_history::History;
use log::{debug, info};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{CompletionType, Config as EditorConfig, Editor};

use crate::commands::{execute_line, Outcome};
use crate::completion::CommandCompleter;
use crate::config::Config;

/// Runs the console until `exit` or end of input and returns the exit code.
pub fn start_repl(config: &Config) -> Result<i32> {
    let mut history =
        History::bounded(config.capacity).context("cannot create cell history")?;
    info!("cell history ready, capacity {}", history.capacity());

    if let Some(script) = &config.script {
        if let Outcome::Exit(code) = run_script(script, &mut history)? {
            return Ok(code);
        }
    }

    let editor_config = EditorConfig::builder()
        .completion_type(CompletionType::List)
        .build();
    let mut rl: Editor<CommandCompleter, DefaultHistory> =
        Editor::with_config(editor_config).context("failed to create line editor")?;
    rl.set_helper(Some(CommandCompleter::new()));

    loop {
        if let Some(helper) = rl.helper_mut() {
            helper.set_cells(history.entries().map(|entry| &entry.cell_id));
        }
        match rl.readline("> ") {
            Ok(line) => {
                let _ = rl.add_history_entry(line.as_str());
                if let Outcome::Exit(code) = execute_line(&line, &mut history, io::stdout().lock())? {
                    return Ok(code);
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                debug!("input closed");
                return Ok(0);
            }
            Err(err) => return Err(err).context("failed to read input"),
        }
    }
}

fn run_script(path: &Path, history: &mut History<String>) -> Result<Outcome> {
    let script = fs::read_to_string(path)
        .with_context(|| format!("cannot read script {}", path.display()))?;
    info!("replaying {}", path.display());
    for line in script.lines() {
        if let Outcome::Exit(code) = execute_line(line, history, io::stdout().lock())? {
            return Ok(Outcome::Exit(code));
        }
    }
    Ok(Outcome::Continue)
}
