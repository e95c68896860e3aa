// config.rs

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{Context, Result};
use cell_history::DEFAULT_CAPACITY;

pub const CAPACITY_VAR: &str = "CELL_HISTORY_CAPACITY";
pub const SCRIPT_VAR: &str = "CELL_HISTORY_SCRIPT";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub capacity: usize,
    /// Commands replayed before the prompt is shown.
    pub script: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_vars(env::var_os(CAPACITY_VAR), env::var_os(SCRIPT_VAR))
    }

    fn from_vars(capacity: Option<OsString>, script: Option<OsString>) -> Result<Self> {
        let capacity = match capacity {
            Some(raw) => {
                let raw = raw
                    .into_string()
                    .map_err(|_| anyhow::anyhow!("{} is not valid unicode", CAPACITY_VAR))?;
                raw.trim()
                    .parse::<usize>()
                    .with_context(|| format!("invalid {} value `{}`", CAPACITY_VAR, raw))?
            }
            None => DEFAULT_CAPACITY,
        };
        let script = script.filter(|path| !path.is_empty()).map(PathBuf::from);
        Ok(Self { capacity, script })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_variables() {
        let config = Config::from_vars(None, None).unwrap();
        assert_eq!(config.capacity, DEFAULT_CAPACITY);
        assert_eq!(config.script, None);
    }

    #[test]
    fn reads_capacity_and_script() {
        let config = Config::from_vars(Some("5".into()), Some("demo.txt".into())).unwrap();
        assert_eq!(config.capacity, 5);
        assert_eq!(config.script, Some(PathBuf::from("demo.txt")));
    }

    #[test]
    fn empty_script_is_ignored() {
        let config = Config::from_vars(None, Some("".into())).unwrap();
        assert_eq!(config.script, None);
    }

    #[test]
    fn rejects_bad_capacity() {
        let err = Config::from_vars(Some("many".into()), None).unwrap_err();
        assert_eq!(err.to_string(), "invalid CELL_HISTORY_CAPACITY value `many`");
    }
}
