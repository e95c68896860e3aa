mod commands;
mod completion;
mod config;
mod parser;
mod repl;
mod util;

use anyhow::Result;

use crate::config::Config;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let config = Config::from_env()?;
    let code = repl::start_repl(&config)?;
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}
