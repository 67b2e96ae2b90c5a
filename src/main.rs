//! Console bowling runner (default binary).
//!
//! Plays one single-player game on stdin/stdout, reprinting the scoreboard
//! after every roll. Diagnostics go to stderr when `TENPIN_LOG` is set.

use std::process;

use anyhow::Result;

use tenpin::engine::{Session, SessionConfig};
use tenpin::input::LineReader;
use tenpin::term::ConsoleRenderer;

fn main() {
    let config = SessionConfig::from_env();
    init_logging(&config);

    if let Err(err) = run(config) {
        let _ = ConsoleRenderer::stdout().print("Game error\n");
        eprintln!("{err:?}");
        process::exit(1);
    }
}

fn run(config: SessionConfig) -> Result<()> {
    let mut session = Session::new(LineReader::stdin(), ConsoleRenderer::stdout(), config);
    session.run()?;
    Ok(())
}

fn init_logging(config: &SessionConfig) {
    let Some(level) = config.log_level else {
        return;
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
