//! ashwood-rules -- a battlefield rules authority speaking a line protocol.
//!
//! This binary reads commands from stdin and writes responses to stdout.
//! Logs go to stderr, filtered by `RUST_LOG` (default `warn`). An optional
//! JSON ruleset is read from the path in `ASHWOOD_RULES`.

use std::io::{self, BufRead};
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use ashwood_rules::engine::Session;
use ashwood_rules::protocol::parser::parse_command;
use ashwood_rules::ruleset::{Ruleset, RulesetError};

const RULES_ENV: &str = "ASHWOOD_RULES";

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_ruleset() -> Result<Ruleset, RulesetError> {
    match std::env::var_os(RULES_ENV) {
        Some(path) => {
            let ruleset = Ruleset::load(path.as_ref())?;
            tracing::info!(?path, "loaded ruleset");
            Ok(ruleset)
        }
        None => Ok(Ruleset::STANDARD),
    }
}

/// Runs the protocol loop until `quit` or end of input.
fn run(ruleset: Ruleset) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut session = Session::new(ruleset);

    for line in stdin.lock().lines() {
        let line = line?;
        let cmd = match parse_command(&line) {
            Some(c) => c,
            None => continue,
        };
        tracing::debug!(?cmd, "command");
        if !session.handle(cmd, &mut out)? {
            break;
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    init_tracing();

    let ruleset = match load_ruleset() {
        Ok(r) => r,
        Err(e) => {
            tracing::error!(error = %e, "failed to load ruleset from {}", RULES_ENV);
            return ExitCode::FAILURE;
        }
    };

    match run(ruleset) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "i/o failure");
            ExitCode::FAILURE
        }
    }
}
