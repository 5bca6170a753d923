//! toolcheck entry point.
//!
//! ```bash
//! cargo run -p toolcheck-cli -- tool.json
//! ```
//!
//! Exit status: 0 if every file is valid, 1 if any file has errors or
//! can't be loaded, 2 for usage or config problems.

use std::io;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use toolcheck_cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_tracing() {
        eprintln!("Error: failed to initialize logging: {e:#}");
        return ExitCode::from(2);
    }

    let stdout = io::stdout();
    let stderr = io::stderr();
    match toolcheck_cli::run(&cli, &mut stdout.lock(), &mut stderr.lock()) {
        Ok(outcome) => outcome.exit_code(),
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(2)
        }
    }
}

/// Logs go to stderr so they never mix with reports on stdout.
/// `RUST_LOG` controls verbosity.
fn init_tracing() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::from_default_env().add_directive("toolcheck=warn".parse()?))
        .try_init()?;
    Ok(())
}
