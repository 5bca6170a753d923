//! toolcheck: command-line linter for MCP tool definitions.
//!
//! Loads each file, runs the [`Validator`](toolcheck_lint::Validator) over
//! it, and prints a report. The exit status says whether every file was
//! valid; warnings never change it.
//!
//! ```bash
//! toolcheck tools/get_weather.json
//! toolcheck --format json tools/*.json
//! ```

pub mod config;
pub mod load;

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use toolcheck_lint::{LintConfig, ValidationResult, Validator};

use crate::load::load_tool_definition;

/// Validate MCP tool definitions.
#[derive(Debug, Parser)]
#[command(name = "toolcheck", version, about)]
pub struct Cli {
    /// Tool definition JSON files.
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Report format.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Lint config (TOML). Defaults to $XDG_CONFIG_HOME/toolcheck/config.toml.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print only the verdict line per file.
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

/// How the whole run went.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every file loaded and had no errors.
    Valid,
    /// At least one file had errors or failed to load.
    Invalid,
}

impl Outcome {
    pub fn exit_code(self) -> ExitCode {
        match self {
            Outcome::Valid => ExitCode::SUCCESS,
            Outcome::Invalid => ExitCode::FAILURE,
        }
    }
}

/// One entry of the JSON report.
#[derive(Debug, Serialize)]
struct FileReport {
    path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<ValidationResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Run the CLI, writing reports to `out` and load failures to `err`.
///
/// Returns `Err` only for problems with the run itself (bad config,
/// broken output stream), never for invalid tool definitions.
pub fn run(cli: &Cli, out: &mut impl Write, err: &mut impl Write) -> Result<Outcome> {
    let config = config::resolve(cli.config.as_deref()).context("Failed to load lint config")?;
    run_with_config(cli, config, out, err)
}

/// [`run`] with an already-resolved config.
pub fn run_with_config(
    cli: &Cli,
    config: LintConfig,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<Outcome> {
    let mut validator = Validator::with_config(config);
    let mut outcome = Outcome::Valid;
    let mut reports = Vec::new();

    let mut printed = false;
    for path in &cli.files {
        let report = check_file(&mut validator, path);
        if report.error.is_some() || report.result.as_ref().is_some_and(|r| !r.is_valid()) {
            outcome = Outcome::Invalid;
        }

        match cli.format {
            Format::Text => {
                if report.result.is_some() {
                    if printed && !cli.quiet {
                        writeln!(out)?;
                    }
                    printed = true;
                }
                write_text(&report, cli.quiet, out, err)?;
            }
            Format::Json => reports.push(report),
        }
    }

    if cli.format == Format::Json {
        serde_json::to_writer_pretty(&mut *out, &reports).context("Failed to write JSON report")?;
        writeln!(out)?;
    }

    tracing::info!(files = cli.files.len(), ?outcome, "toolcheck finished");
    Ok(outcome)
}

fn check_file(validator: &mut Validator, path: &Path) -> FileReport {
    let shown = path.display().to_string();
    match load_tool_definition(path) {
        Ok(tool) => {
            validator.validate(&tool);
            FileReport {
                path: shown,
                result: Some(validator.result()),
                error: None,
            }
        }
        Err(e) => {
            tracing::debug!(path = %shown, error = %e, "failed to load tool definition");
            FileReport {
                path: shown,
                result: None,
                error: Some(e.to_string()),
            }
        }
    }
}

fn write_text(
    report: &FileReport,
    quiet: bool,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<()> {
    if let Some(message) = &report.error {
        writeln!(err, "Error: {message}")?;
        return Ok(());
    }
    let Some(result) = &report.result else {
        return Ok(());
    };

    if quiet {
        writeln!(out, "{}: {}", report.path, result.status())?;
    } else {
        writeln!(out, "Validating: {}", report.path)?;
        writeln!(out)?;
        writeln!(out, "{result}")?;
    }
    Ok(())
}
