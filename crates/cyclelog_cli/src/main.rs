//! CLI host for core smoke checks and plain-text export.
//!
//! # Responsibility
//! - Verify `cyclelog_core` linkage without the Flutter runtime.
//! - Render visit plans and checklist counts from a JSON entries file.
//!
//! Usage:
//! - `cyclelog_cli`
//! - `cyclelog_cli plan <entries.json> [user_notes] [chart_notes]`
//! - `cyclelog_cli insights <entries.json>`

use clap::{Parser, Subcommand};
use cyclelog_core::{
    generate_plan, init_logging_from_config, insights_summary, CoreConfig, LogEntry,
};
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "cyclelog_cli")]
#[command(version)]
#[command(about = "Render visit plans and checklist counts from logged entries", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate the copyable visit plan text
    Plan {
        /// JSON array of log entries
        entries: PathBuf,

        /// What I want to discuss
        user_notes: Option<String>,

        /// Pasted chart or clinician notes
        chart_notes: Option<String>,
    },

    /// Count logged checklist indicators
    Insights {
        /// JSON array of log entries
        entries: PathBuf,
    },
}

#[derive(Debug)]
enum CliError {
    Read { path: String, message: String },
    Parse { path: String, message: String },
}

impl Display for CliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read { path, message } => write!(f, "cannot read `{path}`: {message}"),
            Self::Parse { path, message } => write!(f, "invalid entries in `{path}`: {message}"),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if cli.command.is_some() {
        init_cli_logging();
    }

    match run(cli) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("cyclelog_cli: {err}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<String, CliError> {
    match cli.command {
        None => Ok(format!(
            "cyclelog_core ping={}\ncyclelog_core version={}\n",
            cyclelog_core::ping(),
            cyclelog_core::core_version()
        )),
        Some(Commands::Plan {
            entries,
            user_notes,
            chart_notes,
        }) => {
            let entries = load_entries(&entries)?;
            Ok(generate_plan(
                &entries,
                user_notes.as_deref().unwrap_or(""),
                chart_notes.as_deref().unwrap_or(""),
            ))
        }
        Some(Commands::Insights { entries }) => {
            let entries = load_entries(&entries)?;
            let summary = insights_summary(&entries);
            Ok(format!(
                "Entries logged: {}\n{}: {}/{}\n{}: {}/{}\n",
                summary.entry_count,
                summary.pcos.title,
                summary.pcos.matched_count,
                summary.pcos.total,
                summary.endometriosis.title,
                summary.endometriosis.matched_count,
                summary.endometriosis.total
            ))
        }
    }
}

fn load_entries(path: &Path) -> Result<Vec<LogEntry>, CliError> {
    let display = path.display().to_string();
    let raw = std::fs::read_to_string(path).map_err(|err| CliError::Read {
        path: display.clone(),
        message: err.to_string(),
    })?;
    serde_json::from_str(&raw).map_err(|err| CliError::Parse {
        path: display,
        message: err.to_string(),
    })
}

fn init_cli_logging() {
    // Logging is best-effort here; output must not depend on it.
    let result = CoreConfig::from_env()
        .map_err(|err| err.to_string())
        .and_then(|config| init_logging_from_config(&config).map_err(|err| err.to_string()));
    if let Err(err) = result {
        eprintln!("cyclelog_cli: logging disabled: {err}");
    }
}
