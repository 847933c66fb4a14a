// dugout CLI - consistency checks over daily player stat files

mod exit_codes;
mod paths;
mod recon;

use std::path::PathBuf;
use std::process::ExitCode;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use dugout_config::Settings;
use dugout_recon::ReconError;

use exit_codes::{recon_exit_code, EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE};
use recon::ReconCommands;

#[derive(Parser)]
#[command(name = "dugout")]
#[command(about = "Cross-check daily player stat files against the rolling performance dataset")]
#[command(long_version = long_version())]
#[command(version)]
#[command(subcommand_required = false)]
struct Cli {
    /// Log debug output to stderr (overrides RUST_LOG)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Find qualifying daily events missing from the performance dataset
    #[command(subcommand)]
    Recon(ReconCommands),

    /// Show the resolved data root and the dataset paths derived from it
    #[command(after_help = "\
Examples:
  dugout paths
  dugout paths --date 2025-08-09
  BASEBALL_DATA_PATH=/srv/BaseballData/data dugout paths")]
    Paths {
        /// Data root (overrides BASEBALL_DATA_PATH and settings.json)
        #[arg(long)]
        data_root: Option<PathBuf>,

        /// Also show the daily file for this date (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date)]
        date: Option<NaiveDate>,
    },
}

fn long_version() -> &'static str {
    if cfg!(debug_assertions) {
        concat!(
            env!("CARGO_PKG_VERSION"),
            " (", env!("GIT_COMMIT_HASH"), ")",
            "\nbuild:   debug",
            "\ntarget:  ", env!("TARGET"),
        )
    } else {
        concat!(
            env!("CARGO_PKG_VERSION"),
            " (", env!("GIT_COMMIT_HASH"), ")",
            "\nbuild:   release",
            "\ntarget:  ", env!("TARGET"),
        )
    }
}

fn init_logging(verbose: bool, settings: &Settings) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(settings.log_filter.as_deref().unwrap_or("warn"))
        })
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    // Logging depends on settings, so a bad settings file is reported after init
    let (settings, settings_err) = match Settings::try_load() {
        Ok(settings) => (settings, None),
        Err(e) => (Settings::default(), Some(e)),
    };
    init_logging(cli.verbose, &settings);
    if let Some(e) = settings_err {
        log::warn!("{e}; using defaults");
    }

    let result = match cli.command {
        None => {
            // No subcommand = show usage
            eprintln!("Usage: dugout <command> [options]");
            eprintln!("       dugout --help for more information");
            Ok(())
        }
        Some(Commands::Recon(cmd)) => recon::cmd_recon(cmd, &settings),
        Some(Commands::Paths { data_root, date }) => paths::cmd_paths(data_root, date, &settings),
    };

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(CliError { code, message, hint }) => {
            if !message.is_empty() {
                eprintln!("error: {}", message);
            }
            if let Some(hint) = hint {
                eprintln!("hint:  {}", hint);
            }
            ExitCode::from(code)
        }
    }
}

/// Parse a `YYYY-MM-DD` argument.
pub(crate) fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| format!("expected YYYY-MM-DD ({e})"))
}

#[derive(Debug)]
pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}

impl CliError {
    pub fn new(code: u8, msg: impl Into<String>) -> Self {
        Self { code, message: msg.into(), hint: None }
    }

    pub fn args(msg: impl Into<String>) -> Self {
        Self::new(EXIT_USAGE, msg)
    }

    pub fn general(msg: impl Into<String>) -> Self {
        Self::new(EXIT_ERROR, msg)
    }

    /// Create error from a recon error with its exit code and a hint where useful.
    pub fn recon(err: ReconError) -> Self {
        let code = recon_exit_code(&err);
        let hint = match &err {
            ReconError::DataLoad { .. } => {
                Some("check the file path, or set --data-root / BASEBALL_DATA_PATH".to_string())
            }
            ReconError::MissingData { field, .. } => Some(format!(
                "the performance file must hold a '{field}' array; regenerate it or set performance.records"
            )),
            ReconError::ConfigParse(_) | ReconError::ConfigValidation(_) => None,
        };
        Self { code, message: err.to_string(), hint }
    }

    /// Add a hint to an existing error.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl From<ReconError> for CliError {
    fn from(err: ReconError) -> Self {
        Self::recon(err)
    }
}
