//! `dugout recon` — find qualifying daily events missing from the performance dataset.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use clap::{Subcommand, ValueEnum};
use dugout_config::{DataPaths, Settings};
use dugout_recon::{CheckConfig, CheckReport, MatchStrategy};
use serde::Serialize;

use crate::exit_codes::{EXIT_RECON_INVALID_CONFIG, EXIT_RECON_MISSING, EXIT_RECON_OUTPUT};
use crate::{parse_date, CliError};

#[derive(Subcommand)]
pub enum ReconCommands {
    /// Run a check from a TOML config file
    #[command(after_help = "\
Examples:
  dugout recon run aug9.check.toml
  dugout recon run aug9.check.toml --json
  dugout recon run aug9.check.toml --output report.json --fail-on-missing")]
    Run {
        /// Path to the .check.toml config file
        config: PathBuf,

        #[command(flatten)]
        emit: EmitArgs,
    },

    /// Check one day, or each day of a range, without a config file
    #[command(after_help = "\
Examples:
  dugout recon check --date 2025-08-09
  dugout recon check --date 2025-08-09 --data-root /srv/BaseballData/data
  dugout recon check --date 2025-08-09 --daily aug9.json --performance perf.json --json
  dugout recon check --from 2025-08-01 --to 2025-08-09")]
    Check {
        /// Day under check (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date, required_unless_present = "from", conflicts_with_all = ["from", "to"])]
        date: Option<NaiveDate>,

        /// First day of a range (YYYY-MM-DD); daily files come from the data root
        #[arg(long, value_parser = parse_date, requires = "to", conflicts_with_all = ["daily", "label"])]
        from: Option<NaiveDate>,

        /// Last day of a range, inclusive (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date, requires = "from")]
        to: Option<NaiveDate>,

        /// Daily dataset (default: derived from the data root and --date)
        #[arg(long)]
        daily: Option<PathBuf>,

        /// Performance dataset (default: <data root>/predictions/player_performance_latest.json)
        #[arg(long)]
        performance: Option<PathBuf>,

        /// Data root (overrides BASEBALL_DATA_PATH and settings.json)
        #[arg(long)]
        data_root: Option<PathBuf>,

        /// How performance records are looked up
        #[arg(long, value_enum, default_value_t = StrategyArg::LinearScan)]
        strategy: StrategyArg,

        /// Day label in the report header (default: e.g. "Aug 9")
        #[arg(long)]
        label: Option<String>,

        #[command(flatten)]
        emit: EmitArgs,
    },

    /// Validate a check config without running
    #[command(after_help = "\
Examples:
  dugout recon validate aug9.check.toml")]
    Validate {
        /// Path to the .check.toml config file
        config: PathBuf,
    },
}

#[derive(clap::Args)]
pub struct EmitArgs {
    /// Output JSON to stdout instead of the text report
    #[arg(long)]
    json: bool,

    /// Write JSON output to file
    #[arg(long)]
    output: Option<PathBuf>,

    /// Exit 3 when any qualifying event (or, for a range, any daily file) is missing
    #[arg(long)]
    fail_on_missing: bool,
}

#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "snake_case")]
pub enum StrategyArg {
    LinearScan,
    Indexed,
}

impl From<StrategyArg> for MatchStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::LinearScan => MatchStrategy::LinearScan,
            StrategyArg::Indexed => MatchStrategy::Indexed,
        }
    }
}

pub fn cmd_recon(cmd: ReconCommands, settings: &Settings) -> Result<(), CliError> {
    match cmd {
        ReconCommands::Run { config, emit } => cmd_recon_run(config, emit),
        ReconCommands::Check {
            date,
            from,
            to,
            daily,
            performance,
            data_root,
            strategy,
            label,
            emit,
        } => {
            if label.as_deref().is_some_and(|l| l.trim().is_empty()) {
                return Err(CliError::args("--label must not be empty"));
            }
            let paths = DataPaths::resolve(data_root, settings);
            match (date, from, to) {
                (Some(date), _, _) => {
                    let config = check_config(date, daily, performance, &paths, strategy, label);
                    let report = dugout_recon::engine::run_from_dir(&config, Path::new("."))?;
                    emit_report(&report, &emit)
                }
                (None, Some(from), Some(to)) => {
                    cmd_recon_check_range(from, to, performance, &paths, strategy, &emit)
                }
                _ => Err(CliError::args("pass --date, or --from together with --to")),
            }
        }
        ReconCommands::Validate { config } => cmd_recon_validate(config),
    }
}

fn read_config(config_path: &Path) -> Result<CheckConfig, CliError> {
    let config_str = std::fs::read_to_string(config_path).map_err(|e| {
        CliError::new(
            EXIT_RECON_INVALID_CONFIG,
            format!("cannot read config {}: {e}", config_path.display()),
        )
    })?;
    Ok(CheckConfig::from_toml(&config_str)?)
}

fn cmd_recon_run(config_path: PathBuf, emit: EmitArgs) -> Result<(), CliError> {
    let config = read_config(&config_path)?;

    // Resolve dataset paths relative to the config file's directory
    let base_dir = config_path.parent().unwrap_or_else(|| Path::new("."));
    let report = dugout_recon::engine::run_from_dir(&config, base_dir)?;

    emit_report(&report, &emit)
}

/// Build a default-mapped config for `recon check`, filling unset paths from the data root.
fn check_config(
    date: NaiveDate,
    daily: Option<PathBuf>,
    performance: Option<PathBuf>,
    paths: &DataPaths,
    strategy: StrategyArg,
    label: Option<String>,
) -> CheckConfig {
    let daily = daily.unwrap_or_else(|| paths.daily_file(date));
    let performance = performance.unwrap_or_else(|| paths.performance_file());

    let mut config = CheckConfig::new(
        format!("{date} check"),
        date,
        daily.to_string_lossy(),
        performance.to_string_lossy(),
    );
    config.strategy = strategy.into();
    config.output.date_label = label;
    config
}

/// Check every day from `from` to `to` against one load of the performance dataset.
fn cmd_recon_check_range(
    from: NaiveDate,
    to: NaiveDate,
    performance: Option<PathBuf>,
    paths: &DataPaths,
    strategy: StrategyArg,
    emit: &EmitArgs,
) -> Result<(), CliError> {
    if from > to {
        return Err(CliError::args(format!("--from {from} is after --to {to}")));
    }
    let dates = dugout_recon::date_range(from, to)?;

    let mut template = check_config(from, None, performance, paths, strategy, None);
    template.name = format!("{from}..{to} check");
    let report =
        dugout_recon::run_range(&template, &dates, |day| paths.daily_file(day), Path::new("."))?;

    if emit.json || emit.output.is_some() {
        write_json(&report, emit)?;
        if emit.json {
            let s = &report.summary;
            eprintln!(
                "{}..{}: {} missing of {} qualifying over {} day(s), {} daily file(s) missing ({})",
                from, to, s.missing, s.qualifying, s.checked, s.files_missing, report.meta.strategy,
            );
        }
    }

    if !emit.json {
        print!("{}", dugout_recon::render_range_text(&report));
    }

    let s = &report.summary;
    if emit.fail_on_missing && (s.missing > 0 || s.files_missing > 0) {
        return Err(CliError::new(
            EXIT_RECON_MISSING,
            format!(
                "{} qualifying event(s) missing from performance data, {} daily file(s) missing",
                s.missing, s.files_missing
            ),
        ));
    }

    Ok(())
}

/// Serialize to `--output` and/or stdout.
fn write_json<T: Serialize>(value: &T, emit: &EmitArgs) -> Result<(), CliError> {
    let json_str = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::general(format!("JSON serialization error: {e}")))?;

    if let Some(ref path) = emit.output {
        std::fs::write(path, &json_str)
            .map_err(|e| CliError::new(EXIT_RECON_OUTPUT, format!("cannot write output: {e}")))?;
        eprintln!("wrote {}", path.display());
    }

    if emit.json {
        println!("{json_str}");
    }
    Ok(())
}

fn emit_report(report: &CheckReport, emit: &EmitArgs) -> Result<(), CliError> {
    if emit.json || emit.output.is_some() {
        write_json(report, emit)?;
        if emit.json {
            // Human summary to stderr
            let s = &report.summary;
            eprintln!(
                "{}: {} missing of {} qualifying ({} found, {})",
                report.meta.target_date, s.missing, s.qualifying, s.found, report.meta.strategy,
            );
        }
    }

    if !emit.json {
        print!("{}", dugout_recon::render_text(report));
    }

    if emit.fail_on_missing && report.summary.missing > 0 {
        return Err(CliError::new(
            EXIT_RECON_MISSING,
            format!(
                "{} qualifying event(s) missing from performance data",
                report.summary.missing
            ),
        ));
    }

    Ok(())
}

fn cmd_recon_validate(config_path: PathBuf) -> Result<(), CliError> {
    let config = read_config(&config_path)
        .map_err(|e| e.with_hint("see `dugout recon run --help` for the config layout"))?;
    eprintln!(
        "valid: check '{}' for {} ({} vs {}, {})",
        config.name,
        config.target_date,
        config.daily.file,
        config.performance.file,
        config.strategy,
    );
    Ok(())
}
