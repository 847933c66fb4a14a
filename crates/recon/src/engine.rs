use std::path::Path;

use crate::config::{CheckConfig, MatchStrategy};
use crate::error::ReconError;
use crate::evidence::compute_summary;
use crate::matcher::{match_indexed, match_linear_scan};
use crate::model::{
    CheckInput, CheckMeta, CheckReport, DailyEventRecord, MissingEvent, PerformanceRecord,
};
use crate::qualify::qualifying_events;

/// Run the check per config. Returns the missing events + summary.
pub fn run(config: &CheckConfig, input: &CheckInput) -> Result<CheckReport, ReconError> {
    check(config, &input.daily, &input.performance)
}

/// Same as [`run`], over borrowed records so one performance load can serve many days.
pub fn check(
    config: &CheckConfig,
    daily: &[DailyEventRecord],
    performance: &[PerformanceRecord],
) -> Result<CheckReport, ReconError> {
    config.validate()?;

    let target = config.target_date_key();
    let events = qualifying_events(daily, &config.daily.filter);
    log::debug!(
        "{} of {} daily record(s) qualify for {}",
        events.len(),
        daily.len(),
        target
    );

    let output = match config.strategy {
        MatchStrategy::LinearScan => match_linear_scan(&events, performance, &target),
        MatchStrategy::Indexed => match_indexed(&events, performance, &target),
    };

    let summary = compute_summary(&output);
    let missing = output
        .missing
        .iter()
        .map(|e| MissingEvent {
            name: e.record.name.clone(),
            team: e.record.team.clone(),
            metric_value: e.record.metric_value,
        })
        .collect();

    log::info!(
        "check '{}': {} missing of {} qualifying",
        config.name,
        summary.missing,
        summary.qualifying
    );

    Ok(CheckReport {
        meta: CheckMeta {
            config_name: config.name.clone(),
            target_date: config.target_date,
            date_label: config.date_label(),
            metric_label: config.output.metric_label.clone(),
            player_type: config.daily.filter.player_type.clone(),
            subject_label: config.subject_label(),
            strategy: config.strategy,
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            run_at: chrono::Utc::now().to_rfc3339(),
        },
        summary,
        missing,
    })
}

/// Load both datasets (paths relative to `base_dir`) and run the check.
pub fn run_from_dir(config: &CheckConfig, base_dir: &Path) -> Result<CheckReport, ReconError> {
    let input = crate::load::load_input(config, base_dir)?;
    run(config, &input)
}
