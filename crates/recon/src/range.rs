//! Multi-day checks: the anti-join repeated for each day of a date range.
//!
//! The performance dataset is loaded once and must be usable, as in a
//! single-day check. A day whose daily file is absent or unreadable is
//! recorded and the range carries on.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Serialize;

use crate::config::{CheckConfig, MatchStrategy};
use crate::engine::check;
use crate::error::{Dataset, ReconError};
use crate::load::{load_daily, load_performance, read_dataset, resolve};
use crate::model::{CheckSummary, MissingEvent};

/// Every day from `from` to `to`, both inclusive.
pub fn date_range(from: NaiveDate, to: NaiveDate) -> Result<Vec<NaiveDate>, ReconError> {
    if from > to {
        return Err(ReconError::ConfigValidation(format!(
            "range start {from} is after range end {to}"
        )));
    }
    Ok(from.iter_days().take_while(|d| *d <= to).collect())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DayOutcome {
    Checked {
        summary: CheckSummary,
        missing: Vec<MissingEvent>,
    },
    /// No usable daily file for the day.
    FileMissing { reason: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct DayResult {
    pub date: NaiveDate,
    pub daily_file: String,
    pub outcome: DayOutcome,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RangeSummary {
    pub days: usize,
    pub checked: usize,
    pub files_missing: usize,
    pub qualifying: usize,
    pub found: usize,
    pub missing: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct RangeMeta {
    pub config_name: String,
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub metric_label: String,
    pub player_type: String,
    pub subject_label: String,
    pub strategy: MatchStrategy,
    pub engine_version: String,
    pub run_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RangeReport {
    pub meta: RangeMeta,
    pub summary: RangeSummary,
    pub days: Vec<DayResult>,
}

/// Check each of `dates` against one load of the performance dataset.
///
/// `template` supplies everything but the day: its target date and daily file
/// are replaced per day, the daily file coming from `daily_file`. Relative
/// paths resolve against `base_dir`.
pub fn run_range<F>(
    template: &CheckConfig,
    dates: &[NaiveDate],
    daily_file: F,
    base_dir: &Path,
) -> Result<RangeReport, ReconError>
where
    F: Fn(NaiveDate) -> PathBuf,
{
    template.validate()?;
    let (Some(&from), Some(&to)) = (dates.first(), dates.last()) else {
        return Err(ReconError::ConfigValidation("date range is empty".into()));
    };

    let perf_path = resolve(base_dir, &template.performance.file);
    let perf_json = read_dataset(&perf_path, Dataset::Performance)?;
    let performance = load_performance(&perf_json, &template.performance)?;
    log::info!(
        "loaded {} performance record(s) from {}",
        performance.len(),
        perf_path.display()
    );

    let mut summary = RangeSummary { days: dates.len(), ..RangeSummary::default() };
    let mut days = Vec::with_capacity(dates.len());

    for &date in dates {
        let mut config = template.clone();
        config.target_date = date;
        config.daily.file = daily_file(date).to_string_lossy().into_owned();
        let path = resolve(base_dir, &config.daily.file);

        let loaded = if path.exists() {
            read_dataset(&path, Dataset::Daily).and_then(|json| load_daily(&json, &config.daily))
        } else {
            Err(ReconError::data_load(Dataset::Daily, "file not found"))
        };

        let outcome = match loaded {
            Ok(daily) => {
                let report = check(&config, &daily, &performance)?;
                summary.checked += 1;
                summary.qualifying += report.summary.qualifying;
                summary.found += report.summary.found;
                summary.missing += report.summary.missing;
                DayOutcome::Checked { summary: report.summary, missing: report.missing }
            }
            Err(e) => {
                log::warn!("{date}: {e} ({})", path.display());
                summary.files_missing += 1;
                DayOutcome::FileMissing { reason: e.to_string() }
            }
        };

        days.push(DayResult { date, daily_file: config.daily.file, outcome });
    }

    log::info!(
        "range {from}..{to}: {} missing of {} qualifying over {} day(s), {} daily file(s) missing",
        summary.missing,
        summary.qualifying,
        summary.checked,
        summary.files_missing
    );

    Ok(RangeReport {
        meta: RangeMeta {
            config_name: template.name.clone(),
            from,
            to,
            metric_label: template.output.metric_label.clone(),
            player_type: template.daily.filter.player_type.clone(),
            subject_label: template.subject_label(),
            strategy: template.strategy,
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            run_at: chrono::Utc::now().to_rfc3339(),
        },
        summary,
        days,
    })
}
