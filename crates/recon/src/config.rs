use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ReconError;

// ---------------------------------------------------------------------------
// Top-level config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct CheckConfig {
    pub name: String,
    /// Day under check. Performance records must carry exactly this date.
    pub target_date: NaiveDate,
    #[serde(default)]
    pub strategy: MatchStrategy,
    pub daily: DailyConfig,
    pub performance: PerformanceConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

// ---------------------------------------------------------------------------
// Daily dataset
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct DailyConfig {
    pub file: String,
    /// Top-level field holding the record array. Absent in the file = zero records.
    #[serde(default = "default_records_field")]
    pub records: String,
    #[serde(default)]
    pub columns: DailyColumns,
    #[serde(default)]
    pub filter: QualifyFilter,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DailyColumns {
    pub name: String,
    pub team: String,
    pub player_type: String,
    pub metric: String,
}

impl Default for DailyColumns {
    fn default() -> Self {
        Self {
            name: "name".into(),
            team: "team".into(),
            player_type: "playerType".into(),
            metric: "HR".into(),
        }
    }
}

/// A daily record qualifies when its player type equals `player_type`
/// and its metric is strictly greater than `metric_above`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct QualifyFilter {
    pub player_type: String,
    pub metric_above: i64,
}

impl Default for QualifyFilter {
    fn default() -> Self {
        Self {
            player_type: "hitter".into(),
            metric_above: 0,
        }
    }
}

// ---------------------------------------------------------------------------
// Performance dataset
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct PerformanceConfig {
    pub file: String,
    /// Top-level field holding the record array. Absent in the file = error.
    #[serde(default = "default_records_field")]
    pub records: String,
    #[serde(default)]
    pub columns: PerformanceColumns,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PerformanceColumns {
    pub name: String,
    pub team: String,
    pub last_event_date: String,
}

impl Default for PerformanceColumns {
    fn default() -> Self {
        Self {
            name: "name".into(),
            team: "team".into(),
            last_event_date: "lastHRDate".into(),
        }
    }
}

fn default_records_field() -> String {
    "players".into()
}

// ---------------------------------------------------------------------------
// Strategy + Output
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStrategy {
    /// Scan the performance records for every qualifying event.
    #[default]
    LinearScan,
    /// Build a (name, team, date) index over the performance records once.
    Indexed,
}

impl std::fmt::Display for MatchStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LinearScan => write!(f, "linear_scan"),
            Self::Indexed => write!(f, "indexed"),
        }
    }
}

impl std::str::FromStr for MatchStrategy {
    type Err = ReconError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "linear_scan" | "linear" => Ok(Self::LinearScan),
            "indexed" | "index" => Ok(Self::Indexed),
            other => Err(ReconError::ConfigValidation(format!(
                "unknown strategy \"{other}\" (expected \"linear_scan\" or \"indexed\")"
            ))),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Day label in the report header. Defaults to e.g. "Aug 9".
    pub date_label: Option<String>,
    /// Unit printed after each metric value and in the footer.
    pub metric_label: String,
    /// Footer noun for the qualifying group. Defaults to e.g. "HR hitters".
    pub subject_label: Option<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            date_label: None,
            metric_label: "HR".into(),
            subject_label: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Construct, Parse + Validate
// ---------------------------------------------------------------------------

impl CheckConfig {
    /// Config with default field mapping, filter and output for the two files.
    pub fn new(
        name: impl Into<String>,
        target_date: NaiveDate,
        daily_file: impl Into<String>,
        performance_file: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            target_date,
            strategy: MatchStrategy::default(),
            daily: DailyConfig {
                file: daily_file.into(),
                records: default_records_field(),
                columns: DailyColumns::default(),
                filter: QualifyFilter::default(),
            },
            performance: PerformanceConfig {
                file: performance_file.into(),
                records: default_records_field(),
                columns: PerformanceColumns::default(),
            },
            output: OutputConfig::default(),
        }
    }

    pub fn from_toml(input: &str) -> Result<Self, ReconError> {
        let config: CheckConfig =
            toml::from_str(input).map_err(|e| ReconError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ReconError> {
        if self.name.trim().is_empty() {
            return Err(ReconError::ConfigValidation("name must not be empty".into()));
        }

        for (what, value) in [
            ("daily.file", &self.daily.file),
            ("daily.records", &self.daily.records),
            ("daily.columns.name", &self.daily.columns.name),
            ("daily.columns.team", &self.daily.columns.team),
            ("daily.columns.player_type", &self.daily.columns.player_type),
            ("daily.columns.metric", &self.daily.columns.metric),
            ("daily.filter.player_type", &self.daily.filter.player_type),
            ("performance.file", &self.performance.file),
            ("performance.records", &self.performance.records),
            ("performance.columns.name", &self.performance.columns.name),
            ("performance.columns.team", &self.performance.columns.team),
            ("performance.columns.last_event_date", &self.performance.columns.last_event_date),
        ] {
            if value.trim().is_empty() {
                return Err(ReconError::ConfigValidation(format!("{what} must not be empty")));
            }
        }

        if self.daily.filter.metric_above < 0 {
            return Err(ReconError::ConfigValidation(format!(
                "daily.filter.metric_above must be >= 0, got {}",
                self.daily.filter.metric_above
            )));
        }

        Ok(())
    }

    /// Target date as it appears in performance records.
    pub fn target_date_key(&self) -> String {
        self.target_date.format("%Y-%m-%d").to_string()
    }

    /// Header label for the text report.
    pub fn date_label(&self) -> String {
        match self.output.date_label {
            Some(ref label) => label.clone(),
            None => self.target_date.format("%b %-d").to_string(),
        }
    }

    /// Footer noun, derived from the metric label and the filtered player type.
    pub fn subject_label(&self) -> String {
        match self.output.subject_label {
            Some(ref label) => label.clone(),
            None => format!("{} {}s", self.output.metric_label, self.daily.filter.player_type),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
