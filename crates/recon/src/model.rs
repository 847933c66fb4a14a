use chrono::NaiveDate;
use serde::Serialize;

use crate::config::MatchStrategy;

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerType {
    Hitter,
    Pitcher,
    Other(String),
}

impl PlayerType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Hitter => "hitter",
            Self::Pitcher => "pitcher",
            Self::Other(s) => s,
        }
    }
}

impl From<&str> for PlayerType {
    fn from(s: &str) -> Self {
        match s {
            "hitter" => Self::Hitter,
            "pitcher" => Self::Pitcher,
            other => Self::Other(other.to_string()),
        }
    }
}

/// One player's line for one day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyEventRecord {
    pub name: String,
    pub team: String,
    pub player_type: PlayerType,
    pub metric_value: i64,
}

/// One player's most recent qualifying event in the rolling dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PerformanceRecord {
    pub name: String,
    pub team: String,
    /// Raw date string, compared verbatim against the target date.
    pub last_event_date: Option<String>,
}

/// Both datasets, loaded and decoded.
#[derive(Debug, Clone, Default)]
pub struct CheckInput {
    pub daily: Vec<DailyEventRecord>,
    pub performance: Vec<PerformanceRecord>,
}

// ---------------------------------------------------------------------------
// Derived
// ---------------------------------------------------------------------------

/// A daily record that passed the qualifying filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QualifyingEvent<'a> {
    /// Position of the record in the daily dataset.
    pub index: usize,
    pub record: &'a DailyEventRecord,
}

/// Composite join key. Borrowed so index construction doesn't clone names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct JoinKey<'a> {
    pub name: &'a str,
    pub team: &'a str,
    pub date: &'a str,
}

// ---------------------------------------------------------------------------
// Matching
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchedEvent<'a> {
    pub event: QualifyingEvent<'a>,
    /// Position of the first matching record in the performance dataset.
    pub performance_index: usize,
}

/// Qualifying events split by whether a performance record was found.
/// Both halves keep qualifying order.
#[derive(Debug, Default)]
pub struct MatchOutput<'a> {
    pub found: Vec<MatchedEvent<'a>>,
    pub missing: Vec<QualifyingEvent<'a>>,
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingEvent {
    pub name: String,
    pub team: String,
    pub metric_value: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CheckSummary {
    pub qualifying: usize,
    pub found: usize,
    pub missing: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckMeta {
    pub config_name: String,
    pub target_date: NaiveDate,
    pub date_label: String,
    pub metric_label: String,
    /// Player type the daily filter selected (e.g. "hitter").
    pub player_type: String,
    pub subject_label: String,
    pub strategy: MatchStrategy,
    pub engine_version: String,
    pub run_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub meta: CheckMeta,
    pub summary: CheckSummary,
    pub missing: Vec<MissingEvent>,
}
