use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::config::{CheckConfig, DailyConfig, PerformanceConfig};
use crate::error::{Dataset, ReconError};
use crate::model::{CheckInput, DailyEventRecord, PerformanceRecord, PlayerType};

/// Read and decode both datasets named by `config`.
///
/// Relative file names resolve against `base_dir` (the config file's directory).
/// The daily dataset is read first; nothing is compared until both have loaded.
pub fn load_input(config: &CheckConfig, base_dir: &Path) -> Result<CheckInput, ReconError> {
    let daily_path = resolve(base_dir, &config.daily.file);
    let daily_json = read_dataset(&daily_path, Dataset::Daily)?;
    let daily = load_daily(&daily_json, &config.daily)?;

    let perf_path = resolve(base_dir, &config.performance.file);
    let perf_json = read_dataset(&perf_path, Dataset::Performance)?;
    let performance = load_performance(&perf_json, &config.performance)?;

    log::info!(
        "loaded {} daily record(s) from {}, {} performance record(s) from {}",
        daily.len(),
        daily_path.display(),
        performance.len(),
        perf_path.display(),
    );

    Ok(CheckInput { daily, performance })
}

pub(crate) fn resolve(base_dir: &Path, file: &str) -> PathBuf {
    let path = Path::new(file);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base_dir.join(path)
    }
}

pub fn read_dataset(path: &Path, dataset: Dataset) -> Result<String, ReconError> {
    std::fs::read_to_string(path)
        .map_err(|e| ReconError::data_load(dataset, format!("cannot read {}: {e}", path.display())))
}

/// Decode the daily dataset. A missing or null record field means zero records.
pub fn load_daily(json: &str, config: &DailyConfig) -> Result<Vec<DailyEventRecord>, ReconError> {
    let root = parse(json, Dataset::Daily)?;

    let Some(items) = record_array(&root, &config.records, Dataset::Daily)? else {
        log::debug!("daily dataset has no '{}' field, treating as empty", config.records);
        return Ok(Vec::new());
    };

    let col = &config.columns;
    let mut records = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        if !item.is_object() {
            log::debug!("daily record {i} is not an object, skipped");
            continue;
        }
        records.push(DailyEventRecord {
            name: text(item, &col.name),
            team: text(item, &col.team),
            player_type: PlayerType::from(text(item, &col.player_type).as_str()),
            metric_value: metric(item, &col.metric, i),
        });
    }

    Ok(records)
}

/// Decode the performance dataset. Its record field must be present.
pub fn load_performance(
    json: &str,
    config: &PerformanceConfig,
) -> Result<Vec<PerformanceRecord>, ReconError> {
    let root = parse(json, Dataset::Performance)?;

    let items = record_array(&root, &config.records, Dataset::Performance)?.ok_or_else(|| {
        ReconError::MissingData {
            dataset: Dataset::Performance,
            field: config.records.clone(),
        }
    })?;

    let col = &config.columns;
    let mut records = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        if !item.is_object() {
            log::debug!("performance record {i} is not an object, skipped");
            continue;
        }
        records.push(PerformanceRecord {
            name: text(item, &col.name),
            team: text(item, &col.team),
            last_event_date: item
                .get(&col.last_event_date)
                .and_then(Value::as_str)
                .map(str::to_string),
        });
    }

    Ok(records)
}

fn parse(json: &str, dataset: Dataset) -> Result<Value, ReconError> {
    serde_json::from_str(json).map_err(|e| ReconError::data_load(dataset, format!("invalid JSON: {e}")))
}

/// `Ok(None)` when the field is absent or null (or the root isn't an object).
fn record_array<'v>(
    root: &'v Value,
    field: &str,
    dataset: Dataset,
) -> Result<Option<&'v Vec<Value>>, ReconError> {
    match root.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Array(items)) => Ok(Some(items)),
        Some(other) => Err(ReconError::data_load(
            dataset,
            format!("field '{field}' is {}, expected an array", json_kind(other)),
        )),
    }
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn text(item: &Value, key: &str) -> String {
    match item.get(key) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Integral numbers and numeric strings decode; anything else counts as 0.
fn metric(item: &Value, key: &str, index: usize) -> i64 {
    let value = match item.get(key) {
        None | Some(Value::Null) => return 0,
        Some(v) => v,
    };

    let parsed = match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };

    parsed.unwrap_or_else(|| {
        log::debug!("record {index}: '{key}' value {value} is not an integer, using 0");
        0
    })
}
