use std::path::PathBuf;

use dugout_recon::engine::{run, run_from_dir};
use dugout_recon::load::load_input;
use dugout_recon::{render_text, CheckConfig, Dataset, MatchStrategy, ReconError};

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn load_config(name: &str) -> CheckConfig {
    let toml = std::fs::read_to_string(fixtures_dir().join(name)).unwrap();
    CheckConfig::from_toml(&toml).unwrap()
}

fn load_and_run(config: &CheckConfig) -> dugout_recon::CheckReport {
    run_from_dir(config, &fixtures_dir()).unwrap()
}

// -------------------------------------------------------------------------
// Fixture day
// -------------------------------------------------------------------------

#[test]
fn aug9_reports_stale_and_wrong_team() {
    let report = load_and_run(&load_config("aug9.check.toml"));

    assert_eq!(report.summary.qualifying, 4);
    assert_eq!(report.summary.found, 2);
    assert_eq!(report.summary.missing, 2);

    let names: Vec<&str> = report.missing.iter().map(|m| m.name.as_str()).collect();
    // Daily order: Raleigh appears before Guerrero
    assert_eq!(names, vec!["C. Raleigh", "V. Guerrero Jr."]);
    assert_eq!(report.missing[1].team, "TOR");
}

#[test]
fn aug9_text_report() {
    let report = load_and_run(&load_config("aug9.check.toml"));
    assert_eq!(
        render_text(&report),
        "Players who hit HRs on Aug 9 but missing from performance data:\n\
         - C. Raleigh (SEA) - 1 HR(s)\n\
         - V. Guerrero Jr. (TOR) - 1 HR(s)\n\
         \n\
         Total missing: 2 out of 4 HR hitters\n"
    );
}

#[test]
fn indexed_config_matches_linear() {
    let linear = load_and_run(&load_config("aug9.check.toml"));
    let indexed = load_and_run(&load_config("aug9-indexed.check.toml"));

    assert_eq!(indexed.meta.strategy, MatchStrategy::Indexed);
    assert_eq!(indexed.meta.date_label, "August 9");
    assert_eq!(linear.missing, indexed.missing);
    assert_eq!(linear.summary, indexed.summary);
}

#[test]
fn rerun_is_identical() {
    let config = load_config("aug9.check.toml");
    let input = load_input(&config, &fixtures_dir()).unwrap();
    let first = run(&config, &input).unwrap();
    let second = run(&config, &input).unwrap();
    assert_eq!(first.missing, second.missing);
    assert_eq!(first.summary, second.summary);
    assert_eq!(render_text(&first), render_text(&second));
}

#[test]
fn json_report_shape() {
    let report = load_and_run(&load_config("aug9.check.toml"));
    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["meta"]["target_date"], "2025-08-09");
    assert_eq!(value["meta"]["strategy"], "linear_scan");
    assert_eq!(value["summary"]["missing"], 2);
    assert_eq!(value["missing"][0]["name"], "C. Raleigh");
    assert_eq!(value["missing"][0]["metric_value"], 1);
}

// -------------------------------------------------------------------------
// Missing-field policies
// -------------------------------------------------------------------------

#[test]
fn daily_without_players_is_empty_report() {
    let mut config = load_config("aug9.check.toml");
    config.daily.file = "no_games.json".into();
    let report = load_and_run(&config);
    assert_eq!(report.summary.qualifying, 0);
    assert!(render_text(&report).ends_with("Total missing: 0 out of 0 HR hitters\n"));
}

#[test]
fn performance_without_players_fails() {
    let mut config = load_config("aug9.check.toml");
    config.performance.file = "stale_performance.json".into();
    let err = run_from_dir(&config, &fixtures_dir()).unwrap_err();
    assert!(matches!(
        err,
        ReconError::MissingData { dataset: Dataset::Performance, .. }
    ));
}

#[test]
fn performance_custom_record_field() {
    let mut config = load_config("aug9.check.toml");
    config.performance.file = "stale_performance.json".into();
    config.performance.records = "rows".into();
    let report = load_and_run(&config);
    // Empty rows: every qualifying event is missing
    assert_eq!(report.summary.missing, 4);
}

#[test]
fn unreadable_dataset_is_load_error() {
    let mut config = load_config("aug9.check.toml");
    config.performance.file = "does_not_exist.json".into();
    let err = run_from_dir(&config, &fixtures_dir()).unwrap_err();
    assert!(matches!(
        err,
        ReconError::DataLoad { dataset: Dataset::Performance, .. }
    ));
}

#[test]
fn malformed_json_is_load_error() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("d.json"), "{\"players\": [").unwrap();
    std::fs::write(dir.path().join("p.json"), "{\"players\": []}").unwrap();
    let config = CheckConfig::new(
        "broken",
        chrono::NaiveDate::from_ymd_opt(2025, 8, 9).unwrap(),
        "d.json",
        "p.json",
    );
    let err = run_from_dir(&config, dir.path()).unwrap_err();
    assert!(matches!(err, ReconError::DataLoad { dataset: Dataset::Daily, .. }));
}

#[test]
fn absolute_paths_bypass_base_dir() {
    let mut config = load_config("aug9.check.toml");
    config.daily.file = fixtures_dir()
        .join("august_09_2025.json")
        .to_string_lossy()
        .into_owned();
    let elsewhere = tempfile::tempdir().unwrap();
    std::fs::copy(
        fixtures_dir().join("player_performance_latest.json"),
        elsewhere.path().join("player_performance_latest.json"),
    )
    .unwrap();
    let report = run_from_dir(&config, elsewhere.path()).unwrap();
    assert_eq!(report.summary.qualifying, 4);
}
