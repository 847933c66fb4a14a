use chrono::NaiveDate;
use proptest::prelude::*;

use dugout_recon::model::{CheckInput, DailyEventRecord, PerformanceRecord, PlayerType};
use dugout_recon::{run, CheckConfig, MatchStrategy};

const TARGET: &str = "2025-08-09";

fn config(strategy: MatchStrategy) -> CheckConfig {
    let mut c = CheckConfig::new(
        "prop",
        NaiveDate::from_ymd_opt(2025, 8, 9).unwrap(),
        "d.json",
        "p.json",
    );
    c.strategy = strategy;
    c
}

fn arb_daily() -> impl Strategy<Value = DailyEventRecord> {
    (
        prop::sample::select(vec!["A", "B", "C"]),
        prop::sample::select(vec!["NYY", "BOS"]),
        prop::sample::select(vec!["hitter", "pitcher", "catcher"]),
        -1i64..4,
    )
        .prop_map(|(name, team, kind, metric)| DailyEventRecord {
            name: name.into(),
            team: team.into(),
            player_type: PlayerType::from(kind),
            metric_value: metric,
        })
}

fn arb_perf() -> impl Strategy<Value = PerformanceRecord> {
    (
        prop::sample::select(vec!["A", "B", "C"]),
        prop::sample::select(vec!["NYY", "BOS"]),
        prop::sample::select(vec![Some("2025-08-08"), Some(TARGET), None]),
    )
        .prop_map(|(name, team, date)| PerformanceRecord {
            name: name.into(),
            team: team.into(),
            last_event_date: date.map(str::to_string),
        })
}

fn qualifies(r: &DailyEventRecord) -> bool {
    r.player_type == PlayerType::Hitter && r.metric_value > 0
}

fn has_match(r: &DailyEventRecord, perf: &[PerformanceRecord]) -> bool {
    perf.iter()
        .any(|p| p.name == r.name && p.team == r.team && p.last_event_date.as_deref() == Some(TARGET))
}

proptest! {
    #[test]
    fn report_is_the_anti_join(
        daily in prop::collection::vec(arb_daily(), 0..30),
        performance in prop::collection::vec(arb_perf(), 0..30),
    ) {
        let input = CheckInput { daily: daily.clone(), performance: performance.clone() };
        let report = run(&config(MatchStrategy::LinearScan), &input).unwrap();

        // Filter + join, in daily order
        let expected: Vec<(String, String, i64)> = daily
            .iter()
            .filter(|r| qualifies(r))
            .filter(|r| !has_match(r, &performance))
            .map(|r| (r.name.clone(), r.team.clone(), r.metric_value))
            .collect();
        let actual: Vec<(String, String, i64)> = report
            .missing
            .iter()
            .map(|m| (m.name.clone(), m.team.clone(), m.metric_value))
            .collect();
        prop_assert_eq!(actual, expected);

        // Counts
        let qualifying = daily.iter().filter(|r| qualifies(r)).count();
        prop_assert_eq!(report.summary.qualifying, qualifying);
        prop_assert_eq!(report.summary.missing + report.summary.found, qualifying);
        prop_assert_eq!(report.summary.missing, report.missing.len());

        // Strategy choice and reruns don't change the result
        let indexed = run(&config(MatchStrategy::Indexed), &input).unwrap();
        prop_assert_eq!(&indexed.missing, &report.missing);
        prop_assert_eq!(indexed.summary, report.summary);
        let again = run(&config(MatchStrategy::LinearScan), &input).unwrap();
        prop_assert_eq!(&again.missing, &report.missing);
    }
}
