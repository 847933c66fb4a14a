use std::fmt::Write;

use crate::model::CheckReport;
use crate::range::{DayOutcome, RangeReport};

/// Human-readable report: one line per missing event, then a totals line.
pub fn render_text(report: &CheckReport) -> String {
    let meta = &report.meta;
    let unit = &meta.metric_label;
    let mut out = String::new();

    let verb = if meta.player_type == "hitter" { "who hit" } else { "with" };
    let _ = writeln!(
        out,
        "Players {verb} {unit}s on {} but missing from performance data:",
        meta.date_label
    );
    for m in &report.missing {
        let _ = writeln!(out, "- {} ({}) - {} {unit}(s)", m.name, m.team, m.metric_value);
    }
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Total missing: {} out of {} {}",
        report.summary.missing, report.summary.qualifying, meta.subject_label
    );

    out
}

/// Range report: a summary line per day with its missing events, then totals.
pub fn render_range_text(report: &RangeReport) -> String {
    let meta = &report.meta;
    let unit = &meta.metric_label;
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Missing from performance data, {} to {}:",
        meta.from, meta.to
    );
    for day in &report.days {
        match &day.outcome {
            DayOutcome::Checked { summary, missing } => {
                let _ = writeln!(
                    out,
                    "{}: {} missing out of {} {}",
                    day.date, summary.missing, summary.qualifying, meta.subject_label
                );
                for m in missing {
                    let _ = writeln!(out, "  - {} ({}) - {} {unit}(s)", m.name, m.team, m.metric_value);
                }
            }
            DayOutcome::FileMissing { reason } => {
                let _ = writeln!(out, "{}: daily file missing ({}: {reason})", day.date, day.daily_file);
            }
        }
    }

    let s = &report.summary;
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Total missing: {} out of {} {} over {} of {} day(s)",
        s.missing, s.qualifying, meta.subject_label, s.checked, s.days
    );
    if s.files_missing > 0 {
        let _ = writeln!(out, "Daily files missing: {}", s.files_missing);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MatchStrategy;
    use crate::model::{CheckMeta, CheckSummary, MissingEvent};
    use chrono::NaiveDate;

    fn report(missing: Vec<MissingEvent>, qualifying: usize) -> CheckReport {
        CheckReport {
            meta: CheckMeta {
                config_name: "t".into(),
                target_date: NaiveDate::from_ymd_opt(2025, 8, 9).unwrap(),
                date_label: "Aug 9".into(),
                metric_label: "HR".into(),
                player_type: "hitter".into(),
                subject_label: "HR hitters".into(),
                strategy: MatchStrategy::LinearScan,
                engine_version: "0.0.0".into(),
                run_at: "2025-08-10T00:00:00+00:00".into(),
            },
            summary: CheckSummary {
                qualifying,
                found: qualifying - missing.len(),
                missing: missing.len(),
            },
            missing,
        }
    }

    #[test]
    fn lists_missing_then_totals() {
        let text = render_text(&report(
            vec![
                MissingEvent { name: "A".into(), team: "NYY".into(), metric_value: 2 },
                MissingEvent { name: "C. Raleigh".into(), team: "SEA".into(), metric_value: 1 },
            ],
            5,
        ));
        assert_eq!(
            text,
            "Players who hit HRs on Aug 9 but missing from performance data:\n\
             - A (NYY) - 2 HR(s)\n\
             - C. Raleigh (SEA) - 1 HR(s)\n\
             \n\
             Total missing: 2 out of 5 HR hitters\n"
        );
    }

    #[test]
    fn empty_report() {
        let text = render_text(&report(vec![], 0));
        assert_eq!(
            text,
            "Players who hit HRs on Aug 9 but missing from performance data:\n\
             \n\
             Total missing: 0 out of 0 HR hitters\n"
        );
    }

    #[test]
    fn other_player_types_use_their_own_noun() {
        let mut r = report(
            vec![MissingEvent { name: "G. Cole".into(), team: "NYY".into(), metric_value: 9 }],
            3,
        );
        r.meta.metric_label = "K".into();
        r.meta.player_type = "pitcher".into();
        r.meta.subject_label = "K pitchers".into();
        assert_eq!(
            render_text(&r),
            "Players with Ks on Aug 9 but missing from performance data:\n\
             - G. Cole (NYY) - 9 K(s)\n\
             \n\
             Total missing: 1 out of 3 K pitchers\n"
        );
    }

    #[test]
    fn range_lists_days_then_totals() {
        use crate::range::{DayResult, RangeMeta, RangeSummary};

        let day = |d| NaiveDate::from_ymd_opt(2025, 8, d).unwrap();
        let range = RangeReport {
            meta: RangeMeta {
                config_name: "t".into(),
                from: day(8),
                to: day(10),
                metric_label: "HR".into(),
                player_type: "hitter".into(),
                subject_label: "HR hitters".into(),
                strategy: MatchStrategy::LinearScan,
                engine_version: "0.0.0".into(),
                run_at: "2025-08-11T00:00:00+00:00".into(),
            },
            summary: RangeSummary {
                days: 3,
                checked: 2,
                files_missing: 1,
                qualifying: 3,
                found: 2,
                missing: 1,
            },
            days: vec![
                DayResult {
                    date: day(8),
                    daily_file: "a.json".into(),
                    outcome: DayOutcome::Checked {
                        summary: CheckSummary { qualifying: 1, found: 1, missing: 0 },
                        missing: vec![],
                    },
                },
                DayResult {
                    date: day(9),
                    daily_file: "b.json".into(),
                    outcome: DayOutcome::Checked {
                        summary: CheckSummary { qualifying: 2, found: 1, missing: 1 },
                        missing: vec![MissingEvent {
                            name: "C. Raleigh".into(),
                            team: "SEA".into(),
                            metric_value: 1,
                        }],
                    },
                },
                DayResult {
                    date: day(10),
                    daily_file: "c.json".into(),
                    outcome: DayOutcome::FileMissing {
                        reason: "cannot load daily dataset: file not found".into(),
                    },
                },
            ],
        };

        assert_eq!(
            render_range_text(&range),
            "Missing from performance data, 2025-08-08 to 2025-08-10:\n\
             2025-08-08: 0 missing out of 1 HR hitters\n\
             2025-08-09: 1 missing out of 2 HR hitters\n  \
             - C. Raleigh (SEA) - 1 HR(s)\n\
             2025-08-10: daily file missing (c.json: cannot load daily dataset: file not found)\n\
             \n\
             Total missing: 1 out of 3 HR hitters over 2 of 3 day(s)\n\
             Daily files missing: 1\n"
        );
    }
}
