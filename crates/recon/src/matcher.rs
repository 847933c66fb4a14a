use std::collections::HashMap;

use crate::model::{JoinKey, MatchOutput, MatchedEvent, PerformanceRecord, QualifyingEvent};

/// Index of the first performance record with this (name, team, date).
pub fn find_linear(performance: &[PerformanceRecord], key: JoinKey<'_>) -> Option<usize> {
    performance.iter().position(|p| {
        p.name == key.name && p.team == key.team && p.last_event_date.as_deref() == Some(key.date)
    })
}

/// Match each qualifying event by scanning the performance records.
pub fn match_linear_scan<'a>(
    events: &[QualifyingEvent<'a>],
    performance: &[PerformanceRecord],
    target_date: &str,
) -> MatchOutput<'a> {
    split(events, |key| find_linear(performance, key), target_date)
}

/// (name, team, date) → first record index, built once per run.
pub struct PerformanceIndex<'p> {
    map: HashMap<JoinKey<'p>, usize>,
}

impl<'p> PerformanceIndex<'p> {
    pub fn build(performance: &'p [PerformanceRecord]) -> Self {
        let mut map = HashMap::with_capacity(performance.len());
        for (i, p) in performance.iter().enumerate() {
            // Undated records can never match.
            let Some(date) = p.last_event_date.as_deref() else {
                continue;
            };
            let key = JoinKey { name: &p.name, team: &p.team, date };
            map.entry(key).or_insert(i);
        }
        Self { map }
    }

    pub fn get(&self, key: JoinKey<'_>) -> Option<usize> {
        self.map.get(&key).copied()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Match each qualifying event through a prebuilt index. Same output as
/// [`match_linear_scan`].
pub fn match_indexed<'a>(
    events: &[QualifyingEvent<'a>],
    performance: &[PerformanceRecord],
    target_date: &str,
) -> MatchOutput<'a> {
    let index = PerformanceIndex::build(performance);
    log::debug!(
        "indexed {} distinct key(s) over {} performance record(s)",
        index.len(),
        performance.len()
    );
    split(events, |key| index.get(key), target_date)
}

fn split<'a, F>(events: &[QualifyingEvent<'a>], mut lookup: F, target_date: &str) -> MatchOutput<'a>
where
    F: FnMut(JoinKey<'_>) -> Option<usize>,
{
    let mut out = MatchOutput::default();
    for event in events {
        let key = JoinKey {
            name: &event.record.name,
            team: &event.record.team,
            date: target_date,
        };
        match lookup(key) {
            Some(performance_index) => out.found.push(MatchedEvent {
                event: *event,
                performance_index,
            }),
            None => out.missing.push(*event),
        }
    }
    out
}
