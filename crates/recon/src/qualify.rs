use crate::config::QualifyFilter;
use crate::model::{DailyEventRecord, PlayerType, QualifyingEvent};

/// Keep records whose player type matches and whose metric exceeds the
/// threshold. Input order is preserved.
pub fn qualifying_events<'a>(
    records: &'a [DailyEventRecord],
    filter: &QualifyFilter,
) -> Vec<QualifyingEvent<'a>> {
    let wanted = PlayerType::from(filter.player_type.as_str());
    records
        .iter()
        .enumerate()
        .filter(|(_, r)| r.player_type == wanted && r.metric_value > filter.metric_above)
        .map(|(index, record)| QualifyingEvent { index, record })
        .collect()
}
