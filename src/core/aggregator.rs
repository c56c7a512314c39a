use crate::consts::DATE_PREFIX_LEN;
use crate::core::types::{DailyTraffic, DayCounts, TrafficRecord};

/// Calendar date of an ISO-8601 timestamp, taken verbatim (no timezone shift)
pub(crate) fn truncate_to_date(timestamp: &str) -> &str {
    match timestamp.char_indices().nth(DATE_PREFIX_LEN) {
        Some((idx, _)) => &timestamp[..idx],
        None => timestamp,
    }
}

/// Key records by date in API order; later records for the same date win.
pub(crate) fn aggregate_daily(records: &[TrafficRecord]) -> DailyTraffic {
    let mut daily = DailyTraffic::default();
    for record in records {
        daily.insert(
            &record.date,
            DayCounts {
                count: record.count,
                uniques: record.uniques,
            },
        );
    }
    daily
}
