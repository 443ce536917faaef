// History analyzer - Summarise a user's AQI log
use crate::domain::history::{AqiRecord, HistorySummary};
use crate::domain::policy::POLICY;

/// `records` must already be newest first; the window is taken as given.
pub fn summarize(records: &[AqiRecord]) -> HistorySummary {
    let unsafe_count = records
        .iter()
        .filter(|r| r.aqi.is_some_and(|aqi| aqi > POLICY.unsafe_aqi_threshold))
        .count();

    HistorySummary {
        total_count: records.len(),
        unsafe_count,
        recent_window: records.iter().take(POLICY.history_window).cloned().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn record(aqi: Option<i32>, hour: u32) -> AqiRecord {
        AqiRecord::new(aqi, Utc.with_ymd_and_hms(2024, 11, 2, hour, 0, 0).unwrap())
    }

    #[test]
    fn test_summarize_reference_case() {
        let records = vec![
            record(Some(120), 5),
            record(Some(80), 4),
            record(Some(150), 3),
            record(None, 2),
            record(Some(50), 1),
        ];

        let summary = summarize(&records);
        assert_eq!(summary.total_count, 5);
        assert_eq!(summary.unsafe_count, 2);
        assert_eq!(summary.recent_window, records);
    }

    #[test]
    fn test_threshold_is_strict() {
        let records = vec![record(Some(100), 2), record(Some(101), 1)];
        assert_eq!(summarize(&records).unsafe_count, 1);
    }

    #[test]
    fn test_window_is_capped() {
        let records: Vec<AqiRecord> = (0..15).rev().map(|h| record(Some(200), h)).collect();
        let summary = summarize(&records);

        assert_eq!(summary.total_count, 15);
        assert_eq!(summary.unsafe_count, 15);
        assert_eq!(summary.recent_window.len(), 10);
        assert_eq!(summary.recent_window[..], records[..10]);
    }

    #[test]
    fn test_window_is_not_resorted() {
        let records = vec![record(Some(1), 1), record(Some(2), 9), record(Some(3), 4)];
        let summary = summarize(&records);
        let aqis: Vec<Option<i32>> = summary.recent_window.iter().map(|r| r.aqi).collect();
        assert_eq!(aqis, vec![Some(1), Some(2), Some(3)]);
    }

    #[test]
    fn test_empty_history() {
        assert_eq!(summarize(&[]), HistorySummary::default());
    }
}
