// AQI history domain model
use crate::domain::geo::Coordinate;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// One persisted reading. `aqi` is `None` when the station had no value
/// at the time the reading was recorded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AqiRecord {
    pub aqi: Option<i32>,
    pub timestamp: DateTime<Utc>,
    pub coordinate: Option<Coordinate>,
    pub station: Option<String>,
}

impl AqiRecord {
    pub fn new(aqi: Option<i32>, timestamp: DateTime<Utc>) -> Self {
        Self {
            aqi,
            timestamp,
            coordinate: None,
            station: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HistorySummary {
    pub total_count: usize,
    pub unsafe_count: usize,
    pub recent_window: Vec<AqiRecord>,
}
