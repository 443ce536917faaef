// Motion domain model: location fixes, transport modes and per-session state
use crate::domain::geo::Coordinate;
use crate::domain::policy::POLICY;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Movement category inferred from instantaneous speed. Variants are
/// declared in ascending threshold order, so the derived `Ord` follows speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportMode {
    #[default]
    Walking,
    TwoWheeler,
    FourWheeler,
}

impl TransportMode {
    pub const ALL: [TransportMode; 3] = [Self::Walking, Self::TwoWheeler, Self::FourWheeler];

    pub fn classify(speed: f64) -> Self {
        if speed >= POLICY.four_wheeler_min_speed {
            Self::FourWheeler
        } else if speed >= POLICY.two_wheeler_min_speed {
            Self::TwoWheeler
        } else {
            Self::Walking
        }
    }

    /// Lowest speed that still maps to this mode.
    pub fn min_speed(&self) -> f64 {
        match self {
            Self::Walking => 0.0,
            Self::TwoWheeler => POLICY.two_wheeler_min_speed,
            Self::FourWheeler => POLICY.four_wheeler_min_speed,
        }
    }

    /// km per litre; walking burns no fuel.
    pub fn fuel_efficiency(&self) -> Option<f64> {
        match self {
            Self::Walking => None,
            Self::TwoWheeler => Some(POLICY.two_wheeler_efficiency),
            Self::FourWheeler => Some(POLICY.four_wheeler_efficiency),
        }
    }
}

/// One sample from the device location provider.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationFix {
    pub coordinate: Option<Coordinate>,
    pub speed: Option<f64>,
    pub timestamp: DateTime<Utc>,
}

impl LocationFix {
    pub fn new(coordinate: Coordinate, speed: Option<f64>, timestamp: DateTime<Utc>) -> Self {
        Self {
            coordinate: Some(coordinate),
            speed,
            timestamp,
        }
    }
}

/// Kilometres travelled per transport mode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DistanceByMode(BTreeMap<TransportMode, f64>);

impl DistanceByMode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, mode: TransportMode, km: f64) {
        *self.0.entry(mode).or_insert(0.0) += km;
    }

    pub fn get(&self, mode: TransportMode) -> f64 {
        self.0.get(&mode).copied().unwrap_or(0.0)
    }

    pub fn total(&self) -> f64 {
        self.0.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (TransportMode, f64)> + '_ {
        self.0.iter().map(|(mode, km)| (*mode, *km))
    }
}

impl FromIterator<(TransportMode, f64)> for DistanceByMode {
    fn from_iter<I: IntoIterator<Item = (TransportMode, f64)>>(iter: I) -> Self {
        let mut distances = Self::new();
        for (mode, km) in iter {
            distances.add(mode, km);
        }
        distances
    }
}

/// Mutable state of one tracking period. Lives only as long as the
/// location stream feeding it; it is never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MotionSession {
    pub previous_fix: Option<LocationFix>,
    pub distance_by_mode: DistanceByMode,
    pub mode: TransportMode,
    pub fix_count: u64,
}

impl MotionSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn distance_for(&self, mode: TransportMode) -> f64 {
        self.distance_by_mode.get(mode)
    }

    pub fn total_distance_km(&self) -> f64 {
        self.distance_by_mode.total()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_thresholds() {
        assert_eq!(TransportMode::classify(0.0), TransportMode::Walking);
        assert_eq!(TransportMode::classify(1.99), TransportMode::Walking);
        assert_eq!(TransportMode::classify(2.0), TransportMode::TwoWheeler);
        assert_eq!(TransportMode::classify(14.99), TransportMode::TwoWheeler);
        assert_eq!(TransportMode::classify(15.0), TransportMode::FourWheeler);
        assert_eq!(TransportMode::classify(120.0), TransportMode::FourWheeler);
    }

    #[test]
    fn test_modes_ordered_by_threshold() {
        let mut modes = TransportMode::ALL;
        modes.sort_by(|a, b| a.min_speed().total_cmp(&b.min_speed()));
        assert_eq!(modes, TransportMode::ALL);
        assert!(TransportMode::Walking < TransportMode::TwoWheeler);
        assert!(TransportMode::TwoWheeler < TransportMode::FourWheeler);
    }

    #[test]
    fn test_fuel_efficiency() {
        assert_eq!(TransportMode::Walking.fuel_efficiency(), None);
        assert_eq!(TransportMode::TwoWheeler.fuel_efficiency(), Some(40.0));
        assert_eq!(TransportMode::FourWheeler.fuel_efficiency(), Some(15.0));
    }

    #[test]
    fn test_distance_by_mode() {
        let mut d = DistanceByMode::new();
        assert_eq!(d.get(TransportMode::Walking), 0.0);

        d.add(TransportMode::Walking, 1.5);
        d.add(TransportMode::Walking, 0.5);
        d.add(TransportMode::FourWheeler, 10.0);

        assert_eq!(d.get(TransportMode::Walking), 2.0);
        assert_eq!(d.get(TransportMode::TwoWheeler), 0.0);
        assert_eq!(d.total(), 12.0);
    }

    #[test]
    fn test_distance_by_mode_json() {
        let d: DistanceByMode = serde_json::from_str(r#"{"four_wheeler": 150.0}"#).unwrap();
        assert_eq!(d.get(TransportMode::FourWheeler), 150.0);

        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, r#"{"four_wheeler":150.0}"#);
    }

    #[test]
    fn test_session_reset() {
        let mut session = MotionSession::new();
        session.distance_by_mode.add(TransportMode::TwoWheeler, 3.0);
        session.mode = TransportMode::TwoWheeler;
        session.fix_count = 4;

        session.reset();
        assert_eq!(session, MotionSession::default());
        assert_eq!(session.mode, TransportMode::Walking);
        assert_eq!(session.total_distance_km(), 0.0);
    }
}
