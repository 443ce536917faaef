// Air-quality station domain model
use crate::domain::error::CoreResult;
use crate::domain::geo::{parse_coordinate, Coordinate};
use serde::Serialize;

/// Current AQI of a station. Providers publish "-" or "N/A" when the
/// monitor is offline, which is kept distinct from a real reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AqiReading {
    Value(i32),
    Unavailable,
}

impl AqiReading {
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(text) = raw.map(str::trim) else {
            return Self::Unavailable;
        };

        if let Ok(v) = text.parse::<i32>() {
            return Self::from_value(v);
        }

        match text.parse::<f64>() {
            Ok(v) if v.is_finite() => Self::from_value(v.round() as i32),
            _ => Self::Unavailable,
        }
    }

    fn from_value(v: i32) -> Self {
        if v < 0 { Self::Unavailable } else { Self::Value(v) }
    }

    pub fn value(&self) -> Option<i32> {
        match self {
            Self::Value(v) => Some(*v),
            Self::Unavailable => None,
        }
    }
}

/// Station row exactly as the upstream feed delivers it: every numeric
/// field is text and may be missing or garbage.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawStation {
    pub name: String,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub aqi: Option<String>,
    pub last_update: Option<String>,
    pub locality: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Station {
    pub name: String,
    pub coordinate: Coordinate,
    pub aqi: AqiReading,
    pub last_update: Option<String>,
    pub locality: String,
}

impl Station {
    pub fn new(name: impl Into<String>, coordinate: Coordinate, aqi: AqiReading) -> Self {
        Self {
            name: name.into(),
            coordinate,
            aqi,
            last_update: None,
            locality: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedStation {
    pub station: Station,
    pub distance_km: f64,
}

/// Validate a raw row into a `Station`. Only the coordinate can fail; an
/// unreadable AQI degrades to `Unavailable`.
pub fn parse_station(raw: &RawStation) -> CoreResult<Station> {
    let coordinate = parse_coordinate(
        raw.latitude.as_deref().unwrap_or_default(),
        raw.longitude.as_deref().unwrap_or_default(),
    )?;

    Ok(Station {
        name: raw.name.clone(),
        coordinate,
        aqi: AqiReading::parse(raw.aqi.as_deref()),
        last_update: raw.last_update.clone(),
        locality: raw.locality.clone(),
    })
}
