// WAQI map-bounds station feed
use crate::application::station_source::StationSource;
use crate::domain::geo::Coordinate;
use crate::domain::station::RawStation;
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone)]
pub struct WaqiStationSource {
    host: String,
    token: String,
    bounds_padding_deg: f64,
    client: reqwest::Client,
}

/// The feed reports errors as `{"status": "error", "data": "Invalid key"}`,
/// so `data` stays untyped until the status is known.
#[derive(Debug, Deserialize)]
struct WaqiBoundsResponse {
    status: String,
    #[serde(default)]
    data: Value,
}

#[derive(Debug, Deserialize)]
struct WaqiStation {
    #[serde(default)]
    lat: Value,
    #[serde(default)]
    lon: Value,
    #[serde(default)]
    aqi: Value,
    #[serde(default)]
    station: Option<WaqiStationInfo>,
}

#[derive(Debug, Deserialize)]
struct WaqiStationInfo {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    time: Option<String>,
}

impl WaqiStationSource {
    pub fn new(host: String, token: String, bounds_padding_deg: f64) -> Self {
        Self {
            host: host.trim_end_matches('/').to_string(),
            token,
            bounds_padding_deg,
            client: reqwest::Client::new(),
        }
    }

    /// The box is clamped at the poles and at the antimeridian rather than
    /// wrapped, so near ±180° longitude only stations on the user's side
    /// of the date line are queried.
    fn build_bounds_url(&self, center: Coordinate) -> String {
        let pad = self.bounds_padding_deg;
        let lat1 = (center.latitude() - pad).max(-90.0);
        let lat2 = (center.latitude() + pad).min(90.0);
        let lon1 = (center.longitude() - pad).max(-180.0);
        let lon2 = (center.longitude() + pad).min(180.0);

        format!(
            "{}/map/bounds/?latlng={:.4},{:.4},{:.4},{:.4}&token={}",
            self.host,
            lat1,
            lon1,
            lat2,
            lon2,
            urlencoding::encode(&self.token)
        )
    }
}

#[async_trait]
impl StationSource for WaqiStationSource {
    async fn stations_near(&self, center: Coordinate) -> Result<Vec<RawStation>> {
        let url = self.build_bounds_url(center);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .context("Failed to send request to WAQI")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("WAQI request failed with status {}: {}", status, body);
        }

        let body = response
            .json::<WaqiBoundsResponse>()
            .await
            .context("Failed to parse WAQI response")?;

        let stations = map_bounds_response(body)?;
        tracing::debug!("WAQI returned {} stations", stations.len());
        Ok(stations)
    }
}

fn map_bounds_response(body: WaqiBoundsResponse) -> Result<Vec<RawStation>> {
    if body.status != "ok" {
        anyhow::bail!("WAQI error: {}", text(&body.data).unwrap_or_else(|| body.status.clone()));
    }

    let entries: Vec<Value> =
        serde_json::from_value(body.data).context("Unexpected WAQI station list")?;
    let total = entries.len();

    // A malformed entry costs only that station
    let stations: Vec<RawStation> = entries
        .into_iter()
        .enumerate()
        .filter_map(|(i, entry)| match serde_json::from_value::<WaqiStation>(entry) {
            Ok(station) => Some(to_raw_station(station)),
            Err(e) => {
                tracing::debug!("Skipping WAQI entry {}: {}", i, e);
                None
            }
        })
        .collect();

    if stations.len() < total {
        tracing::warn!("Dropped {} of {} WAQI entries", total - stations.len(), total);
    }

    Ok(stations)
}

fn to_raw_station(entry: WaqiStation) -> RawStation {
    let (name, last_update) = match entry.station {
        Some(info) => (info.name.unwrap_or_default(), info.time),
        None => (String::new(), None),
    };

    // "Anand Vihar, Delhi, Delhi, India" -> "Delhi, Delhi, India"
    let locality = name
        .split_once(',')
        .map(|(_, rest)| rest.trim().to_string())
        .unwrap_or_default();

    RawStation {
        latitude: text(&entry.lat),
        longitude: text(&entry.lon),
        aqi: text(&entry.aqi),
        last_update,
        locality,
        name,
    }
}

/// Numbers and strings both arrive from the feed; anything else is missing.
fn text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Result<Vec<RawStation>> {
        map_bounds_response(serde_json::from_str(json).unwrap())
    }

    #[test]
    fn test_build_bounds_url() {
        let source = WaqiStationSource::new("https://api.waqi.info/".to_string(), "a b&c".to_string(), 0.5);
        let url = source.build_bounds_url(Coordinate::new(28.6139, 77.2090).unwrap());
        assert_eq!(
            url,
            "https://api.waqi.info/map/bounds/?latlng=28.1139,76.7090,29.1139,77.7090&token=a%20b%26c"
        );
    }

    #[test]
    fn test_bounds_are_clamped() {
        let source = WaqiStationSource::new("http://localhost".to_string(), "t".to_string(), 2.0);
        let url = source.build_bounds_url(Coordinate::new(89.5, 179.0).unwrap());
        assert_eq!(url, "http://localhost/map/bounds/?latlng=87.5000,177.0000,90.0000,180.0000&token=t");
    }

    #[test]
    fn test_bounds_do_not_wrap_antimeridian() {
        let source = WaqiStationSource::new("http://localhost".to_string(), "t".to_string(), 1.0);
        let url = source.build_bounds_url(Coordinate::new(-17.0, -179.5).unwrap());
        assert_eq!(url, "http://localhost/map/bounds/?latlng=-18.0000,-180.0000,-16.0000,-178.5000&token=t");
    }

    #[test]
    fn test_map_stations() {
        let stations = parse(
            r#"{
                "status": "ok",
                "data": [
                    {"lat": 28.6469, "lon": 77.3164, "uid": 2553, "aqi": "312",
                     "station": {"name": "Anand Vihar, Delhi, Delhi, India", "time": "2024-11-02T10:00:00+05:30"}},
                    {"lat": 28.5, "lon": 77.1, "uid": 11, "aqi": "-",
                     "station": {"name": "Offline", "time": null}},
                    {"lat": null, "lon": "77.0", "aqi": 40}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(stations.len(), 3);

        assert_eq!(stations[0].name, "Anand Vihar, Delhi, Delhi, India");
        assert_eq!(stations[0].latitude.as_deref(), Some("28.6469"));
        assert_eq!(stations[0].aqi.as_deref(), Some("312"));
        assert_eq!(stations[0].locality, "Delhi, Delhi, India");
        assert_eq!(stations[0].last_update.as_deref(), Some("2024-11-02T10:00:00+05:30"));

        assert_eq!(stations[1].aqi.as_deref(), Some("-"));
        assert_eq!(stations[1].locality, "");

        assert_eq!(stations[2].latitude, None);
        assert_eq!(stations[2].aqi.as_deref(), Some("40"));
        assert_eq!(stations[2].name, "");
    }

    #[test]
    fn test_bad_entries_are_skipped() {
        let stations = parse(
            r#"{
                "status": "ok",
                "data": [
                    {"lat": 28.63, "lon": 77.24, "aqi": "180", "station": {"name": "ITO, Delhi"}},
                    {"lat": 28.5, "lon": 77.1, "aqi": "90", "station": {"name": 1234}},
                    null,
                    {"lat": 28.4, "lon": 77.0, "aqi": "70", "station": "Gurugram"},
                    {"lat": "27.18", "lon": "78.02", "aqi": 95, "station": {"name": "Agra"}}
                ]
            }"#,
        )
        .unwrap();

        let names: Vec<&str> = stations.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["ITO, Delhi", "Agra"]);
    }

    #[test]
    fn test_data_that_is_not_a_list() {
        assert!(parse(r#"{"status": "ok", "data": {"lat": 1}}"#).is_err());
    }

    #[test]
    fn test_error_status() {
        let err = parse(r#"{"status": "error", "data": "Invalid key"}"#).unwrap_err();
        assert_eq!(err.to_string(), "WAQI error: Invalid key");
    }
}
