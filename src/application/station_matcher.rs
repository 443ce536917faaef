// Station matcher - Rank stations by great-circle distance to a query point
use crate::domain::geo::{distance_km, Coordinate};
use crate::domain::station::{parse_station, RankedStation, RawStation, Station};

/// Return at most `k` stations, closest first. Equal distances keep their
/// input order.
pub fn nearest(query: Coordinate, stations: &[Station], k: usize) -> Vec<RankedStation> {
    if k == 0 {
        return Vec::new();
    }

    let mut ranked: Vec<RankedStation> = stations
        .iter()
        .map(|station| RankedStation {
            distance_km: distance_km(query, station.coordinate),
            station: station.clone(),
        })
        .collect();

    // sort_by is stable
    ranked.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    ranked.truncate(k);
    ranked
}

/// Rank rows straight from an upstream feed. Rows whose coordinates do not
/// parse are dropped so one bad entry cannot fail the whole query.
pub fn nearest_raw(query: Coordinate, raws: &[RawStation], k: usize) -> Vec<RankedStation> {
    let mut skipped = 0usize;
    let stations: Vec<Station> = raws
        .iter()
        .filter_map(|raw| match parse_station(raw) {
            Ok(station) => Some(station),
            Err(e) => {
                tracing::debug!("Skipping station {}: {}", raw.name, e);
                skipped += 1;
                None
            }
        })
        .collect();

    if skipped > 0 {
        tracing::warn!(
            "Dropped {} of {} stations with malformed coordinates",
            skipped,
            raws.len()
        );
    }

    nearest(query, &stations, k)
}
