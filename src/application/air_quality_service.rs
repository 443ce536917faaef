// Air quality service - Use cases for nearby stations and reading history
use crate::application::aqi_repository::AqiRepository;
use crate::application::history_analyzer::summarize;
use crate::application::station_matcher::nearest_raw;
use crate::application::station_source::StationSource;
use crate::domain::geo::Coordinate;
use crate::domain::history::{AqiRecord, HistorySummary};
use crate::domain::station::RankedStation;
use anyhow::Context;
use chrono::Utc;
use std::sync::Arc;

#[derive(Clone)]
pub struct AirQualityService {
    source: Arc<dyn StationSource>,
    repository: Arc<dyn AqiRepository>,
}

impl AirQualityService {
    pub fn new(source: Arc<dyn StationSource>, repository: Arc<dyn AqiRepository>) -> Self {
        Self { source, repository }
    }

    /// Rank the current station snapshot around `query`. When a user is
    /// given, the closest station's reading is appended to their history.
    pub async fn nearest_stations(
        &self,
        user: Option<&str>,
        query: Coordinate,
        k: usize,
    ) -> anyhow::Result<Vec<RankedStation>> {
        let raws = self
            .source
            .stations_near(query)
            .await
            .context("Failed to fetch station snapshot")?;

        let ranked = nearest_raw(query, &raws, k);
        tracing::debug!("Ranked {} of {} stations", ranked.len(), raws.len());

        if let (Some(user), Some(closest)) = (user, ranked.first()) {
            let record = AqiRecord {
                aqi: closest.station.aqi.value(),
                timestamp: Utc::now(),
                coordinate: Some(closest.station.coordinate),
                station: Some(closest.station.name.clone()),
            };

            // A failed write must not hide the ranking from the caller
            if let Err(e) = self.repository.append(user, record).await {
                tracing::error!("Error saving reading for {}: {:#}", user, e);
            }
        }

        Ok(ranked)
    }

    pub async fn history_summary(&self, user: &str) -> anyhow::Result<HistorySummary> {
        let records = self.repository.history(user).await?;
        Ok(summarize(&records))
    }
}
