// Port for the upstream air-quality station feed
use crate::domain::geo::Coordinate;
use crate::domain::station::RawStation;
use async_trait::async_trait;

#[async_trait]
pub trait StationSource: Send + Sync {
    /// Snapshot of stations around `center`, unvalidated
    async fn stations_near(&self, center: Coordinate) -> anyhow::Result<Vec<RawStation>>;
}
