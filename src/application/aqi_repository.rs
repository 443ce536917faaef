// Repository trait for persisted AQI readings
use crate::domain::history::AqiRecord;
use async_trait::async_trait;

#[async_trait]
pub trait AqiRepository: Send + Sync {
    /// Append one reading to a user's log
    async fn append(&self, user: &str, record: AqiRecord) -> anyhow::Result<()>;

    /// All readings for a user, newest first
    async fn history(&self, user: &str) -> anyhow::Result<Vec<AqiRecord>>;
}
