// Repository trait for the junk food log
use crate::domain::food::JunkFoodEntry;
use async_trait::async_trait;

#[async_trait]
pub trait FoodLogRepository: Send + Sync {
    async fn append_food(&self, user: &str, entry: JunkFoodEntry) -> anyhow::Result<()>;

    /// All entries for a user, newest first
    async fn food_history(&self, user: &str) -> anyhow::Result<Vec<JunkFoodEntry>>;
}
