// Food log service - Record junk food and show the latest entries
use crate::application::food_log_repository::FoodLogRepository;
use crate::domain::food::{FoodLogSummary, JunkFoodEntry};
use crate::domain::policy::POLICY;
use std::sync::Arc;

#[derive(Clone)]
pub struct FoodLogService {
    repository: Arc<dyn FoodLogRepository>,
}

impl FoodLogService {
    pub fn new(repository: Arc<dyn FoodLogRepository>) -> Self {
        Self { repository }
    }

    pub async fn log(&self, user: &str, entry: JunkFoodEntry) -> anyhow::Result<()> {
        tracing::debug!("Logging {} ({} kcal) for {}", entry.food, entry.calories, user);
        self.repository.append_food(user, entry).await
    }

    pub async fn summary(&self, user: &str) -> anyhow::Result<FoodLogSummary> {
        let entries = self.repository.food_history(user).await?;
        Ok(summarize_food(&entries))
    }
}

/// `entries` must be newest first.
pub fn summarize_food(entries: &[JunkFoodEntry]) -> FoodLogSummary {
    FoodLogSummary {
        total_count: entries.len(),
        total_calories: entries.iter().map(|e| u64::from(e.calories)).sum(),
        recent: entries.iter().take(POLICY.food_log_window).cloned().collect(),
    }
}
