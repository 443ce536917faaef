// In-memory stores for AQI history and the food log
use crate::application::aqi_repository::AqiRepository;
use crate::application::food_log_repository::FoodLogRepository;
use crate::domain::food::JunkFoodEntry;
use crate::domain::history::AqiRecord;
use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
pub struct MemoryRepository {
    records: RwLock<HashMap<String, Vec<AqiRecord>>>,
    food: RwLock<HashMap<String, Vec<JunkFoodEntry>>>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AqiRepository for MemoryRepository {
    async fn append(&self, user: &str, record: AqiRecord) -> Result<()> {
        tracing::debug!("Appending AQI {:?} for {}", record.aqi, user);
        self.records
            .write()
            .await
            .entry(user.to_string())
            .or_default()
            .push(record);
        Ok(())
    }

    async fn history(&self, user: &str) -> Result<Vec<AqiRecord>> {
        let records = self.records.read().await;
        let mut history: Vec<AqiRecord> = records
            .get(user)
            .map(|r| r.iter().rev().cloned().collect())
            .unwrap_or_default();

        // Newest first; equal timestamps keep the latest insert on top
        history.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(history)
    }
}

#[async_trait]
impl FoodLogRepository for MemoryRepository {
    async fn append_food(&self, user: &str, entry: JunkFoodEntry) -> Result<()> {
        self.food
            .write()
            .await
            .entry(user.to_string())
            .or_default()
            .push(entry);
        Ok(())
    }

    async fn food_history(&self, user: &str) -> Result<Vec<JunkFoodEntry>> {
        let food = self.food.read().await;
        let mut history: Vec<JunkFoodEntry> = food
            .get(user)
            .map(|e| e.iter().rev().cloned().collect())
            .unwrap_or_default();

        history.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(history)
    }
}
