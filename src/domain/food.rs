// Junk food log domain model
use crate::domain::error::{CoreError, CoreResult};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JunkFoodEntry {
    pub food: String,
    pub calories: u32,
    pub timestamp: DateTime<Utc>,
}

impl JunkFoodEntry {
    /// Both a food name and a positive calorie count are required.
    pub fn new(food: &str, calories: i64, timestamp: DateTime<Utc>) -> CoreResult<Self> {
        let food = food.trim();
        if food.is_empty() {
            return Err(CoreError::InvalidInput("food name must not be empty".to_string()));
        }

        let calories = u32::try_from(calories)
            .ok()
            .filter(|c| *c > 0)
            .ok_or_else(|| CoreError::InvalidInput(format!("calories must be a positive integer, got {}", calories)))?;

        Ok(Self {
            food: food.to_string(),
            calories,
            timestamp,
        })
    }
}

/// Parse a calorie count typed into a form field. Fractions are rejected.
pub fn parse_calories(text: &str) -> CoreResult<i64> {
    text.trim()
        .parse::<i64>()
        .map_err(|_| CoreError::InvalidInput(format!("calories '{}' is not an integer", text)))
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FoodLogSummary {
    pub total_count: usize,
    pub total_calories: u64,
    pub recent: Vec<JunkFoodEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 11, 2, 20, 0, 0).unwrap()
    }

    #[test]
    fn test_valid_entry() {
        let entry = JunkFoodEntry::new("  Samosa ", 262, at()).unwrap();
        assert_eq!(entry.food, "Samosa");
        assert_eq!(entry.calories, 262);
    }

    #[test]
    fn test_rejects_missing_food_or_calories() {
        assert!(matches!(JunkFoodEntry::new("", 100, at()), Err(CoreError::InvalidInput(_))));
        assert!(matches!(JunkFoodEntry::new("   ", 100, at()), Err(CoreError::InvalidInput(_))));
        assert!(matches!(JunkFoodEntry::new("Fries", 0, at()), Err(CoreError::InvalidInput(_))));
        assert!(matches!(JunkFoodEntry::new("Fries", -40, at()), Err(CoreError::InvalidInput(_))));
        assert!(matches!(
            JunkFoodEntry::new("Fries", i64::from(u32::MAX) + 1, at()),
            Err(CoreError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_parse_calories() {
        assert_eq!(parse_calories(" 350 ").unwrap(), 350);
        assert!(parse_calories("12.5").is_err());
        assert!(parse_calories("lots").is_err());
        assert!(parse_calories("").is_err());
    }
}
