// Application state for HTTP handlers
use crate::application::air_quality_service::AirQualityService;
use crate::application::food_log_service::FoodLogService;
use crate::application::tracking_service::TrackingService;

#[derive(Clone)]
pub struct AppState {
    pub air_quality_service: AirQualityService,
    pub tracking_service: TrackingService,
    pub food_log_service: FoodLogService,
    pub default_k: usize,
}
