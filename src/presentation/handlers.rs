// HTTP request handlers
use crate::application::footprint_calculator::{compute, parse_bill};
use crate::domain::error::CoreError;
use crate::domain::food::{parse_calories, FoodLogSummary, JunkFoodEntry};
use crate::domain::footprint::FootprintReport;
use crate::domain::geo::{parse_coordinate, Coordinate};
use crate::domain::history::HistorySummary;
use crate::domain::motion::{DistanceByMode, LocationFix, MotionSession, TransportMode};
use crate::domain::station::RankedStation;
use crate::presentation::app_state::AppState;
use crate::presentation::error::ApiError;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Kept as text so malformed values reach `ApiError` and get the JSON
/// error body instead of the extractor's plain-text rejection.
#[derive(Debug, Default, Deserialize)]
pub struct NearestQuery {
    pub lat: Option<String>,
    pub lon: Option<String>,
    pub k: Option<String>,
    /// Record the closest reading in this user's history
    pub user: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct FixRequest {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub speed: Option<f64>,
    pub timestamp: Option<DateTime<Utc>>,
}

/// Bills come from a free-text form field as often as from a number input.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum BillInput {
    Amount(f64),
    Text(String),
}

#[derive(Debug, Deserialize)]
pub struct FootprintRequest {
    pub bill: BillInput,
    pub session_id: Option<String>,
    #[serde(default)]
    pub distance_by_mode: DistanceByMode,
}

/// Form fields arrive loosely typed; everything is validated by the domain.
#[derive(Debug, Default, Deserialize)]
pub struct FoodRequest {
    #[serde(default)]
    pub food: String,
    #[serde(default)]
    pub calories: serde_json::Value,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct SessionView {
    pub mode: TransportMode,
    pub fix_count: u64,
    pub distance_by_mode: DistanceByMode,
    pub total_distance_km: f64,
}

impl From<MotionSession> for SessionView {
    fn from(session: MotionSession) -> Self {
        Self {
            mode: session.mode,
            fix_count: session.fix_count,
            total_distance_km: session.total_distance_km(),
            distance_by_mode: session.distance_by_mode,
        }
    }
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Closest stations to a position
pub async fn nearest_stations(
    Query(query): Query<NearestQuery>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<RankedStation>>, ApiError> {
    let position = parse_coordinate(
        query.lat.as_deref().unwrap_or_default(),
        query.lon.as_deref().unwrap_or_default(),
    )?;
    let k = match query.k.as_deref().map(str::trim) {
        None | Some("") => state.default_k,
        Some(text) => text
            .parse::<usize>()
            .map_err(|_| CoreError::InvalidInput(format!("k '{}' is not a non-negative integer", text)))?,
    };

    let ranked = state
        .air_quality_service
        .nearest_stations(query.user.as_deref(), position, k)
        .await?;

    Ok(Json(ranked))
}

/// Push one location fix into a tracking session
pub async fn post_fix(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(request): Json<FixRequest>,
) -> Result<Json<SessionView>, ApiError> {
    let coordinate = match (request.lat, request.lon) {
        (Some(lat), Some(lon)) => Some(Coordinate::new(lat, lon)?),
        _ => None,
    };

    let fix = LocationFix {
        coordinate,
        speed: request.speed,
        timestamp: request.timestamp.unwrap_or_else(Utc::now),
    };

    let session = state.tracking_service.record_fix(&id, fix).await?;
    Ok(Json(session.into()))
}

pub async fn get_session(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<SessionView>, ApiError> {
    state
        .tracking_service
        .session(&id)
        .await
        .map(|s| Json(s.into()))
        .ok_or_else(|| ApiError::NotFound(format!("session {}", id)))
}

/// Stop tracking and return the final distances
pub async fn delete_session(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<SessionView>, ApiError> {
    state
        .tracking_service
        .stop(&id)
        .await
        .map(|s| Json(s.into()))
        .ok_or_else(|| ApiError::NotFound(format!("session {}", id)))
}

pub async fn reset_session(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<StatusCode, ApiError> {
    if state.tracking_service.reset(&id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound(format!("session {}", id)))
    }
}

/// Carbon footprint from a bill and either a live session or explicit distances
pub async fn footprint(
    State(state): State<Arc<AppState>>,
    Json(request): Json<FootprintRequest>,
) -> Result<Json<FootprintReport>, ApiError> {
    let bill = match request.bill {
        BillInput::Amount(amount) => amount,
        BillInput::Text(text) => parse_bill(&text)?,
    };

    let report = match request.session_id {
        Some(id) => state
            .tracking_service
            .footprint(&id, bill)
            .await
            .ok_or_else(|| ApiError::NotFound(format!("session {}", id)))??,
        None => compute(bill, &request.distance_by_mode)?,
    };

    Ok(Json(report))
}

pub async fn history(
    Path(user): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<HistorySummary>, ApiError> {
    let summary = state.air_quality_service.history_summary(&user).await?;
    Ok(Json(summary))
}

/// Add an entry to a user's junk food log
pub async fn log_food(
    Path(user): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(request): Json<FoodRequest>,
) -> Result<(StatusCode, Json<JunkFoodEntry>), ApiError> {
    let calories = match &request.calories {
        serde_json::Value::Number(n) => n
            .as_i64()
            .ok_or_else(|| CoreError::InvalidInput(format!("calories {} is not an integer", n)))?,
        serde_json::Value::String(text) => parse_calories(text)?,
        _ => return Err(CoreError::InvalidInput("calories are required".to_string()).into()),
    };

    let entry = JunkFoodEntry::new(&request.food, calories, Utc::now())?;
    state.food_log_service.log(&user, entry.clone()).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

pub async fn food_log(
    Path(user): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<FoodLogSummary>, ApiError> {
    let summary = state.food_log_service.summary(&user).await?;
    Ok(Json(summary))
}
