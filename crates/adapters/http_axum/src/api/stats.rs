//! JSON handlers for the global aggregates.

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use monty_app::ports::{ReadingRepository, RoomRepository};

use crate::error::ApiError;
use crate::state::AppState;

/// Body for the global average endpoint; `average` is `null` when no
/// readings exist.
#[derive(Serialize)]
pub struct AverageResponse {
    pub average: Option<f64>,
}

/// Body for the distinct-day count endpoint.
#[derive(Serialize)]
pub struct DayCountResponse {
    pub days: u64,
}

/// `GET /api/avg_temp`
pub async fn average<RR, TR>(
    State(state): State<AppState<RR, TR>>,
) -> Result<Json<AverageResponse>, ApiError>
where
    RR: RoomRepository + Send + Sync + 'static,
    TR: ReadingRepository + Send + Sync + 'static,
{
    let average = state.reading_service.average().await?;
    Ok(Json(AverageResponse { average }))
}

/// `GET /api/day_count`
pub async fn day_count<RR, TR>(
    State(state): State<AppState<RR, TR>>,
) -> Result<Json<DayCountResponse>, ApiError>
where
    RR: RoomRepository + Send + Sync + 'static,
    TR: ReadingRepository + Send + Sync + 'static,
{
    let days = state.reading_service.day_count().await?;
    Ok(Json(DayCountResponse { days }))
}
