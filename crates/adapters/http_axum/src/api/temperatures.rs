//! JSON handler for submitting temperature readings.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use monty_app::ports::{ReadingRepository, RoomRepository};
use monty_domain::error::{MontyError, ValidationError};
use monty_domain::id::RoomId;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for recording a temperature.
///
/// Field names follow the wire contract: `room` carries the room id and
/// `data` the optional `MM-DD-YYYY HH:MM:SS` timestamp.
#[derive(Deserialize)]
pub struct TemperatureRequest {
    pub temperature: Option<f64>,
    pub room: Option<i64>,
    pub data: Option<String>,
}

/// Confirmation body.
#[derive(Serialize)]
pub struct TemperatureResponse {
    pub message: &'static str,
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<TemperatureResponse>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// `POST /api/temperature`
pub async fn create<RR, TR>(
    State(state): State<AppState<RR, TR>>,
    Json(req): Json<TemperatureRequest>,
) -> Result<CreateResponse, ApiError>
where
    RR: RoomRepository + Send + Sync + 'static,
    TR: ReadingRepository + Send + Sync + 'static,
{
    let temperature = req.temperature.ok_or(MontyError::Validation(
        ValidationError::MissingField("temperature"),
    ))?;
    let room = req
        .room
        .ok_or(MontyError::Validation(ValidationError::MissingField(
            "room",
        )))?;

    state
        .reading_service
        .record(RoomId::new(room), temperature, req.data.as_deref())
        .await?;

    Ok(CreateResponse::Created(Json(TemperatureResponse {
        message: "Temperature added.",
    })))
}
