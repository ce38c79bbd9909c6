//! JSON handlers for rooms.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use monty_app::ports::{ReadingRepository, RoomRepository};
use monty_domain::id::RoomId;
use monty_domain::room::Room;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating a room.
///
/// `name` stays optional at the type level so an absent key maps to a 400
/// with a typed error instead of a deserialization rejection.
#[derive(Deserialize)]
pub struct CreateRoomRequest {
    pub name: Option<String>,
}

/// Response body for a created room, echoing the confirmation phrasing.
#[derive(Serialize)]
pub struct CreateRoomResponse {
    pub id: RoomId,
    pub name: String,
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<CreateRoomResponse>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<Room>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `POST /api/room`
pub async fn create<RR, TR>(
    State(state): State<AppState<RR, TR>>,
    Json(req): Json<CreateRoomRequest>,
) -> Result<CreateResponse, ApiError>
where
    RR: RoomRepository + Send + Sync + 'static,
    TR: ReadingRepository + Send + Sync + 'static,
{
    let room = state.room_service.create_room(req.name).await?;
    Ok(CreateResponse::Created(Json(CreateRoomResponse {
        id: room.id,
        name: format!("Room {} created.", room.name),
    })))
}

/// `GET /api/room/{id}`
pub async fn get<RR, TR>(
    State(state): State<AppState<RR, TR>>,
    Path(id): Path<i64>,
) -> Result<GetResponse, ApiError>
where
    RR: RoomRepository + Send + Sync + 'static,
    TR: ReadingRepository + Send + Sync + 'static,
{
    let room = state.room_service.get_room(RoomId::new(id)).await?;
    Ok(GetResponse::Ok(Json(room)))
}
