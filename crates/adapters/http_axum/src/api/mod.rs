//! JSON API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod rooms;
#[allow(clippy::missing_errors_doc)]
pub mod stats;
#[allow(clippy::missing_errors_doc)]
pub mod temperatures;

use axum::Router;
use axum::routing::{get, post};

use monty_app::ports::{ReadingRepository, RoomRepository};

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<RR, TR>() -> Router<AppState<RR, TR>>
where
    RR: RoomRepository + Send + Sync + 'static,
    TR: ReadingRepository + Send + Sync + 'static,
{
    Router::new()
        // Rooms
        .route("/room", post(rooms::create::<RR, TR>))
        .route("/room/{id}", get(rooms::get::<RR, TR>))
        // Temperatures
        .route("/temperature", post(temperatures::create::<RR, TR>))
        // Aggregates
        .route("/avg_temp", get(stats::average::<RR, TR>))
        .route("/day_count", get(stats::day_count::<RR, TR>))
}
