//! Axum router assembly.

use axum::Router;
use tower_http::trace::TraceLayer;

use monty_app::ports::{ReadingRepository, RoomRepository};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Merges API routes under `/api` and the static pages at `/`. Includes a
/// [`TraceLayer`] that logs each HTTP request/response at the `DEBUG` level
/// using the `tracing` ecosystem.
pub fn build<RR, TR>(state: AppState<RR, TR>) -> Router
where
    RR: RoomRepository + Send + Sync + 'static,
    TR: ReadingRepository + Send + Sync + 'static,
{
    Router::new()
        .merge(crate::pages::routes())
        .nest("/api", crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
