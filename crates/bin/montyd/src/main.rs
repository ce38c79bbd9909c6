//! # montyd — monty daemon
//!
//! Composition root that wires the adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialize the `SQLite` connection pool and run migrations once
//! - Construct repository implementations (adapters)
//! - Construct application services, injecting repositories via port traits
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use monty_adapter_http_axum::state::AppState;
use monty_adapter_storage_sqlite_sqlx::{Config, SqliteReadingRepository, SqliteRoomRepository};
use monty_app::services::reading_service::ReadingService;
use monty_app::services::room_service::RoomService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = config::Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&config.logging.filter))
        .init();

    // Database — pool plus one-time migrations
    let db = Config {
        database_url: config.database.url.clone(),
    }
    .build()
    .await?;
    let pool = db.pool().clone();

    // Repositories
    let room_repo = SqliteRoomRepository::new(pool.clone());
    let reading_repo = SqliteReadingRepository::new(pool);

    // Services
    let room_service = RoomService::new(room_repo);
    let reading_service = ReadingService::new(reading_repo);

    // HTTP
    let state = AppState::new(room_service, reading_service);
    let app = monty_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    tracing::info!(%bind_addr, "montyd listening");

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
