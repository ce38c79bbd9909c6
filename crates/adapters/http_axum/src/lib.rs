//! # monty-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **JSON API** (`/api/room`, `/api/temperature`,
//!   `/api/avg_temp`, `/api/day_count`)
//! - Serve the handful of **static pages** (`/`, `/new`, `/math`,
//!   `/tictactoe`)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application errors into status codes: 400 for missing or malformed
//!   input, 404 for an unknown room, 500 for store failures
//!
//! ## Dependency rule
//! Depends on `monty-app` (for port traits and services) and `monty-domain`
//! (for domain types used in request/response mapping). Never leaks axum
//! types into the domain.

pub mod api;
pub mod error;
pub mod pages;
pub mod router;
pub mod state;
