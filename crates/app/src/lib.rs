//! # monty-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `RoomRepository` — insert and fetch rooms
//!   - `ReadingRepository` — insert readings and run the aggregate queries
//! - Define **driving/inbound ports** as use-case structs:
//!   - `RoomService` — create, get
//!   - `ReadingService` — record, global average, distinct-day count
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `monty-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
