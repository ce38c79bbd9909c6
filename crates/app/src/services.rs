//! Use-case services, one per aggregate.

pub mod reading_service;
pub mod room_service;
