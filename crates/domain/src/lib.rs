//! # monty-domain
//!
//! Pure domain model for the monty room-temperature service.
//!
//! ## Responsibilities
//! - Foundational types: typed room identifier, error conventions, timestamps
//! - Define **Rooms** (named groupings of temperature readings)
//! - Define **Readings** (a temperature measurement with a UTC timestamp,
//!   attached to one room)
//! - Own the wire timestamp format clients use to submit readings
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod reading;
pub mod room;
