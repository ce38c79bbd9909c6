//! Reading — a single temperature measurement attached to one room.

use serde::{Deserialize, Serialize};

use crate::id::RoomId;
use crate::time::Timestamp;

/// A temperature measurement. Immutable once recorded; the store enforces
/// that `room_id` references an existing room and cascades on room deletion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub room_id: RoomId,
    pub temperature: f64,
    pub recorded_at: Timestamp,
}

impl Reading {
    /// Assemble a reading.
    #[must_use]
    pub fn new(room_id: RoomId, temperature: f64, recorded_at: Timestamp) -> Self {
        Self {
            room_id,
            temperature,
            recorded_at,
        }
    }
}
