//! Room — a named grouping of temperature readings.

use serde::{Deserialize, Serialize};

use crate::id::RoomId;

/// A named room. The id is assigned by the store on insert; rooms are never
/// updated or deleted through the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
}

impl Room {
    /// Assemble a room from its stored parts.
    #[must_use]
    pub fn new(id: RoomId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
