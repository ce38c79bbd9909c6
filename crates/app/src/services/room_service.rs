//! Room service — use-cases for creating and fetching rooms.

use monty_domain::error::{MontyError, NotFoundError, ValidationError};
use monty_domain::id::RoomId;
use monty_domain::room::Room;

use crate::ports::RoomRepository;

/// Application service for room operations.
pub struct RoomService<R> {
    repo: R,
}

impl<R: RoomRepository> RoomService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Create a room from an optional request field.
    ///
    /// The `name` option mirrors the JSON body: an absent key fails before
    /// any SQL executes. The value itself is stored as-is.
    ///
    /// # Errors
    ///
    /// Returns [`MontyError::Validation`] when `name` is absent, or a storage
    /// error propagated from the repository.
    pub async fn create_room(&self, name: Option<String>) -> Result<Room, MontyError> {
        let name = name.ok_or(ValidationError::MissingField("name"))?;
        let room = self.repo.create(name).await?;
        tracing::debug!(id = %room.id, "room created");
        Ok(room)
    }

    /// Look up a room by id.
    ///
    /// # Errors
    ///
    /// Returns [`MontyError::NotFound`] when no room with `id` exists, or a
    /// storage error from the repository.
    pub async fn get_room(&self, id: RoomId) -> Result<Room, MontyError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Room",
                id: id.to_string(),
            }
            .into()
        })
    }
}
