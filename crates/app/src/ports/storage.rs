//! Storage port — repository traits for persistence.

use std::future::Future;

use monty_domain::error::MontyError;
use monty_domain::id::RoomId;
use monty_domain::reading::Reading;
use monty_domain::room::Room;

/// Persistence operations for rooms.
pub trait RoomRepository {
    /// Insert a room and return it with its store-generated id.
    fn create(&self, name: String) -> impl Future<Output = Result<Room, MontyError>> + Send;

    /// Fetch a room by id, `None` when no row matches.
    fn get_by_id(
        &self,
        id: RoomId,
    ) -> impl Future<Output = Result<Option<Room>, MontyError>> + Send;
}

/// Persistence and aggregate operations for temperature readings.
pub trait ReadingRepository {
    /// Insert a reading. The store rejects readings whose `room_id` does not
    /// reference an existing room.
    fn insert(&self, reading: Reading) -> impl Future<Output = Result<(), MontyError>> + Send;

    /// Arithmetic mean of all temperatures across all rooms, `None` when no
    /// readings exist.
    fn global_average(&self) -> impl Future<Output = Result<Option<f64>, MontyError>> + Send;

    /// Number of distinct calendar dates (time-of-day truncated) with at
    /// least one reading.
    fn distinct_day_count(&self) -> impl Future<Output = Result<u64, MontyError>> + Send;
}
