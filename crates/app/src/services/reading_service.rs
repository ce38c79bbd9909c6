//! Reading service — recording temperatures and the global aggregates.

use monty_domain::error::MontyError;
use monty_domain::id::RoomId;
use monty_domain::reading::Reading;
use monty_domain::time;

use crate::ports::ReadingRepository;

/// Application service for temperature readings.
pub struct ReadingService<R> {
    repo: R,
}

impl<R: ReadingRepository> ReadingService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Record a temperature for a room.
    ///
    /// The timestamp is decided by field *presence*, not validity: an absent
    /// `date` defaults to the current UTC time, a present but malformed one
    /// fails and never falls back to the default.
    ///
    /// # Errors
    ///
    /// Returns [`MontyError::Parse`] when `date` is present but does not
    /// match the wire format, or a storage error from the repository (for
    /// example a foreign-key violation on an unknown room).
    pub async fn record(
        &self,
        room_id: RoomId,
        temperature: f64,
        date: Option<&str>,
    ) -> Result<Reading, MontyError> {
        let recorded_at = match date {
            Some(raw) => time::parse_wire(raw)?,
            None => time::now(),
        };

        let reading = Reading::new(room_id, temperature, recorded_at);
        self.repo.insert(reading.clone()).await?;
        tracing::debug!(room_id = %room_id, temperature, "reading recorded");
        Ok(reading)
    }

    /// Mean of all recorded temperatures, `None` when there are none.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn average(&self) -> Result<Option<f64>, MontyError> {
        self.repo.global_average().await
    }

    /// Number of distinct calendar dates with at least one reading.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn day_count(&self) -> Result<u64, MontyError> {
        self.repo.distinct_day_count().await
    }
}
