//! `SQLite` implementation of [`ReadingRepository`].
//!
//! Timestamps are stored as naive UTC (`YYYY-MM-DD HH:MM:SS`), which keeps
//! `DATE(date)` usable for the distinct-day aggregate.

use std::future::Future;

use sqlx::SqlitePool;

use monty_app::ports::ReadingRepository;
use monty_domain::error::MontyError;
use monty_domain::reading::Reading;

use crate::error::StorageError;

const INSERT: &str = "INSERT INTO temperatures (room_id, temperature, date) VALUES (?, ?, ?)";
const GLOBAL_AVG: &str = "SELECT AVG(temperature) FROM temperatures";
const DISTINCT_DAYS: &str = "SELECT COUNT(DISTINCT DATE(date)) FROM temperatures";

/// `SQLite`-backed reading repository.
pub struct SqliteReadingRepository {
    pool: SqlitePool,
}

impl SqliteReadingRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl ReadingRepository for SqliteReadingRepository {
    fn insert(&self, reading: Reading) -> impl Future<Output = Result<(), MontyError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(INSERT)
                .bind(reading.room_id.as_i64())
                .bind(reading.temperature)
                .bind(reading.recorded_at.naive_utc())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(())
        }
    }

    fn global_average(&self) -> impl Future<Output = Result<Option<f64>, MontyError>> + Send {
        let pool = self.pool.clone();
        async move {
            let average: Option<f64> = sqlx::query_scalar(GLOBAL_AVG)
                .fetch_one(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(average)
        }
    }

    fn distinct_day_count(&self) -> impl Future<Output = Result<u64, MontyError>> + Send {
        let pool = self.pool.clone();
        async move {
            let days: i64 = sqlx::query_scalar(DISTINCT_DAYS)
                .fetch_one(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(u64::try_from(days).unwrap_or_default())
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDateTime;
    use monty_app::ports::RoomRepository;
    use monty_domain::id::RoomId;
    use monty_domain::time;

    use super::*;
    use crate::pool::Config;
    use crate::room_repo::SqliteRoomRepository;

    async fn setup() -> (SqlitePool, SqliteReadingRepository, RoomId) {
        let db = Config {
            database_url: "sqlite::memory:".to_string(),
        }
        .build()
        .await
        .unwrap();
        let pool = db.pool().clone();

        let room = SqliteRoomRepository::new(pool.clone())
            .create("Office".to_string())
            .await
            .unwrap();

        (pool.clone(), SqliteReadingRepository::new(pool), room.id)
    }

    #[tokio::test]
    async fn should_insert_and_store_exact_timestamp() {
        let (pool, repo, room_id) = setup().await;
        let recorded_at = time::parse_wire("06-15-2024 10:00:00").unwrap();

        repo.insert(Reading::new(room_id, 21.5, recorded_at))
            .await
            .unwrap();

        let stored: NaiveDateTime = sqlx::query_scalar("SELECT date FROM temperatures")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(stored, recorded_at.naive_utc());
    }

    #[tokio::test]
    async fn should_reject_reading_for_unknown_room() {
        let (_pool, repo, _room_id) = setup().await;

        let result = repo
            .insert(Reading::new(RoomId::new(999), 21.5, time::now()))
            .await;

        assert!(matches!(result, Err(MontyError::Storage(_))));
    }

    #[tokio::test]
    async fn should_average_all_readings() {
        let (_pool, repo, room_id) = setup().await;
        repo.insert(Reading::new(room_id, 20.0, time::now()))
            .await
            .unwrap();
        repo.insert(Reading::new(room_id, 30.0, time::now()))
            .await
            .unwrap();

        let average = repo.global_average().await.unwrap();
        assert_eq!(average, Some(25.0));
    }

    #[tokio::test]
    async fn should_return_none_average_when_empty() {
        let (_pool, repo, _room_id) = setup().await;
        assert_eq!(repo.global_average().await.unwrap(), None);
    }

    #[tokio::test]
    async fn should_count_days_ignoring_time_of_day() {
        let (_pool, repo, room_id) = setup().await;
        for raw in [
            "06-15-2024 08:00:00",
            "06-15-2024 20:30:00",
            "06-16-2024 08:00:00",
        ] {
            let ts = time::parse_wire(raw).unwrap();
            repo.insert(Reading::new(room_id, 20.0, ts)).await.unwrap();
        }

        assert_eq!(repo.distinct_day_count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn should_return_zero_days_when_empty() {
        let (_pool, repo, _room_id) = setup().await;
        assert_eq!(repo.distinct_day_count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn should_cascade_delete_readings_when_room_deleted() {
        let (pool, repo, room_id) = setup().await;
        repo.insert(Reading::new(room_id, 20.0, time::now()))
            .await
            .unwrap();

        sqlx::query("DELETE FROM rooms WHERE id = ?")
            .bind(room_id.as_i64())
            .execute(&pool)
            .await
            .unwrap();

        let remaining: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM temperatures")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(remaining, 0);
    }
}
