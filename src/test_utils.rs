#![cfg(test)]

use crate::app::create_app;
use crate::constants::EARTH_RADIUS_METERS;
use crate::database::{init_connection, init_database, store::insert_spot, DbPool};
use crate::models::NewSpot;
use axum::Router;
use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use std::sync::atomic::{AtomicI64, Ordering};

static SPOT_ID_COUNTER: AtomicI64 = AtomicI64::new(1);

/// Create an in-memory SQLite database pool with full schema applied.
///
/// A single connection keeps every checkout on the same in-memory database.
pub fn create_test_db() -> DbPool {
    let manager = SqliteConnectionManager::memory().with_init(init_connection);

    let pool = Pool::builder()
        .max_size(1)
        .build(manager)
        .expect("Failed to create test database pool");

    let conn = pool.get().expect("Failed to get connection from pool");
    init_database(&conn).expect("Failed to initialize test database schema");

    pool
}

/// Create a test app with in-memory database
pub fn create_test_app() -> (Router, DbPool) {
    let pool = create_test_db();
    let app = create_app(pool.clone());
    (app, pool)
}

/// Test fixture: Create a spot and return its id. Ids sort in creation order.
pub fn create_test_spot(
    pool: &DbPool,
    name: &str,
    website: Option<&str>,
    latitude: f64,
    longitude: f64,
    rating: f64,
) -> String {
    let conn = pool.get().expect("Failed to get connection");
    let id = format!("spot-{:06}", SPOT_ID_COUNTER.fetch_add(1, Ordering::SeqCst));

    insert_spot(
        &conn,
        &NewSpot {
            id: Some(id),
            name: name.to_string(),
            website: website.map(str::to_string),
            latitude,
            longitude,
            description: None,
            rating: Some(rating),
        },
    )
    .expect("Failed to insert test spot")
}

/// Point `meters` due north of `origin` (latitude, longitude).
pub fn offset_north(origin: (f64, f64), meters: f64) -> (f64, f64) {
    (origin.0 + (meters / EARTH_RADIUS_METERS).to_degrees(), origin.1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_test_db() {
        let pool = create_test_db();
        let conn = pool.get().expect("Failed to get connection");

        let result: Result<i64, _> = conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name='spots'",
            [],
            |row| row.get(0),
        );

        assert_eq!(result.unwrap(), 1);
    }

    #[test]
    fn test_create_test_app() {
        let (_app, _pool) = create_test_app();
    }

    #[test]
    fn test_sequential_id_generation() {
        let pool = create_test_db();

        let id1 = create_test_spot(&pool, "one", None, 0.0, 0.0, 1.0);
        let id2 = create_test_spot(&pool, "two", None, 0.0, 0.0, 1.0);
        let id3 = create_test_spot(&pool, "three", None, 0.0, 0.0, 1.0);

        assert!(id1 < id2);
        assert!(id2 < id3);
    }

    #[test]
    fn test_offset_north() {
        let (lat, lon) = offset_north((10.0, 20.0), 111_195.08);
        assert!((lat - 11.0).abs() < 1e-6);
        assert_eq!(lon, 20.0);
    }
}
