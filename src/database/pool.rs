use crate::error::{AppError, AppResult};
use crate::utils::geo::haversine_meters;
use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::functions::FunctionFlags;
use rusqlite::{Connection, Row};
use std::path::Path;

pub type DbPool = Pool<SqliteConnectionManager>;
pub type DbConn = PooledConnection<SqliteConnectionManager>;

/// Per-connection setup shared by file and in-memory pools.
pub fn init_connection(conn: &mut Connection) -> rusqlite::Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON")?;
    register_functions(conn)
}

/// Registers `haversine_m(lat1, lon1, lat2, lon2)`, returning meters.
fn register_functions(conn: &Connection) -> rusqlite::Result<()> {
    conn.create_scalar_function(
        "haversine_m",
        4,
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
        |ctx| {
            let lat1 = ctx.get::<f64>(0)?;
            let lon1 = ctx.get::<f64>(1)?;
            let lat2 = ctx.get::<f64>(2)?;
            let lon2 = ctx.get::<f64>(3)?;
            Ok(haversine_meters(lat1, lon1, lat2, lon2))
        },
    )
}

pub fn create_pool(path: &Path, max_connections: u32) -> AppResult<DbPool> {
    let manager = SqliteConnectionManager::file(path).with_init(init_connection);

    Pool::builder()
        .max_size(max_connections)
        .build(manager)
        .map_err(|e| AppError::Internal(format!("Failed to create database pool: {}", e)))
}

pub fn get_connection(pool: &DbPool) -> AppResult<DbConn> {
    pool.get().map_err(AppError::Pool)
}

pub fn fetch_all<T, F>(conn: &Connection, sql: &str, params: &[&dyn rusqlite::ToSql], mapper: F) -> AppResult<Vec<T>>
where
    F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
{
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map(params, mapper)?;

    let mut results = Vec::new();
    for row in rows {
        results.push(row?);
    }
    Ok(results)
}

pub fn fetch_count(conn: &Connection, sql: &str) -> AppResult<i64> {
    Ok(conn.query_row(sql, [], |row| row.get(0))?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_haversine_function_registered() {
        let mut conn = Connection::open_in_memory().unwrap();
        init_connection(&mut conn).unwrap();

        let meters: f64 = conn
            .query_row("SELECT haversine_m(0.0, 0.0, 1.0, 0.0)", [], |row| row.get(0))
            .unwrap();
        assert!((meters - 111_195.0).abs() < 10.0);
    }

    #[test]
    fn test_create_pool_on_file() {
        let dir = tempfile::tempdir().unwrap();
        let pool = create_pool(&dir.path().join("spots.sqlite"), 2).unwrap();
        let conn = get_connection(&pool).unwrap();

        let one = fetch_count(&conn, "SELECT 1").unwrap();
        assert_eq!(one, 1);
    }
}
