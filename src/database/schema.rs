use crate::error::AppResult;
use rusqlite::Connection;

const SCHEMA: &str = include_str!("../../schema.sql");

pub fn init_database(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(SCHEMA)?;
    Ok(())
}
