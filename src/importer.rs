use std::fs;
use std::path::Path;

use rusqlite::Connection;
use tracing::info;

use crate::database::store::insert_spot;
use crate::error::AppResult;
use crate::models::NewSpot;

/// Loads a JSON array of spot records into the store in one transaction.
/// Returns the number of spots imported.
pub fn import_spots_file(conn: &mut Connection, path: &Path) -> AppResult<usize> {
    let content = fs::read_to_string(path)?;
    let spots: Vec<NewSpot> = serde_json::from_str(&content)?;
    import_spots(conn, &spots)
}

pub fn import_spots(conn: &mut Connection, spots: &[NewSpot]) -> AppResult<usize> {
    let tx = conn.transaction()?;
    for spot in spots {
        insert_spot(&tx, spot)?;
    }
    tx.commit()?;

    info!("Imported {} spots", spots.len());
    Ok(spots.len())
}
