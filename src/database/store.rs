//! Reads that feed the ranking: area candidates and website groups.

use rusqlite::{Connection, Row};
use uuid::Uuid;

use crate::database::{fetch_all, queries};
use crate::error::AppResult;
use crate::models::{AreaQuery, NewSpot, Spot};
use crate::utils::geo::{bounding_box, format_point};

fn map_spot(row: &Row<'_>) -> rusqlite::Result<Spot> {
    let latitude: f64 = row.get(3)?;
    let longitude: f64 = row.get(4)?;

    Ok(Spot {
        id: row.get(0)?,
        name: row.get(1)?,
        website: row.get(2)?,
        coordinates: format_point(latitude, longitude),
        description: row.get(5)?,
        rating: row.get(6)?,
        distance: None,
        domain_count: None,
    })
}

/// Spots within `query.radius` meters of the query point, nearest first.
pub fn spots_in_area(conn: &Connection, query: &AreaQuery) -> AppResult<Vec<Spot>> {
    let bbox = bounding_box(query.latitude, query.longitude, query.radius);

    fetch_all(
        conn,
        queries::spots::SELECT_IN_AREA,
        &[
            &query.latitude,
            &query.longitude,
            &bbox.south,
            &bbox.north,
            &bbox.west,
            &bbox.east,
            &query.radius,
        ],
        |row| {
            let mut spot = map_spot(row)?;
            spot.distance = Some(row.get(7)?);
            Ok(spot)
        },
    )
}

/// One representative per website value with the size of its group.
pub fn domain_groups(conn: &Connection) -> AppResult<Vec<Spot>> {
    fetch_all(conn, queries::spots::SELECT_DOMAIN_GROUPS, &[], |row| {
        let mut spot = map_spot(row)?;
        spot.domain_count = Some(row.get(7)?);
        Ok(spot)
    })
}

/// Inserts a spot, generating an id when none is given. Returns the id.
pub fn insert_spot(conn: &Connection, spot: &NewSpot) -> AppResult<String> {
    let id = spot
        .id
        .clone()
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    conn.execute(
        queries::spots::INSERT,
        rusqlite::params![
            id,
            spot.name,
            spot.website,
            spot.latitude,
            spot.longitude,
            spot.description,
            spot.rating,
        ],
    )?;

    Ok(id)
}
