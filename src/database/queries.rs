pub mod spots {
    pub const INSERT: &str = r#"
    INSERT INTO spots (
        id
      , name
      , website
      , latitude
      , longitude
      , description
      , rating
    ) VALUES (?, ?, ?, ?, ?, ?, ?)
    "#;

    pub const COUNT: &str = r#"
    SELECT COUNT(*)
      FROM spots
    "#;

    /// Params: centre latitude, centre longitude, south, north, west, east, radius.
    pub const SELECT_IN_AREA: &str = r#"
    SELECT c.id
         , c.name
         , c.website
         , c.latitude
         , c.longitude
         , c.description
         , c.rating
         , c.distance
      FROM (
        SELECT s.id
             , s.name
             , s.website
             , s.latitude
             , s.longitude
             , s.description
             , COALESCE(s.rating, 0.0) AS rating
             , haversine_m(?1, ?2, s.latitude, s.longitude) AS distance
          FROM spots AS s
         WHERE s.latitude BETWEEN ?3 AND ?4
           AND s.longitude BETWEEN ?5 AND ?6
      ) AS c
     WHERE c.distance <= ?7
     ORDER BY c.distance, c.id
    "#;

    /// One row per distinct website (NULL and empty included), the lowest id
    /// standing for its group.
    pub const SELECT_DOMAIN_GROUPS: &str = r#"
    SELECT g.id
         , g.name
         , g.website
         , g.latitude
         , g.longitude
         , g.description
         , g.rating
         , g.domain_count
      FROM (
        SELECT s.id
             , s.name
             , s.website
             , s.latitude
             , s.longitude
             , s.description
             , COALESCE(s.rating, 0.0) AS rating
             , COUNT(*) OVER (PARTITION BY s.website) AS domain_count
             , ROW_NUMBER() OVER (PARTITION BY s.website ORDER BY s.id) AS position
          FROM spots AS s
      ) AS g
     WHERE g.position = 1
     ORDER BY g.website, g.id
    "#;
}
