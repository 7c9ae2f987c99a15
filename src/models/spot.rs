use serde::{Deserialize, Serialize};
use validator::Validate;

/// A geo-tagged record as returned to clients.
///
/// `distance` is only set on proximity results and `domain_count` only on
/// duplicate-domain results; whichever does not apply is left out of the JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spot {
    pub id: String,
    pub name: String,
    pub website: Option<String>,
    pub coordinates: String,
    pub description: Option<String>,
    pub rating: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain_count: Option<i64>,
}

impl Spot {
    /// Distance from the query point, zero when the spot was not produced by an area query.
    pub fn distance_meters(&self) -> f64 {
        self.distance.unwrap_or_default()
    }

    pub fn group_size(&self) -> i64 {
        self.domain_count.unwrap_or_default()
    }

    pub fn has_website(&self) -> bool {
        self.website.as_deref().is_some_and(|w| !w.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpotCollection {
    pub spots: Vec<Spot>,
    pub total: usize,
}

impl SpotCollection {
    pub fn new(spots: Vec<Spot>) -> Self {
        let total = spots.len();
        Self { spots, total }
    }

    pub fn is_empty(&self) -> bool {
        self.spots.is_empty()
    }
}

impl From<Vec<Spot>> for SpotCollection {
    fn from(spots: Vec<Spot>) -> Self {
        Self::new(spots)
    }
}

/// Raw area query body; every field is optional so missing ones can be reported.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct AreaQueryRequest {
    #[validate(required, range(min = -90.0, max = 90.0))]
    pub latitude: Option<f64>,
    #[validate(required, range(min = -180.0, max = 180.0))]
    pub longitude: Option<f64>,
    #[validate(required, range(exclusive_min = 0.0))]
    pub radius: Option<f64>,
}

/// A validated point-and-radius query. Radius is in meters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AreaQuery {
    pub latitude: f64,
    pub longitude: f64,
    pub radius: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub tag: String,
    pub value: Option<serde_json::Value>,
}

/// A spot record as read from an import file.
#[derive(Debug, Clone, Deserialize)]
pub struct NewSpot {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub website: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
}
