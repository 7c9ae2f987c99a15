//! Result shaping applied after spots are read from the store.

mod duplicates;
mod proximity;
pub mod stable;

pub use duplicates::{is_duplicate_domain, retain_duplicate_domains};
pub use proximity::{precedes, rank_by_proximity};

use crate::models::{Spot, SpotCollection};

/// Ranks area candidates and wraps them for the response.
pub fn ranked_collection(mut candidates: Vec<Spot>) -> SpotCollection {
    rank_by_proximity(&mut candidates);
    SpotCollection::new(candidates)
}

/// Filters grouping representatives down to duplicate domains and wraps them for the response.
pub fn duplicate_collection(representatives: Vec<Spot>) -> SpotCollection {
    SpotCollection::new(retain_duplicate_domains(representatives))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spot(id: &str, distance: Option<f64>, domain_count: Option<i64>) -> Spot {
        Spot {
            id: id.to_string(),
            name: id.to_string(),
            website: Some(format!("{}.com", id)),
            coordinates: "POINT(0 0)".to_string(),
            description: None,
            rating: 1.0,
            distance,
            domain_count,
        }
    }

    #[test]
    fn test_empty_inputs_give_empty_collections() {
        let ranked = ranked_collection(Vec::new());
        assert_eq!(ranked.total, 0);
        assert!(ranked.spots.is_empty());

        let duplicates = duplicate_collection(Vec::new());
        assert_eq!(duplicates.total, 0);
        assert!(duplicates.spots.is_empty());
    }

    #[test]
    fn test_duplicate_total_counts_filtered_spots() {
        let collection = duplicate_collection(vec![
            spot("a", None, Some(3)),
            spot("b", None, Some(1)),
            spot("c", None, Some(2)),
        ]);
        assert_eq!(collection.total, 2);
        assert_eq!(collection.total, collection.spots.len());
    }

    #[test]
    fn test_ranked_total_counts_all_candidates() {
        let collection = ranked_collection(vec![
            spot("a", Some(1.0), None),
            spot("b", Some(2.0), None),
        ]);
        assert_eq!(collection.total, 2);
    }
}
