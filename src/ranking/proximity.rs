use crate::constants::PROXIMITY_THRESHOLD_METERS;
use crate::models::Spot;
use crate::ranking::stable::stable_sort_by;

/// True when `a` should be listed before `b`: it is not more than the
/// threshold further away and it is rated higher.
///
/// This is not a strict weak ordering. It can hold in neither direction for a
/// pair and can form cycles across three spots.
pub fn precedes(a: &Spot, b: &Spot) -> bool {
    (a.distance_meters() - b.distance_meters()) < PROXIMITY_THRESHOLD_METERS && a.rating > b.rating
}

/// Re-orders distance-ascending candidates so that nearby, better-rated spots
/// move ahead. Runs the stable sort over the whole slice with [`precedes`].
pub fn rank_by_proximity(spots: &mut [Spot]) {
    stable_sort_by(spots, precedes);
}
