use crate::models::Spot;

/// A group representative counts as a duplicate domain when it has a website
/// and at least one other spot shares it.
pub fn is_duplicate_domain(spot: &Spot) -> bool {
    spot.has_website() && spot.group_size() > 1
}

/// Keeps the representatives of websites shared by more than one spot, in input order.
pub fn retain_duplicate_domains(spots: Vec<Spot>) -> Vec<Spot> {
    spots.into_iter().filter(is_duplicate_domain).collect()
}
