//! Tag based recommendations

use crate::domain::entities::Hackathon;

/// Hackathons sharing at least one tag with `tags`, catalog order kept.
/// No tags means no filtering.
pub fn recommend(hackathons: Vec<Hackathon>, tags: &[String]) -> Vec<Hackathon> {
    if tags.is_empty() {
        return hackathons;
    }
    hackathons
        .into_iter()
        .filter(|h| h.matches_any(tags))
        .collect()
}
