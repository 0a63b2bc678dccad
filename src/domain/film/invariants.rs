use std::collections::HashSet;

use super::entity::{EpisodeId, Film};

/// Returns every episode id that appears more than once in a listing,
/// in order of first repetition.
///
/// Episode ids are the list keys, so a repeated id means two rows would
/// share one favorite flag. Callers log this; the listing is still rendered.
pub fn validate_film_list(films: &[Film]) -> Vec<EpisodeId> {
    let mut seen = HashSet::new();
    let mut duplicates = Vec::new();

    for film in films {
        if !seen.insert(film.episode_id) && !duplicates.contains(&film.episode_id) {
            duplicates.push(film.episode_id);
        }
    }

    duplicates
}
