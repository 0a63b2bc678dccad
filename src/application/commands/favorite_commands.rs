// src/application/commands/favorite_commands.rs
//
// Favorite flag commands that work without fetching the listing.

use crate::application::state::AppState;
use crate::application::view::FavoriteIcon;
use crate::domain::EpisodeId;
use crate::error::AppResult;

/// Toggle the flag for one episode, creating it as false first if absent
pub fn toggle_favorite(state: &AppState, episode_id: EpisodeId) -> AppResult<String> {
    let current = state.favorite_service.read_or_init(episode_id)?;
    let next = state.favorite_service.toggle(episode_id, current)?;
    let icon = FavoriteIcon::for_flag(next).glyph();

    Ok(if next {
        format!("Episode {} is now a favorite {}", episode_id, icon)
    } else {
        format!("Episode {} is no longer a favorite {}", episode_id, icon)
    })
}

pub fn list_favorites(state: &AppState, json: bool) -> AppResult<String> {
    let favorites = state.favorite_service.list_favorites()?;

    if json {
        let ids: Vec<i64> = favorites.iter().map(|id| id.0).collect();
        return Ok(serde_json::to_string(&ids)?);
    }

    if favorites.is_empty() {
        return Ok("No favorite episodes.".to_string());
    }

    let ids: Vec<String> = favorites.iter().map(EpisodeId::to_string).collect();
    Ok(format!("Favorite episodes: {}", ids.join(", ")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::integrations::MockFilmSource;
    use crate::repositories::{FavoriteRepository, InMemoryFavoriteRepository};

    fn state() -> (AppState, Arc<InMemoryFavoriteRepository>) {
        // No fetch may happen for these commands
        let mut source = MockFilmSource::new();
        source.expect_list_films().times(0);
        let repo = Arc::new(InMemoryFavoriteRepository::new());
        (AppState::new(Arc::new(source), repo.clone()), repo)
    }

    #[test]
    fn test_toggle_twice() {
        let (state, repo) = state();

        assert_eq!(
            toggle_favorite(&state, EpisodeId(4)).unwrap(),
            "Episode 4 is now a favorite ♥"
        );
        assert_eq!(repo.get(EpisodeId(4)).unwrap(), Some(true));

        assert_eq!(
            toggle_favorite(&state, EpisodeId(4)).unwrap(),
            "Episode 4 is no longer a favorite ♡"
        );
        assert_eq!(repo.get(EpisodeId(4)).unwrap(), Some(false));
    }

    #[test]
    fn test_list_favorites() {
        let (state, repo) = state();
        assert_eq!(list_favorites(&state, false).unwrap(), "No favorite episodes.");

        repo.set(EpisodeId(6), true).unwrap();
        repo.set(EpisodeId(2), true).unwrap();
        repo.set(EpisodeId(3), false).unwrap();

        assert_eq!(list_favorites(&state, false).unwrap(), "Favorite episodes: 2, 6");
        assert_eq!(list_favorites(&state, true).unwrap(), "[2,6]");
    }
}
