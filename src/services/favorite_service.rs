// src/services/favorite_service.rs
use std::sync::Arc;

use log::debug;

use crate::domain::EpisodeId;
use crate::error::AppResult;
use crate::repositories::FavoriteRepository;

/// Favorite flag rules on top of the dumb store.
pub struct FavoriteService {
    favorite_repo: Arc<dyn FavoriteRepository>,
}

impl FavoriteService {
    pub fn new(favorite_repo: Arc<dyn FavoriteRepository>) -> Self {
        Self { favorite_repo }
    }

    /// Current flag for `episode_id`.
    ///
    /// An absent entry is created as `false` before returning; an existing
    /// entry is returned without any write.
    pub fn read_or_init(&self, episode_id: EpisodeId) -> AppResult<bool> {
        match self.favorite_repo.get(episode_id)? {
            Some(is_favorite) => Ok(is_favorite),
            None => {
                debug!("no favorite entry for episode {}, creating it", episode_id);
                self.favorite_repo.set(episode_id, false)?;
                Ok(false)
            }
        }
    }

    /// Persist `!current` and return it. Returns only after the write succeeded.
    pub fn toggle(&self, episode_id: EpisodeId, current: bool) -> AppResult<bool> {
        let next = !current;
        self.favorite_repo.set(episode_id, next)?;
        debug!("episode {} favorite: {} -> {}", episode_id, current, next);
        Ok(next)
    }

    /// Episode ids currently flagged as favorite, ascending
    pub fn list_favorites(&self) -> AppResult<Vec<EpisodeId>> {
        Ok(self
            .favorite_repo
            .list_all()?
            .into_iter()
            .filter_map(|(id, is_favorite)| is_favorite.then_some(id))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::repositories::{InMemoryFavoriteRepository, MockFavoriteRepository};
    use mockall::predicate::eq;

    #[test]
    fn test_first_read_creates_false_entry() {
        let repo = Arc::new(InMemoryFavoriteRepository::new());
        let service = FavoriteService::new(repo.clone());

        assert!(!service.read_or_init(EpisodeId(4)).unwrap());
        assert_eq!(repo.get(EpisodeId(4)).unwrap(), Some(false));
    }

    #[test]
    fn test_existing_entry_read_without_write() {
        let mut repo = MockFavoriteRepository::new();
        repo.expect_get()
            .with(eq(EpisodeId(4)))
            .times(1)
            .returning(|_| Ok(Some(true)));
        repo.expect_set().times(0);

        let service = FavoriteService::new(Arc::new(repo));
        assert!(service.read_or_init(EpisodeId(4)).unwrap());
    }

    #[test]
    fn test_absent_entry_written_once() {
        let mut repo = MockFavoriteRepository::new();
        repo.expect_get().returning(|_| Ok(None));
        repo.expect_set()
            .with(eq(EpisodeId(7)), eq(false))
            .times(1)
            .returning(|_, _| Ok(()));

        let service = FavoriteService::new(Arc::new(repo));
        assert!(!service.read_or_init(EpisodeId(7)).unwrap());
    }

    #[test]
    fn test_toggle_parity() {
        let repo = Arc::new(InMemoryFavoriteRepository::new());
        let service = FavoriteService::new(repo.clone());
        let id = EpisodeId(1);

        let original = service.read_or_init(id).unwrap();
        let mut current = original;
        for n in 1..=5 {
            current = service.toggle(id, current).unwrap();
            let stored = repo.get(id).unwrap().unwrap();
            if n % 2 == 0 {
                assert_eq!(stored, original, "even toggles restore the flag");
            } else {
                assert_eq!(stored, !original, "odd toggles flip the flag");
            }
        }
    }

    #[test]
    fn test_toggle_write_failure_propagates() {
        let mut repo = MockFavoriteRepository::new();
        repo.expect_set()
            .returning(|_, _| Err(AppError::Other("disk full".to_string())));

        let service = FavoriteService::new(Arc::new(repo));
        assert!(service.toggle(EpisodeId(2), false).is_err());
    }

    #[test]
    fn test_list_favorites_filters_false() {
        let repo = Arc::new(InMemoryFavoriteRepository::new());
        repo.set(EpisodeId(6), true).unwrap();
        repo.set(EpisodeId(1), false).unwrap();
        repo.set(EpisodeId(3), true).unwrap();

        let service = FavoriteService::new(repo);
        assert_eq!(
            service.list_favorites().unwrap(),
            vec![EpisodeId(3), EpisodeId(6)]
        );
    }
}
