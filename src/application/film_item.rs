// src/application/film_item.rs
//
// One film row plus its favorite toggle.
//
// The item keeps a local copy of the flag for rendering. Every change goes
// to the store first; the local copy flips only after the write succeeded,
// so a failed write never leaves the row showing an unsaved state.

use std::sync::Arc;

use log::warn;

use super::view::{FavoriteIcon, FilmView};
use crate::domain::{EpisodeId, Film};
use crate::error::AppResult;
use crate::services::FavoriteService;

pub struct FilmItem {
    film: Film,
    is_favorite: bool,
    favorites: Arc<FavoriteService>,
}

impl FilmItem {
    /// Read (or create) the stored flag and seed local state with it
    pub fn mount(film: Film, favorites: Arc<FavoriteService>) -> AppResult<Self> {
        let is_favorite = favorites.read_or_init(film.episode_id)?;
        Ok(Self {
            film,
            is_favorite,
            favorites,
        })
    }

    pub fn key(&self) -> EpisodeId {
        self.film.episode_id
    }

    pub fn film(&self) -> &Film {
        &self.film
    }

    pub fn is_favorite(&self) -> bool {
        self.is_favorite
    }

    /// Replace the displayed record, keeping the local flag
    pub(crate) fn update_film(&mut self, film: Film) {
        self.film = film;
    }

    /// Adopt a flag another row under the same key already persisted
    pub(crate) fn sync_favorite(&mut self, is_favorite: bool) {
        self.is_favorite = is_favorite;
    }

    /// Flip the favorite flag. Returns the new value.
    pub fn toggle(&mut self) -> AppResult<bool> {
        match self.favorites.toggle(self.key(), self.is_favorite) {
            Ok(next) => {
                self.is_favorite = next;
                Ok(next)
            }
            Err(e) => {
                warn!("could not save favorite for episode {}: {}", self.key(), e);
                Err(e)
            }
        }
    }

    pub fn view(&self) -> FilmView {
        FilmView {
            key: self.key(),
            heading: self.film.heading(),
            director: self.film.director.clone(),
            producer: self.film.producer.clone(),
            release_date: self.film.release_date.clone(),
            icon: FavoriteIcon::for_flag(self.is_favorite),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::repositories::{
        FavoriteRepository, InMemoryFavoriteRepository, MockFavoriteRepository,
    };

    fn new_hope() -> Film {
        Film::new(4, "A New Hope", "G. Lucas", "G. Lucas, R. Kurtz", "1977-05-25")
    }

    #[test]
    fn test_mount_fresh_item_shows_outlined() {
        let repo = Arc::new(InMemoryFavoriteRepository::new());
        let favorites = Arc::new(FavoriteService::new(repo.clone()));
        let item = FilmItem::mount(new_hope(), favorites).unwrap();

        let view = item.view();
        assert_eq!(view.heading, "Episode 4: A New Hope");
        assert_eq!(view.director, "G. Lucas");
        assert_eq!(view.producer, "G. Lucas, R. Kurtz");
        assert_eq!(view.release_date, "1977-05-25");
        assert_eq!(view.icon, FavoriteIcon::Outlined);
        assert_eq!(repo.get(EpisodeId(4)).unwrap(), Some(false));
    }

    #[test]
    fn test_mount_existing_favorite_without_write() {
        let mut repo = MockFavoriteRepository::new();
        repo.expect_get().returning(|_| Ok(Some(true)));
        repo.expect_set().times(0);

        let favorites = Arc::new(FavoriteService::new(Arc::new(repo)));
        let item = FilmItem::mount(new_hope(), favorites).unwrap();
        assert_eq!(item.view().icon, FavoriteIcon::Filled);
    }

    #[test]
    fn test_toggle_persists_then_updates() {
        let repo = Arc::new(InMemoryFavoriteRepository::new());
        let favorites = Arc::new(FavoriteService::new(repo.clone()));
        let mut item = FilmItem::mount(new_hope(), favorites).unwrap();

        assert!(item.toggle().unwrap());
        assert!(item.is_favorite());
        assert_eq!(repo.get(EpisodeId(4)).unwrap(), Some(true));

        assert!(!item.toggle().unwrap());
        assert_eq!(repo.get(EpisodeId(4)).unwrap(), Some(false));
        assert_eq!(item.view().icon, FavoriteIcon::Outlined);
    }

    #[test]
    fn test_failed_write_keeps_local_state() {
        let mut repo = MockFavoriteRepository::new();
        repo.expect_get().returning(|_| Ok(Some(false)));
        repo.expect_set()
            .returning(|_, _| Err(AppError::Other("read-only store".to_string())));

        let favorites = Arc::new(FavoriteService::new(Arc::new(repo)));
        let mut item = FilmItem::mount(new_hope(), favorites).unwrap();

        assert!(item.toggle().is_err());
        assert!(!item.is_favorite());
        assert_eq!(item.view().icon, FavoriteIcon::Outlined);
    }
}
