// src/application/film_list.rs
//
// List renderer: fetch state in, view out.
//
// Items are keyed by episode id. An item already mounted under a key is
// reused across renders and keeps its local favorite state; unseen keys
// are mounted (which reads the store); vanished keys are dropped.
// Rows sharing a key share one stored flag and are toggled together.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use super::film_item::FilmItem;
use super::view::View;
use crate::domain::{EpisodeId, FetchState, Film};
use crate::error::AppResult;
use crate::services::FavoriteService;

/// Anything that turns a fetch state into a view
pub trait FetchStateConsumer {
    fn render(&mut self, state: &FetchState) -> AppResult<View>;
}

pub struct FilmList {
    favorites: Arc<FavoriteService>,
    items: Vec<FilmItem>,
}

impl FilmList {
    pub fn new(favorites: Arc<FavoriteService>) -> Self {
        Self {
            favorites,
            items: Vec::new(),
        }
    }

    /// Mounted items, in API order
    pub fn items(&self) -> &[FilmItem] {
        &self.items
    }

    pub fn item_mut(&mut self, key: EpisodeId) -> Option<&mut FilmItem> {
        self.items.iter_mut().find(|item| item.key() == key)
    }

    /// Toggle the item under `key`. `None` when no such item is mounted.
    pub fn toggle(&mut self, key: EpisodeId) -> AppResult<Option<bool>> {
        let next = match self.item_mut(key) {
            Some(item) => item.toggle()?,
            None => return Ok(None),
        };

        for item in self.items.iter_mut().filter(|item| item.key() == key) {
            item.sync_favorite(next);
        }
        Ok(Some(next))
    }

    fn reconcile(&mut self, films: &[Film]) -> AppResult<()> {
        let mut mounted: HashMap<EpisodeId, VecDeque<FilmItem>> = HashMap::new();
        for item in self.items.drain(..) {
            mounted.entry(item.key()).or_default().push_back(item);
        }

        let mut items = Vec::with_capacity(films.len());
        for film in films {
            let reused = mounted
                .get_mut(&film.episode_id)
                .and_then(VecDeque::pop_front);
            let item = match reused {
                Some(mut item) => {
                    item.update_film(film.clone());
                    item
                }
                None => FilmItem::mount(film.clone(), self.favorites.clone())?,
            };
            items.push(item);
        }

        self.items = items;
        Ok(())
    }
}

impl FetchStateConsumer for FilmList {
    fn render(&mut self, state: &FetchState) -> AppResult<View> {
        match state {
            FetchState::Failed(error) => {
                self.items.clear();
                Ok(View::Error {
                    message: error.message.clone(),
                })
            }
            FetchState::Pending => {
                self.items.clear();
                Ok(View::Loading)
            }
            FetchState::Succeeded(films) => {
                self.reconcile(films)?;
                Ok(View::Films {
                    items: self.items.iter().map(FilmItem::view).collect(),
                })
            }
        }
    }
}
