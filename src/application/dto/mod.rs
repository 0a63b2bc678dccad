// src/application/dto/mod.rs
//
// Data Transfer Objects
//
// - DTOs are output-friendly representations for `--json`
// - Conversion FROM application state only (never TO)

use serde::{Deserialize, Serialize};

use crate::application::film_item::FilmItem;
use crate::domain::FetchState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilmDto {
    pub episode_id: i64,
    pub title: String,
    pub director: String,
    pub producer: String,
    pub release_date: String,
    pub is_favorite: bool,
}

impl From<&FilmItem> for FilmDto {
    fn from(item: &FilmItem) -> Self {
        let film = item.film();
        Self {
            episode_id: film.episode_id.0,
            title: film.title.clone(),
            director: film.director.clone(),
            producer: film.producer.clone(),
            release_date: film.release_date.clone(),
            is_favorite: item.is_favorite(),
        }
    }
}

/// `{error, is_loaded, films}` with each film's favorite flag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilmListDto {
    pub error: Option<String>,
    pub is_loaded: bool,
    pub films: Vec<FilmDto>,
}

impl FilmListDto {
    /// `items` must be the list rendered from `state`
    pub fn new(state: &FetchState, items: &[FilmItem]) -> Self {
        Self {
            error: state.error().map(|e| e.message.clone()),
            is_loaded: state.is_loaded(),
            films: items.iter().map(FilmDto::from).collect(),
        }
    }
}
