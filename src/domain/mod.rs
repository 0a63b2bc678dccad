// src/domain/mod.rs
//
// Domain Root
//
// All other modules import domain types from `crate::domain::*`

pub mod favorite;
pub mod fetch;
pub mod film;

pub use favorite::{decode_favorite, encode_favorite};
pub use fetch::{FetchError, FetchSnapshot, FetchState};
pub use film::{validate_film_list, EpisodeId, Film};
