// src/integrations/mod.rs
//
// External Integrations Module

pub mod swapi;

pub use swapi::client::{FilmSource, SwapiClient, DEFAULT_FILMS_URL};

#[cfg(test)]
pub use swapi::client::MockFilmSource;
