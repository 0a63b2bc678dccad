// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod favorite_service;
pub mod film_fetcher;


pub use favorite_service::FavoriteService;
pub use film_fetcher::FilmFetcher;
