// src/repositories/mod.rs
//
// Repository layer
//
// CRITICAL RULES:
// - Repositories are DUMB data mappers
// - NO business logic (flag auto-creation lives in FavoriteService)
// - Explicit SQL only

pub mod favorite_repository;

pub use favorite_repository::{
    FavoriteRepository, InMemoryFavoriteRepository, SqliteFavoriteRepository,
};

#[cfg(test)]
pub use favorite_repository::MockFavoriteRepository;
