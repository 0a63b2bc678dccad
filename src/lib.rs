// src/lib.rs
// FilmHub - film list browser with locally persisted favorites
//
// Architecture:
// - Domain: film records, fetch lifecycle, favorite flag encoding
// - Repositories: dumb favorite stores (SQLite, in-memory)
// - Services: favorite rules and the single-shot films fetcher
// - Integrations: films listing HTTP client
// - Application: rendering, interactive session, commands

pub mod db;
pub mod domain;
pub mod error;
pub mod repositories;
pub mod services;

pub mod application;
pub mod integrations;

// ============================================================================
// PUBLIC API - Domain
// ============================================================================

pub use domain::{
    decode_favorite, encode_favorite, validate_film_list, EpisodeId, FetchError, FetchSnapshot,
    FetchState, Film,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Database
// ============================================================================

pub use db::{create_connection_pool, initialize_database, ConnectionPool};

// ============================================================================
// PUBLIC API - Repositories
// ============================================================================

pub use repositories::{FavoriteRepository, InMemoryFavoriteRepository, SqliteFavoriteRepository};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{FavoriteService, FilmFetcher};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::{
    AppConfig, AppState, ErrorReport, FavoriteIcon, FetchStateConsumer, FilmItem, FilmList,
    FilmView, View,
};

pub use application::commands;
pub use application::dto;

// ============================================================================
// PUBLIC API - Integrations
// ============================================================================

pub use integrations::{FilmSource, SwapiClient, DEFAULT_FILMS_URL};
