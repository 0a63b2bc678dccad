// src/application/state.rs

use std::sync::Arc;

use log::info;

use super::config::AppConfig;
use crate::db::{create_connection_pool, create_memory_pool, get_connection, initialize_database};
use crate::error::AppResult;
use crate::integrations::{FilmSource, SwapiClient};
use crate::repositories::{
    FavoriteRepository, InMemoryFavoriteRepository, SqliteFavoriteRepository,
};
use crate::services::FavoriteService;

/// Shared handles for the commands.
pub struct AppState {
    pub film_source: Arc<dyn FilmSource>,
    pub favorite_service: Arc<FavoriteService>,
}

impl AppState {
    /// Wire infrastructure, repositories and services from `config`
    pub fn from_config(config: &AppConfig) -> AppResult<Self> {
        // 1. INFRASTRUCTURE
        let favorite_repo: Arc<dyn FavoriteRepository> = if config.ephemeral {
            info!("favorites kept in memory for this session");
            Arc::new(InMemoryFavoriteRepository::new())
        } else {
            let db_path = config.database_path()?;
            info!("favorites database: {}", db_path.display());
            let pool = Arc::new(create_connection_pool(&db_path)?);
            let conn = get_connection(&pool)?;
            initialize_database(&conn)?;
            Arc::new(SqliteFavoriteRepository::new(pool))
        };
        let film_source: Arc<dyn FilmSource> = Arc::new(SwapiClient::new(config.api_url.clone())?);

        // 2. SERVICES
        let favorite_service = Arc::new(FavoriteService::new(favorite_repo));

        Ok(Self {
            film_source,
            favorite_service,
        })
    }

    /// State over explicit parts (tests, embedding)
    pub fn new(
        film_source: Arc<dyn FilmSource>,
        favorite_repo: Arc<dyn FavoriteRepository>,
    ) -> Self {
        Self {
            film_source,
            favorite_service: Arc::new(FavoriteService::new(favorite_repo)),
        }
    }

    /// In-memory SQLite store; behaves like the on-disk store minus durability
    pub fn with_memory_database(film_source: Arc<dyn FilmSource>) -> AppResult<Self> {
        let pool = Arc::new(create_memory_pool()?);
        {
            let conn = get_connection(&pool)?;
            initialize_database(&conn)?;
        }
        Ok(Self::new(film_source, Arc::new(SqliteFavoriteRepository::new(pool))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    use crate::domain::EpisodeId;
    use crate::integrations::MockFilmSource;

    fn config(data_dir: PathBuf) -> AppConfig {
        AppConfig::new(None, Some(data_dir), false).unwrap()
    }

    #[test]
    fn test_memory_database_is_initialized() {
        let state = AppState::with_memory_database(Arc::new(MockFilmSource::new())).unwrap();

        assert!(!state.favorite_service.read_or_init(EpisodeId(4)).unwrap());
        assert!(state.favorite_service.toggle(EpisodeId(4), false).unwrap());
        assert_eq!(state.favorite_service.list_favorites().unwrap(), vec![EpisodeId(4)]);
    }

    #[test]
    fn test_file_database_persists_across_states() {
        let dir = tempfile::tempdir().unwrap();

        let state = AppState::from_config(&config(dir.path().to_path_buf())).unwrap();
        state.favorite_service.toggle(EpisodeId(6), false).unwrap();
        drop(state);

        let reopened = AppState::from_config(&config(dir.path().to_path_buf())).unwrap();
        assert!(reopened.favorite_service.read_or_init(EpisodeId(6)).unwrap());
    }
}
