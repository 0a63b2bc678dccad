// src/repositories/favorite_repository.rs

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use rusqlite::{params, OptionalExtension};

use crate::db::{get_connection, ConnectionPool};
use crate::domain::{decode_favorite, encode_favorite, EpisodeId};
use crate::error::{AppError, AppResult};

// ---------------------------------------------------------------------
// Repository contract
// ---------------------------------------------------------------------
#[cfg_attr(test, mockall::automock)]
pub trait FavoriteRepository: Send + Sync {
    /// Stored flag, or `None` when no entry exists for `episode_id`
    fn get(&self, episode_id: EpisodeId) -> AppResult<Option<bool>>;

    /// Insert or overwrite the flag for `episode_id`
    fn set(&self, episode_id: EpisodeId, is_favorite: bool) -> AppResult<()>;

    /// Every stored entry, ordered by episode id
    fn list_all(&self) -> AppResult<Vec<(EpisodeId, bool)>>;
}

// ---------------------------------------------------------------------
// SQLite Implementation
// ---------------------------------------------------------------------
pub struct SqliteFavoriteRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteFavoriteRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }
}

impl FavoriteRepository for SqliteFavoriteRepository {
    fn get(&self, episode_id: EpisodeId) -> AppResult<Option<bool>> {
        let conn = get_connection(&self.pool)?;

        let stored: Option<String> = conn
            .query_row(
                "SELECT value FROM favorites WHERE episode_key = ?1",
                params![episode_id.storage_key()],
                |row| row.get(0),
            )
            .optional()?;

        Ok(stored.as_deref().and_then(decode_favorite))
    }

    fn set(&self, episode_id: EpisodeId, is_favorite: bool) -> AppResult<()> {
        let conn = get_connection(&self.pool)?;

        conn.execute(
            "INSERT OR REPLACE INTO favorites (episode_key, value) VALUES (?1, ?2)",
            params![episode_id.storage_key(), encode_favorite(is_favorite)],
        )?;

        Ok(())
    }

    fn list_all(&self) -> AppResult<Vec<(EpisodeId, bool)>> {
        let conn = get_connection(&self.pool)?;

        let mut stmt = conn.prepare("SELECT episode_key, value FROM favorites")?;
        let rows = stmt
            .query_map([], |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        // Keys are text in storage; order numerically here
        let mut entries = Vec::with_capacity(rows.len());
        for (key, value) in rows {
            let id = key
                .parse::<i64>()
                .map(EpisodeId)
                .map_err(|e| AppError::Other(format!("Invalid favorite key '{}': {}", key, e)))?;
            if let Some(flag) = decode_favorite(&value) {
                entries.push((id, flag));
            }
        }
        entries.sort_by_key(|(id, _)| *id);

        Ok(entries)
    }
}

// ---------------------------------------------------------------------
// In-memory Implementation
// ---------------------------------------------------------------------
/// Process-local store; nothing survives a restart.
#[derive(Default)]
pub struct InMemoryFavoriteRepository {
    entries: RwLock<BTreeMap<EpisodeId, bool>>,
}

impl InMemoryFavoriteRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FavoriteRepository for InMemoryFavoriteRepository {
    fn get(&self, episode_id: EpisodeId) -> AppResult<Option<bool>> {
        let entries = self
            .entries
            .read()
            .map_err(|_| AppError::Other("favorites lock poisoned".to_string()))?;
        Ok(entries.get(&episode_id).copied())
    }

    fn set(&self, episode_id: EpisodeId, is_favorite: bool) -> AppResult<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| AppError::Other("favorites lock poisoned".to_string()))?;
        entries.insert(episode_id, is_favorite);
        Ok(())
    }

    fn list_all(&self) -> AppResult<Vec<(EpisodeId, bool)>> {
        let entries = self
            .entries
            .read()
            .map_err(|_| AppError::Other("favorites lock poisoned".to_string()))?;
        Ok(entries.iter().map(|(id, flag)| (*id, *flag)).collect())
    }
}
