use serde::{Deserialize, Serialize};
use std::fmt;

/// Episode number of a film.
/// Unique within a listing; doubles as the list key and the favorites key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EpisodeId(pub i64);

impl EpisodeId {
    /// Key under which the favorite flag is persisted
    pub fn storage_key(&self) -> String {
        self.0.to_string()
    }
}

impl fmt::Display for EpisodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for EpisodeId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// A single film as returned by the films listing.
/// Records are immutable once fetched; a new fetch replaces them wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Film {
    pub episode_id: EpisodeId,
    pub title: String,
    pub director: String,
    pub producer: String,
    /// Opaque display string, never parsed
    pub release_date: String,
}

impl Film {
    pub fn new(
        episode_id: i64,
        title: impl Into<String>,
        director: impl Into<String>,
        producer: impl Into<String>,
        release_date: impl Into<String>,
    ) -> Self {
        Self {
            episode_id: EpisodeId(episode_id),
            title: title.into(),
            director: director.into(),
            producer: producer.into(),
            release_date: release_date.into(),
        }
    }

    /// "Episode 4: A New Hope"
    pub fn heading(&self) -> String {
        format!("Episode {}: {}", self.episode_id, self.title)
    }
}
