// src/domain/fetch.rs
//
// Fetch lifecycle for the films listing.
//
// Pending moves exactly once to Failed or Succeeded and never back.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::film::Film;

/// The one failure kind of a fetch: network, status and decoding
/// failures all collapse into this, carrying the underlying message.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct FetchError {
    pub message: String,
}

impl FetchError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Tagged state of one fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchState {
    Pending,
    Failed(FetchError),
    Succeeded(Vec<Film>),
}

/// Flat `{error, is_loaded, films}` view of a [`FetchState`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FetchSnapshot {
    pub error: Option<String>,
    pub is_loaded: bool,
    pub films: Vec<Film>,
}

impl FetchState {
    pub fn is_loaded(&self) -> bool {
        !matches!(self, FetchState::Pending)
    }

    pub fn error(&self) -> Option<&FetchError> {
        match self {
            FetchState::Failed(error) => Some(error),
            _ => None,
        }
    }

    /// Films of a successful fetch; empty otherwise
    pub fn films(&self) -> &[Film] {
        match self {
            FetchState::Succeeded(films) => films,
            _ => &[],
        }
    }

    pub fn snapshot(&self) -> FetchSnapshot {
        FetchSnapshot {
            error: self.error().map(|e| e.message.clone()),
            is_loaded: self.is_loaded(),
            films: self.films().to_vec(),
        }
    }
}

impl From<Result<Vec<Film>, FetchError>> for FetchState {
    fn from(result: Result<Vec<Film>, FetchError>) -> Self {
        match result {
            Ok(films) => FetchState::Succeeded(films),
            Err(error) => FetchState::Failed(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_snapshot() {
        let snapshot = FetchState::Pending.snapshot();
        assert_eq!(snapshot.error, None);
        assert!(!snapshot.is_loaded);
        assert!(snapshot.films.is_empty());
    }

    #[test]
    fn test_failed_snapshot_has_no_films() {
        let snapshot = FetchState::Failed(FetchError::new("Network Error")).snapshot();
        assert_eq!(snapshot.error.as_deref(), Some("Network Error"));
        assert!(snapshot.is_loaded);
        assert!(snapshot.films.is_empty());
    }

    #[test]
    fn test_succeeded_snapshot_keeps_order() {
        let films = vec![
            Film::new(4, "A New Hope", "G. Lucas", "G. Lucas", "1977-05-25"),
            Film::new(2, "Attack of the Clones", "G. Lucas", "R. McCallum", "2002-05-16"),
        ];
        let snapshot = FetchState::from(Ok(films.clone())).snapshot();
        assert_eq!(snapshot.error, None);
        assert!(snapshot.is_loaded);
        assert_eq!(snapshot.films, films);
    }

    #[test]
    fn test_error_display_is_verbatim() {
        assert_eq!(FetchError::new("Network Error").to_string(), "Network Error");
    }
}
