// src/integrations/swapi/client.rs
//
// Films listing client
//
// ARCHITECTURE:
// - One GET against a fixed films endpoint
// - Maps the external payload to domain `Film` records
// - Every failure collapses into a `FetchError` carrying the message
//
// No timeout and no retry: a hung request stays pending until the
// caller cancels it.

use async_trait::async_trait;
use log::debug;
use reqwest::{header, Client};
use serde::Deserialize;

use crate::domain::{FetchError, Film};
use crate::error::{AppError, AppResult};

/// Default films listing endpoint
pub const DEFAULT_FILMS_URL: &str = "https://swapi.dev/api/films/";

/// Anything that can produce the films listing
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FilmSource: Send + Sync {
    async fn list_films(&self) -> Result<Vec<Film>, FetchError>;
}

/// Listing response wrapper; only `results` is read
#[derive(Debug, Deserialize)]
struct FilmsPage {
    results: Vec<Film>,
}

/// HTTP client for the films listing
pub struct SwapiClient {
    films_url: String,
    http_client: Client,
}

impl SwapiClient {
    pub fn new(films_url: impl Into<String>) -> AppResult<Self> {
        let http_client = Client::builder()
            .user_agent(concat!("filmhub/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AppError::Other(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            films_url: films_url.into(),
            http_client,
        })
    }

    pub fn films_url(&self) -> &str {
        &self.films_url
    }
}

#[async_trait]
impl FilmSource for SwapiClient {
    async fn list_films(&self) -> Result<Vec<Film>, FetchError> {
        debug!("GET {}", self.films_url);

        let response = self
            .http_client
            .get(&self.films_url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| FetchError::new(e.to_string()))?;

        if !response.status().is_success() {
            return Err(FetchError::new(format!(
                "API returned status: {}",
                response.status()
            )));
        }

        let page: FilmsPage = response
            .json()
            .await
            .map_err(|e| FetchError::new(e.to_string()))?;

        debug!("received {} films", page.results.len());
        Ok(page.results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::EpisodeId;
    use httpmock::prelude::*;
    use serde_json::json;

    #[test]
    fn test_client_creation() {
        let client = SwapiClient::new(DEFAULT_FILMS_URL).unwrap();
        assert_eq!(client.films_url(), "https://swapi.dev/api/films/");
    }

    #[tokio::test]
    async fn test_list_films_keeps_response_order() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET).path("/api/films/");
            then.status(200).json_body(json!({
                "count": 2,
                "next": null,
                "results": [
                    {
                        "episode_id": 5,
                        "title": "The Empire Strikes Back",
                        "director": "Irvin Kershner",
                        "producer": "Gary Kurtz, Rick McCallum",
                        "release_date": "1980-05-17",
                        "url": "https://swapi.dev/api/films/2/"
                    },
                    {
                        "episode_id": 4,
                        "title": "A New Hope",
                        "director": "George Lucas",
                        "producer": "Gary Kurtz, Rick McCallum",
                        "release_date": "1977-05-25"
                    }
                ]
            }));
        });

        let client = SwapiClient::new(server.url("/api/films/")).unwrap();
        let films = client.list_films().await.unwrap();

        mock.assert_async().await;
        let ids: Vec<EpisodeId> = films.iter().map(|f| f.episode_id).collect();
        assert_eq!(ids, vec![EpisodeId(5), EpisodeId(4)]);
        assert_eq!(films[0].director, "Irvin Kershner");
    }

    #[tokio::test]
    async fn test_error_status_is_fetch_failure() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/films/");
            then.status(503);
        });

        let client = SwapiClient::new(server.url("/api/films/")).unwrap();
        let err = client.list_films().await.unwrap_err();
        assert!(err.message.contains("503"), "got: {}", err.message);
    }

    #[tokio::test]
    async fn test_malformed_body_is_fetch_failure() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/films/");
            then.status(200).body("<html>not json</html>");
        });

        let client = SwapiClient::new(server.url("/api/films/")).unwrap();
        assert!(client.list_films().await.is_err());
    }

    #[tokio::test]
    async fn test_missing_results_is_fetch_failure() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/films/");
            then.status(200).json_body(json!({ "detail": "Not found" }));
        });

        let client = SwapiClient::new(server.url("/api/films/")).unwrap();
        assert!(client.list_films().await.is_err());
    }

    #[tokio::test]
    async fn test_unreachable_host_is_fetch_failure() {
        // Port 9 (discard) is not served by anything in the test environment
        let client = SwapiClient::new("http://127.0.0.1:9/api/films/").unwrap();
        let err = client.list_films().await.unwrap_err();
        assert!(!err.message.is_empty());
    }
}
