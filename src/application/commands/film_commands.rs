// src/application/commands/film_commands.rs
//
// Film listing commands
//
// RULES:
// - Call services and renderers
// - Return printable output
// - Never contain business logic

use std::io::Write;

use tokio::io::AsyncBufRead;

use crate::application::dto::FilmListDto;
use crate::application::film_list::{FetchStateConsumer, FilmList};
use crate::application::session::run_session;
use crate::application::state::AppState;
use crate::domain::FetchState;
use crate::error::{AppError, AppResult};
use crate::services::FilmFetcher;

/// Fetch once, wait for the result and render it.
/// A failed fetch is returned as `AppError::Fetch`.
pub async fn list_films(state: &AppState, json: bool) -> AppResult<String> {
    let mut fetcher = FilmFetcher::activate(state.film_source.clone());
    let fetched = fetcher.settled().await;

    if let FetchState::Failed(error) = fetched {
        return Err(AppError::Fetch(error));
    }

    let mut list = FilmList::new(state.favorite_service.clone());
    let view = list.render(&fetched)?;

    if json {
        Ok(serde_json::to_string_pretty(&FilmListDto::new(
            &fetched,
            list.items(),
        ))?)
    } else {
        Ok(view.to_string())
    }
}

/// Interactive session over `input` / `output`
pub async fn browse<R, W>(state: &AppState, input: R, output: &mut W) -> AppResult<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let fetcher = FilmFetcher::activate(state.film_source.clone());
    let mut list = FilmList::new(state.favorite_service.clone());
    run_session(input, output, fetcher, &mut list).await
}
