// src/services/film_fetcher.rs
//
// Data fetcher for the films listing.
//
// - `activate` issues exactly one request for the fetcher's lifetime
// - state is published through a watch channel; every transition wakes consumers
// - teardown (explicit or by drop) cancels the request; a late response is discarded

use std::sync::Arc;

use log::{debug, info, warn};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::domain::{validate_film_list, FetchSnapshot, FetchState};
use crate::integrations::FilmSource;

pub struct FilmFetcher {
    state_rx: watch::Receiver<FetchState>,
    cancel: CancellationToken,
    task: Option<JoinHandle<()>>,
}

impl FilmFetcher {
    /// Start the single fetch. Must be called inside a tokio runtime.
    pub fn activate(source: Arc<dyn FilmSource>) -> Self {
        let (state_tx, state_rx) = watch::channel(FetchState::Pending);
        let cancel = CancellationToken::new();
        let token = cancel.clone();

        let task = tokio::spawn(async move {
            let result = tokio::select! {
                biased;
                _ = token.cancelled() => {
                    debug!("films fetch cancelled before completion");
                    return;
                }
                result = source.list_films() => result,
            };

            if token.is_cancelled() {
                debug!("discarding films response that arrived after teardown");
                return;
            }

            match &result {
                Ok(films) => {
                    info!("loaded {} films", films.len());
                    for id in validate_film_list(films) {
                        warn!("episode {} appears more than once in the listing", id);
                    }
                }
                Err(error) => warn!("films fetch failed: {}", error),
            }

            let next = FetchState::from(result);
            state_tx.send_if_modified(move |state| {
                if state.is_loaded() {
                    return false;
                }
                *state = next;
                true
            });
        });

        Self {
            state_rx,
            cancel,
            task: Some(task),
        }
    }

    pub fn state(&self) -> FetchState {
        self.state_rx.borrow().clone()
    }

    /// Current state, marked as seen: `changed` then waits for a later transition
    pub fn observe(&mut self) -> FetchState {
        self.state_rx.borrow_and_update().clone()
    }

    /// `{error, is_loaded, films}` record of the current state
    pub fn snapshot(&self) -> FetchSnapshot {
        self.state_rx.borrow().snapshot()
    }

    /// Independent receiver for consumers that re-render on transitions
    pub fn subscribe(&self) -> watch::Receiver<FetchState> {
        self.state_rx.clone()
    }

    /// Wait for the next transition. Returns false once no transition can follow.
    pub async fn changed(&mut self) -> bool {
        self.state_rx.changed().await.is_ok()
    }

    /// Wait until the fetch has failed or succeeded.
    ///
    /// If the fetch was cancelled this returns the (still pending) state.
    pub async fn settled(&mut self) -> FetchState {
        let settled = self
            .state_rx
            .wait_for(FetchState::is_loaded)
            .await
            .map(|state| state.clone());
        settled.unwrap_or_else(|_| self.state())
    }

    /// Cancel the request and wait for the fetch task to stop.
    pub async fn teardown(mut self) {
        self.cancel.cancel();
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                warn!("films fetch task ended abnormally: {}", e);
            }
        }
    }
}

impl Drop for FilmFetcher {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
