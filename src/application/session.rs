// src/application/session.rs
//
// Interactive browsing session.
//
// Renders the list, re-renders on every fetch transition and reads one
// command per input line:
//   <episode id>  toggle that film's favorite
//   q             quit (tears down an in-flight fetch)

use std::io::Write;

use log::debug;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use super::film_list::{FetchStateConsumer, FilmList};
use crate::domain::EpisodeId;
use crate::error::{AppError, AppResult};
use crate::services::FilmFetcher;

const PROMPT: &str = "Enter an episode number to toggle its favorite, or q to quit.";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Toggle(EpisodeId),
    Quit,
    Skip,
    Unknown(String),
}

fn parse_command(line: &str) -> Command {
    let line = line.trim();
    if line.is_empty() {
        return Command::Skip;
    }
    if line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit") {
        return Command::Quit;
    }
    match line.parse::<i64>() {
        Ok(id) => Command::Toggle(EpisodeId(id)),
        Err(_) => Command::Unknown(line.to_string()),
    }
}

enum Event {
    Fetch(bool),
    Input(std::io::Result<Option<String>>),
}

fn draw<W: Write>(
    output: &mut W,
    list: &mut FilmList,
    fetcher: &mut FilmFetcher,
) -> AppResult<()> {
    let view = list.render(&fetcher.observe())?;
    writeln!(output, "{}", view)?;
    writeln!(output)?;
    writeln!(output, "{}", PROMPT)?;
    output.flush()?;
    Ok(())
}

/// Run until quit or end of input. The fetcher is torn down on exit.
pub async fn run_session<R, W>(
    input: R,
    output: &mut W,
    mut fetcher: FilmFetcher,
    list: &mut FilmList,
) -> AppResult<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    let mut fetch_open = true;

    let result = async {
        draw(output, list, &mut fetcher)?;

        loop {
            // Transitions are drawn before any pending input is handled
            let event = tokio::select! {
                biased;
                changed = fetcher.changed(), if fetch_open => Event::Fetch(changed),
                line = lines.next_line() => Event::Input(line),
            };

            match event {
                Event::Fetch(true) => draw(output, list, &mut fetcher)?,
                Event::Fetch(false) => fetch_open = false,
                Event::Input(line) => {
                    let Some(line) = line? else {
                        debug!("input closed, ending session");
                        break;
                    };
                    match parse_command(&line) {
                        Command::Quit => break,
                        Command::Skip => {}
                        Command::Toggle(id) => {
                            if !fetcher.state().is_loaded() {
                                writeln!(output, "Still loading, try again shortly.")?;
                            } else {
                                match list.toggle(id) {
                                    Ok(Some(_)) => draw(output, list, &mut fetcher)?,
                                    Ok(None) => writeln!(output, "No film with episode {}.", id)?,
                                    Err(e) => writeln!(
                                        output,
                                        "Could not save favorite for episode {}: {}",
                                        id, e
                                    )?,
                                }
                            }
                        }
                        Command::Unknown(text) => {
                            writeln!(output, "Unknown command '{}'. {}", text, PROMPT)?;
                        }
                    }
                }
            }
        }

        Ok::<(), AppError>(())
    }
    .await;

    fetcher.teardown().await;
    result
}
