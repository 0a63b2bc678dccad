// src/main.rs

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use log::debug;
use tokio::io::BufReader;

use filmhub::application::commands::{browse, list_films, list_favorites, toggle_favorite};
use filmhub::{AppConfig, AppError, AppState, EpisodeId, ErrorReport, DEFAULT_FILMS_URL};

/// FilmHub - browse the films listing and keep local favorites
#[derive(Parser)]
#[command(name = "filmhub")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Films listing endpoint
    #[arg(long, global = true, env = "FILMHUB_API_URL", default_value = DEFAULT_FILMS_URL)]
    api_url: String,

    /// Directory for the favorites database (default: platform data dir)
    #[arg(long, global = true, env = "FILMHUB_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Keep favorites in memory only
    #[arg(long, global = true)]
    ephemeral: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse films interactively and toggle favorites (default)
    Browse,

    /// Print the films listing once
    List {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Toggle the favorite flag of one episode
    Toggle {
        /// Episode number
        episode_id: i64,
    },

    /// Print the favorite episode numbers
    Favorites {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!("{:?}", e);
            match e.downcast_ref::<AppError>() {
                Some(app_error) => {
                    let report = ErrorReport::from_app_error(app_error);
                    eprintln!("{}", report);
                    ExitCode::from(report.exit_code())
                }
                None => {
                    eprintln!("Error: {:#}", e);
                    ExitCode::FAILURE
                }
            }
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    // 1. CONFIGURATION
    let config = AppConfig::new(Some(cli.api_url), cli.data_dir, cli.ephemeral)
        .context("resolving configuration")?;
    debug!("{:?}", config);

    // 2. APPLICATION STATE
    let state = AppState::from_config(&config).context("initializing favorites store")?;

    // 3. COMMAND
    match cli.command.unwrap_or(Commands::Browse) {
        Commands::Browse => {
            let input = BufReader::new(tokio::io::stdin());
            browse(&state, input, &mut std::io::stdout()).await?;
        }
        Commands::List { json } => println!("{}", list_films(&state, json).await?),
        Commands::Toggle { episode_id } => {
            println!("{}", toggle_favorite(&state, EpisodeId(episode_id))?)
        }
        Commands::Favorites { json } => println!("{}", list_favorites(&state, json)?),
    }

    Ok(())
}
