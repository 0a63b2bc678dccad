// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - Boundary between the terminal and the services
// - Owns rendering: fetch state -> views -> text
// - Translates application state into DTOs for JSON output

pub mod commands;
pub mod config;
pub mod dto;
pub mod error_handling;
pub mod film_item;
pub mod film_list;
pub mod session;
pub mod state;
pub mod view;

pub use config::AppConfig;
pub use error_handling::{ErrorReport, ErrorType};
pub use film_item::FilmItem;
pub use film_list::{FetchStateConsumer, FilmList};
pub use session::run_session;
pub use state::AppState;
pub use view::{FavoriteIcon, FilmView, View};
