// src/application/commands/mod.rs
//
// Command Handlers
//
// ARCHITECTURE:
// - Commands are thin adapters between the terminal and services
// - Commands NEVER contain business logic

pub mod favorite_commands;
pub mod film_commands;

pub use favorite_commands::*;
pub use film_commands::*;
