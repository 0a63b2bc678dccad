// src/application/view.rs
//
// Rendered output of the film list.
// Views are plain data; `Display` turns them into terminal text.

use std::fmt;

use crate::domain::EpisodeId;

/// Icon of the favorite toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteIcon {
    Filled,
    Outlined,
}

impl FavoriteIcon {
    pub fn for_flag(is_favorite: bool) -> Self {
        if is_favorite {
            FavoriteIcon::Filled
        } else {
            FavoriteIcon::Outlined
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            FavoriteIcon::Filled => "♥",
            FavoriteIcon::Outlined => "♡",
        }
    }
}

/// One film row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilmView {
    pub key: EpisodeId,
    pub heading: String,
    pub director: String,
    pub producer: String,
    pub release_date: String,
    pub icon: FavoriteIcon,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Error { message: String },
    Loading,
    Films { items: Vec<FilmView> },
}

impl View {
    /// Item rows; empty for the error and loading views
    pub fn items(&self) -> &[FilmView] {
        match self {
            View::Films { items } => items,
            _ => &[],
        }
    }
}

impl fmt::Display for FilmView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Title: {}", self.heading)?;
        writeln!(f, "Director: {}", self.director)?;
        writeln!(f, "Producer: {}", self.producer)?;
        writeln!(f, "Release Date: {}", self.release_date)?;
        write!(f, "Favorite: {}", self.icon.glyph())
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            View::Error { message } => write!(f, "Error: {}", message),
            View::Loading => write!(f, "Loading..."),
            View::Films { items } => {
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        writeln!(f)?;
                        writeln!(f)?;
                    }
                    write!(f, "{}", item)?;
                }
                Ok(())
            }
        }
    }
}
