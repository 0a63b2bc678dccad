pub mod entity;
pub mod invariants;

pub use entity::{EpisodeId, Film};
pub use invariants::validate_film_list;
