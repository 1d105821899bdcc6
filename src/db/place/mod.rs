pub mod get;
pub mod post;

pub use get::{get_all_places, get_places_by_ids};
pub use post::create_place;
