pub mod feed;
pub mod follow;
pub mod place;
pub mod review;
pub mod user;

pub use feed::get_feed_handler;
pub use follow::{follow_user_handler, unfollow_user_handler};
pub use place::{create_place_handler, get_places_handler};
pub use review::create_review_handler;
pub use user::{create_user_handler, get_user_handler};
