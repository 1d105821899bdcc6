pub mod get;
pub mod post;

pub use get::{get_community_reviews, get_reviews_by_authors};
pub use post::create_review;
