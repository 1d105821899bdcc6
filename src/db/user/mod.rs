pub mod get;
pub mod post;

pub use get::{get_user_by_id, get_users_by_ids};
pub use post::create_user;
