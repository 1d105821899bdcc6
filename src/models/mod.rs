pub mod feed;
pub mod follow;
pub mod place;
pub mod review;
pub mod user;

pub use follow::FollowEdge;
pub use place::Place;
pub use review::Review;
pub use user::User;
