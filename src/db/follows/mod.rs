pub mod delete;
pub mod get;
pub mod post;

pub use delete::delete_follow;
pub use get::get_scope_edges;
pub use post::create_follow;
