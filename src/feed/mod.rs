pub mod aggregate;
pub mod filters;
pub mod scope;

pub use aggregate::aggregate_reviews;
pub use filters::{Filterable, apply_filters};
pub use scope::resolve_scope;
