//! Command implementations.

pub mod builder;
pub mod items;
pub mod query;

pub use items::run_items;
pub use query::run_query;
