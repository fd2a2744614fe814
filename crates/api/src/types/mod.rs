//! Type definitions for Deliver queries.

pub mod field;
pub mod query;

pub use field::SystemField;
pub use query::QueryState;
