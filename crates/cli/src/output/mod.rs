//! Output formatting for CLI results.

pub mod detail;
pub mod table;

pub use detail::format_query_detail;
pub use table::format_items_table;
