//! Accumulated query state.

use serde::Serialize;

/// Filter state staged on a [`DeliverClient`](crate::DeliverClient).
///
/// `fragments` keeps call order; `query_text` is only filled in by a terminal
/// call, which also hands this record back from
/// [`execute_debug`](crate::DeliverClient::execute_debug).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryState {
    /// Rendered filter fragments, each starting with `&`.
    pub fragments: Vec<String>,
    /// Query published (`true`) or preview (`false`) content.
    pub published: bool,
    /// Concatenated fragments.
    pub query_text: String,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            fragments: Vec::new(),
            published: true,
            query_text: String::new(),
        }
    }
}

impl QueryState {
    /// True when no filter has been staged.
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}
