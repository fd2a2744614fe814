//! Filter processors for Deliver queries.
//!
//! Each processor turns one typed filter into a query fragment of the form
//! `&system.<field><suffix>=<value>`:
//!
//! - **[`processors`]** - one function per system field plus the published
//!   flag validator
//! - **[`operator`]** - operator aliases (`lt`, `lessThan`, ...) and their
//!   bracketed suffixes
//! - **[`combine_fragments`]** - joins staged fragments into the query text
//!
//! [`DeliverClient`](crate::DeliverClient) calls these for every filter method;
//! they are public so a query can be assembled or checked without a client.
//!
//! ```
//! use kentico_deliver_api::filters::{combine_fragments, processors};
//!
//! let fragments = vec![
//!     processors::content_type("drinks", None)?,
//!     processors::id("42", Some("gt"))?,
//! ];
//! assert_eq!(combine_fragments(&fragments), "&system.type=drinks&system.id[gt]=42");
//! # Ok::<(), kentico_deliver_api::ApiError>(())
//! ```

pub mod operator;
pub mod processors;

pub use operator::{parse_operator, Operator};

/// Concatenate fragments in order. Each fragment carries its own leading `&`.
pub fn combine_fragments<S: AsRef<str>>(fragments: &[S]) -> String {
    let mut query = String::new();
    for fragment in fragments {
        query.push_str(fragment.as_ref());
    }
    query
}
