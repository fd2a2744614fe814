//! Kentico Cloud Deliver API client
//!
//! This crate provides a fluent query builder for the Deliver content API.
//! Filters on system fields are chained onto a [`DeliverClient`], rendered into
//! a query string and sent as a single GET request to either the published or
//! the preview endpoint.
//!
//! # Example
//!
//! ```no_run
//! use kentico_deliver_api::DeliverClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), kentico_deliver_api::ApiError> {
//!     // Published content only
//!     let mut client = DeliverClient::new("975bf280-fd91-488c-994c-2f04416e5ee3")?;
//!     let drinks = client.content_type("drinks", None)?.execute().await?;
//!
//!     // Preview content needs a preview API key
//!     let mut preview = DeliverClient::with_preview_key(
//!         "975bf280-fd91-488c-994c-2f04416e5ee3",
//!         "ew0KICAiYWxnIjo...",
//!     )?;
//!     let drafts = preview
//!         .set_published(false)?
//!         .sitemap_location("About Us", Some("contains"))?
//!         .execute()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Inspecting a query
//!
//! [`DeliverClient::execute_debug`] returns the assembled [`QueryState`]
//! instead of sending it:
//!
//! ```
//! use kentico_deliver_api::DeliverClient;
//!
//! let mut client = DeliverClient::new("123")?;
//! let query = client
//!     .content_type("drinks", None)?
//!     .id("42", Some("gt"))?
//!     .execute_debug();
//!
//! assert_eq!(query.query_text, "&system.type=drinks&system.id[gt]=42");
//! assert!(query.published);
//! # Ok::<(), kentico_deliver_api::ApiError>(())
//! ```
//!
//! # Error Handling
//!
//! All errors are unified through [`ApiError`]. Configuration, validation and
//! operator errors are returned by the call that caused them; transport and
//! parse errors come from the future returned by [`DeliverClient::execute`].
//! Use [`ApiError::is_transport()`] to tell the two groups apart.

pub mod client;
pub mod error;
pub mod filters;
pub mod types;

// Re-export main types at crate root
pub use client::{ClientConfig, DeliverClient, DEFAULT_PREVIEW_URL, DEFAULT_PUBLISHED_URL};
pub use error::{ApiError, Result};
pub use filters::{combine_fragments, parse_operator, Operator};
pub use types::{QueryState, SystemField};
