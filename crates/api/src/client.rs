//! Deliver API client and chainable query builder.

use std::fmt;
use std::future::Future;

use chrono::{DateTime, Utc};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::{debug, trace, warn};
use url::Url;

use crate::error::{ApiError, Result};
use crate::filters::combine_fragments;
use crate::filters::processors::{self, validate_published};
use crate::types::{QueryState, SystemField};

/// Default endpoint for published content.
pub const DEFAULT_PUBLISHED_URL: &str = "https://deliver.kenticocloud.com";

/// Default endpoint for preview (unpublished) content.
pub const DEFAULT_PREVIEW_URL: &str = "https://preview-deliver.kenticocloud.com";

const ITEMS_ENDPOINT: &str = "items";

/// Configuration for a [`DeliverClient`].
///
/// Validated once by [`DeliverClient::with_config`] and never changed after.
#[derive(Clone)]
pub struct ClientConfig {
    /// Kentico Cloud project id.
    pub project_id: String,
    /// Preview API key, required for unpublished content.
    pub preview_key: Option<String>,
    /// Base URL for published content.
    pub published_url: String,
    /// Base URL for preview content.
    pub preview_url: String,
}

impl ClientConfig {
    /// Create a configuration for a project using the default endpoints.
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            preview_key: None,
            published_url: DEFAULT_PUBLISHED_URL.to_string(),
            preview_url: DEFAULT_PREVIEW_URL.to_string(),
        }
    }

    /// Set the preview API key.
    pub fn with_preview_key(mut self, preview_key: impl Into<String>) -> Self {
        self.preview_key = Some(preview_key.into());
        self
    }

    /// Set a custom published content endpoint.
    pub fn with_published_url(mut self, url: impl Into<String>) -> Self {
        self.published_url = url.into();
        self
    }

    /// Set a custom preview content endpoint.
    pub fn with_preview_url(mut self, url: impl Into<String>) -> Self {
        self.preview_url = url.into();
        self
    }

    fn validate(&self) -> Result<(Url, Url)> {
        let project_id = self.project_id.trim();
        if project_id.is_empty() {
            return Err(ApiError::Config(
                "DeliverClient must be instantiated with a Project ID".to_string(),
            ));
        }
        if self
            .project_id
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '/' | '?' | '#'))
        {
            return Err(ApiError::Config(format!(
                "Project ID '{}' contains characters not allowed in a URL path segment",
                self.project_id
            )));
        }
        let dots = project_id.to_ascii_lowercase().replace("%2e", ".");
        if dots == "." || dots == ".." {
            return Err(ApiError::Config(format!(
                "Project ID '{}' is not a valid URL path segment",
                self.project_id
            )));
        }
        if self.preview_key.as_deref().is_some_and(str::is_empty) {
            return Err(ApiError::Config("Preview API Key must not be empty".to_string()));
        }

        Ok((
            parse_base_url("published", &self.published_url)?,
            parse_base_url("preview", &self.preview_url)?,
        ))
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("project_id", &self.project_id)
            .field("preview_key", &self.preview_key.as_ref().map(|_| "<redacted>"))
            .field("published_url", &self.published_url)
            .field("preview_url", &self.preview_url)
            .finish()
    }
}

fn parse_base_url(kind: &str, value: &str) -> Result<Url> {
    let url = Url::parse(value)
        .map_err(|e| ApiError::Config(format!("Invalid {} URL '{}': {}", kind, value, e)))?;

    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        return Err(ApiError::Config(format!(
            "Invalid {} URL '{}': expected an absolute http(s) URL",
            kind, value
        )));
    }

    Ok(url)
}

/// Chainable query builder for the Deliver `items` endpoint.
///
/// Filter methods validate their input immediately and stage a fragment;
/// [`execute`](Self::execute) sends one GET request and
/// [`execute_debug`](Self::execute_debug) returns the assembled query instead.
/// Both terminal calls reset the staged state, so one client can run any
/// number of queries in sequence.
///
/// # Example
///
/// ```no_run
/// use kentico_deliver_api::DeliverClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), kentico_deliver_api::ApiError> {
///     let mut client = DeliverClient::new("975bf280-fd91-488c-994c-2f04416e5ee3")?;
///
///     let items = client
///         .content_type("article", None)?
///         .last_modified_str("2017-01-01", Some("gte"))?
///         .execute()
///         .await?;
///
///     println!("{}", items["items"]);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct DeliverClient {
    http_client: Client,
    config: ClientConfig,
    published_url: Url,
    preview_url: Url,
    query: QueryState,
}

impl DeliverClient {
    /// Create a client for published content of a project.
    pub fn new(project_id: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig::new(project_id))
    }

    /// Create a client that can also read unpublished content.
    pub fn with_preview_key(
        project_id: impl Into<String>,
        preview_key: impl Into<String>,
    ) -> Result<Self> {
        Self::with_config(ClientConfig::new(project_id).with_preview_key(preview_key))
    }

    /// Create a client from a full configuration.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let (published_url, preview_url) = config.validate()?;
        Ok(Self {
            http_client: Client::new(),
            config,
            published_url,
            preview_url,
            query: QueryState::default(),
        })
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Filters staged since the last terminal call.
    pub fn staged(&self) -> &QueryState {
        &self.query
    }

    fn push(&mut self, fragment: String) -> &mut Self {
        debug!(fragment = %fragment, "staged filter");
        self.query.fragments.push(fragment);
        self
    }

    /// Filter by `system.id`.
    pub fn id(&mut self, id: &str, operator: Option<&str>) -> Result<&mut Self> {
        let fragment = processors::id(id, operator)?;
        Ok(self.push(fragment))
    }

    /// Filter by `system.name`.
    pub fn name(&mut self, name: &str, operator: Option<&str>) -> Result<&mut Self> {
        let fragment = processors::name(name, operator)?;
        Ok(self.push(fragment))
    }

    /// Filter by `system.codename`.
    pub fn code_name(&mut self, code_name: &str, operator: Option<&str>) -> Result<&mut Self> {
        let fragment = processors::code_name(code_name, operator)?;
        Ok(self.push(fragment))
    }

    /// Filter by `system.type`.
    pub fn content_type(&mut self, content_type: &str, operator: Option<&str>) -> Result<&mut Self> {
        let fragment = processors::content_type(content_type, operator)?;
        Ok(self.push(fragment))
    }

    /// Filter by `system.sitemap_locations`.
    pub fn sitemap_location(
        &mut self,
        sitemap_location: &str,
        operator: Option<&str>,
    ) -> Result<&mut Self> {
        let fragment = processors::sitemap_location(sitemap_location, operator)?;
        Ok(self.push(fragment))
    }

    /// Filter by `system.last_modified`.
    pub fn last_modified(
        &mut self,
        last_modified: DateTime<Utc>,
        operator: Option<&str>,
    ) -> Result<&mut Self> {
        let fragment = processors::last_modified(last_modified, operator)?;
        Ok(self.push(fragment))
    }

    /// Filter by `system.last_modified`, parsing an RFC 3339 timestamp or `YYYY-MM-DD` date.
    pub fn last_modified_str(&mut self, last_modified: &str, operator: Option<&str>) -> Result<&mut Self> {
        self.filter(SystemField::LastModified, last_modified, operator)
    }

    /// Filter any system field by its textual value.
    pub fn filter(
        &mut self,
        field: SystemField,
        value: &str,
        operator: Option<&str>,
    ) -> Result<&mut Self> {
        let fragment = processors::process(field, value, operator)?;
        Ok(self.push(fragment))
    }

    /// Choose published (`true`, the default) or preview (`false`) content.
    ///
    /// Preview content needs a preview key; without one this fails with
    /// [`ApiError::PublishedState`] and the flag is left unchanged.
    pub fn set_published(&mut self, published: bool) -> Result<&mut Self> {
        self.query.published = validate_published(published, self.config.preview_key.as_deref())?;
        Ok(self)
    }

    /// Append a literal fragment, e.g. `&elements.price[gt]=10`.
    ///
    /// Not validated or escaped in any way. Use it only for query features the
    /// typed filters do not cover.
    pub fn raw_query(&mut self, query: impl Into<String>) -> &mut Self {
        self.push(query.into())
    }

    /// URL the staged query would be sent to. Does not reset anything.
    pub fn request_url(&self) -> Result<Url> {
        self.items_url(self.query.published, &combine_fragments(&self.query.fragments))
    }

    /// Return the assembled query without sending it, then reset.
    pub fn execute_debug(&mut self) -> QueryState {
        self.take_query()
    }

    /// Send the staged query and return the parsed JSON body.
    ///
    /// The query is captured and the builder reset when this is called, before
    /// the returned future is first polled. The future does not borrow the
    /// client: filters staged while it is pending belong to the next query.
    pub fn execute(&mut self) -> impl Future<Output = Result<serde_json::Value>> {
        self.execute_as()
    }

    /// Like [`execute`](Self::execute), deserializing the body into `T`.
    pub fn execute_as<T: DeserializeOwned>(&mut self) -> impl Future<Output = Result<T>> {
        let query = self.take_query();
        let request = self.request_for(&query);
        async move { send(request?).await }
    }

    fn take_query(&mut self) -> QueryState {
        let mut query = std::mem::take(&mut self.query);
        query.query_text = combine_fragments(&query.fragments);
        trace!(fragments = query.fragments.len(), "query state reset");
        query
    }

    fn request_for(&self, query: &QueryState) -> Result<RequestBuilder> {
        let url = self.items_url(query.published, &query.query_text)?;
        debug!(url = %url, published = query.published, "sending Deliver request");

        let mut request = self.http_client.get(url);
        if !query.published {
            if let Some(key) = &self.config.preview_key {
                request = request.bearer_auth(key);
            }
        }
        Ok(request)
    }

    fn items_url(&self, published: bool, query_text: &str) -> Result<Url> {
        let base = if published {
            &self.published_url
        } else {
            &self.preview_url
        };
        let endpoint = format!(
            "{}/{}/{}",
            base.as_str().trim_end_matches('/'),
            self.config.project_id,
            ITEMS_ENDPOINT
        );
        let mut url = Url::parse(&endpoint)
            .map_err(|e| ApiError::Config(format!("Invalid request URL '{}': {}", endpoint, e)))?;
        // set_query escapes '#' so raw values cannot truncate the query
        url.set_query(Some(query_text));
        Ok(url)
    }
}

async fn send<T: DeserializeOwned>(request: RequestBuilder) -> Result<T> {
    let response = request.send().await?;
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        warn!(status = status.as_u16(), "Deliver API returned an error status");
        return Err(ApiError::Status {
            status: status.as_u16(),
            body,
        });
    }

    serde_json::from_str(&body).map_err(|e| ApiError::Parse(e.to_string()))
}
