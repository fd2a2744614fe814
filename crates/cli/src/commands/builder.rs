//! Client construction shared by the query commands.

use anyhow::{Context, Result};
use kentico_deliver_api::{ClientConfig, DeliverClient};

use crate::cli::{ProjectArgs, QueryArgs};

/// Create a ClientConfig from the project arguments, with optional endpoint overrides.
fn client_config(args: &ProjectArgs) -> ClientConfig {
    let mut config = ClientConfig::new(args.project_id.as_str());
    if let Some(key) = &args.preview_key {
        config = config.with_preview_key(key.as_str());
    }
    if let Some(url) = &args.deliver_url {
        config = config.with_published_url(url.as_str());
    }
    if let Some(url) = &args.preview_url {
        config = config.with_preview_url(url.as_str());
    }
    config
}

/// Build a client and stage every filter from the command line, in order.
pub fn build_query(args: &QueryArgs) -> Result<DeliverClient> {
    let mut client = DeliverClient::with_config(client_config(&args.project))?;
    tracing::debug!(
        project_id = %args.project.project_id,
        filters = args.filters.len(),
        raw = args.raw.len(),
        unpublished = args.unpublished,
        "building query"
    );

    if args.unpublished {
        client
            .set_published(false)
            .context("--unpublished needs --preview-key or KENTICO_PREVIEW_KEY")?;
    }

    for filter in &args.filters {
        let operator = filter.operator.map(|op| op.to_string());
        client
            .filter(filter.field, &filter.value, operator.as_deref())
            .with_context(|| format!("Invalid filter '{}'", filter))?;
    }

    for fragment in &args.raw {
        client.raw_query(fragment.as_str());
    }

    Ok(client)
}
