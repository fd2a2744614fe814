//! Query command implementation: show the request without sending it.

use anyhow::Result;

use crate::cli::{OutputFormat, QueryArgs};
use crate::commands::builder::build_query;
use crate::output::format_query_detail;

pub fn run_query(args: &QueryArgs, format: OutputFormat) -> Result<()> {
    let mut client = build_query(args)?;
    // URL first: execute_debug resets the staged filters
    let url = client.request_url()?;
    let query = client.execute_debug();

    match format {
        OutputFormat::Table => {
            println!("{}", format_query_detail(&query, &url));
        }
        OutputFormat::Json => {
            let mut json = serde_json::to_value(&query)?;
            json["url"] = url.as_str().into();
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
    }

    Ok(())
}
