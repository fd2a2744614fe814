//! Items command implementation.

use anyhow::Result;

use crate::cli::{OutputFormat, QueryArgs};
use crate::commands::builder::build_query;
use crate::output::format_items_table;

pub async fn run_items(args: &QueryArgs, format: OutputFormat) -> Result<()> {
    let mut client = build_query(args)?;
    let response = client.execute().await?;

    match format {
        OutputFormat::Table => {
            println!("{}", format_items_table(&response));
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&response)?;
            println!("{}", json);
        }
    }

    Ok(())
}
