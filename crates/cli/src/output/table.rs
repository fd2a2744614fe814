//! Table formatting for content item lists.

use serde_json::Value;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

#[derive(Tabled)]
struct ItemRow {
    #[tabled(rename = "Codename")]
    codename: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    content_type: String,
    #[tabled(rename = "Sitemap")]
    sitemap: String,
    #[tabled(rename = "Last Modified")]
    last_modified: String,
}

fn truncate_name(name: &str, max_len: usize) -> String {
    if name.chars().count() > max_len {
        let kept: String = name.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    } else {
        name.to_string()
    }
}

fn system_field(item: &Value, key: &str) -> String {
    item["system"][key]
        .as_str()
        .map(|s| s.to_string())
        .unwrap_or_else(|| "-".to_string())
}

fn sitemap_locations(item: &Value) -> String {
    match item["system"]["sitemap_locations"].as_array() {
        Some(locations) if !locations.is_empty() => locations
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join(", "),
        _ => "-".to_string(),
    }
}

/// Render the `items` array of a Deliver response as a table.
pub fn format_items_table(response: &Value) -> String {
    let items = match response["items"].as_array() {
        Some(items) if !items.is_empty() => items,
        _ => return "No items found.".to_string(),
    };

    let rows: Vec<ItemRow> = items
        .iter()
        .map(|item| ItemRow {
            codename: system_field(item, "codename"),
            name: truncate_name(&system_field(item, "name"), 30),
            content_type: system_field(item, "type"),
            sitemap: sitemap_locations(item),
            last_modified: system_field(item, "last_modified"),
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::new(1..)).with(Alignment::left()));

    table.to_string()
}
