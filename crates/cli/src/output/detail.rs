//! Detailed output for an assembled query.

use colored::Colorize;
use kentico_deliver_api::QueryState;
use url::Url;

pub fn format_query_detail(query: &QueryState, url: &Url) -> String {
    let mut output = String::new();

    // Header
    output.push_str(&format!("{}\n", "=".repeat(60)));
    output.push_str(&format!("{}\n", "Deliver Query".bold()));
    output.push_str(&format!("{}\n\n", "=".repeat(60)));

    output.push_str(&format!("{}\n", "Request".cyan().bold()));
    output.push_str(&format!(
        "  Content:    {}\n",
        if query.published { "Published" } else { "Preview" }
    ));
    output.push_str(&format!("  URL:        {}\n", url));
    output.push_str(&format!("  Query text: {}\n\n", query.query_text));

    output.push_str(&format!("{}\n", "Filters".cyan().bold()));
    if query.fragments.is_empty() {
        output.push_str("  (none)\n");
    }
    for fragment in &query.fragments {
        output.push_str(&format!("  {}\n", fragment));
    }

    output
}
