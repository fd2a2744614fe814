//! CLI argument definitions using clap.

use std::str::FromStr;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use kentico_deliver_api::{Operator, SystemField};

/// Deliver CLI - Query Kentico Cloud content items
#[derive(Parser, Debug)]
#[command(name = "deliver")]
#[command(about = "CLI tool for querying Kentico Cloud Deliver content", long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch content items matching the filters
    Items(QueryArgs),
    /// Print the query that `items` would send, without sending it
    Query(QueryArgs),
}

#[derive(Args, Debug)]
pub struct ProjectArgs {
    /// Kentico Cloud project id
    #[arg(long, env = "KENTICO_PROJECT_ID")]
    pub project_id: String,

    /// Preview API key, required with --unpublished
    #[arg(long, env = "KENTICO_PREVIEW_KEY", hide_env_values = true)]
    pub preview_key: Option<String>,

    /// Override the published content endpoint
    #[arg(long, env = "KENTICO_DELIVER_URL")]
    pub deliver_url: Option<String>,

    /// Override the preview content endpoint
    #[arg(long, env = "KENTICO_PREVIEW_URL")]
    pub preview_url: Option<String>,
}

#[derive(Args, Debug)]
pub struct QueryArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Filter on a system field, e.g. type=drinks or id[gt]=42 (repeatable, kept in order)
    #[arg(long = "where", value_name = "FIELD[OP]=VALUE")]
    pub filters: Vec<FilterArg>,

    /// Literal query fragment, appended after all --where filters, e.g. '&elements.price[gt]=3' (repeatable)
    #[arg(long, value_name = "FRAGMENT")]
    pub raw: Vec<String>,

    /// Query preview (unpublished) content
    #[arg(long)]
    pub unpublished: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// One `--where` filter: `FIELD=VALUE` or `FIELD[OPERATOR]=VALUE`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterArg {
    pub field: SystemField,
    pub operator: Option<Operator>,
    pub value: String,
}

impl FromStr for FilterArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (key, value) = s
            .split_once('=')
            .ok_or_else(|| format!("Expected FIELD=VALUE or FIELD[OP]=VALUE, got: {}", s))?;

        let (field, operator) = match key.split_once('[') {
            Some((field, rest)) => {
                let alias = rest
                    .strip_suffix(']')
                    .ok_or_else(|| format!("Missing closing ']' in: {}", key))?;
                (field, Some(alias.parse::<Operator>()?))
            }
            None => (key, None),
        };

        Ok(FilterArg {
            field: field.trim().parse()?,
            operator,
            value: value.to_string(),
        })
    }
}

impl std::fmt::Display for FilterArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.operator {
            Some(op) => write!(f, "{}[{}]={}", self.field, op, self.value),
            None => write!(f, "{}={}", self.field, self.value),
        }
    }
}
