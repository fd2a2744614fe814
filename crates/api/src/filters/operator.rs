//! Comparison operators and their aliases.

use std::fmt;
use std::str::FromStr;

use crate::error::{ApiError, Result};

/// Relational or inclusion operator appended to a field name as `[op]`.
///
/// Leaving the operator out of a filter means exact match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Less than (`[lt]`).
    Lt,
    /// Less than or equal to (`[lte]`).
    Lte,
    /// Greater than (`[gt]`).
    Gt,
    /// Greater than or equal to (`[gte]`).
    Gte,
    /// Inclusive range, value written as `low,high` (`[range]`).
    Range,
    /// Any of a comma separated list (`[in]`).
    In,
    /// Collection contains value (`[contains]`).
    Contains,
}

impl Operator {
    /// Look up an operator by alias, ignoring case.
    pub fn from_alias(alias: &str) -> Option<Self> {
        let op = match alias.to_lowercase().as_str() {
            "lt" | "lessthan" => Operator::Lt,
            "lte" | "lessthanorequal" | "lessthanorequalto" => Operator::Lte,
            "gt" | "greaterthan" => Operator::Gt,
            "gte" | "greaterthanorequal" | "greaterthanorequalto" => Operator::Gte,
            "range" | "ranging" => Operator::Range,
            "in" => Operator::In,
            "contains" => Operator::Contains,
            _ => return None,
        };
        Some(op)
    }

    /// Bracketed suffix placed between the field name and `=`.
    pub fn suffix(self) -> &'static str {
        match self {
            Operator::Lt => "[lt]",
            Operator::Lte => "[lte]",
            Operator::Gt => "[gt]",
            Operator::Gte => "[gte]",
            Operator::Range => "[range]",
            Operator::In => "[in]",
            Operator::Contains => "[contains]",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix().trim_matches(|c| c == '[' || c == ']'))
    }
}

impl FromStr for Operator {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Operator::from_alias(s).ok_or_else(|| format!("Unrecognised operator: {}", s))
    }
}

/// Resolve an optional operator alias to its query suffix.
///
/// `None` yields an empty suffix. An unknown alias fails with
/// [`ApiError::UnrecognizedOperator`] naming `field`.
pub fn parse_operator(alias: Option<&str>, field: &str) -> Result<&'static str> {
    let Some(alias) = alias else {
        return Ok("");
    };

    Operator::from_alias(alias)
        .map(Operator::suffix)
        .ok_or_else(|| ApiError::UnrecognizedOperator {
            field: field.to_string(),
            operator: alias.to_string(),
        })
}
