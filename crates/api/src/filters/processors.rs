//! Field processors: validate one filter value and render its query fragment.
//!
//! Every processor returns `&system.<field><suffix>=<value>`. Free-text fields
//! (`name`, `type`, `sitemap_locations`) are percent-encoded; identifier
//! fields (`id`, `codename`) are sent as-is and may not contain spaces.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::error::{ApiError, Result};
use crate::filters::operator::parse_operator;
use crate::types::SystemField;

/// Bytes left unescaped in a query component: `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

fn fragment(field: SystemField, suffix: &str, value: &str) -> String {
    format!("&{}{}={}", field.wire_name(), suffix, value)
}

fn token(field: SystemField, value: &str, operator: Option<&str>) -> Result<String> {
    if value.contains(' ') {
        return Err(ApiError::validation(field.label(), "must not contain spaces"));
    }
    let suffix = parse_operator(operator, field.label())?;
    Ok(fragment(field, suffix, value))
}

fn text(field: SystemField, value: &str, operator: Option<&str>) -> Result<String> {
    let suffix = parse_operator(operator, field.label())?;
    let encoded = utf8_percent_encode(value, QUERY_COMPONENT).to_string();
    Ok(fragment(field, suffix, &encoded))
}

/// `&system.id<op>=<value>`.
pub fn id(value: &str, operator: Option<&str>) -> Result<String> {
    token(SystemField::Id, value, operator)
}

/// `&system.name<op>=<encoded value>`.
pub fn name(value: &str, operator: Option<&str>) -> Result<String> {
    text(SystemField::Name, value, operator)
}

/// `&system.codename<op>=<value>`.
pub fn code_name(value: &str, operator: Option<&str>) -> Result<String> {
    token(SystemField::Codename, value, operator)
}

/// `&system.type<op>=<encoded value>`.
pub fn content_type(value: &str, operator: Option<&str>) -> Result<String> {
    text(SystemField::Type, value, operator)
}

/// `&system.sitemap_locations<op>=<encoded value>`.
pub fn sitemap_location(value: &str, operator: Option<&str>) -> Result<String> {
    text(SystemField::SitemapLocations, value, operator)
}

/// `&system.last_modified<op>=<ISO-8601 timestamp>`.
///
/// The timestamp is rendered by [`format_last_modified`].
pub fn last_modified(value: DateTime<Utc>, operator: Option<&str>) -> Result<String> {
    let suffix = parse_operator(operator, SystemField::LastModified.label())?;
    Ok(fragment(
        SystemField::LastModified,
        suffix,
        &format_last_modified(value),
    ))
}

/// Wire format for dates: UTC, millisecond precision, e.g.
/// `2017-03-01T09:30:00.000Z`.
///
/// Years past 9999 carry a leading sign, which is sent as `%2B` so the server
/// does not read it as a space.
pub fn format_last_modified(value: DateTime<Utc>) -> String {
    value
        .to_rfc3339_opts(SecondsFormat::Millis, true)
        .replace('+', "%2B")
}

/// Parse an RFC 3339 timestamp or a bare `YYYY-MM-DD` date (midnight UTC).
pub fn parse_last_modified(value: &str) -> Result<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Ok(timestamp.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc())
        .ok_or_else(|| {
            ApiError::validation(
                SystemField::LastModified.label(),
                format!("'{}' is not a valid date", value),
            )
        })
}

/// Render a filter for any field from its textual value.
///
/// Dates for [`SystemField::LastModified`] go through [`parse_last_modified`].
pub fn process(field: SystemField, value: &str, operator: Option<&str>) -> Result<String> {
    match field {
        SystemField::Id => id(value, operator),
        SystemField::Name => name(value, operator),
        SystemField::Codename => code_name(value, operator),
        SystemField::Type => content_type(value, operator),
        SystemField::SitemapLocations => sitemap_location(value, operator),
        SystemField::LastModified => last_modified(parse_last_modified(value)?, operator),
    }
}

/// Check a requested published flag against the configured preview key.
///
/// Unpublished content needs a non-empty preview key.
pub fn validate_published(published: bool, preview_key: Option<&str>) -> Result<bool> {
    let has_key = preview_key.is_some_and(|key| !key.is_empty());
    if !published && !has_key {
        return Err(ApiError::PublishedState);
    }
    Ok(published)
}
