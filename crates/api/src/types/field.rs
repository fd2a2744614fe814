//! Filterable system fields.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// A `system.*` field of a content item that the Deliver API can filter on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SystemField {
    /// `system.id`
    Id,
    /// `system.name`
    Name,
    /// `system.codename`
    Codename,
    /// `system.type`
    Type,
    /// `system.sitemap_locations`
    SitemapLocations,
    /// `system.last_modified`
    LastModified,
}

impl SystemField {
    /// Every field, in the order they are documented.
    pub const ALL: [SystemField; 6] = [
        SystemField::Id,
        SystemField::Name,
        SystemField::Codename,
        SystemField::Type,
        SystemField::SitemapLocations,
        SystemField::LastModified,
    ];

    /// Query parameter name on the wire.
    pub fn wire_name(self) -> &'static str {
        match self {
            SystemField::Id => "system.id",
            SystemField::Name => "system.name",
            SystemField::Codename => "system.codename",
            SystemField::Type => "system.type",
            SystemField::SitemapLocations => "system.sitemap_locations",
            SystemField::LastModified => "system.last_modified",
        }
    }

    /// Name used in error messages.
    pub fn label(self) -> &'static str {
        match self {
            SystemField::Id => "id",
            SystemField::Name => "name",
            SystemField::Codename => "codeName",
            SystemField::Type => "type",
            SystemField::SitemapLocations => "sitemapLocation",
            SystemField::LastModified => "lastModified",
        }
    }

    /// Opaque identifier fields: sent unescaped and must not contain spaces.
    pub fn is_token(self) -> bool {
        matches!(self, SystemField::Id | SystemField::Codename)
    }
}

impl fmt::Display for SystemField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SystemField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let field = match s.to_lowercase().as_str() {
            "id" | "system.id" => SystemField::Id,
            "name" | "system.name" => SystemField::Name,
            "codename" | "code_name" | "system.codename" => SystemField::Codename,
            "type" | "content_type" | "system.type" => SystemField::Type,
            "sitemap" | "sitemaplocation" | "sitemap_location" | "sitemap_locations"
            | "system.sitemap_locations" => SystemField::SitemapLocations,
            "lastmodified" | "last_modified" | "system.last_modified" => SystemField::LastModified,
            _ => return Err(format!("Unknown field: {}", s)),
        };
        Ok(field)
    }
}
