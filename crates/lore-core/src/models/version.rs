use std::fmt;

use serde::{Deserialize, Serialize};

/// Documentation version tag carried by every record.
///
/// Unknown tags are kept rather than rejected so a single odd entry cannot
/// fail a whole load; they match only the [`VersionFilter::All`] filter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Version {
    V5,
    V6,
    /// Sentinel: the record applies to every version.
    All,
    Unrecognized(String),
}

impl Version {
    /// Parse a tag leniently: `"v5"`, `"5"`, `"V5"` all map to [`Version::V5`].
    pub fn parse(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "v5" | "5" => Version::V5,
            "v6" | "6" => Version::V6,
            "all" | "both" | "*" => Version::All,
            _ => Version::Unrecognized(tag.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Version::V5 => "v5",
            Version::V6 => "v6",
            Version::All => "all",
            Version::Unrecognized(tag) => tag,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Version::Unrecognized(_))
    }
}

impl From<String> for Version {
    fn from(tag: String) -> Self {
        Version::parse(&tag)
    }
}

impl From<Version> for String {
    fn from(version: Version) -> Self {
        version.as_str().to_string()
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Restricts which version tree a query considers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum VersionFilter {
    /// No restriction.
    #[default]
    All,
    /// Records tagged with this version or with [`Version::All`].
    Only(Version),
}

impl VersionFilter {
    pub fn parse(tag: &str) -> Self {
        if tag.trim().is_empty() {
            return VersionFilter::All;
        }
        Version::parse(tag).into()
    }

    /// Whether a record tagged `version` passes this filter.
    pub fn matches(&self, version: &Version) -> bool {
        match self {
            VersionFilter::All => true,
            VersionFilter::Only(wanted) => match version {
                Version::All => true,
                Version::Unrecognized(_) => false,
                known => known == wanted,
            },
        }
    }
}

impl From<Version> for VersionFilter {
    fn from(version: Version) -> Self {
        match version {
            Version::All => VersionFilter::All,
            other => VersionFilter::Only(other),
        }
    }
}

impl From<String> for VersionFilter {
    fn from(tag: String) -> Self {
        VersionFilter::parse(&tag)
    }
}

impl From<VersionFilter> for String {
    fn from(filter: VersionFilter) -> Self {
        match filter {
            VersionFilter::All => "all".to_string(),
            VersionFilter::Only(version) => version.into(),
        }
    }
}
