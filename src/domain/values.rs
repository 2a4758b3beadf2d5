//! Value types shared by all entities: absolute locations and timestamps.

use crate::error::ModelError;
use chrono::{DateTime, FixedOffset, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

/// An absolute URI such as a page, image or video location.
///
/// The canonical string form is the one produced by [`url::Url`], so a bare
/// origin like `https://example.com` is rendered as `https://example.com/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Location(Url);

impl Location {
    /// Parses an absolute URI.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidLocation`] for relative or malformed input.
    pub fn parse(input: &str) -> Result<Self, ModelError> {
        Url::parse(input)
            .map(Self)
            .map_err(|e| ModelError::InvalidLocation {
                value: input.to_string(),
                reason: e.to_string(),
            })
    }

    /// Canonical string form used for rendering and equality checks.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn host(&self) -> Option<&str> {
        self.0.host_str()
    }

    pub fn as_url(&self) -> &Url {
        &self.0
    }
}

impl From<Url> for Location {
    fn from(url: Url) -> Self {
        Self(url)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A point in time with its original UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<FixedOffset>);

impl Timestamp {
    /// Parses an RFC 3339 timestamp, e.g. `2023-01-15T10:00:00+00:00`.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidTimestamp`] when the input is not RFC 3339.
    pub fn parse_rfc3339(input: &str) -> Result<Self, ModelError> {
        DateTime::parse_from_rfc3339(input)
            .map(Self)
            .map_err(|e| ModelError::InvalidTimestamp {
                value: input.to_string(),
                reason: e.to_string(),
            })
    }

    /// Formats as a W3C datetime with seconds and a numeric offset.
    ///
    /// UTC is written as `+00:00`, never `Z`.
    pub fn format_w3c(&self) -> String {
        self.0.format("%Y-%m-%dT%H:%M:%S%:z").to_string()
    }

    pub fn as_datetime(&self) -> &DateTime<FixedOffset> {
        &self.0
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Timestamp {
    fn from(value: DateTime<Tz>) -> Self {
        Self(value.fixed_offset())
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_w3c())
    }
}
