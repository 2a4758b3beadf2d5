//! Data transfer objects for textual sitemap input.
//!
//! - [`manifest`] - JSON manifest converted into the validated domain model

pub mod manifest;

pub use manifest::{ManifestError, SitemapManifest, parse_sitemap};
