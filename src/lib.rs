//! # Sitemap XML
//!
//! Builds validated sitemap models and renders them as XML documents following
//! the [sitemaps.org](https://www.sitemaps.org/protocol.html) protocol and the
//! Google Image and Video sitemap extensions.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Immutable entities validated at construction
//! - **Application Layer** ([`application`]) - The XML generator
//! - **Infrastructure Layer** ([`infrastructure`]) - XML tree and serialization
//! - **DTO Layer** ([`dto`]) - JSON manifests converted into the domain model
//!
//! ## Quick Start
//!
//! ```
//! use sitemap_xml::prelude::*;
//!
//! let page = Page::builder()
//!     .location(Location::parse("https://example.com/").unwrap())
//!     .change_frequency(ChangeFrequency::Daily)
//!     .priority(0.8)
//!     .build()
//!     .unwrap();
//!
//! let sitemap = Sitemap::pages(vec![page]).unwrap();
//! let xml = XmlGenerator::default().render(&sitemap).unwrap();
//!
//! assert!(xml.contains("<changefreq>daily</changefreq>"));
//! ```
//!
//! ## Configuration
//!
//! The `sitemap-gen` binary reads its settings from environment variables via
//! [`config::Config`]. See [`config`] module for available options.

pub mod application;
pub mod domain;
pub mod dto;
pub mod error;
pub mod infrastructure;

pub mod config;
pub mod logging;

pub use error::{ErrorKind, GenerateError, ModelError};

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::{GeneratorOptions, XmlGenerator};
    pub use crate::domain::entities::{
        ChangeFrequency, ChildSitemap, Image, Page, Platform, PlatformKind, PlayerLocation, Price,
        PriceType, Resolution, Restriction, Sitemap, SitemapEntries, SitemapItem, Uploader, Video,
    };
    pub use crate::domain::values::{Location, Timestamp};
    pub use crate::error::{ErrorKind, GenerateError, ModelError};
    pub use crate::infrastructure::xml::{XmlDocument, XmlElement};
}
