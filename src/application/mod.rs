//! Application layer: turning a validated model into a document.
//!
//! # Available Services
//!
//! - [`generator::XmlGenerator`] - Renders a [`Sitemap`](crate::domain::entities::Sitemap)
//!   as a `urlset` or `sitemapindex` document

pub mod generator;

pub use generator::{GeneratorOptions, XmlGenerator};
