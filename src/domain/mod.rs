//! Domain layer: the validated sitemap model.
//!
//! This module has no knowledge of XML. It defines the entities a sitemap is
//! made of and the value types they share.
//!
//! # Architecture
//!
//! - [`entities`] - Sitemap, pages, child sitemaps, images and videos
//! - [`values`] - Absolute [`values::Location`] and [`values::Timestamp`]
//!
//! # Design Principles
//!
//! - Invariants are checked once, at construction; no invalid entity can exist
//! - Entities are immutable and own their children by value
//! - Rendering lives in [`crate::application`] and trusts these invariants

pub mod entities;
pub mod values;
