//! Sitemap entities.
//!
//! Every entity validates its invariants once, when it is constructed, and is
//! immutable afterwards. Fallible constructors return [`ModelError`](crate::error::ModelError).
//!
//! # Entity Types
//!
//! - [`Sitemap`] - The aggregate, either pages or child sitemaps
//! - [`Page`] - A `url` entry with optional images and videos
//! - [`ChildSitemap`] - A `sitemap` entry of a sitemap index
//! - [`Image`] - An `image:image` entry
//! - [`Video`] - A `video:video` entry and its parts

pub mod child_sitemap;
pub mod image;
pub mod page;
pub mod sitemap;
pub mod video;

pub use child_sitemap::ChildSitemap;
pub use image::Image;
pub use page::{ChangeFrequency, Page, PageBuilder};
pub use sitemap::{Sitemap, SitemapEntries, SitemapItem};
pub use video::{
    Platform, PlatformKind, PlayerLocation, Price, PriceType, Resolution, Restriction, Uploader,
    Video, VideoBuilder,
};
