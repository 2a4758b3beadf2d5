//! JSON manifest describing a sitemap.
//!
//! A manifest is the textual form of the domain model: either
//! `{"pages": [...]}` or `{"sitemaps": [...]}`. Locations, timestamps and
//! enumerated tokens are kept as strings here and converted by
//! [`SitemapManifest::into_sitemap`], so every domain rule applies exactly as
//! it does for entities built in code.
//!
//! # Example
//!
//! ```json
//! {
//!   "pages": [
//!     {
//!       "loc": "https://example.com/",
//!       "lastmod": "2023-01-15T10:00:00+00:00",
//!       "changefreq": "daily",
//!       "priority": 0.8,
//!       "images": [{ "loc": "https://example.com/logo.png" }]
//!     }
//!   ]
//! }
//! ```
//!
//! A manifest carries exactly one of the two keys. Both at once is the same
//! mistake as mixing pages and child sitemaps in one sitemap and is reported as
//! [`ModelError::TypeMismatch`]; neither is [`ModelError::RequiredValueMissing`].

use crate::domain::entities::{
    ChangeFrequency, ChildSitemap, Image, Page, Platform, PlayerLocation, Price, PriceType,
    Resolution, Restriction, Sitemap, Uploader, Video,
};
use crate::domain::entities::video::{MAX_DURATION_SECONDS, MIN_DURATION_SECONDS};
use crate::domain::values::{Location, Timestamp};
use crate::error::ModelError;
use serde::{Deserialize, Serialize};

/// Errors produced while reading a manifest.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("Invalid manifest: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid sitemap: {0}")]
    Model(#[from] ModelError),
}

/// Top-level manifest: a list of pages or a list of child sitemaps.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SitemapManifest {
    Pages(Vec<PageManifest>),
    Sitemaps(Vec<ChildSitemapManifest>),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChildSitemapManifest {
    pub loc: String,
    pub lastmod: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PageManifest {
    pub loc: String,
    pub lastmod: Option<String>,
    pub changefreq: Option<String>,
    pub priority: Option<f64>,
    #[serde(default)]
    pub images: Vec<ImageManifest>,
    #[serde(default)]
    pub videos: Vec<VideoManifest>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ImageManifest {
    pub loc: String,
    pub caption: Option<String>,
    pub geo_location: Option<String>,
    pub title: Option<String>,
    pub license: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VideoManifest {
    pub thumbnail_loc: String,
    pub title: String,
    pub description: String,
    pub content_loc: Option<String>,
    pub player_loc: Option<PlayerLocationManifest>,
    pub duration: Option<i64>,
    pub expiration_date: Option<String>,
    pub rating: Option<f64>,
    pub view_count: Option<i64>,
    pub publication_date: Option<String>,
    pub family_friendly: Option<bool>,
    pub restriction: Option<RestrictionManifest>,
    pub platform: Option<PlatformManifest>,
    #[serde(default)]
    pub prices: Vec<PriceManifest>,
    pub requires_subscription: Option<bool>,
    pub uploader: Option<UploaderManifest>,
    pub live: Option<bool>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub category: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlayerLocationManifest {
    pub loc: String,
    pub allow_embed: Option<bool>,
}

/// Whether a restriction or platform list is an allow-list or a deny-list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relationship {
    Allow,
    Deny,
}

impl Relationship {
    fn is_allowed(self) -> bool {
        self == Relationship::Allow
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RestrictionManifest {
    pub countries: Vec<String>,
    pub relationship: Relationship,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlatformManifest {
    pub platforms: Vec<String>,
    pub relationship: Relationship,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PriceManifest {
    pub value: f64,
    pub currency: String,
    #[serde(rename = "type")]
    pub price_type: Option<String>,
    pub resolution: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UploaderManifest {
    pub name: String,
    pub info: Option<String>,
}

/// Both top-level keys as optional fields, so a manifest that sets both or
/// neither can be told apart from malformed JSON.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawManifest {
    pages: Option<Vec<PageManifest>>,
    sitemaps: Option<Vec<ChildSitemapManifest>>,
}

impl SitemapManifest {
    /// Parses a manifest from JSON without validating the sitemap rules.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::Parse`] for malformed JSON or an unknown key,
    /// and [`ManifestError::Model`] when `pages` and `sitemaps` are both set
    /// or both missing.
    pub fn from_json(input: &str) -> Result<Self, ManifestError> {
        let raw: RawManifest = serde_json::from_str(input)?;
        match (raw.pages, raw.sitemaps) {
            (Some(pages), None) => Ok(SitemapManifest::Pages(pages)),
            (None, Some(sitemaps)) => Ok(SitemapManifest::Sitemaps(sitemaps)),
            (Some(_), Some(_)) => Err(ModelError::TypeMismatch {
                field: "sitemap",
                message: "a manifest lists either \"pages\" or \"sitemaps\", not both".to_string(),
            }
            .into()),
            (None, None) => Err(ModelError::RequiredValueMissing {
                field: "pages or sitemaps",
            }
            .into()),
        }
    }

    /// Converts the manifest into a validated [`Sitemap`].
    ///
    /// # Errors
    ///
    /// Returns the first [`ModelError`] raised by any entity.
    pub fn into_sitemap(self) -> Result<Sitemap, ModelError> {
        match self {
            SitemapManifest::Pages(pages) => {
                let pages = pages
                    .into_iter()
                    .map(PageManifest::into_page)
                    .collect::<Result<Vec<_>, _>>()?;
                Sitemap::pages(pages)
            }
            SitemapManifest::Sitemaps(sitemaps) => {
                let sitemaps = sitemaps
                    .into_iter()
                    .map(ChildSitemapManifest::into_child_sitemap)
                    .collect::<Result<Vec<_>, _>>()?;
                Sitemap::index(sitemaps)
            }
        }
    }
}

/// Parses and validates a JSON manifest in one step.
///
/// # Errors
///
/// Returns [`ManifestError`] for malformed JSON or a sitemap rule violation.
pub fn parse_sitemap(input: &str) -> Result<Sitemap, ManifestError> {
    Ok(SitemapManifest::from_json(input)?.into_sitemap()?)
}

impl ChildSitemapManifest {
    fn into_child_sitemap(self) -> Result<ChildSitemap, ModelError> {
        Ok(ChildSitemap::new(
            Location::parse(&self.loc)?,
            timestamp(self.lastmod)?,
        ))
    }
}

impl PageManifest {
    fn into_page(self) -> Result<Page, ModelError> {
        let mut builder = Page::builder().location(Location::parse(&self.loc)?);

        if let Some(lastmod) = timestamp(self.lastmod)? {
            builder = builder.last_modified(lastmod);
        }
        if let Some(changefreq) = self.changefreq {
            builder = builder.change_frequency(ChangeFrequency::parse(&changefreq)?);
        }
        if let Some(priority) = self.priority {
            builder = builder.priority(priority);
        }

        let images = self
            .images
            .into_iter()
            .map(ImageManifest::into_image)
            .collect::<Result<Vec<_>, _>>()?;
        let videos = self
            .videos
            .into_iter()
            .map(VideoManifest::into_video)
            .collect::<Result<Vec<_>, _>>()?;

        builder.images(images).videos(videos).build()
    }
}

impl ImageManifest {
    fn into_image(self) -> Result<Image, ModelError> {
        Ok(Image::new(
            Location::parse(&self.loc)?,
            self.caption,
            self.geo_location,
            self.title,
            location(self.license)?,
        ))
    }
}

impl VideoManifest {
    fn into_video(self) -> Result<Video, ModelError> {
        let mut builder = Video::builder()
            .thumbnail_location(Location::parse(&self.thumbnail_loc)?)
            .title(self.title)
            .description(self.description);

        if let Some(content) = location(self.content_loc)? {
            builder = builder.content_location(content);
        }
        if let Some(player) = self.player_loc {
            builder = builder.player_location(PlayerLocation::new(
                Location::parse(&player.loc)?,
                player.allow_embed,
            ));
        }
        if let Some(duration) = self.duration {
            builder = builder.duration(duration_seconds(duration)?);
        }
        if let Some(date) = timestamp(self.expiration_date)? {
            builder = builder.expiration_date(date);
        }
        if let Some(rating) = self.rating {
            builder = builder.rating(rating);
        }
        if let Some(count) = self.view_count {
            builder = builder.view_count(count);
        }
        if let Some(date) = timestamp(self.publication_date)? {
            builder = builder.publication_date(date);
        }
        if let Some(flag) = self.family_friendly {
            builder = builder.family_friendly(flag);
        }
        if let Some(restriction) = self.restriction {
            builder = builder.restriction(Restriction::new(
                restriction.countries,
                restriction.relationship.is_allowed(),
            )?);
        }
        if let Some(platform) = self.platform {
            builder = builder.platform(Platform::parse(
                platform.platforms.as_slice(),
                platform.relationship.is_allowed(),
            )?);
        }
        for price in self.prices {
            builder = builder.price(price.into_price()?);
        }
        if let Some(flag) = self.requires_subscription {
            builder = builder.requires_subscription(flag);
        }
        if let Some(uploader) = self.uploader {
            builder = builder.uploader(Uploader::new(uploader.name, location(uploader.info)?)?);
        }
        if let Some(flag) = self.live {
            builder = builder.live(flag);
        }
        if let Some(category) = self.category {
            builder = builder.category(category);
        }

        builder.tags(self.tags).build()
    }
}

impl PriceManifest {
    fn into_price(self) -> Result<Price, ModelError> {
        let price_type = self.price_type.as_deref().map(PriceType::parse).transpose()?;
        let resolution = self
            .resolution
            .as_deref()
            .map(Resolution::parse)
            .transpose()?;
        Price::new(self.value, self.currency, price_type, resolution)
    }
}

fn location(value: Option<String>) -> Result<Option<Location>, ModelError> {
    value.as_deref().map(Location::parse).transpose()
}

fn timestamp(value: Option<String>) -> Result<Option<Timestamp>, ModelError> {
    value.as_deref().map(Timestamp::parse_rfc3339).transpose()
}

/// Narrows a manifest duration so negative values fail the duration rule
/// instead of deserialization.
fn duration_seconds(value: i64) -> Result<u32, ModelError> {
    u32::try_from(value).map_err(|_| {
        ModelError::out_of_range(
            "video.duration",
            format!(
                "duration must be between {MIN_DURATION_SECONDS} and {MAX_DURATION_SECONDS} seconds, got {value}"
            ),
        )
    })
}
