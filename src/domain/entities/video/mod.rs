//! Video metadata attached to a page (Google video sitemap extension).
//!
//! A [`Video`] is assembled with [`VideoBuilder`]; every field rule is checked
//! once in [`VideoBuilder::build`]. Rules that depend on the embedding page's
//! location are checked by [`Page`](crate::domain::entities::Page).

pub mod platform;
pub mod player_location;
pub mod price;
pub mod restriction;
pub mod uploader;

pub use platform::{Platform, PlatformKind};
pub use player_location::PlayerLocation;
pub use price::{Price, PriceType, Resolution};
pub use restriction::Restriction;
pub use uploader::Uploader;

use crate::domain::values::{Location, Timestamp};
use crate::error::{ModelError, ensure_max_chars};

pub const MAX_DESCRIPTION_CHARS: usize = 2048;
pub const MAX_CATEGORY_CHARS: usize = 256;
pub const MAX_TAGS: usize = 32;
pub const MIN_DURATION_SECONDS: u32 = 1;
pub const MAX_DURATION_SECONDS: u32 = 28_800;
pub const MAX_RATING: f64 = 5.0;

/// A `video:video` entry of a page.
///
/// Exactly one of [`content_location`](Self::content_location) and
/// [`player_location`](Self::player_location) is set. The `Option<bool>`
/// flags are tri-state: `None` suppresses the element when rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct Video {
    thumbnail_location: Location,
    title: String,
    description: String,
    content_location: Option<Location>,
    player_location: Option<PlayerLocation>,
    duration: Option<u32>,
    expiration_date: Option<Timestamp>,
    rating: Option<f64>,
    view_count: Option<i64>,
    publication_date: Option<Timestamp>,
    family_friendly: Option<bool>,
    restriction: Option<Restriction>,
    platform: Option<Platform>,
    prices: Vec<Price>,
    requires_subscription: Option<bool>,
    uploader: Option<Uploader>,
    live: Option<bool>,
    tags: Vec<String>,
    category: Option<String>,
}

impl Video {
    pub fn builder() -> VideoBuilder {
        VideoBuilder::default()
    }

    pub fn thumbnail_location(&self) -> &Location {
        &self.thumbnail_location
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn content_location(&self) -> Option<&Location> {
        self.content_location.as_ref()
    }

    pub fn player_location(&self) -> Option<&PlayerLocation> {
        self.player_location.as_ref()
    }

    /// Duration in seconds.
    pub fn duration(&self) -> Option<u32> {
        self.duration
    }

    pub fn expiration_date(&self) -> Option<&Timestamp> {
        self.expiration_date.as_ref()
    }

    pub fn rating(&self) -> Option<f64> {
        self.rating
    }

    pub fn view_count(&self) -> Option<i64> {
        self.view_count
    }

    pub fn publication_date(&self) -> Option<&Timestamp> {
        self.publication_date.as_ref()
    }

    pub fn is_family_friendly(&self) -> Option<bool> {
        self.family_friendly
    }

    pub fn restriction(&self) -> Option<&Restriction> {
        self.restriction.as_ref()
    }

    pub fn platform(&self) -> Option<&Platform> {
        self.platform.as_ref()
    }

    pub fn prices(&self) -> &[Price] {
        &self.prices
    }

    pub fn requires_subscription(&self) -> Option<bool> {
        self.requires_subscription
    }

    pub fn uploader(&self) -> Option<&Uploader> {
        self.uploader.as_ref()
    }

    pub fn is_live(&self) -> Option<bool> {
        self.live
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }
}

/// Collects the fields of a [`Video`]; nothing is validated until [`build`](Self::build).
#[derive(Debug, Clone, Default)]
pub struct VideoBuilder {
    thumbnail_location: Option<Location>,
    title: Option<String>,
    description: Option<String>,
    content_location: Option<Location>,
    player_location: Option<PlayerLocation>,
    duration: Option<u32>,
    expiration_date: Option<Timestamp>,
    rating: Option<f64>,
    view_count: Option<i64>,
    publication_date: Option<Timestamp>,
    family_friendly: Option<bool>,
    restriction: Option<Restriction>,
    platform: Option<Platform>,
    prices: Vec<Price>,
    requires_subscription: Option<bool>,
    uploader: Option<Uploader>,
    live: Option<bool>,
    tags: Vec<String>,
    category: Option<String>,
}

impl VideoBuilder {
    pub fn thumbnail_location(mut self, location: Location) -> Self {
        self.thumbnail_location = Some(location);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn content_location(mut self, location: Location) -> Self {
        self.content_location = Some(location);
        self
    }

    pub fn player_location(mut self, player: PlayerLocation) -> Self {
        self.player_location = Some(player);
        self
    }

    pub fn duration(mut self, seconds: u32) -> Self {
        self.duration = Some(seconds);
        self
    }

    pub fn expiration_date(mut self, date: impl Into<Timestamp>) -> Self {
        self.expiration_date = Some(date.into());
        self
    }

    pub fn rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn view_count(mut self, count: i64) -> Self {
        self.view_count = Some(count);
        self
    }

    pub fn publication_date(mut self, date: impl Into<Timestamp>) -> Self {
        self.publication_date = Some(date.into());
        self
    }

    pub fn family_friendly(mut self, flag: bool) -> Self {
        self.family_friendly = Some(flag);
        self
    }

    pub fn restriction(mut self, restriction: Restriction) -> Self {
        self.restriction = Some(restriction);
        self
    }

    pub fn platform(mut self, platform: Platform) -> Self {
        self.platform = Some(platform);
        self
    }

    /// Appends one price; prices keep insertion order.
    pub fn price(mut self, price: Price) -> Self {
        self.prices.push(price);
        self
    }

    pub fn prices(mut self, prices: impl IntoIterator<Item = Price>) -> Self {
        self.prices.extend(prices);
        self
    }

    pub fn requires_subscription(mut self, flag: bool) -> Self {
        self.requires_subscription = Some(flag);
        self
    }

    pub fn uploader(mut self, uploader: Uploader) -> Self {
        self.uploader = Some(uploader);
        self
    }

    pub fn live(mut self, flag: bool) -> Self {
        self.live = Some(flag);
        self
    }

    /// Appends one tag; tags keep insertion order.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Validates the collected fields and produces an immutable [`Video`].
    ///
    /// # Errors
    ///
    /// - [`ModelError::RequiredValueMissing`] without thumbnail location, title or description
    /// - [`ModelError::StringTooLong`] for a description over 2048 or a category over 256 characters
    /// - [`ModelError::MutuallyExclusiveFieldsViolated`] unless exactly one of content
    ///   and player location is set
    /// - [`ModelError::ValueOutOfRange`] for duration outside 1..=28800, rating outside
    ///   0..=5 or a negative view count
    /// - [`ModelError::SequenceTooLong`] for more than 32 tags
    pub fn build(self) -> Result<Video, ModelError> {
        let thumbnail_location = self
            .thumbnail_location
            .ok_or(ModelError::RequiredValueMissing {
                field: "video.thumbnail_loc",
            })?;
        let title = self.title.ok_or(ModelError::RequiredValueMissing {
            field: "video.title",
        })?;
        let description = self.description.ok_or(ModelError::RequiredValueMissing {
            field: "video.description",
        })?;

        ensure_max_chars("video.description", &description, MAX_DESCRIPTION_CHARS)?;

        if self.content_location.is_some() == self.player_location.is_some() {
            return Err(ModelError::MutuallyExclusiveFieldsViolated {
                fields: "video.content_loc, video.player_loc",
                message: "exactly one of content location and player location must be set"
                    .to_string(),
            });
        }

        if let Some(duration) = self.duration
            && !(MIN_DURATION_SECONDS..=MAX_DURATION_SECONDS).contains(&duration)
        {
            return Err(ModelError::out_of_range(
                "video.duration",
                format!(
                    "duration must be between {MIN_DURATION_SECONDS} and {MAX_DURATION_SECONDS} seconds, got {duration}"
                ),
            ));
        }

        if let Some(rating) = self.rating
            && !(0.0..=MAX_RATING).contains(&rating)
        {
            return Err(ModelError::out_of_range(
                "video.rating",
                format!("rating must be between 0 and {MAX_RATING}, got {rating}"),
            ));
        }

        if let Some(count) = self.view_count
            && count < 0
        {
            return Err(ModelError::out_of_range(
                "video.view_count",
                format!("view count must not be negative, got {count}"),
            ));
        }

        if self.tags.len() > MAX_TAGS {
            return Err(ModelError::SequenceTooLong {
                field: "video.tag",
                max: MAX_TAGS,
                actual: self.tags.len(),
            });
        }

        if let Some(category) = &self.category {
            ensure_max_chars("video.category", category, MAX_CATEGORY_CHARS)?;
        }

        Ok(Video {
            thumbnail_location,
            title,
            description,
            content_location: self.content_location,
            player_location: self.player_location,
            duration: self.duration,
            expiration_date: self.expiration_date,
            rating: self.rating,
            view_count: self.view_count,
            publication_date: self.publication_date,
            family_friendly: self.family_friendly,
            restriction: self.restriction,
            platform: self.platform,
            prices: self.prices,
            requires_subscription: self.requires_subscription,
            uploader: self.uploader,
            live: self.live,
            tags: self.tags,
            category: self.category,
        })
    }
}
