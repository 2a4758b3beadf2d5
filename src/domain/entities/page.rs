//! Page entity: one `url` entry of a `urlset` document.

use crate::domain::entities::{Image, Video};
use crate::domain::values::{Location, Timestamp};
use crate::error::ModelError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{Display, EnumString, IntoStaticStr};

/// Upper bound accepted for [`Page::priority`].
///
/// The sitemaps.org protocol describes priorities between 0.0 and 1.0, but
/// values up to 5.0 have always been accepted here and existing callers rely on it.
pub const MAX_PRIORITY: f64 = 5.0;

/// How often the content at a location is expected to change.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFrequency {
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// # Errors
    ///
    /// Returns [`ModelError::InvalidEnumValue`] for a token outside the seven protocol values.
    pub fn parse(value: &str) -> Result<Self, ModelError> {
        Self::from_str(value).map_err(|_| ModelError::invalid_enum("page.changefreq", value))
    }
}

/// A page listed in a sitemap, with its embedded images and videos.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    location: Location,
    last_modified: Option<Timestamp>,
    change_frequency: Option<ChangeFrequency>,
    priority: Option<f64>,
    images: Vec<Image>,
    videos: Vec<Video>,
}

impl Page {
    pub fn builder() -> PageBuilder {
        PageBuilder::default()
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn last_modified(&self) -> Option<&Timestamp> {
        self.last_modified.as_ref()
    }

    pub fn change_frequency(&self) -> Option<ChangeFrequency> {
        self.change_frequency
    }

    pub fn priority(&self) -> Option<f64> {
        self.priority
    }

    pub fn images(&self) -> &[Image] {
        &self.images
    }

    pub fn videos(&self) -> &[Video] {
        &self.videos
    }
}

/// Collects the fields of a [`Page`]; nothing is validated until [`build`](Self::build).
#[derive(Debug, Clone, Default)]
pub struct PageBuilder {
    location: Option<Location>,
    last_modified: Option<Timestamp>,
    change_frequency: Option<ChangeFrequency>,
    priority: Option<f64>,
    images: Vec<Image>,
    videos: Vec<Video>,
}

impl PageBuilder {
    pub fn location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    pub fn last_modified(mut self, date: impl Into<Timestamp>) -> Self {
        self.last_modified = Some(date.into());
        self
    }

    pub fn change_frequency(mut self, frequency: ChangeFrequency) -> Self {
        self.change_frequency = Some(frequency);
        self
    }

    pub fn priority(mut self, priority: f64) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn image(mut self, image: Image) -> Self {
        self.images.push(image);
        self
    }

    pub fn images(mut self, images: impl IntoIterator<Item = Image>) -> Self {
        self.images.extend(images);
        self
    }

    pub fn video(mut self, video: Video) -> Self {
        self.videos.push(video);
        self
    }

    pub fn videos(mut self, videos: impl IntoIterator<Item = Video>) -> Self {
        self.videos.extend(videos);
        self
    }

    /// Validates the collected fields and produces an immutable [`Page`].
    ///
    /// Besides its own fields, every video is checked against the page location:
    /// its content and player locations must differ from it, and its uploader
    /// info URL must be on the same host.
    ///
    /// # Errors
    ///
    /// - [`ModelError::RequiredValueMissing`] without a location
    /// - [`ModelError::ValueOutOfRange`] for a priority outside 0..=5
    /// - [`ModelError::RelationalConstraintViolated`] for a video breaking a page rule
    pub fn build(self) -> Result<Page, ModelError> {
        let location = self.location.ok_or(ModelError::RequiredValueMissing {
            field: "page.loc",
        })?;

        if let Some(priority) = self.priority
            && !(0.0..=MAX_PRIORITY).contains(&priority)
        {
            return Err(ModelError::out_of_range(
                "page.priority",
                format!("priority must be between 0 and {MAX_PRIORITY}, got {priority}"),
            ));
        }

        for video in &self.videos {
            check_video_against_page(video, &location)?;
        }

        Ok(Page {
            location,
            last_modified: self.last_modified,
            change_frequency: self.change_frequency,
            priority: self.priority,
            images: self.images,
            videos: self.videos,
        })
    }
}

fn check_video_against_page(video: &Video, page: &Location) -> Result<(), ModelError> {
    if let Some(content) = video.content_location()
        && content.as_str() == page.as_str()
    {
        return Err(ModelError::relational(
            "video.content_loc",
            format!("content location must not be equal to the page location {page}"),
        ));
    }

    if let Some(player) = video.player_location()
        && player.location().as_str() == page.as_str()
    {
        return Err(ModelError::relational(
            "video.player_loc",
            format!("player location must not be equal to the page location {page}"),
        ));
    }

    if let Some(info) = video.uploader().and_then(|u| u.info())
        && info.host() != page.host()
    {
        return Err(ModelError::relational(
            "video.uploader.info",
            format!(
                "uploader info {info} must be on the same host as the page location {page}"
            ),
        ));
    }

    Ok(())
}
