//! Uploader of a video.

use crate::domain::values::Location;
use crate::error::{ModelError, ensure_max_chars};

pub const MAX_UPLOADER_NAME_CHARS: usize = 255;

/// A `video:uploader` entry.
///
/// The host of `info` must match the host of the page that embeds the video;
/// that rule is checked when the [`Page`](crate::domain::entities::Page) is built.
#[derive(Debug, Clone, PartialEq)]
pub struct Uploader {
    name: String,
    info: Option<Location>,
}

impl Uploader {
    /// # Errors
    ///
    /// Returns [`ModelError::StringTooLong`] if `name` exceeds 255 characters.
    pub fn new(name: impl Into<String>, info: Option<Location>) -> Result<Self, ModelError> {
        let name = name.into();
        ensure_max_chars("video.uploader", &name, MAX_UPLOADER_NAME_CHARS)?;

        Ok(Self { name, info })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn info(&self) -> Option<&Location> {
        self.info.as_ref()
    }
}
