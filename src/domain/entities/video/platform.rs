//! Platform restriction for video playback.

use crate::error::ModelError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{Display, EnumString, IntoStaticStr};

/// Device class a video can be played on.
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
pub enum PlatformKind {
    Web,
    Mobile,
    Tv,
}

impl PlatformKind {
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// # Errors
    ///
    /// Returns [`ModelError::InvalidEnumValue`] for anything but `web`, `mobile` or `tv`.
    pub fn parse(value: &str) -> Result<Self, ModelError> {
        Self::from_str(value).map_err(|_| ModelError::invalid_enum("video.platform", value))
    }
}

/// Platforms where a video may (allow-list) or may not (deny-list) be shown.
///
/// Duplicates are neither removed nor rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct Platform {
    platforms: Vec<PlatformKind>,
    is_allowed: bool,
}

impl Platform {
    /// # Errors
    ///
    /// Returns [`ModelError::EmptySequence`] if `platforms` is empty.
    pub fn new(platforms: Vec<PlatformKind>, is_allowed: bool) -> Result<Self, ModelError> {
        if platforms.is_empty() {
            return Err(ModelError::EmptySequence {
                field: "video.platform",
            });
        }

        Ok(Self {
            platforms,
            is_allowed,
        })
    }

    /// Builds a platform list from its wire tokens.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::EmptySequence`] for an empty list and
    /// [`ModelError::InvalidEnumValue`] for an unknown token.
    pub fn parse<S: AsRef<str>>(platforms: &[S], is_allowed: bool) -> Result<Self, ModelError> {
        let platforms = platforms
            .iter()
            .map(|p| PlatformKind::parse(p.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(platforms, is_allowed)
    }

    pub fn platforms(&self) -> &[PlatformKind] {
        &self.platforms
    }

    pub fn is_allowed(&self) -> bool {
        self.is_allowed
    }
}
