//! Location of an embeddable video player.

use crate::domain::values::Location;

/// A `video:player_loc` value with its optional embed permission.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerLocation {
    location: Location,
    allow_embed: Option<bool>,
}

impl PlayerLocation {
    pub fn new(location: Location, allow_embed: Option<bool>) -> Self {
        Self {
            location,
            allow_embed,
        }
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    /// `None` means the `allow_embed` attribute is not rendered at all.
    pub fn allow_embed(&self) -> Option<bool> {
        self.allow_embed
    }
}
