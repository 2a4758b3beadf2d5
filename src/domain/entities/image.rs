//! Image metadata attached to a page (Google image sitemap extension).

use crate::domain::values::Location;

/// An `image:image` entry of a page.
///
/// Images carry no range rules; every optional field is rendered only when set.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    location: Location,
    caption: Option<String>,
    geo_location: Option<String>,
    title: Option<String>,
    license: Option<Location>,
}

impl Image {
    pub fn new(
        location: Location,
        caption: Option<String>,
        geo_location: Option<String>,
        title: Option<String>,
        license: Option<Location>,
    ) -> Self {
        Self {
            location,
            caption,
            geo_location,
            title,
            license,
        }
    }

    /// Creates an image that only has a location.
    pub fn from_location(location: Location) -> Self {
        Self::new(location, None, None, None, None)
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }

    pub fn geo_location(&self) -> Option<&str> {
        self.geo_location.as_deref()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn license(&self) -> Option<&Location> {
        self.license.as_ref()
    }
}
