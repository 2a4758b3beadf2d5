//! Country restriction for video playback.

use crate::error::ModelError;

/// Countries where a video may (allow-list) or may not (deny-list) be shown.
///
/// Country codes are kept as given; their format is not checked.
#[derive(Debug, Clone, PartialEq)]
pub struct Restriction {
    countries: Vec<String>,
    is_allowed: bool,
}

impl Restriction {
    /// # Errors
    ///
    /// Returns [`ModelError::EmptySequence`] if `countries` is empty.
    pub fn new(countries: Vec<String>, is_allowed: bool) -> Result<Self, ModelError> {
        if countries.is_empty() {
            return Err(ModelError::EmptySequence {
                field: "video.restriction.countries",
            });
        }

        Ok(Self {
            countries,
            is_allowed,
        })
    }

    pub fn countries(&self) -> &[String] {
        &self.countries
    }

    pub fn is_allowed(&self) -> bool {
        self.is_allowed
    }
}
