//! Reference to another sitemap document, listed inside a sitemap index.

use crate::domain::values::{Location, Timestamp};

/// An entry of a `sitemapindex` document.
#[derive(Debug, Clone, PartialEq)]
pub struct ChildSitemap {
    location: Location,
    last_modified: Option<Timestamp>,
}

impl ChildSitemap {
    pub fn new(location: Location, last_modified: Option<Timestamp>) -> Self {
        Self {
            location,
            last_modified,
        }
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn last_modified(&self) -> Option<&Timestamp> {
        self.last_modified.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_child_sitemap_creation() {
        let location = Location::parse("https://example.com/sitemap-1.xml").unwrap();
        let lastmod = Timestamp::parse_rfc3339("2023-01-15T10:00:00+00:00").unwrap();

        let child = ChildSitemap::new(location.clone(), Some(lastmod));

        assert_eq!(child.location(), &location);
        assert_eq!(child.last_modified(), Some(&lastmod));
    }

    #[test]
    fn test_child_sitemap_without_lastmod() {
        let child = ChildSitemap::new(
            Location::parse("https://example.com/sitemap-2.xml").unwrap(),
            None,
        );
        assert!(child.last_modified().is_none());
    }
}
