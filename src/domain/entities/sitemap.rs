//! The sitemap aggregate: either a list of pages or a sitemap index.

use crate::domain::entities::{ChildSitemap, Page};
use crate::error::ModelError;

/// A validated sitemap document model.
///
/// A sitemap holds either pages, rendered as a `urlset`, or child sitemaps,
/// rendered as a `sitemapindex`, and is never empty. Use [`Sitemap::entries`]
/// to branch on the kind.
#[derive(Debug, Clone, PartialEq)]
pub struct Sitemap(Items);

#[derive(Debug, Clone, PartialEq)]
enum Items {
    Pages(Vec<Page>),
    Index(Vec<ChildSitemap>),
}

/// Borrowed view of a sitemap's entries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SitemapEntries<'a> {
    Pages(&'a [Page]),
    Index(&'a [ChildSitemap]),
}

/// One entry of a sitemap whose kind is only known at runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum SitemapItem {
    Page(Page),
    ChildSitemap(ChildSitemap),
}

impl From<Page> for SitemapItem {
    fn from(page: Page) -> Self {
        Self::Page(page)
    }
}

impl From<ChildSitemap> for SitemapItem {
    fn from(child: ChildSitemap) -> Self {
        Self::ChildSitemap(child)
    }
}

impl Sitemap {
    /// Creates a `urlset` sitemap.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::EmptySequence`] if `pages` is empty.
    pub fn pages(pages: Vec<Page>) -> Result<Self, ModelError> {
        if pages.is_empty() {
            return Err(ModelError::EmptySequence { field: "sitemap" });
        }
        Ok(Self(Items::Pages(pages)))
    }

    /// Creates a `sitemapindex` sitemap.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::EmptySequence`] if `sitemaps` is empty.
    pub fn index(sitemaps: Vec<ChildSitemap>) -> Result<Self, ModelError> {
        if sitemaps.is_empty() {
            return Err(ModelError::EmptySequence { field: "sitemap" });
        }
        Ok(Self(Items::Index(sitemaps)))
    }

    /// Creates a sitemap from entries of either kind, which must all be the same kind.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::EmptySequence`] if `items` is empty and
    /// [`ModelError::TypeMismatch`] if pages and child sitemaps are mixed.
    pub fn from_items(items: Vec<SitemapItem>) -> Result<Self, ModelError> {
        let Some(first) = items.first() else {
            return Err(ModelError::EmptySequence { field: "sitemap" });
        };

        match first {
            SitemapItem::Page(_) => {
                let pages = items
                    .into_iter()
                    .map(|item| match item {
                        SitemapItem::Page(page) => Ok(page),
                        SitemapItem::ChildSitemap(_) => Err(mismatch()),
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Self(Items::Pages(pages)))
            }
            SitemapItem::ChildSitemap(_) => {
                let sitemaps = items
                    .into_iter()
                    .map(|item| match item {
                        SitemapItem::ChildSitemap(child) => Ok(child),
                        SitemapItem::Page(_) => Err(mismatch()),
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Self(Items::Index(sitemaps)))
            }
        }
    }

    pub fn entries(&self) -> SitemapEntries<'_> {
        match &self.0 {
            Items::Pages(pages) => SitemapEntries::Pages(pages),
            Items::Index(sitemaps) => SitemapEntries::Index(sitemaps),
        }
    }

    /// Number of entries in the document, always at least one.
    pub fn len(&self) -> usize {
        match &self.0 {
            Items::Pages(pages) => pages.len(),
            Items::Index(sitemaps) => sitemaps.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_index(&self) -> bool {
        matches!(self.0, Items::Index(_))
    }

    /// The pages of a `urlset` sitemap, `None` for a sitemap index.
    pub fn pages_slice(&self) -> Option<&[Page]> {
        match &self.0 {
            Items::Pages(pages) => Some(pages),
            Items::Index(_) => None,
        }
    }

    /// The child sitemaps of a sitemap index, `None` for a `urlset`.
    pub fn child_sitemaps(&self) -> Option<&[ChildSitemap]> {
        match &self.0 {
            Items::Index(sitemaps) => Some(sitemaps),
            Items::Pages(_) => None,
        }
    }
}

fn mismatch() -> ModelError {
    ModelError::TypeMismatch {
        field: "sitemap",
        message: "every sitemap item must be of the same type".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::values::Location;
    use crate::error::ErrorKind;

    fn page(s: &str) -> Page {
        Page::builder()
            .location(Location::parse(s).unwrap())
            .build()
            .unwrap()
    }

    fn child(s: &str) -> ChildSitemap {
        ChildSitemap::new(Location::parse(s).unwrap(), None)
    }

    #[test]
    fn test_sitemap_pages() {
        let sitemap = Sitemap::pages(vec![page("https://example.com/a")]).unwrap();
        assert_eq!(sitemap.len(), 1);
        assert!(!sitemap.is_empty());
        assert!(!sitemap.is_index());
        assert!(sitemap.child_sitemaps().is_none());
    }

    #[test]
    fn test_sitemap_index() {
        let sitemap = Sitemap::index(vec![
            child("https://example.com/s1.xml"),
            child("https://example.com/s2.xml"),
        ])
        .unwrap();
        assert_eq!(sitemap.len(), 2);
        assert!(sitemap.is_index());
    }

    #[test]
    fn test_sitemap_empty() {
        assert_eq!(
            Sitemap::pages(Vec::new()).unwrap_err().kind(),
            ErrorKind::EmptySequence
        );
        assert_eq!(
            Sitemap::index(Vec::new()).unwrap_err().kind(),
            ErrorKind::EmptySequence
        );
        assert_eq!(
            Sitemap::from_items(Vec::new()).unwrap_err().kind(),
            ErrorKind::EmptySequence
        );
    }

    #[test]
    fn test_sitemap_from_items_homogeneous() {
        let sitemap = Sitemap::from_items(vec![
            page("https://example.com/a").into(),
            page("https://example.com/b").into(),
        ])
        .unwrap();
        assert_eq!(sitemap.pages_slice().map(<[Page]>::len), Some(2));

        let sitemap =
            Sitemap::from_items(vec![child("https://example.com/s1.xml").into()]).unwrap();
        assert!(sitemap.is_index());
    }

    #[test]
    fn test_sitemap_from_items_mixed() {
        let err = Sitemap::from_items(vec![
            page("https://example.com/a").into(),
            child("https://example.com/s1.xml").into(),
        ])
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);

        let err = Sitemap::from_items(vec![
            child("https://example.com/s1.xml").into(),
            page("https://example.com/a").into(),
        ])
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
    }
}
