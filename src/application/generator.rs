//! Renders a validated [`Sitemap`] into a sitemaps.org XML document.
//!
//! The generator trusts the domain model: it performs no validation of its
//! own and cannot fail while building the tree. Only serializing the
//! resulting [`XmlDocument`] to bytes can fail.
//!
//! # Document Shapes
//!
//! - a sitemap index renders a `sitemapindex` with one `sitemap` per child
//! - a page sitemap renders a `urlset` with one `url` per page; the
//!   `image` and `video` namespaces are declared only when some page uses them

use crate::domain::entities::{ChildSitemap, Image, Page, Sitemap, SitemapEntries, Video};
use crate::error::GenerateError;
use crate::infrastructure::xml::{XmlDocument, XmlElement};

pub const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";
pub const IMAGE_NAMESPACE: &str = "http://www.google.com/schemas/sitemap-image/1.1";
pub const VIDEO_NAMESPACE: &str = "http://www.google.com/schemas/sitemap-video/1.1";

/// Serialization settings for [`XmlGenerator::render`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Spaces per nesting level; `None` produces a compact document.
    pub indent: Option<usize>,
}

/// Stateless sitemap renderer; every call is independent.
#[derive(Debug, Clone, Copy, Default)]
pub struct XmlGenerator {
    options: GeneratorOptions,
}

impl XmlGenerator {
    pub fn new(options: GeneratorOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> GeneratorOptions {
        self.options
    }

    /// Builds the XML tree for `sitemap`.
    #[tracing::instrument(skip_all, fields(items = sitemap.len()))]
    pub fn generate(&self, sitemap: &Sitemap) -> XmlDocument {
        match sitemap.entries() {
            SitemapEntries::Index(children) => generate_index(children),
            SitemapEntries::Pages(pages) => generate_urlset(pages),
        }
    }

    /// Builds and serializes `sitemap` using the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError`] if the document cannot be serialized.
    pub fn render(&self, sitemap: &Sitemap) -> Result<String, GenerateError> {
        let xml = self
            .generate(sitemap)
            .to_xml_string_with_indent(self.options.indent)?;
        tracing::debug!(bytes = xml.len(), "Sitemap rendered");
        Ok(xml)
    }
}

fn generate_index(children: &[ChildSitemap]) -> XmlDocument {
    tracing::debug!(sitemaps = children.len(), "Generating sitemapindex");

    let mut root = XmlElement::new("sitemapindex");
    root.declare_namespace(None, SITEMAP_NAMESPACE);

    for child in children {
        let sitemap = root.add_child("sitemap");
        sitemap.add_text_child("loc", child.location().as_str());
        if let Some(lastmod) = child.last_modified() {
            sitemap.add_text_child("lastmod", lastmod.format_w3c());
        }
    }

    XmlDocument::new(root)
}

fn generate_urlset(pages: &[Page]) -> XmlDocument {
    let has_images = pages.iter().any(|p| !p.images().is_empty());
    let has_videos = pages.iter().any(|p| !p.videos().is_empty());
    tracing::debug!(
        pages = pages.len(),
        has_images,
        has_videos,
        "Generating urlset"
    );

    let mut root = XmlElement::new("urlset");
    root.declare_namespace(None, SITEMAP_NAMESPACE);
    if has_images {
        root.declare_namespace(Some("image"), IMAGE_NAMESPACE);
    }
    if has_videos {
        root.declare_namespace(Some("video"), VIDEO_NAMESPACE);
    }

    for page in pages {
        write_page(root.add_child("url"), page);
    }

    XmlDocument::new(root)
}

fn write_page(url: &mut XmlElement, page: &Page) {
    url.add_text_child("loc", page.location().as_str());
    if let Some(lastmod) = page.last_modified() {
        url.add_text_child("lastmod", lastmod.format_w3c());
    }
    if let Some(frequency) = page.change_frequency() {
        url.add_text_child("changefreq", frequency.as_str());
    }
    if let Some(priority) = page.priority() {
        url.add_text_child("priority", priority.to_string());
    }

    for image in page.images() {
        write_image(url.add_child("image:image"), image);
    }
    for video in page.videos() {
        write_video(url.add_child("video:video"), video);
    }
}

fn write_image(el: &mut XmlElement, image: &Image) {
    el.add_text_child("image:loc", image.location().as_str());
    if let Some(caption) = image.caption() {
        el.add_text_child("image:caption", caption);
    }
    if let Some(geo_location) = image.geo_location() {
        el.add_text_child("image:geo_location", geo_location);
    }
    if let Some(title) = image.title() {
        el.add_text_child("image:title", title);
    }
    if let Some(license) = image.license() {
        el.add_text_child("image:license", license.as_str());
    }
}

fn write_video(el: &mut XmlElement, video: &Video) {
    el.add_text_child("video:thumbnail_loc", video.thumbnail_location().as_str());
    el.add_text_child("video:title", video.title());
    el.add_text_child("video:description", video.description());

    if let Some(content) = video.content_location() {
        el.add_text_child("video:content_loc", content.as_str());
    }
    if let Some(player) = video.player_location() {
        let player_loc = el.add_text_child("video:player_loc", player.location().as_str());
        if let Some(allow_embed) = player.allow_embed() {
            player_loc.add_attribute("allow_embed", yes_no(allow_embed));
        }
    }
    if let Some(duration) = video.duration() {
        el.add_text_child("video:duration", duration.to_string());
    }
    if let Some(date) = video.expiration_date() {
        el.add_text_child("video:expiration_date", date.format_w3c());
    }
    if let Some(rating) = video.rating() {
        el.add_text_child("video:rating", rating.to_string());
    }
    if let Some(count) = video.view_count() {
        el.add_text_child("video:view_count", count.to_string());
    }
    if let Some(date) = video.publication_date() {
        el.add_text_child("video:publication_date", date.format_w3c());
    }
    if let Some(flag) = video.is_family_friendly() {
        el.add_text_child("video:family_friendly", yes_no(flag));
    }
    if let Some(restriction) = video.restriction() {
        el.add_text_child("video:restriction", restriction.countries().join(" "))
            .add_attribute("relationship", allow_deny(restriction.is_allowed()));
    }
    if let Some(platform) = video.platform() {
        let platforms: Vec<&str> = platform.platforms().iter().map(|p| p.as_str()).collect();
        el.add_text_child("video:platform", platforms.join(" "))
            .add_attribute("relationship", allow_deny(platform.is_allowed()));
    }
    for price in video.prices() {
        let price_el = el.add_text_child("video:price", price.value().to_string());
        price_el.add_attribute("currency", price.currency());
        if let Some(price_type) = price.price_type() {
            price_el.add_attribute("type", price_type.as_str());
        }
        if let Some(resolution) = price.resolution() {
            price_el.add_attribute("resolution", resolution.as_str());
        }
    }
    if let Some(flag) = video.requires_subscription() {
        el.add_text_child("video:requires_subscription", yes_no(flag));
    }
    if let Some(uploader) = video.uploader() {
        let uploader_el = el.add_text_child("video:uploader", uploader.name());
        if let Some(info) = uploader.info() {
            uploader_el.add_attribute("info", info.as_str());
        }
    }
    if let Some(flag) = video.is_live() {
        el.add_text_child("video:live", yes_no(flag));
    }
    for tag in video.tags() {
        el.add_text_child("video:tag", tag.as_str());
    }
    if let Some(category) = video.category() {
        el.add_text_child("video:category", category);
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

fn allow_deny(flag: bool) -> &'static str {
    if flag { "allow" } else { "deny" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{ChangeFrequency, PlayerLocation, Restriction};
    use crate::domain::values::{Location, Timestamp};

    fn loc(s: &str) -> Location {
        Location::parse(s).unwrap()
    }

    fn video() -> crate::domain::entities::VideoBuilder {
        Video::builder()
            .thumbnail_location(loc("https://example.com/thumb.jpg"))
            .title("Title")
            .description("Description")
            .content_location(loc("https://example.com/video.mp4"))
    }

    fn render_page(page: Page) -> String {
        let sitemap = Sitemap::pages(vec![page]).unwrap();
        XmlGenerator::default().render(&sitemap).unwrap()
    }

    #[test]
    fn test_yes_no_and_allow_deny() {
        assert_eq!(yes_no(true), "yes");
        assert_eq!(yes_no(false), "no");
        assert_eq!(allow_deny(true), "allow");
        assert_eq!(allow_deny(false), "deny");
    }

    #[test]
    fn test_index_document() {
        let sitemap = Sitemap::index(vec![
            ChildSitemap::new(
                loc("https://example.com/sitemap1.xml"),
                Some(Timestamp::parse_rfc3339("2023-01-15T10:00:00+00:00").unwrap()),
            ),
            ChildSitemap::new(loc("https://example.com/sitemap2.xml"), None),
        ])
        .unwrap();

        let xml = XmlGenerator::default().render(&sitemap).unwrap();
        assert_eq!(
            xml,
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <sitemapindex xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\
             <sitemap><loc>https://example.com/sitemap1.xml</loc><lastmod>2023-01-15T10:00:00+00:00</lastmod></sitemap>\
             <sitemap><loc>https://example.com/sitemap2.xml</loc></sitemap>\
             </sitemapindex>\n"
        );
    }

    #[test]
    fn test_page_fields_in_order() {
        let page = Page::builder()
            .location(loc("https://example.com/"))
            .last_modified(Timestamp::parse_rfc3339("2005-01-01T00:00:00+02:00").unwrap())
            .change_frequency(ChangeFrequency::Monthly)
            .priority(0.8)
            .build()
            .unwrap();

        let xml = render_page(page);
        assert!(xml.contains(
            "<url><loc>https://example.com/</loc><lastmod>2005-01-01T00:00:00+02:00</lastmod>\
             <changefreq>monthly</changefreq><priority>0.8</priority></url>"
        ));
        assert!(!xml.contains("xmlns:image"));
        assert!(!xml.contains("xmlns:video"));
    }

    #[test]
    fn test_whole_priority_has_no_fraction() {
        let page = Page::builder()
            .location(loc("https://example.com/"))
            .priority(1.0)
            .build()
            .unwrap();
        assert!(render_page(page).contains("<priority>1</priority>"));
    }

    #[test]
    fn test_player_location_embed_attribute() {
        let with_flag = Video::builder()
            .thumbnail_location(loc("https://example.com/thumb.jpg"))
            .title("Title")
            .description("Description")
            .player_location(PlayerLocation::new(
                loc("https://example.com/player?id=1"),
                Some(false),
            ))
            .build()
            .unwrap();
        let page = Page::builder()
            .location(loc("https://example.com/watch"))
            .video(with_flag)
            .build()
            .unwrap();

        let xml = render_page(page);
        assert!(xml.contains(
            "<video:player_loc allow_embed=\"no\">https://example.com/player?id=1</video:player_loc>"
        ));
        assert!(!xml.contains("video:content_loc"));
    }

    #[test]
    fn test_restriction_rendering() {
        let page = Page::builder()
            .location(loc("https://example.com/watch"))
            .video(
                video()
                    .restriction(
                        Restriction::new(vec!["US".to_string(), "CA".to_string()], false)
                            .unwrap(),
                    )
                    .build()
                    .unwrap(),
            )
            .build()
            .unwrap();

        assert!(
            render_page(page)
                .contains("<video:restriction relationship=\"deny\">US CA</video:restriction>")
        );
    }

    #[test]
    fn test_tri_state_flags() {
        let page = Page::builder()
            .location(loc("https://example.com/watch"))
            .video(video().family_friendly(true).live(false).build().unwrap())
            .build()
            .unwrap();

        let xml = render_page(page);
        assert!(xml.contains("<video:family_friendly>yes</video:family_friendly>"));
        assert!(xml.contains("<video:live>no</video:live>"));
        assert!(!xml.contains("video:requires_subscription"));
    }

    #[test]
    fn test_generate_is_deterministic() {
        let sitemap = Sitemap::pages(vec![
            Page::builder()
                .location(loc("https://example.com/a"))
                .image(Image::from_location(loc("https://example.com/a.jpg")))
                .video(video().tags(["x", "y"]).build().unwrap())
                .build()
                .unwrap(),
        ])
        .unwrap();

        let generator = XmlGenerator::default();
        assert_eq!(generator.generate(&sitemap), generator.generate(&sitemap));
        assert_eq!(
            generator.render(&sitemap).unwrap(),
            generator.render(&sitemap).unwrap()
        );
    }

    #[test]
    fn test_render_with_indent() {
        let sitemap = Sitemap::pages(vec![
            Page::builder()
                .location(loc("https://example.com/"))
                .build()
                .unwrap(),
        ])
        .unwrap();

        let xml = XmlGenerator::new(GeneratorOptions { indent: Some(2) })
            .render(&sitemap)
            .unwrap();
        assert!(xml.contains("\n  <url>\n    <loc>https://example.com/</loc>\n  </url>"));
    }
}
