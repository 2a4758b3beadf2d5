#![allow(dead_code)]

use sitemap_xml::domain::entities::VideoBuilder;
use sitemap_xml::prelude::*;

pub const DECL: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

pub fn loc(s: &str) -> Location {
    Location::parse(s).unwrap()
}

pub fn ts(s: &str) -> Timestamp {
    Timestamp::parse_rfc3339(s).unwrap()
}

pub fn simple_page(url: &str) -> Page {
    Page::builder().location(loc(url)).build().unwrap()
}

/// A video with only the required fields and a content location.
pub fn video_builder() -> VideoBuilder {
    Video::builder()
        .thumbnail_location(loc("https://www.example.com/thumbs/123.jpg"))
        .title("Grilling steaks for summer")
        .description("Alkis shows you how to get perfectly done steaks every time")
        .content_location(loc("http://streamserver.example.com/video123.mp4"))
}

pub fn render(sitemap: &Sitemap) -> String {
    XmlGenerator::default().render(sitemap).unwrap()
}

pub fn render_pages(pages: Vec<Page>) -> String {
    render(&Sitemap::pages(pages).unwrap())
}
