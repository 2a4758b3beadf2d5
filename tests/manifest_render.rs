mod common;

use common::DECL;
use sitemap_xml::dto::{ManifestError, SitemapManifest, parse_sitemap};
use sitemap_xml::prelude::*;

#[test]
fn test_manifest_to_xml() {
    let sitemap = parse_sitemap(
        r#"{
            "pages": [
                {
                    "loc": "https://www.example.com/",
                    "lastmod": "2023-01-15T10:00:00+00:00",
                    "changefreq": "daily",
                    "priority": 1.0
                },
                {
                    "loc": "https://www.example.com/gallery",
                    "images": [{ "loc": "https://www.example.com/photo.jpg", "title": "Photo" }]
                }
            ]
        }"#,
    )
    .unwrap();

    let xml = XmlGenerator::default().render(&sitemap).unwrap();

    assert_eq!(
        xml,
        format!(
            "{DECL}<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\" \
             xmlns:image=\"http://www.google.com/schemas/sitemap-image/1.1\">\
             <url><loc>https://www.example.com/</loc><lastmod>2023-01-15T10:00:00+00:00</lastmod>\
             <changefreq>daily</changefreq><priority>1</priority></url>\
             <url><loc>https://www.example.com/gallery</loc>\
             <image:image><image:loc>https://www.example.com/photo.jpg</image:loc>\
             <image:title>Photo</image:title></image:image></url>\
             </urlset>\n"
        )
    );
}

#[test]
fn test_manifest_video_rules_apply() {
    let err = parse_sitemap(
        r#"{"pages": [{
            "loc": "https://www.example.com/watch",
            "videos": [{
                "thumbnail_loc": "https://www.example.com/t.jpg",
                "title": "t",
                "description": "d",
                "content_loc": "https://www.example.com/v.mp4",
                "duration": 28801
            }]
        }]}"#,
    )
    .unwrap_err();

    match err {
        ManifestError::Model(e) => assert_eq!(e.kind(), ErrorKind::ValueOutOfRange),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_manifest_invalid_price_type() {
    let err = parse_sitemap(
        r#"{"pages": [{
            "loc": "https://www.example.com/watch",
            "videos": [{
                "thumbnail_loc": "https://www.example.com/t.jpg",
                "title": "t",
                "description": "d",
                "content_loc": "https://www.example.com/v.mp4",
                "prices": [{ "value": 2.5, "currency": "USD", "type": "lease" }]
            }]
        }]}"#,
    )
    .unwrap_err();

    match err {
        ManifestError::Model(e) => assert_eq!(e.kind(), ErrorKind::InvalidEnumValue),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_manifest_shape_errors() {
    assert!(matches!(
        SitemapManifest::from_json("{\"urls\": []}"),
        Err(ManifestError::Parse(_))
    ));
    assert!(matches!(
        SitemapManifest::from_json("not json"),
        Err(ManifestError::Parse(_))
    ));
}

#[test]
fn test_manifest_index() {
    let sitemap = parse_sitemap(
        r#"{"sitemaps": [
            { "loc": "https://www.example.com/sitemap-pages.xml" },
            { "loc": "https://www.example.com/sitemap-videos.xml", "lastmod": "2024-01-01T00:00:00Z" }
        ]}"#,
    )
    .unwrap();

    let xml = XmlGenerator::default().render(&sitemap).unwrap();
    assert!(xml.contains("<sitemapindex"));
    assert!(xml.contains("<lastmod>2024-01-01T00:00:00+00:00</lastmod>"));
}
