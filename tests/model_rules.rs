mod common;

use common::{loc, simple_page, video_builder};
use sitemap_xml::prelude::*;

fn page_with_video(page_url: &str, video: Video) -> Result<Page, ModelError> {
    Page::builder().location(loc(page_url)).video(video).build()
}

#[test]
fn test_rebuilding_same_page_succeeds() {
    let build = || {
        Page::builder()
            .location(loc("https://www.example.com/"))
            .change_frequency(ChangeFrequency::Hourly)
            .priority(0.3)
            .build()
    };

    let first = build().unwrap();
    let second = build().unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_content_and_player_location_exclusive() {
    let player = PlayerLocation::new(loc("https://www.example.com/player"), None);

    let neither = Video::builder()
        .thumbnail_location(loc("https://www.example.com/t.jpg"))
        .title("t")
        .description("d")
        .build()
        .unwrap_err();
    assert_eq!(neither.kind(), ErrorKind::MutuallyExclusiveFieldsViolated);

    let both = video_builder()
        .player_location(player)
        .build()
        .unwrap_err();
    assert_eq!(both.kind(), ErrorKind::MutuallyExclusiveFieldsViolated);

    assert!(video_builder().build().is_ok());
}

#[test]
fn test_description_boundary() {
    assert!(video_builder().description("d".repeat(2048)).build().is_ok());

    let err = video_builder()
        .description("d".repeat(2049))
        .build()
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::StringTooLong);
}

#[test]
fn test_priority_boundaries() {
    for ok in [0.0, 1.0, 5.0] {
        assert!(
            Page::builder()
                .location(loc("https://www.example.com/"))
                .priority(ok)
                .build()
                .is_ok(),
            "priority {ok} should be accepted"
        );
    }

    for bad in [5.1, -0.1] {
        let err = Page::builder()
            .location(loc("https://www.example.com/"))
            .priority(bad)
            .build()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueOutOfRange);
    }
}

#[test]
fn test_sitemap_empty_and_mixed() {
    assert_eq!(
        Sitemap::from_items(Vec::new()).unwrap_err().kind(),
        ErrorKind::EmptySequence
    );

    let mixed = Sitemap::from_items(vec![
        simple_page("https://www.example.com/").into(),
        ChildSitemap::new(loc("https://www.example.com/sitemap.xml"), None).into(),
    ])
    .unwrap_err();
    assert_eq!(mixed.kind(), ErrorKind::TypeMismatch);
}

#[test]
fn test_video_content_location_equal_to_page() {
    let video = video_builder()
        .content_location(loc("https://www.example.com/watch"))
        .build()
        .unwrap();

    let err = page_with_video("https://www.example.com/watch", video).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RelationalConstraintViolated);
}

#[test]
fn test_location_comparison_uses_canonical_form() {
    // both normalize to https://www.example.com/
    let video = video_builder()
        .content_location(loc("https://WWW.example.com"))
        .build()
        .unwrap();

    let err = page_with_video("https://www.example.com/", video).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RelationalConstraintViolated);
}

#[test]
fn test_uploader_info_on_other_host() {
    let video = video_builder()
        .uploader(Uploader::new("Chef", Some(loc("https://cdn.example.net/chef"))).unwrap())
        .build()
        .unwrap();

    let err = page_with_video("https://www.example.com/watch", video).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RelationalConstraintViolated);
}

#[test]
fn test_uploader_without_info_is_not_checked() {
    let video = video_builder()
        .uploader(Uploader::new("Chef", None).unwrap())
        .build()
        .unwrap();

    assert!(page_with_video("https://www.example.com/watch", video).is_ok());
}

#[test]
fn test_error_messages_name_the_field() {
    let err = video_builder().rating(7.5).build().unwrap_err();
    assert!(err.to_string().contains("video.rating"));
    assert!(err.to_string().contains("7.5"));
}

#[test]
fn test_entities_are_thread_safe() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Sitemap>();
    assert_send_sync::<Page>();
    assert_send_sync::<Video>();
    assert_send_sync::<XmlGenerator>();
}
