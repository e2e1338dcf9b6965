//! Extract, microformats and image tagging.

use crate::mock_server::{form, MockServerFixture};
use mockito::Matcher;
use textapi::types::{
    ExtractParams, ImageTagsParams, MicroformatsParams, MicroformatsResponse,
};

#[tokio::test]
async fn test_extract_always_sends_best_image() {
    let mut fixture = MockServerFixture::new().await;
    let by_url = fixture
        .mock_json(
            "/extract",
            Matcher::Exact("url=http%3A%2F%2Fexample.com%2F&best_image=false".to_string()),
            r#"{"title": "Example Domain", "article": "This domain is for use in examples.",
                "image": "", "author": "", "videos": [], "feeds": []}"#,
        )
        .await;
    let by_html = fixture
        .mock_json(
            "/extract",
            Matcher::Exact("html=%3Cp%3Ehi%3C%2Fp%3E&best_image=true".to_string()),
            r#"{"title": "", "article": "hi", "image": "http://example.com/a.png"}"#,
        )
        .await;
    let client = fixture.client();

    let resp = client
        .extract(&ExtractParams::url("http://example.com/"))
        .await
        .unwrap();
    assert_eq!(resp.title, "Example Domain");

    let resp = client
        .extract(&ExtractParams::html("<p>hi</p>").with_best_image(true))
        .await
        .unwrap();
    assert_eq!(resp.image, "http://example.com/a.png");
    assert!(resp.videos.is_empty());

    by_url.assert_async().await;
    by_html.assert_async().await;
}

#[tokio::test]
async fn test_microformats() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_json(
            "/microformats",
            form(&[("url", "http://aylien.com/")]),
            r#"{"hCards": [{"id": "a", "fullName": "AYLIEN", "organization": "AYLIEN",
                "address": {"locality": "Dublin", "countryName": "Ireland"}}]}"#,
        )
        .await;

    let resp = fixture
        .client()
        .microformats(&MicroformatsParams::url("http://aylien.com/"))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_ne!(resp, MicroformatsResponse::default());
    assert_eq!(resp.hcards[0].full_name, "AYLIEN");
    assert_eq!(resp.hcards[0].address.locality, "Dublin");
}

#[tokio::test]
async fn test_image_tags() {
    let mut fixture = MockServerFixture::new().await;
    let url = "https://developer.aylien.com/images/logo-small.png";
    let mock = fixture
        .mock_json(
            "/image-tags",
            form(&[("url", url)]),
            r#"{"string": "https://developer.aylien.com/images/logo-small.png",
                "tags": [{"tag": "logo", "confidence": 0.87}, {"tag": "text", "confidence": 0.5}]}"#,
        )
        .await;

    let resp = fixture
        .client()
        .image_tags(&ImageTagsParams::url(url))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(resp.image, url);
    assert_eq!(resp.tags.len(), 2);
    assert_eq!(resp.tags[0].confidence, 0.87);
}
