//! Combined endpoint and its tagged sub-results.

use crate::mock_server::MockServerFixture;
use mockito::Matcher;
use textapi::types::{CombinedEndpoint, CombinedParams, EndpointResult};

#[tokio::test]
async fn test_combined_dispatches_by_tag_and_skips_unknown() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_json(
            "/combined",
            Matcher::Exact("text=Great+game&endpoint=sentiment&endpoint=bogus".to_string()),
            r#"{"text": "Great game", "results": [
                {"endpoint": "sentiment", "result": {
                    "text": "Great game", "polarity": "positive", "polarity_confidence": 0.95,
                    "subjectivity": "subjective", "subjectivity_confidence": 1.0
                }},
                {"endpoint": "bogus", "result": {"whatever": true}}
            ]}"#,
        )
        .await;

    let params = CombinedParams::text("Great game")
        .with_endpoint(CombinedEndpoint::Sentiment)
        .with_endpoint("bogus");
    let resp = fixture.client().combined(&params).await.unwrap();

    mock.assert_async().await;
    assert_eq!(resp.text, "Great game");
    assert_eq!(resp.sentiment.as_ref().unwrap().polarity, "positive");
    assert_eq!(resp.sentiment.as_ref().unwrap().polarity_confidence, 0.95);
    assert!(resp.article.is_none());
    assert!(resp.summary.is_none());
    assert!(resp.concepts.is_none());
    assert!(resp.entities.is_none());
    assert!(resp.hashtags.is_none());
    assert!(resp.language.is_none());
    assert!(resp.classifications.is_none());
    assert_eq!(
        resp.results[1],
        EndpointResult::Unknown {
            endpoint: "bogus".to_string()
        }
    );
}

#[tokio::test]
async fn test_combined_url_with_several_endpoints() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_json(
            "/combined",
            Matcher::Exact(
                "url=http%3A%2F%2Fexample.com%2F&endpoint=extract&endpoint=language&endpoint=hashtags"
                    .to_string(),
            ),
            r##"{"text": "", "results": [
                {"endpoint": "extract", "result": {"title": "Example Domain", "article": "body"}},
                {"endpoint": "language", "result": {"lang": "en", "confidence": 0.99}},
                {"endpoint": "hashtags", "result": {"language": "en", "hashtags": ["#Example"]}}
            ]}"##,
        )
        .await;

    let params = CombinedParams::url("http://example.com/").with_endpoints([
        CombinedEndpoint::Extract,
        CombinedEndpoint::Language,
        CombinedEndpoint::Hashtags,
    ]);
    let resp = fixture.client().combined(&params).await.unwrap();

    mock.assert_async().await;
    assert_eq!(resp.article.unwrap().title, "Example Domain");
    assert_eq!(resp.language.unwrap().language, "en");
    assert_eq!(resp.hashtags.unwrap().hashtags, vec!["#Example"]);
    assert!(resp.sentiment.is_none());
}

#[tokio::test]
async fn test_combined_malformed_sub_result_is_invalid_response() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_json(
            "/combined",
            Matcher::Any,
            r#"{"text": "t", "results": [{"endpoint": "summarize", "result": {"sentences": 42}}]}"#,
        )
        .await;

    let params = CombinedParams::text("t").with_endpoints(["summarize", "sentiment"]);
    let err = fixture.client().combined(&params).await.unwrap_err();

    assert_eq!(err.to_string(), "invalid response");
    assert_eq!(err.status(), Some(200));
}

#[tokio::test]
async fn test_combined_needs_two_endpoints() {
    let mut fixture = MockServerFixture::new().await;
    let forbid = fixture.forbid_requests().await;

    let params = CombinedParams::text("t").with_endpoint(CombinedEndpoint::Sentiment);
    let err = fixture.client().combined(&params).await.unwrap_err();

    assert!(err.is_validation());
    assert_eq!(
        err.context().and_then(|c| c.field_path.as_deref()),
        Some("endpoints")
    );
    forbid.assert_async().await;
}
