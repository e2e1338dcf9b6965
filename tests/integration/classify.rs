//! Classification endpoints.

use crate::mock_server::{form, MockServerFixture};
use mockito::Matcher;
use textapi::types::{
    Category, ClassifyByTaxonomyParams, ClassifyByTaxonomyResponse, ClassifyParams,
    ClassifyResponse, TaxonomyCategory, TaxonomyLink, UnsupervisedClassifyParams,
    TAXONOMY_IAB_QAG,
};
use textapi::Error;

#[tokio::test]
async fn test_classify_sends_text_and_language() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_json(
            "/classify",
            Matcher::Exact("text=Just+a+random+piece+of+text&language=en".to_string()),
            r#"{"text": "Just a random piece of text", "language": "en",
                "categories": [{"code": "04000000", "label": "economy, business and finance", "confidence": 0.25}]}"#,
        )
        .await;

    let resp = fixture
        .client()
        .classify(&ClassifyParams::text("Just a random piece of text").with_language("en"))
        .await
        .expect("classify failed");

    mock.assert_async().await;
    assert_eq!(resp.language, "en");
    assert_eq!(
        resp.categories,
        vec![Category {
            code: "04000000".to_string(),
            label: "economy, business and finance".to_string(),
            confidence: 0.25,
        }]
    );
}

#[tokio::test]
async fn test_classify_prefers_text_over_url() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_json("/classify", Matcher::Exact("text=x".to_string()), "{}")
        .await;

    let params = ClassifyParams {
        text: Some("x".to_string()),
        url: Some("http://example.com/".to_string()),
        ..Default::default()
    };
    let resp = fixture.client().classify(&params).await.unwrap();

    mock.assert_async().await;
    assert_eq!(resp, ClassifyResponse::default());
}

#[tokio::test]
async fn test_unsupervised_classify_repeats_class_field() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_json(
            "/classify/unsupervised",
            Matcher::Exact(
                "text=Samsung+Galaxy+S+II&number_of_concepts=10&class=android&class=ios".to_string(),
            ),
            r#"{"text": "Samsung Galaxy S II", "classes": [
                {"label": "android", "score": 0.0925},
                {"label": "ios", "score": 0.0286}
            ]}"#,
        )
        .await;

    let params = UnsupervisedClassifyParams::text("Samsung Galaxy S II")
        .with_classes(["android", "ios"])
        .with_number_of_concepts(10);
    let resp = fixture.client().unsupervised_classify(&params).await.unwrap();

    mock.assert_async().await;
    assert_eq!(resp.classes.len(), 2);
    assert_eq!(resp.classes[0].label, "android");
    assert_eq!(resp.classes[0].score, 0.0925);
}

#[tokio::test]
async fn test_unsupervised_classify_needs_two_classes() {
    let mut fixture = MockServerFixture::new().await;
    let forbid = fixture.forbid_requests().await;
    let client = fixture.client();

    let no_source = UnsupervisedClassifyParams::default().with_classes(["android", "ios"]);
    let err = client.unsupervised_classify(&no_source).await.unwrap_err();
    assert_eq!(
        err.context().and_then(|c| c.field_path.as_deref()),
        Some("text|url")
    );

    let one_class = UnsupervisedClassifyParams::text("Samsung Galaxy S II").with_class("android");
    let err = client.unsupervised_classify(&one_class).await.unwrap_err();
    assert!(err.is_validation());
    assert_eq!(
        err.context().and_then(|c| c.field_path.as_deref()),
        Some("classes")
    );

    forbid.assert_async().await;
}

#[tokio::test]
async fn test_classify_by_taxonomy_targets_dynamic_path() {
    let mut fixture = MockServerFixture::new().await;
    let url = "http://techcrunch.com/2015/07/16/microsoft-will-never-give-up-on-mobile";
    let expected = ClassifyByTaxonomyResponse {
        text: "Microsoft will never give up on mobile".to_string(),
        language: "en".to_string(),
        taxonomy: TAXONOMY_IAB_QAG.to_string(),
        categories: vec![TaxonomyCategory {
            id: "IAB19-36".to_string(),
            label: "Windows".to_string(),
            score: 0.5675236066291172,
            confident: true,
            links: vec![TaxonomyLink {
                link: "https://api.aylien.com/api/v1/classify/taxonomy/iab-qag#IAB19-36".to_string(),
                rel: "self".to_string(),
            }],
        }],
    };
    let mock = fixture
        .mock_json(
            "/classify/iab-qag",
            form(&[("url", url)]),
            &serde_json::to_string(&expected).unwrap(),
        )
        .await;

    let params = ClassifyByTaxonomyParams::url(url).with_taxonomy(TAXONOMY_IAB_QAG);
    let resp = fixture.client().classify_by_taxonomy(&params).await.unwrap();

    mock.assert_async().await;
    assert_eq!(resp, expected);
}

#[tokio::test]
async fn test_classify_by_taxonomy_requires_taxonomy() {
    let mut fixture = MockServerFixture::new().await;
    let forbid = fixture.forbid_requests().await;

    let params = ClassifyByTaxonomyParams::url("http://example.com/");
    let err = fixture
        .client()
        .classify_by_taxonomy(&params)
        .await
        .unwrap_err();

    match err {
        Error::Validation { message, context } => {
            assert_eq!(message, "you must specify the taxonomy");
            assert_eq!(context.field_path.as_deref(), Some("taxonomy"));
            assert_eq!(context.source.as_deref(), Some("classify_by_taxonomy"));
        }
        other => panic!("expected validation error, got {other:?}"),
    }
    forbid.assert_async().await;
}
