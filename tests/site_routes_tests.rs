use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

mod common;

async fn get_body(uri: &str) -> (StatusCode, String) {
    let (_pool, app) = common::setup_test_app().await;
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn test_home_page_hosts_the_quick_form() {
    let (status, body) = get_body("/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Quick Contact"));
    assert!(body.contains("name=\"name\""));
    assert!(body.contains("Send Quick Message"));
}

#[tokio::test]
async fn test_about_page_returns_200() {
    let (status, body) = get_body("/about").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("About Voltedge Engineering"));
}

#[tokio::test]
async fn test_services_page_lists_every_category() {
    let (status, body) = get_body("/services").await;
    assert_eq!(status, StatusCode::OK);
    for label in [
        "IT Infrastructure",
        "Networking Solutions",
        "CCTV &amp; Security Systems",
        "Power Backup Solutions",
        "Solar Energy Systems",
        "Engineering Services",
        "General Consultation",
    ] {
        assert!(body.contains(label), "missing service {label:?}");
    }
}

#[tokio::test]
async fn test_quote_page_returns_200() {
    let (status, body) = get_body("/quote").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Get a Quote"));
    assert!(body.contains("action=\"/quote\""));
}

#[tokio::test]
async fn test_health_endpoints() {
    let (status, body) = get_body("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "OK");

    let (status, body) = get_body("/ready").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "READY");
}

#[tokio::test]
async fn test_unknown_route_renders_not_found() {
    let (status, body) = get_body("/no-such-page").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Page not found"));
}
