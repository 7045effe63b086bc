//! Integration tests for the static site server
#![cfg(feature = "ssr")]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use folio_core::SiteConfig;
use folio_web::{SiteState, create_router};
use http_body_util::BodyExt;
use std::fs;
use tempfile::TempDir;
use tower::ServiceExt;

const INDEX: &str = "<!DOCTYPE html><html><body>folio-index</body></html>";

fn built_site() -> TempDir {
    let dist = TempDir::new().unwrap();
    fs::write(dist.path().join("index.html"), INDEX).unwrap();
    fs::write(dist.path().join("folio.css"), "body {}").unwrap();
    dist
}

async fn get(state: SiteState, uri: &str) -> (StatusCode, String) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = create_router(state).oneshot(request).await.unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn test_health_reports_build_state() {
    let dist = built_site();
    let state = SiteState::new(SiteConfig::default(), dist.path());
    let (status, body) = get(state, "/api/health").await;

    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["site_built"], true);
}

#[tokio::test]
async fn test_config_endpoint_returns_effective_config() {
    let dist = built_site();
    let config = SiteConfig {
        menu_threshold_rem: 48.0,
        ..SiteConfig::default()
    };

    let (status, body) = get(SiteState::new(config.clone(), dist.path()), "/api/config").await;

    assert_eq!(status, StatusCode::OK);
    let served: SiteConfig = serde_json::from_str(&body).unwrap();
    assert_eq!(served, config);
}

#[tokio::test]
async fn test_serves_index_and_assets() {
    let dist = built_site();
    let state = SiteState::new(SiteConfig::default(), dist.path());

    let (status, body) = get(state.clone(), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("folio-index"));

    let (status, body) = get(state, "/folio.css").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "body {}");
}

#[tokio::test]
async fn test_unknown_path_falls_back_to_index() {
    let dist = built_site();
    let state = SiteState::new(SiteConfig::default(), dist.path());
    let (status, body) = get(state, "/skills").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("folio-index"));
}

#[tokio::test]
async fn test_unbuilt_site_serves_setup_page() {
    let dist = TempDir::new().unwrap();
    let state = SiteState::new(SiteConfig::default(), dist.path());
    assert!(!state.is_built());

    let (status, body) = get(state.clone(), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Build Required"));

    let (_, health) = get(state, "/api/health").await;
    assert!(health.contains(r#""site_built":false"#));
}
