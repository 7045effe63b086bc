//! Integration tests for loading config and content files from disk

use folio_core::{CoreError, Portfolio, SiteConfig};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_load_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("site.json");
    fs::write(&path, r#"{ "root_font_size_px": 18, "scroll_offset_rem": 4 }"#).unwrap();

    let config = SiteConfig::load(&path).unwrap();

    assert_eq!(config.root_font_size().px(), 18.0);
    assert_eq!(config.scroll_offset_rem, 4.0);
    assert_eq!(config.menu_threshold_rem, 60.0);
}

#[test]
fn test_missing_config_file() {
    let dir = TempDir::new().unwrap();
    let err = SiteConfig::load(&dir.path().join("missing.json")).unwrap_err();

    assert!(matches!(err, CoreError::FileRead { .. }));
    assert!(err.suggestion().is_some());
}

#[test]
fn test_load_or_default_degrades() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ \"menu_threshold_rem\": ").unwrap();

    assert_eq!(SiteConfig::load_or_default(Some(&path)), SiteConfig::default());
    assert_eq!(SiteConfig::load_or_default(None), SiteConfig::default());
}

#[test]
fn test_default_config_round_trips_through_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("site.json");
    let json = serde_json::to_string_pretty(&SiteConfig::default()).unwrap();
    fs::write(&path, json).unwrap();

    assert_eq!(SiteConfig::load(&path).unwrap(), SiteConfig::default());
}

#[test]
fn test_load_content_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("portfolio.json");
    fs::write(
        &path,
        r#"{
            "profile": { "name": "Someone", "headline": "Dev", "portrait": "me.png" },
            "about": ["Hello."],
            "projects": [{ "name": "x", "summary": "y", "url": "https://example.com" }]
        }"#,
    )
    .unwrap();

    let portfolio = Portfolio::load(&path).unwrap();
    assert_eq!(portfolio.profile.name, "Someone");
    assert_eq!(portfolio.projects.len(), 1);
}
