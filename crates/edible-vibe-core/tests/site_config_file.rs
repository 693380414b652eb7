//! Integration tests for loading the site config from disk

use edible_vibe_core::{ButtonVariant, NavItem, SiteConfig, SocialPlatform};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_load_valid_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("site.json");
    fs::write(
        &path,
        r#"{
            "brand": "Edible Vibe Test",
            "social": { "youtube": "https://youtube.com/@test", "twitter": "nope" },
            "hero": {
                "actions": [
                    { "label": "Listen", "variant": "glow", "target": { "kind": "action" } }
                ]
            }
        }"#,
    )
    .unwrap();

    let config = SiteConfig::load(&path).unwrap();
    assert_eq!(config.brand, "Edible Vibe Test");

    // Malformed twitter URL is dropped, missing instagram is skipped
    let platforms: Vec<_> = config.social.links().iter().map(|l| l.platform).collect();
    assert_eq!(platforms, vec![SocialPlatform::Video]);

    let action = &config.hero.actions[0];
    assert_eq!(action.variant, ButtonVariant::Primary);
    assert!(action.destination().is_none());
}

#[test]
fn test_load_missing_file_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.json");

    let err = SiteConfig::load(&path).unwrap_err();
    assert!(err.to_string().contains("absent.json"));
}

#[test]
fn test_load_malformed_file_errors() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("site.json");
    fs::write(&path, "{ \"brand\": ").unwrap();

    assert!(SiteConfig::load(&path).is_err());
}

#[test]
fn test_load_keeps_valid_entries_around_bad_ones() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("site.json");
    fs::write(
        &path,
        r#"{
            "brand": "EV Custom",
            "nav": ["episodes", "shop", "contact"],
            "hero": {
                "actions": [
                    { "label": "Watch", "variant": null, "target": { "kind": "navigate", "to": "/episodes" } },
                    { "label": "Broken", "target": { "kind": "navigate", "to": "https://evil.example" } }
                ]
            }
        }"#,
    )
    .unwrap();

    let config = SiteConfig::load(&path).unwrap();
    assert_eq!(config.brand, "EV Custom");
    assert_eq!(config.nav, vec![NavItem::Episodes, NavItem::Contact]);
    assert_eq!(config.hero.actions.len(), 1);
    assert_eq!(config.hero.actions[0].variant, ButtonVariant::Primary);
}
