#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn defaults_match_shipped_markup() {
    let config = SiteConfig::default();
    assert_eq!(config.slideshow.interval_ms, 5000);
    assert_eq!(config.slideshow.slides.len(), assets::HERO_SLIDES.len());
    assert_eq!(config.theme.storage_key, "prowheels-theme");
    assert_eq!(config.theme.toggle_id, "dark-mode-toggle");
    assert_eq!(config.reveal.threshold, 0.1);
    assert_eq!(config.reveal.style, RevealStyle::Inline);
    assert_eq!(config.scroll.header_threshold_px, 50.0);
    assert!(config.cursor.enabled);
    assert_eq!(config.logo_strip.logos.len(), 2);
    assert!(config.validate().is_ok());
}

#[test]
fn console_level_defaults_to_info() {
    assert_eq!(SiteConfig::default().console_level(), log::Level::Info);
    let config = SiteConfig { log_level: "debug".into(), ..SiteConfig::default() };
    assert_eq!(config.console_level(), log::Level::Debug);
}

// =============================================================
// from_json
// =============================================================

#[test]
fn empty_object_is_all_defaults() {
    let config = SiteConfig::from_json("{}").expect("parse");
    assert_eq!(config, SiteConfig::default());
}

#[test]
fn partial_override_keeps_other_defaults() {
    let raw = r#"{
        "slideshow": { "intervalMs": 3000 },
        "reveal": { "style": "classMarker" },
        "logLevel": "warn"
    }"#;
    let config = SiteConfig::from_json(raw).expect("parse");
    assert_eq!(config.slideshow.interval_ms, 3000);
    assert_eq!(config.slideshow.slides_mount, DEFAULT_SLIDES_MOUNT);
    assert_eq!(config.reveal.style, RevealStyle::ClassMarker);
    assert_eq!(config.reveal.selector, DEFAULT_REVEAL_SELECTOR);
    assert_eq!(config.console_level(), log::Level::Warn);
}

#[test]
fn slides_can_be_replaced() {
    let raw = r#"{ "slideshow": { "slides": [
        { "image": "a.jpg", "caption": "A" },
        { "image": "b.jpg", "caption": "B" }
    ] } }"#;
    let config = SiteConfig::from_json(raw).expect("parse");
    assert_eq!(config.slideshow.slides, vec![Slide::new("a.jpg", "A"), Slide::new("b.jpg", "B")]);
}

#[test]
fn malformed_json_is_a_parse_error() {
    let err = SiteConfig::from_json("{ slideshow: ").expect_err("should fail");
    assert!(matches!(err, SiteError::ConfigParse(_)));
}

#[test]
fn unknown_reveal_style_is_a_parse_error() {
    let err = SiteConfig::from_json(r#"{ "reveal": { "style": "fade" } }"#).expect_err("should fail");
    assert!(matches!(err, SiteError::ConfigParse(_)));
}

// =============================================================
// validate
// =============================================================

fn invalid(raw: &str) -> String {
    match SiteConfig::from_json(raw) {
        Err(SiteError::InvalidConfig(reason)) => reason,
        other => panic!("expected InvalidConfig for {raw}, got {other:?}"),
    }
}

#[test]
fn zero_interval_is_rejected() {
    assert!(invalid(r#"{ "slideshow": { "intervalMs": 0 } }"#).contains("intervalMs"));
}

#[test]
fn empty_slide_list_is_rejected() {
    assert!(invalid(r#"{ "slideshow": { "slides": [] } }"#).contains("slides"));
}

#[test]
fn threshold_outside_unit_range_is_rejected() {
    assert!(invalid(r#"{ "reveal": { "threshold": 1.5 } }"#).contains("threshold"));
    assert!(invalid(r#"{ "reveal": { "threshold": -0.1 } }"#).contains("threshold"));
}

#[test]
fn blank_storage_key_is_rejected() {
    assert!(invalid(r#"{ "theme": { "storageKey": "  " } }"#).contains("storageKey"));
}

#[test]
fn unknown_log_level_is_rejected() {
    assert!(invalid(r#"{ "logLevel": "loud" }"#).contains("loud"));
}
