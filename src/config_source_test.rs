use super::*;
use effects::reveal::RevealStyle;

#[test]
fn absent_block_means_defaults() {
    assert_eq!(parse_inline_config(None), SiteConfig::default());
}

#[test]
fn blank_block_means_defaults() {
    assert_eq!(parse_inline_config(Some("  \n\t ")), SiteConfig::default());
}

#[test]
fn partial_block_overrides_named_fields() {
    let config = parse_inline_config(Some(r#" { "reveal": { "style": "classMarker" } } "#));
    assert_eq!(config.reveal.style, RevealStyle::ClassMarker);
    assert_eq!(config.slideshow, SiteConfig::default().slideshow);
}

#[test]
fn malformed_block_falls_back_to_defaults() {
    assert_eq!(parse_inline_config(Some("{ not json")), SiteConfig::default());
}

#[test]
fn invalid_values_fall_back_to_defaults() {
    let config = parse_inline_config(Some(r#"{ "slideshow": { "intervalMs": 0 } }"#));
    assert_eq!(config.slideshow.interval_ms, 5000);
}
