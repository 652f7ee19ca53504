//! Site configuration with compiled-in defaults.
//!
//! Every knob has a `DEFAULT_*` constant matching the shipped markup. A page
//! may override any subset through an embedded JSON object; omitted fields
//! keep their defaults. Two page variants differ only in slide data and
//! reveal style, so those are the usual overrides.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::SiteError;
use crate::assets::{self, Logo, Slide};
use crate::reveal::RevealStyle;

pub const DEFAULT_SLIDES_MOUNT: &str = "slides";
pub const DEFAULT_SELECTORS_MOUNT: &str = "dots";
pub const DEFAULT_CAPTION_MOUNT: &str = "hero-text-placeholder";
pub const DEFAULT_AUTOPLAY_INTERVAL_MS: u32 = 5000;

pub const DEFAULT_THEME_STORAGE_KEY: &str = "prowheels-theme";
pub const DEFAULT_THEME_TOGGLE_ID: &str = "dark-mode-toggle";
pub const DEFAULT_THEME_MARKER: &str = "dark-mode";

pub const DEFAULT_REVEAL_SELECTOR: &str = ".card, .mv-card, .testimonial-card, .why-choose-grid > div";
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.1;
pub const DEFAULT_REVEAL_OFFSET_PX: u32 = 30;
pub const DEFAULT_REVEAL_DURATION: &str = "0.6s";

pub const DEFAULT_HEADER_SELECTOR: &str = "header";
pub const DEFAULT_HEADER_THRESHOLD_PX: f64 = 50.0;

pub const DEFAULT_INTERACTIVE_SELECTOR: &str = "a, button, .card";

pub const DEFAULT_LOGO_TRACK_ID: &str = "logo-track";

/// Top-level configuration for every component on the page.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    pub slideshow: SlideshowConfig,
    pub theme: ThemeConfig,
    pub reveal: RevealConfig,
    pub scroll: ScrollConfig,
    pub cursor: CursorConfig,
    pub logo_strip: LogoStripConfig,
    /// Console log level for the WASM entry (`error` .. `trace`).
    pub log_level: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SlideshowConfig {
    pub slides_mount: String,
    pub selectors_mount: String,
    pub caption_mount: String,
    pub interval_ms: u32,
    pub slides: Vec<Slide>,
}

impl Default for SlideshowConfig {
    fn default() -> Self {
        Self {
            slides_mount: DEFAULT_SLIDES_MOUNT.to_owned(),
            selectors_mount: DEFAULT_SELECTORS_MOUNT.to_owned(),
            caption_mount: DEFAULT_CAPTION_MOUNT.to_owned(),
            interval_ms: DEFAULT_AUTOPLAY_INTERVAL_MS,
            slides: assets::hero_slides(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeConfig {
    pub storage_key: String,
    pub toggle_id: String,
    pub marker: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_THEME_STORAGE_KEY.to_owned(),
            toggle_id: DEFAULT_THEME_TOGGLE_ID.to_owned(),
            marker: DEFAULT_THEME_MARKER.to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RevealConfig {
    pub selector: String,
    pub threshold: f64,
    pub style: RevealStyle,
    pub offset_px: u32,
    pub duration: String,
    /// Marker applied while pending under [`RevealStyle::ClassMarker`].
    pub pending_marker: String,
    /// Marker applied once visible under [`RevealStyle::ClassMarker`].
    pub visible_marker: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            selector: DEFAULT_REVEAL_SELECTOR.to_owned(),
            threshold: DEFAULT_REVEAL_THRESHOLD,
            style: RevealStyle::default(),
            offset_px: DEFAULT_REVEAL_OFFSET_PX,
            duration: DEFAULT_REVEAL_DURATION.to_owned(),
            pending_marker: "reveal".to_owned(),
            visible_marker: "visible".to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScrollConfig {
    pub header_selector: String,
    pub header_threshold_px: f64,
    pub header_marker: String,
    pub back_to_top_marker: String,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            header_selector: DEFAULT_HEADER_SELECTOR.to_owned(),
            header_threshold_px: DEFAULT_HEADER_THRESHOLD_PX,
            header_marker: "scrolled".to_owned(),
            back_to_top_marker: "show".to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CursorConfig {
    pub enabled: bool,
    pub interactive_selector: String,
    pub grow_marker: String,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            interactive_selector: DEFAULT_INTERACTIVE_SELECTOR.to_owned(),
            grow_marker: "cursor-grow".to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LogoStripConfig {
    pub track_id: String,
    pub logos: Vec<Logo>,
}

impl Default for LogoStripConfig {
    fn default() -> Self {
        Self { track_id: DEFAULT_LOGO_TRACK_ID.to_owned(), logos: assets::partner_logos() }
    }
}

impl SiteConfig {
    /// Parse a (possibly partial) JSON object and validate the result.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::ConfigParse`] for malformed JSON and
    /// [`SiteError::InvalidConfig`] when a value fails [`SiteConfig::validate`].
    pub fn from_json(raw: &str) -> Result<Self, SiteError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values no component can work with.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::InvalidConfig`] naming the first offending field.
    pub fn validate(&self) -> Result<(), SiteError> {
        if self.slideshow.interval_ms == 0 {
            return Err(SiteError::InvalidConfig("slideshow.intervalMs must be positive".into()));
        }
        if self.slideshow.slides.is_empty() {
            return Err(SiteError::InvalidConfig("slideshow.slides must not be empty".into()));
        }
        if !(0.0..=1.0).contains(&self.reveal.threshold) {
            return Err(SiteError::InvalidConfig(format!(
                "reveal.threshold {} outside 0..=1",
                self.reveal.threshold
            )));
        }
        if self.theme.storage_key.trim().is_empty() {
            return Err(SiteError::InvalidConfig("theme.storageKey must not be empty".into()));
        }
        if !self.log_level.is_empty() && self.log_level.parse::<log::Level>().is_err() {
            return Err(SiteError::InvalidConfig(format!("unknown logLevel '{}'", self.log_level)));
        }
        Ok(())
    }

    /// Console log level, `Info` when unset.
    #[must_use]
    pub fn console_level(&self) -> log::Level {
        self.log_level
            .parse::<log::Level>()
            .unwrap_or(log::Level::Info)
    }
}
