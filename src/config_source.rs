//! Page-embedded configuration.
//!
//! A page may carry `<script type="application/json" id="prowheels-config">`
//! with a partial [`SiteConfig`]. A missing or blank block means defaults. A
//! broken block is logged and also means defaults: a typo in markup must not
//! take the whole page script down.

#[cfg(test)]
#[path = "config_source_test.rs"]
mod config_source_test;

use effects::config::SiteConfig;

/// Id of the inline JSON block.
pub const CONFIG_ELEMENT_ID: &str = "prowheels-config";

/// Resolve the site configuration from the inline block's text, if any.
pub fn parse_inline_config(raw: Option<&str>) -> SiteConfig {
    let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return SiteConfig::default();
    };
    match SiteConfig::from_json(raw) {
        Ok(config) => {
            log::debug!("config: loaded #{CONFIG_ELEMENT_ID}");
            config
        }
        Err(err) => {
            log::warn!("config: #{CONFIG_ELEMENT_ID} ignored: {err}");
            SiteConfig::default()
        }
    }
}
