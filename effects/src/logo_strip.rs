//! Partner logo marquee.
//!
//! The CSS animation scrolls the track by half its width, so the track must
//! hold two identical runs of logos. An empty track is first populated from
//! the configured list; existing markup is kept as-is.

#[cfg(test)]
#[path = "logo_strip_test.rs"]
mod logo_strip_test;

use crate::SiteError;
use crate::config::LogoStripConfig;
use crate::surface::{RenderingSurface, require_by_id};

pub struct LogoStrip;

impl LogoStrip {
    /// Populate the track if empty, then append one hidden copy of every item.
    ///
    /// Returns the number of copies appended.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::MissingMount`] when the track is absent and
    /// [`SiteError::CapabilityUnavailable`] when nodes cannot be created.
    pub fn initialize<S: RenderingSurface>(surface: &mut S, config: &LogoStripConfig) -> Result<usize, SiteError> {
        let track = require_by_id(surface, &config.track_id)?;

        if surface.children(&track).is_empty() {
            for logo in &config.logos {
                let img = surface
                    .create("img", "logo")
                    .ok_or(SiteError::CapabilityUnavailable("createElement"))?;
                surface.set_attribute(&img, "src", &logo.image);
                surface.set_attribute(&img, "alt", &logo.alt);
                surface.append(&track, &img);
            }
        }

        let items = surface.children(&track);
        let mut appended = 0;
        for item in &items {
            let Some(copy) = surface.clone_deep(item) else {
                log::warn!("logo strip: could not clone item {appended}");
                continue;
            };
            surface.set_attribute(&copy, "aria-hidden", "true");
            surface.append(&track, &copy);
            appended += 1;
        }
        log::debug!("logo strip: {} items, {appended} copies", items.len());
        Ok(appended)
    }
}
