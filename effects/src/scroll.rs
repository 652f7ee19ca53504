//! Scroll-position projections: header shrink and back-to-top visibility.
//!
//! Both are pure functions of the instantaneous vertical offset. No state is
//! kept between signals; the same offset always produces the same markers.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use crate::config::ScrollConfig;
use crate::surface::RenderingSurface;
use crate::toggle::VisualToggle;

/// Whether the header should switch to its compact style.
#[must_use]
pub fn header_scrolled(offset_y: f64, threshold_px: f64) -> bool {
    offset_y > threshold_px
}

/// Whether the back-to-top button should show: more than one viewport scrolled.
#[must_use]
pub fn back_to_top_visible(offset_y: f64, viewport_height: f64) -> bool {
    offset_y > viewport_height
}

/// Result of projecting one scroll signal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrollProjection {
    pub header_scrolled: bool,
    pub back_to_top_visible: bool,
}

/// Applies scroll projections to the header and the back-to-top button.
///
/// Either target may be missing; its projection is then computed but not
/// applied.
pub struct ScrollWatchers<S: RenderingSurface> {
    surface: S,
    header: Option<VisualToggle<S::Node>>,
    back_to_top: Option<VisualToggle<S::Node>>,
    header_threshold_px: f64,
}

impl<S: RenderingSurface> ScrollWatchers<S> {
    /// Locate the header and create the back-to-top button under the body.
    pub fn initialize(mut surface: S, config: &ScrollConfig) -> Self {
        let header = surface
            .query(&config.header_selector)
            .map(|node| VisualToggle::new(node, config.header_marker.as_str()));
        if header.is_none() {
            log::info!("scroll: no `{}` element, header shrink disabled", config.header_selector);
        }

        let back_to_top = create_back_to_top(&mut surface)
            .map(|node| VisualToggle::new(node, config.back_to_top_marker.as_str()));
        if back_to_top.is_none() {
            log::warn!("scroll: could not attach back-to-top button");
        }

        Self { surface, header, back_to_top, header_threshold_px: config.header_threshold_px }
    }

    /// Recompute and apply both projections for one scroll signal.
    pub fn on_scroll(&mut self, offset_y: f64, viewport_height: f64) -> ScrollProjection {
        let projection = ScrollProjection {
            header_scrolled: header_scrolled(offset_y, self.header_threshold_px),
            back_to_top_visible: back_to_top_visible(offset_y, viewport_height),
        };
        if let Some(header) = &self.header {
            header.set(&mut self.surface, projection.header_scrolled);
        }
        if let Some(button) = &self.back_to_top {
            button.set(&mut self.surface, projection.back_to_top_visible);
        }
        projection
    }

    /// The back-to-top button, for the host to wire its click.
    #[must_use]
    pub fn back_to_top_button(&self) -> Option<&S::Node> {
        self.back_to_top.as_ref().map(VisualToggle::node)
    }

    #[must_use]
    pub fn header(&self) -> Option<&S::Node> {
        self.header.as_ref().map(VisualToggle::node)
    }
}

fn create_back_to_top<S: RenderingSurface>(surface: &mut S) -> Option<S::Node> {
    let body = surface.body()?;
    let button = surface.create("button", "back-to-top")?;
    surface.set_text(&button, "\u{2191}");
    surface.set_attribute(&button, "aria-label", "Go to top of page");
    surface.append(&body, &button);
    Some(button)
}
