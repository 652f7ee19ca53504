//! Hero slideshow: slide rendering, selector dots and autoplay.
//!
//! ARCHITECTURE
//! ============
//! [`SlideshowController`] is the only owner of the current index and the
//! autoplay timer. It has a single state, `Displaying(current)`, and two
//! transitions:
//!
//! - [`SlideshowController::tick`]: timer-driven advance to the next slide,
//!   wrapping at the end.
//! - [`SlideshowController::go_to`]: selector click. Shows the chosen slide
//!   and restarts the autoplay countdown, so an imminent tick cannot stack a
//!   second advance on top of the manual one.
//!
//! The scheduler only starts and cancels intervals. The host forwards each
//! firing to `tick` and each selector click to `go_to`.

#[cfg(test)]
#[path = "slideshow_test.rs"]
mod slideshow_test;

use crate::SiteError;
use crate::assets::Slide;
use crate::config::SlideshowConfig;
use crate::surface::{RenderingSurface, require_by_id};
use crate::timer::{Scheduler, TimerHandle};

/// Marker carried by the active display node and selector.
pub const ACTIVE_MARKER: &str = "active";

/// Owns slide nodes, the current index and the autoplay timer.
pub struct SlideshowController<S: RenderingSurface, T: Scheduler> {
    surface: S,
    scheduler: T,
    slides: Vec<Slide>,
    displays: Vec<S::Node>,
    selectors: Vec<S::Node>,
    caption: S::Node,
    current: usize,
    timer: Option<TimerHandle>,
    interval_ms: u32,
}

impl<S: RenderingSurface, T: Scheduler> SlideshowController<S, T> {
    /// Build one display node and one selector per slide, show slide 0 and start autoplay.
    ///
    /// # Errors
    ///
    /// - [`SiteError::EmptySlideshow`] when `config.slides` is empty.
    /// - [`SiteError::MissingMount`] when the slide, selector or caption mount is absent.
    pub fn initialize(mut surface: S, scheduler: T, config: &SlideshowConfig) -> Result<Self, SiteError> {
        if config.slides.is_empty() {
            return Err(SiteError::EmptySlideshow);
        }
        let slides_root = require_by_id(&surface, &config.slides_mount)?;
        let selectors_root = require_by_id(&surface, &config.selectors_mount)?;
        let caption = require_by_id(&surface, &config.caption_mount)?;

        let mut displays = Vec::with_capacity(config.slides.len());
        let mut selectors = Vec::with_capacity(config.slides.len());
        for (i, slide) in config.slides.iter().enumerate() {
            let display = surface
                .create("div", "slide")
                .ok_or(SiteError::CapabilityUnavailable("createElement"))?;
            surface.set_style(&display, "background-image", &format!("url({})", slide.image));
            surface.append(&slides_root, &display);
            displays.push(display);

            let selector = surface
                .create("button", "dot")
                .ok_or(SiteError::CapabilityUnavailable("createElement"))?;
            surface.set_attribute(&selector, "aria-label", &format!("Go to slide {}", i + 1));
            surface.append(&selectors_root, &selector);
            selectors.push(selector);
        }

        let mut controller = Self {
            surface,
            scheduler,
            slides: config.slides.clone(),
            displays,
            selectors,
            caption,
            current: 0,
            timer: None,
            interval_ms: config.interval_ms,
        };
        controller.show(0);
        controller.start_autoplay();
        log::debug!("slideshow: {} slides, autoplay every {}ms", controller.len(), controller.interval_ms);
        Ok(controller)
    }

    /// Mark the slide and selector at `index` active and update the caption.
    ///
    /// Out-of-range indices are ignored.
    pub fn show(&mut self, index: usize) {
        let Some(slide) = self.slides.get(index) else {
            log::warn!("slideshow: ignoring out-of-range index {index}");
            return;
        };
        for (i, node) in self.displays.iter().enumerate() {
            self.surface.set_marker(node, ACTIVE_MARKER, i == index);
        }
        for (i, node) in self.selectors.iter().enumerate() {
            self.surface.set_marker(node, ACTIVE_MARKER, i == index);
        }
        self.surface.set_text(&self.caption, &slide.caption);
        self.current = index;
    }

    /// Manual navigation: show `index`, then restart the autoplay countdown.
    pub fn go_to(&mut self, index: usize) {
        if index >= self.slides.len() {
            log::warn!("slideshow: ignoring out-of-range selector {index}");
            return;
        }
        self.show(index);
        self.stop_autoplay();
        self.start_autoplay();
    }

    /// Autoplay step: advance to the next slide, wrapping to the first.
    pub fn tick(&mut self) {
        let next = (self.current + 1) % self.slides.len();
        self.show(next);
    }

    /// Cancel autoplay. The current slide stays on screen.
    pub fn stop_autoplay(&mut self) {
        if let Some(handle) = self.timer.take() {
            self.scheduler.cancel(handle);
        }
    }

    fn start_autoplay(&mut self) {
        self.stop_autoplay();
        self.timer = Some(self.scheduler.start_interval(self.interval_ms));
    }

    // --- Queries ---

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_slide(&self) -> &Slide {
        &self.slides[self.current]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Always false: initialization rejects empty slide lists.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// The running autoplay timer, if any.
    #[must_use]
    pub fn timer(&self) -> Option<TimerHandle> {
        self.timer
    }

    /// Selector nodes in slide order, for the host to wire clicks.
    #[must_use]
    pub fn selectors(&self) -> &[S::Node] {
        &self.selectors
    }

    #[must_use]
    pub fn displays(&self) -> &[S::Node] {
        &self.displays
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }
}
