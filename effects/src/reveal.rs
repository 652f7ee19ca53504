//! One-shot reveal-on-scroll animations.
//!
//! Every target matching the reveal selector starts `Pending` with a hidden
//! baseline and flips to `Visible` the first time the host reports it at
//! least 10% inside the viewport. The flip is final: later signals, including
//! the target scrolling back out, change nothing. The transition itself is
//! plain CSS; this module only decides when to apply the final styling.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use serde::{Deserialize, Serialize};

use crate::SiteError;
use crate::config::RevealConfig;
use crate::surface::RenderingSurface;

/// Browsers round the reported ratio at the threshold crossing.
const RATIO_TOLERANCE: f64 = 1e-3;

/// How pending and visible states are written to the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RevealStyle {
    /// Inline `opacity`/`transform`/`transition` properties.
    #[default]
    Inline,
    /// Pending and visible marker classes; the stylesheet owns the look.
    ClassMarker,
}

/// Lifecycle of one reveal target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealState {
    Pending,
    Visible,
}

/// Tracks the fixed set of reveal targets on a page.
pub struct RevealObserver<S: RenderingSurface> {
    surface: S,
    targets: Vec<(S::Node, RevealState)>,
    config: RevealConfig,
}

impl<S: RenderingSurface> RevealObserver<S> {
    /// Collect targets, apply the pending baseline and return the observer.
    ///
    /// The host reports whether an intersection watcher exists; without one
    /// nothing is styled, so content stays visible.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::CapabilityUnavailable`] when `watcher_available` is false.
    pub fn initialize(surface: S, config: &RevealConfig, watcher_available: bool) -> Result<Self, SiteError> {
        if !watcher_available {
            return Err(SiteError::CapabilityUnavailable("IntersectionObserver"));
        }

        let nodes = surface.query_all(&config.selector);
        let mut observer = Self { surface, targets: Vec::with_capacity(nodes.len()), config: config.clone() };
        for node in nodes {
            observer.apply_pending(&node);
            observer.targets.push((node, RevealState::Pending));
        }
        log::debug!("reveal: {} targets pending ({:?})", observer.targets.len(), observer.config.style);
        Ok(observer)
    }

    /// Handle one visibility signal for `node`.
    ///
    /// Returns `true` only when this signal revealed the node; the host
    /// should then stop watching it. Unknown nodes, already visible nodes and
    /// signals below the threshold return `false`.
    pub fn on_visibility(&mut self, node: &S::Node, intersection_ratio: f64, is_intersecting: bool) -> bool {
        if !is_intersecting || intersection_ratio + RATIO_TOLERANCE < self.config.threshold {
            return false;
        }
        let Some(index) = self.targets.iter().position(|(target, _)| target == node) else {
            return false;
        };
        if self.targets[index].1 == RevealState::Visible {
            return false;
        }
        self.targets[index].1 = RevealState::Visible;
        self.apply_visible(node);
        true
    }

    /// Targets still waiting to be revealed.
    pub fn pending(&self) -> impl Iterator<Item = &S::Node> {
        self.targets
            .iter()
            .filter(|(_, state)| *state == RevealState::Pending)
            .map(|(node, _)| node)
    }

    #[must_use]
    pub fn state_of(&self, node: &S::Node) -> Option<RevealState> {
        self.targets
            .iter()
            .find(|(target, _)| target == node)
            .map(|(_, state)| *state)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.targets
            .iter()
            .filter(|(_, state)| *state == RevealState::Visible)
            .count()
    }

    fn apply_pending(&mut self, node: &S::Node) {
        match self.config.style {
            RevealStyle::Inline => {
                let duration = &self.config.duration;
                let transition = format!("opacity {duration} ease-out, transform {duration} ease-out");
                self.surface.set_style(node, "opacity", "0");
                self.surface
                    .set_style(node, "transform", &format!("translateY({}px)", self.config.offset_px));
                self.surface.set_style(node, "transition", &transition);
            }
            RevealStyle::ClassMarker => {
                self.surface.set_marker(node, &self.config.pending_marker, true);
            }
        }
    }

    fn apply_visible(&mut self, node: &S::Node) {
        match self.config.style {
            RevealStyle::Inline => {
                self.surface.set_style(node, "opacity", "1");
                self.surface.set_style(node, "transform", "translateY(0)");
            }
            RevealStyle::ClassMarker => {
                self.surface.set_marker(node, &self.config.visible_marker, true);
            }
        }
    }
}
