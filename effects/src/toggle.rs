//! Visual state toggles: one named marker on one node.
//!
//! Header shrink, back-to-top visibility, the dark theme and the cursor grow
//! effect are all the same thing underneath: a boolean projected onto a CSS
//! class. [`VisualToggle`] pairs the node with the marker name so callers
//! only pass the boolean.

#[cfg(test)]
#[path = "toggle_test.rs"]
mod toggle_test;

use crate::surface::RenderingSurface;

/// Binds a marker name to a target node.
#[derive(Clone, Debug, PartialEq)]
pub struct VisualToggle<N> {
    node: N,
    marker: String,
}

impl<N: Clone + PartialEq> VisualToggle<N> {
    #[must_use]
    pub fn new(node: N, marker: impl Into<String>) -> Self {
        Self { node, marker: marker.into() }
    }

    /// Project `on` onto the node. Re-applying the same value changes nothing.
    pub fn set<S: RenderingSurface<Node = N>>(&self, surface: &mut S, on: bool) {
        surface.set_marker(&self.node, &self.marker, on);
    }

    /// Whether the marker is currently present on the node.
    #[must_use]
    pub fn is_on<S: RenderingSurface<Node = N>>(&self, surface: &S) -> bool {
        surface.has_marker(&self.node, &self.marker)
    }

    #[must_use]
    pub fn node(&self) -> &N {
        &self.node
    }

    #[must_use]
    pub fn marker(&self) -> &str {
        &self.marker
    }
}
