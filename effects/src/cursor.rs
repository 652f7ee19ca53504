//! Pointer follower: a dot and a trailing ring that track the mouse.
//!
//! Pointer moves arrive far more often than the display refreshes. Moves
//! only record the latest position; the position is rendered once per
//! animation frame. [`PointerFollower::on_pointer_move`] tells the host
//! whether a new frame must be requested, so at most one is ever
//! outstanding.

#[cfg(test)]
#[path = "cursor_test.rs"]
mod cursor_test;

use crate::SiteError;
use crate::config::CursorConfig;
use crate::surface::{RenderingSurface, require_body};
use crate::toggle::VisualToggle;

/// Latest unrendered position and whether a frame is outstanding.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FollowerState {
    pub pending: Option<(f64, f64)>,
    pub frame_requested: bool,
}

/// CSS transform placing a node at viewport coordinates.
#[must_use]
pub fn transform_for(x: f64, y: f64) -> String {
    format!("translate3d({x}px, {y}px, 0)")
}

pub struct PointerFollower<S: RenderingSurface> {
    surface: S,
    dot: S::Node,
    follower: S::Node,
    grow: VisualToggle<S::Node>,
    state: FollowerState,
    frames_rendered: u64,
}

impl<S: RenderingSurface> PointerFollower<S> {
    /// Create the dot and follower nodes under the body.
    ///
    /// # Errors
    ///
    /// - [`SiteError::MissingMount`] when the page has no body.
    /// - [`SiteError::CapabilityUnavailable`] when nodes cannot be created.
    pub fn initialize(mut surface: S, config: &CursorConfig) -> Result<Self, SiteError> {
        let body = require_body(&surface)?;
        let dot = surface
            .create("div", "cursor cursor-dot")
            .ok_or(SiteError::CapabilityUnavailable("createElement"))?;
        let follower = surface
            .create("div", "cursor cursor-follower")
            .ok_or(SiteError::CapabilityUnavailable("createElement"))?;
        surface.append(&body, &dot);
        surface.append(&body, &follower);
        Ok(Self {
            surface,
            dot,
            follower,
            grow: VisualToggle::new(body, config.grow_marker.as_str()),
            state: FollowerState::default(),
            frames_rendered: 0,
        })
    }

    /// Record a pointer position. Returns `true` when the host must request a frame.
    pub fn on_pointer_move(&mut self, x: f64, y: f64) -> bool {
        self.state.pending = Some((x, y));
        if self.state.frame_requested {
            return false;
        }
        self.state.frame_requested = true;
        true
    }

    /// Render the latest recorded position. Returns whether anything was drawn.
    pub fn on_frame(&mut self) -> bool {
        self.state.frame_requested = false;
        let Some((x, y)) = self.state.pending.take() else {
            return false;
        };
        let transform = transform_for(x, y);
        self.surface.set_style(&self.dot, "transform", &transform);
        self.surface.set_style(&self.follower, "transform", &transform);
        self.frames_rendered += 1;
        true
    }

    /// Grow the follower while the pointer is over an interactive element.
    pub fn set_hover(&mut self, hovering: bool) {
        self.grow.set(&mut self.surface, hovering);
    }

    #[must_use]
    pub fn state(&self) -> FollowerState {
        self.state
    }

    /// Number of frames that applied a position.
    #[must_use]
    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    #[must_use]
    pub fn dot(&self) -> &S::Node {
        &self.dot
    }

    #[must_use]
    pub fn follower(&self) -> &S::Node {
        &self.follower
    }
}
