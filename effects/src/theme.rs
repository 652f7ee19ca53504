//! Light/dark theme: load, apply and toggle.
//!
//! The preference is read once at startup: a stored value wins, then the
//! system `prefers-color-scheme` signal, then light. Toggling reads the
//! marker actually on the page rather than the stored value, flips it, writes
//! the new value back and re-applies.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort. A store that rejects reads or writes degrades
//! to a session-only preference instead of failing the toggle.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use serde::{Deserialize, Serialize};

use crate::SiteError;
use crate::config::ThemeConfig;
use crate::store::PreferenceStore;
use crate::surface::{RenderingSurface, require_body, require_by_id};
use crate::toggle::VisualToggle;

/// The two site themes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    /// Stored string form.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Interpret a stored value. Empty means nothing usable was stored;
    /// anything other than `dark` reads as light.
    #[must_use]
    pub fn from_stored(raw: &str) -> Option<Self> {
        match raw {
            "" => None,
            "dark" => Some(Self::Dark),
            _ => Some(Self::Light),
        }
    }

    #[must_use]
    pub fn from_dark(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    #[must_use]
    pub fn flipped(self) -> Self {
        Self::from_dark(!self.is_dark())
    }
}

/// Resolve the startup preference.
///
/// A failed read is logged and treated as "nothing stored".
pub fn load<P: PreferenceStore>(store: &P, key: &str, system_prefers_dark: Option<bool>) -> ThemePreference {
    let stored = match store.read(key) {
        Ok(value) => value,
        Err(err) => {
            log::warn!("theme: {err}; using system preference");
            None
        }
    };
    stored
        .as_deref()
        .and_then(ThemePreference::from_stored)
        .or_else(|| system_prefers_dark.map(ThemePreference::from_dark))
        .unwrap_or_default()
}

/// Owns the applied theme and its persistence.
pub struct ThemeManager<S: RenderingSurface, P: PreferenceStore> {
    surface: S,
    store: P,
    key: String,
    root: VisualToggle<S::Node>,
    toggle_button: S::Node,
    current: ThemePreference,
}

impl<S: RenderingSurface, P: PreferenceStore> ThemeManager<S, P> {
    /// Resolve the startup preference and apply it to the page body.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::MissingMount`] when the toggle button or the body
    /// is absent. Nothing is applied in that case.
    pub fn initialize(
        surface: S,
        store: P,
        config: &ThemeConfig,
        system_prefers_dark: Option<bool>,
    ) -> Result<Self, SiteError> {
        let toggle_button = require_by_id(&surface, &config.toggle_id)?;
        let body = require_body(&surface)?;
        let current = load(&store, &config.storage_key, system_prefers_dark);
        let mut manager = Self {
            surface,
            store,
            key: config.storage_key.clone(),
            root: VisualToggle::new(body, config.marker.as_str()),
            toggle_button,
            current,
        };
        manager.apply(current);
        log::debug!("theme: applied {}", current.as_str());
        Ok(manager)
    }

    /// Put the page in `preference`. Re-applying the current theme changes nothing.
    pub fn apply(&mut self, preference: ThemePreference) {
        self.root.set(&mut self.surface, preference.is_dark());
        self.current = preference;
    }

    /// Flip the theme currently on the page, persist it and apply it.
    pub fn toggle(&mut self) -> ThemePreference {
        let next = ThemePreference::from_dark(self.root.is_on(&self.surface)).flipped();
        if let Err(err) = self.store.write(&self.key, next.as_str()) {
            log::warn!("theme: {err}; keeping {} for this session only", next.as_str());
        }
        self.apply(next);
        next
    }

    /// The preference currently applied.
    #[must_use]
    pub fn current(&self) -> ThemePreference {
        self.current
    }

    /// The toggle button, for the host to wire its click.
    #[must_use]
    pub fn toggle_button(&self) -> &S::Node {
        &self.toggle_button
    }
}
