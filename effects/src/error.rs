//! Error taxonomy for component initialization.
//!
//! Every variant is a local degradation: the boot sequence logs it and moves
//! on to the next component, so one missing anchor never blocks the rest of
//! the page.

/// Error returned by component initializers and collaborators.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// A required rendering anchor is absent from the page.
    #[error("rendering mount `{0}` not found")]
    MissingMount(String),
    /// The persistent preference store rejected a read or write.
    #[error("preference storage unavailable: {0}")]
    StorageUnavailable(String),
    /// A runtime API the component depends on does not exist.
    #[error("runtime capability `{0}` unavailable")]
    CapabilityUnavailable(&'static str),
    /// The slideshow was given no slides to rotate.
    #[error("slideshow requires at least one slide")]
    EmptySlideshow,
    /// The site configuration parsed but holds an unusable value.
    #[error("invalid site config: {0}")]
    InvalidConfig(String),
    /// The embedded site configuration is not valid JSON for [`crate::config::SiteConfig`].
    #[error("failed to parse site config: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

impl SiteError {
    /// Whether the error only means an optional anchor is missing from this page.
    #[must_use]
    pub fn is_missing_mount(&self) -> bool {
        matches!(self, Self::MissingMount(_))
    }
}
