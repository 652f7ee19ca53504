//! Persistent key-value preference store collaborator.
//!
//! The site persists exactly one value (the theme name). The browser
//! implementation wraps `localStorage` and falls back to
//! [`crate::memory::MemoryStore`] when storage is disabled, so the preference
//! lives for the session only.

use crate::SiteError;

/// Read/write access to string preferences keyed by name.
pub trait PreferenceStore {
    /// Stored value for `key`, or `None` when nothing was stored.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::StorageUnavailable`] when the backing store rejects the read.
    fn read(&self, key: &str) -> Result<Option<String>, SiteError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::StorageUnavailable`] when the backing store rejects the write
    /// (quota exceeded, storage disabled).
    fn write(&mut self, key: &str, value: &str) -> Result<(), SiteError>;
}
