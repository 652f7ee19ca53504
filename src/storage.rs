//! `localStorage`-backed preferences and the system color-scheme query.

use effects::SiteError;
use effects::memory::MemoryStore;
use effects::store::PreferenceStore;
use web_sys::{Storage, Window};

const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// [`PreferenceStore`] over `window.localStorage`.
///
/// Storage can be missing entirely (privacy modes, sandboxed frames). The
/// store then keeps values in memory for the session.
pub struct LocalStore {
    storage: Option<Storage>,
    session: MemoryStore,
}

impl LocalStore {
    #[must_use]
    pub fn open(window: &Window) -> Self {
        let storage = match window.local_storage() {
            Ok(storage) => storage,
            Err(err) => {
                log::debug!("storage: localStorage blocked: {err:?}");
                None
            }
        };
        if storage.is_none() {
            log::info!("storage: no localStorage, preferences last for this session only");
        }
        Self { storage, session: MemoryStore::new() }
    }

    /// Whether values survive a reload.
    #[must_use]
    pub fn is_persistent(&self) -> bool {
        self.storage.is_some()
    }
}

impl PreferenceStore for LocalStore {
    fn read(&self, key: &str) -> Result<Option<String>, SiteError> {
        let Some(storage) = &self.storage else {
            return self.session.read(key);
        };
        storage
            .get_item(key)
            .map_err(|err| SiteError::StorageUnavailable(format!("read {key}: {err:?}")))
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), SiteError> {
        let Some(storage) = &self.storage else {
            return self.session.write(key, value);
        };
        storage
            .set_item(key, value)
            .map_err(|err| SiteError::StorageUnavailable(format!("write {key}: {err:?}")))
    }
}

/// The user agent's dark-scheme preference, or `None` when it cannot be queried.
#[must_use]
pub fn prefers_dark(window: &Window) -> Option<bool> {
    match window.match_media(DARK_SCHEME_QUERY) {
        Ok(list) => list.map(|list| list.matches()),
        Err(err) => {
            log::debug!("storage: matchMedia failed: {err:?}");
            None
        }
    }
}
