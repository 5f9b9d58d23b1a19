//! Browser `localStorage` adapter for the session store traits.

use configurator_common::{SessionStore, SessionStoreMut};

/// Handle to `window.localStorage`.
///
/// Storage can be unavailable (private mode, sandboxed iframes). In that case
/// every read returns `None`, which the step guard treats as missing data.
#[derive(Clone, Debug)]
pub struct LocalStorage {
    inner: Option<web_sys::Storage>,
}

impl LocalStorage {
    pub fn new() -> Self {
        let inner = web_sys::window().and_then(|win| win.local_storage().ok().flatten());
        Self { inner }
    }
}

impl Default for LocalStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.as_ref()?.get_item(key).ok().flatten()
    }
}

impl SessionStoreMut for LocalStorage {
    fn set(&mut self, key: &str, value: &str) {
        let Some(storage) = self.inner.as_ref() else {
            log::warn!("localStorage unavailable, dropping {}", key);
            return;
        };
        if let Err(e) = storage.set_item(key, value) {
            log::warn!("Failed to store {}: {:?}", key, e);
        }
    }
}
