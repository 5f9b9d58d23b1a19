//! Session store abstraction.
//!
//! The wizard keeps the output of earlier steps in client-side key-value
//! storage. The guard only reads from it, through [`SessionStore`], so it can
//! run against [`MemoryStore`] in tests and against `localStorage` in the browser.

use std::collections::HashMap;

/// Read access to persistent client-side storage.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
}

/// Write access, used only by the step that produces the session values.
pub trait SessionStoreMut: SessionStore {
    fn set(&mut self, key: &str, value: &str);
}

impl<S: SessionStore + ?Sized> SessionStore for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}

/// In-memory store backed by a `HashMap`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.values.remove(key)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MemoryStore {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

impl SessionStoreMut for MemoryStore {
    fn set(&mut self, key: &str, value: &str) {
        self.insert(key, value);
    }
}
