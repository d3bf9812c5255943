//! Tab-scoped persistence of the last applied value.
//!
//! The store is an injected collaborator with session lifetime: the host
//! wires it to its tab-scoped storage, tests use the in-memory
//! implementation. One well-known key, one slot.

use std::collections::HashMap;

/// Storage key for the last successfully applied person name.
pub const LAST_PERSON_KEY: &str = "CF_LAST_PERSON";

/// Key-value storage scoped to the current browsing session/tab.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

/// In-memory session store; the default implementation and test double.
#[derive(Clone, Debug, Default)]
pub struct MemorySessionStore {
    values: HashMap<String, String>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.values.remove(key);
    }
}
