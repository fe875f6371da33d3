use crate::error::StoreError;
use crate::persistence::KeyValueStore;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

/// In-memory key-value store, the fallback when no durable storage is configured.
///
/// Clones share the same map, so a store handed to one session can be
/// inspected (or handed to a second session) afterwards.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn remove(&self, key: &str) -> Option<String> {
        self.entries.borrow_mut().remove(key)
    }

    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        _ = self
            .entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
