// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use crate::error::StoreError;

/// Key under which the filesystem snapshot is stored
pub const FILESYSTEM_KEY: &str = "nebula_filesystem";

/// String key-value storage backing a filesystem session.
///
/// Accessed read-then-overwrite with no locking: one session is the only
/// writer, and a second session sharing the store wins on its last write.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}
