// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! A hierarchical, persistable tree of directories and files addressed by
//! POSIX-like paths, mutated and queried through shell-style operations.

pub mod error;
pub mod file_persistence;
pub mod fs;
pub mod memory_persistence;
pub mod node;
pub mod path;
pub mod persistence;
pub mod snapshot;
pub mod tree_format;

pub use error::{Error, Result, StoreError};
pub use file_persistence::FileStore;
pub use fs::VirtualFileSystem;
pub use memory_persistence::MemoryStore;
pub use node::{EntryType, Node, WalkEntry};
pub use persistence::{FILESYSTEM_KEY, KeyValueStore};
pub use snapshot::Snapshot;

#[cfg(test)]
mod tests;
