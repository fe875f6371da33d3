use std::ffi::OsString;
use std::path::PathBuf;

use diagnostics::{log_info, log_warn};
use nebulafs::{FileStore, MemoryStore, VirtualFileSystem};

/// Environment variable naming the store file
pub const STORE_ENV: &str = "NEBULA_STORE";

/// Where the filesystem snapshot lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreChoice {
    /// Lost at exit
    Memory,
    /// JSON store file on the host
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    pub store: StoreChoice,
}

impl ShellConfig {
    /// Picks the store: `--memory`, then `--store`, then `NEBULA_STORE`,
    /// falling back to memory.
    pub fn resolve(
        store_override: Option<PathBuf>,
        force_memory: bool,
        env_value: Option<OsString>,
    ) -> Self {
        let store = if force_memory {
            StoreChoice::Memory
        } else {
            store_override
                .or_else(|| env_value.filter(|v| !v.is_empty()).map(PathBuf::from))
                .map_or(StoreChoice::Memory, StoreChoice::File)
        };
        Self { store }
    }

    /// Same as [`ShellConfig::resolve`], reading `NEBULA_STORE` from the process environment
    pub fn from_env(store_override: Option<PathBuf>, force_memory: bool) -> Self {
        Self::resolve(store_override, force_memory, std::env::var_os(STORE_ENV))
    }

    /// Opens the filesystem on the configured store
    #[must_use]
    pub fn open(&self) -> VirtualFileSystem {
        match &self.store {
            StoreChoice::File(path) => {
                let shown = path.display().to_string();
                log_info!("Using store file {path}", path: shown.as_str());
                VirtualFileSystem::open(FileStore::new(path))
            }
            StoreChoice::Memory => {
                log_warn!("Falling back to in-memory storage");
                VirtualFileSystem::open(MemoryStore::new())
            }
        }
    }
}
