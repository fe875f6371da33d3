// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use diagnostics::{log_debug, log_info, log_warn};

use crate::error::{Error, Result};
use crate::node::{Children, EntryType, Node};
use crate::path;
use crate::persistence::{FILESYSTEM_KEY, KeyValueStore};
use crate::snapshot::{self, Snapshot};
use crate::tree_format::{format_name, format_tree};

pub const USAGE_MKDIR: &str = "Usage: mkdir <dir>";
pub const USAGE_TOUCH: &str = "Usage: touch <file>";
pub const USAGE_WRITE: &str = "Usage: write <file> <text>";
pub const USAGE_CAT: &str = "Usage: cat <file>";

pub const RESET_MESSAGE: &str = "Filesystem reset";

/// The tree, the current directory, and the store they are written through to.
///
/// Every mutating operation validates first, mutates second, and then
/// persists the whole `{root, cwd}` snapshot before returning.
pub struct VirtualFileSystem {
    root: Node,
    cwd: Vec<String>,
    home: Vec<String>,
    store: Box<dyn KeyValueStore>,
}

impl VirtualFileSystem {
    /// Opens the filesystem kept in `store`, creating the default tree when
    /// the store holds no usable snapshot.
    pub fn open<S: KeyValueStore + 'static>(store: S) -> Self {
        let store: Box<dyn KeyValueStore> = Box::new(store);
        let home = snapshot::home();

        match Self::load(store.as_ref()) {
            Some(Snapshot { root, cwd }) => {
                if !root.lookup(&cwd).is_some_and(Node::is_dir) {
                    let stale = path::display(&cwd);
                    log_warn!("Stored working directory {stale} does not exist", stale: stale.as_str());
                }
                log_debug!("Restored filesystem snapshot");
                Self {
                    root,
                    cwd,
                    home,
                    store,
                }
            }
            None => {
                let mut fs = Self {
                    root: snapshot::default_tree(),
                    cwd: home.clone(),
                    home,
                    store,
                };
                log_info!("Created default filesystem");
                fs.persist();
                fs
            }
        }
    }

    fn load(store: &dyn KeyValueStore) -> Option<Snapshot> {
        let text = match store.get(FILESYSTEM_KEY) {
            Ok(Some(text)) => text,
            Ok(None) => return None,
            Err(err) => {
                let err = err.to_string();
                log_warn!("Failed to read {key} from storage: {err}", key: FILESYSTEM_KEY, err: err.as_str());
                return None;
            }
        };
        match Snapshot::decode(&text) {
            Ok(snapshot) => Some(snapshot),
            Err(rejected) => {
                let reason = rejected.to_string();
                log_warn!("Ignoring stored filesystem: {reason}", reason: reason.as_str());
                None
            }
        }
    }

    /// Writes the full snapshot. Storage failures are logged, and the
    /// in-memory tree stays authoritative.
    fn persist(&mut self) {
        let encoded = match snapshot::encode(&self.root, &self.cwd) {
            Ok(encoded) => encoded,
            Err(err) => {
                let err = err.to_string();
                log_warn!("Failed to encode filesystem: {err}", err: err.as_str());
                return;
            }
        };
        if let Err(err) = self.store.set(FILESYSTEM_KEY, &encoded) {
            let err = err.to_string();
            log_warn!("Failed to write {key} to storage: {err}", key: FILESYSTEM_KEY, err: err.as_str());
        }
    }

    /// Gives back the store, e.g. to reopen a session from it
    #[must_use]
    pub fn into_store(self) -> Box<dyn KeyValueStore> {
        self.store
    }

    #[must_use]
    pub fn root(&self) -> &Node {
        &self.root
    }

    #[must_use]
    pub fn cwd(&self) -> &[String] {
        &self.cwd
    }

    #[must_use]
    pub fn home(&self) -> &[String] {
        &self.home
    }

    /// Resolves `path` against the current directory
    #[must_use]
    pub fn normalize(&self, path: &str) -> Vec<String> {
        path::normalize(path, &self.cwd)
    }

    #[must_use]
    pub fn pwd(&self) -> String {
        path::display(&self.cwd)
    }

    /// Lists a directory's entries in name order, directories suffixed with `/`.
    /// A file lists as its own name.
    pub fn ls(&self, path: Option<&str>) -> Result<Vec<String>> {
        let raw = path.unwrap_or(".");
        let segments = self.normalize(raw);
        let node = self
            .root
            .lookup(&segments)
            .ok_or_else(|| Error::path_not_found(raw))?;

        Ok(match node.children() {
            Some(children) => children
                .iter()
                .map(|(name, child)| format_name(name, child.entry_type()))
                .collect(),
            None => vec![path::basename(&segments).to_string()],
        })
    }

    /// Changes directory. Without an argument this goes home rather than
    /// staying put.
    pub fn cd(&mut self, path: Option<&str>) -> Result<String> {
        let (raw, target) = match path.filter(|p| !p.is_empty()) {
            Some(raw) => (raw, self.normalize(raw)),
            None => ("~", self.home.clone()),
        };
        match self.root.lookup(&target) {
            None => return Err(Error::directory_not_found(raw)),
            Some(node) if !node.is_dir() => return Err(Error::not_a_directory(raw)),
            Some(_) => {}
        }

        self.cwd = target;
        self.persist();
        let pwd = self.pwd();
        log_debug!("cd {pwd}", pwd: pwd.as_str());
        Ok(pwd)
    }

    /// Resolves the directory that will hold a new entry named by `path`
    fn parent_for_create(&mut self, path: &str) -> Result<(&mut Children, String)> {
        let segments = path::normalize(path, &self.cwd);
        let (parent, name) = path::split_last(&segments).ok_or(Error::RootNotAllowed)?;
        let parent_display = path::display(parent);
        let children = self
            .root
            .lookup_mut(parent)
            .ok_or_else(|| Error::parent_missing(&parent_display))?
            .children_mut()
            .ok_or_else(|| Error::not_a_directory(&parent_display))?;
        Ok((children, name.to_string()))
    }

    pub fn mkdir(&mut self, path: &str) -> Result<String> {
        if path.is_empty() {
            return Err(Error::missing_argument(USAGE_MKDIR));
        }
        let (children, name) = self.parent_for_create(path)?;
        if children.contains_key(&name) {
            return Err(Error::already_exists(path));
        }
        _ = children.insert(name.clone(), Node::empty_dir());

        self.persist();
        log_debug!("mkdir {path}", path: path);
        Ok(format!("Created directory {}", name))
    }

    /// Creates an empty file. An existing file keeps its content.
    pub fn touch(&mut self, path: &str) -> Result<String> {
        if path.is_empty() {
            return Err(Error::missing_argument(USAGE_TOUCH));
        }
        let (children, name) = self.parent_for_create(path)?;
        match children.get(&name).map(Node::entry_type) {
            Some(EntryType::Directory) => return Err(Error::cannot_overwrite_directory(path)),
            Some(EntryType::File) => {}
            None => {
                _ = children.insert(name.clone(), Node::file(""));
            }
        }

        self.persist();
        log_debug!("touch {path}", path: path);
        Ok(format!("Touched {}", name))
    }

    /// Replaces (or creates) a file's content. Empty content is rejected.
    pub fn write(&mut self, path: &str, content: &str) -> Result<String> {
        if path.is_empty() || content.is_empty() {
            return Err(Error::missing_argument(USAGE_WRITE));
        }
        let (children, name) = self.parent_for_create(path)?;
        if children.get(&name).is_some_and(Node::is_dir) {
            return Err(Error::cannot_overwrite_directory(path));
        }
        _ = children.insert(name.clone(), Node::file(content));

        self.persist();
        log_debug!("write {path}", path: path);
        Ok(format!("Wrote to {}", name))
    }

    pub fn cat(&self, path: &str) -> Result<String> {
        if path.is_empty() {
            return Err(Error::missing_argument(USAGE_CAT));
        }
        let segments = self.normalize(path);
        match self.root.lookup(&segments) {
            None => Err(Error::file_not_found(path)),
            Some(Node::Directory { .. }) => Err(Error::not_a_file(path)),
            Some(Node::File { content }) => Ok(content.clone()),
        }
    }

    /// Renders the subtree at `path`, one entry per line, indented by depth
    pub fn tree(&self, path: Option<&str>) -> Result<String> {
        let raw = path.unwrap_or(".");
        let segments = self.normalize(raw);
        let node = self
            .root
            .lookup(&segments)
            .ok_or_else(|| Error::path_not_found(raw))?;
        Ok(format_tree(path::basename(&segments), node))
    }

    /// Discards every change and restores the default tree, in one step
    pub fn reset(&mut self) -> String {
        self.root = snapshot::default_tree();
        self.cwd = self.home.clone();
        self.persist();
        log_info!("Filesystem reset to defaults");
        RESET_MESSAGE.to_string()
    }
}

impl std::fmt::Debug for VirtualFileSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "VirtualFileSystem{{cwd: {}}}", self.pwd())
    }
}
