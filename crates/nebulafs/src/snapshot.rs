// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! The persisted `{root, cwd}` record and the canned default tree.

use crate::node::Node;
use serde::{Deserialize, Serialize};

/// Welcome text of `/home/visitor/readme.txt`
pub const README_TEXT: &str =
    "Welcome to NebulaOS!\nUse `help` to explore the simulated filesystem.";

/// Content of `/home/visitor/projects/nebula.txt`
pub const PROJECT_TEXT: &str = "NebulaOS v0.3 prototype running in browser mode.";

/// Content of `/system/motd.txt`
pub const MOTD_TEXT: &str = "All systems nominal.";

/// Segments of the home directory
pub const HOME: [&str; 2] = ["home", "visitor"];

#[must_use]
pub fn home() -> Vec<String> {
    HOME.iter().map(|s| s.to_string()).collect()
}

/// The tree a fresh or reset filesystem starts from
#[must_use]
pub fn default_tree() -> Node {
    Node::dir([
        (
            "home",
            Node::dir([(
                "visitor",
                Node::dir([
                    ("readme.txt", Node::file(README_TEXT)),
                    (
                        "projects",
                        Node::dir([("nebula.txt", Node::file(PROJECT_TEXT))]),
                    ),
                ]),
            )]),
        ),
        ("system", Node::dir([("motd.txt", Node::file(MOTD_TEXT))])),
    ])
}

/// Full filesystem state, stored as one JSON record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub root: Node,
    pub cwd: Vec<String>,
}

/// Borrowed form written on every persist
#[derive(Serialize)]
struct SnapshotRef<'a> {
    root: &'a Node,
    cwd: &'a [String],
}

/// Encodes a `{root, cwd}` record without taking ownership of the tree
pub fn encode(root: &Node, cwd: &[String]) -> Result<String, serde_json::Error> {
    serde_json::to_string(&SnapshotRef { root, cwd })
}

/// Loose form accepted when reading; a record without `root` is no state at all
#[derive(Deserialize)]
struct StoredSnapshot {
    root: Option<Node>,
    #[serde(default)]
    cwd: Vec<String>,
}

/// Why a stored value could not be used
#[derive(Debug)]
pub enum Rejected {
    Malformed(serde_json::Error),
    MissingRoot,
    RootNotDirectory,
}

impl std::fmt::Display for Rejected {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rejected::Malformed(err) => write!(f, "malformed snapshot: {}", err),
            Rejected::MissingRoot => write!(f, "snapshot has no root"),
            Rejected::RootNotDirectory => write!(f, "snapshot root is not a directory"),
        }
    }
}

impl Snapshot {
    #[must_use]
    pub fn fresh() -> Self {
        Self {
            root: default_tree(),
            cwd: home(),
        }
    }

    pub fn encode(&self) -> Result<String, serde_json::Error> {
        encode(&self.root, &self.cwd)
    }

    pub fn decode(text: &str) -> Result<Self, Rejected> {
        let stored: StoredSnapshot = serde_json::from_str(text).map_err(Rejected::Malformed)?;
        let root = stored.root.ok_or(Rejected::MissingRoot)?;
        if !root.is_dir() {
            return Err(Rejected::RootNotDirectory);
        }
        Ok(Self {
            root,
            cwd: stored.cwd,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tree_layout() {
        let root = default_tree();
        assert_eq!(
            root.lookup(&["home", "visitor", "readme.txt"])
                .and_then(Node::content),
            Some(README_TEXT)
        );
        assert_eq!(
            root.lookup(&["home", "visitor", "projects", "nebula.txt"])
                .and_then(Node::content),
            Some(PROJECT_TEXT)
        );
        assert_eq!(
            root.lookup(&["system", "motd.txt"]).and_then(Node::content),
            Some(MOTD_TEXT)
        );
    }

    #[test]
    fn test_encode_decode() {
        let snapshot = Snapshot::fresh();
        let text = snapshot.encode().unwrap();
        assert_eq!(Snapshot::decode(&text).unwrap(), snapshot);
    }

    #[test]
    fn test_missing_cwd_is_root() {
        let snapshot = Snapshot::decode(r#"{"root":{"type":"dir","children":{}}}"#).unwrap();
        assert!(snapshot.cwd.is_empty());
    }

    #[test]
    fn test_rejections() {
        assert!(matches!(
            Snapshot::decode(r#"{"cwd":["home"]}"#),
            Err(Rejected::MissingRoot)
        ));
        assert!(matches!(
            Snapshot::decode(r#"{"root":null}"#),
            Err(Rejected::MissingRoot)
        ));
        assert!(matches!(
            Snapshot::decode(r#"{"root":{"type":"file","content":"x"}}"#),
            Err(Rejected::RootNotDirectory)
        ));
        assert!(matches!(
            Snapshot::decode("{{{"),
            Err(Rejected::Malformed(_))
        ));
    }
}
