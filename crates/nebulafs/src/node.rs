// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Directory entries, kept in name order
pub type Children = BTreeMap<String, Node>;

/// A node in the tree: either a directory owning its children or a file.
///
/// Serialized in the snapshot wire shape, e.g.
/// `{"type":"dir","children":{"a.txt":{"type":"file","content":"hi"}}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Node {
    #[serde(rename = "dir")]
    Directory {
        #[serde(default)]
        children: Children,
    },
    #[serde(rename = "file")]
    File {
        #[serde(default)]
        content: String,
    },
}

/// Type of node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryType {
    Directory,
    File,
}

impl Node {
    #[must_use]
    pub fn empty_dir() -> Self {
        Node::Directory {
            children: Children::new(),
        }
    }

    #[must_use]
    pub fn file<S: Into<String>>(content: S) -> Self {
        Node::File {
            content: content.into(),
        }
    }

    /// Builder used for canned trees
    #[must_use]
    pub fn dir<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, Node)>,
        S: Into<String>,
    {
        Node::Directory {
            children: entries.into_iter().map(|(n, c)| (n.into(), c)).collect(),
        }
    }

    #[must_use]
    pub fn entry_type(&self) -> EntryType {
        match self {
            Node::Directory { .. } => EntryType::Directory,
            Node::File { .. } => EntryType::File,
        }
    }

    #[must_use]
    pub fn is_dir(&self) -> bool {
        self.entry_type() == EntryType::Directory
    }

    #[must_use]
    pub fn children(&self) -> Option<&Children> {
        match self {
            Node::Directory { children } => Some(children),
            Node::File { .. } => None,
        }
    }

    pub fn children_mut(&mut self) -> Option<&mut Children> {
        match self {
            Node::Directory { children } => Some(children),
            Node::File { .. } => None,
        }
    }

    #[must_use]
    pub fn content(&self) -> Option<&str> {
        match self {
            Node::File { content } => Some(content),
            Node::Directory { .. } => None,
        }
    }

    /// Follows `segments` down from this node.
    ///
    /// Returns `None` when a segment is missing or passes through a file.
    #[must_use]
    pub fn lookup<S: AsRef<str>>(&self, segments: &[S]) -> Option<&Node> {
        segments
            .iter()
            .try_fold(self, |node, name| node.children()?.get(name.as_ref()))
    }

    pub fn lookup_mut<S: AsRef<str>>(&mut self, segments: &[S]) -> Option<&mut Node> {
        let mut node = self;
        for name in segments {
            node = node.children_mut()?.get_mut(name.as_ref())?;
        }
        Some(node)
    }

    /// Lazy depth-first walk over the descendants of this node.
    ///
    /// Children are visited in name order; direct children have depth 1.
    /// A file has no descendants.
    #[must_use]
    pub fn walk(&self) -> Walk<'_> {
        let mut stack = Vec::new();
        if let Some(children) = self.children() {
            stack.push((1, children.iter()));
        }
        Walk { stack }
    }
}

/// One line of a depth-first walk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalkEntry<'a> {
    pub name: &'a str,
    pub depth: usize,
    pub entry_type: EntryType,
}

/// Iterator returned by [`Node::walk`]
pub struct Walk<'a> {
    stack: Vec<(usize, std::collections::btree_map::Iter<'a, String, Node>)>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = WalkEntry<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (depth, iter) = self.stack.last_mut()?;
            let depth = *depth;
            let Some((name, node)) = iter.next() else {
                _ = self.stack.pop();
                continue;
            };
            if let Some(children) = node.children() {
                self.stack.push((depth + 1, children.iter()));
            }
            return Some(WalkEntry {
                name,
                depth,
                entry_type: node.entry_type(),
            });
        }
    }
}
