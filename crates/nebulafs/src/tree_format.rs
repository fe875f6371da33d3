//! Tree formatting for displaying a directory hierarchy as indented text.
//!
//! # Example
//!
//! ```
//! use nebulafs::node::Node;
//! use nebulafs::tree_format::format_tree;
//!
//! let root = Node::dir([
//!     ("docs", Node::dir([("a.txt", Node::file(""))])),
//!     ("b.txt", Node::file("")),
//! ]);
//!
//! let output = format_tree("/", &root);
//! assert_eq!(output, "/\n  b.txt\n  docs/\n    a.txt");
//! ```

use crate::node::{EntryType, Node, WalkEntry};

/// Spaces of indentation per depth level
pub const INDENT: usize = 2;

/// Suffix appended to directory names
pub const DIR_SUFFIX: char = '/';

/// Label for a single entry, directories suffixed with `/`
pub fn format_name(name: &str, entry_type: EntryType) -> String {
    match entry_type {
        EntryType::Directory => format!("{}{}", name, DIR_SUFFIX),
        EntryType::File => name.to_string(),
    }
}

/// Format one walked entry as an indented line
pub fn format_line(entry: &WalkEntry<'_>) -> String {
    format!(
        "{}{}",
        " ".repeat(INDENT * entry.depth),
        format_name(entry.name, entry.entry_type)
    )
}

/// Format `node` and its descendants.
///
/// The first line is `label`, suffixed with `/` when `node` is a directory
/// unless the label is the root itself. Descendant lines follow in
/// depth-first, name order.
pub fn format_tree(label: &str, node: &Node) -> String {
    let header = if node.is_dir() && label != "/" {
        format_name(label, EntryType::Directory)
    } else {
        label.to_string()
    };

    std::iter::once(header)
        .chain(node.walk().map(|entry| format_line(&entry)))
        .collect::<Vec<_>>()
        .join("\n")
}
