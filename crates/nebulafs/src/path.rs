// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Path resolution over segment lists.
//!
//! A resolved location is a `Vec<String>` of names walked from the root.
//! The empty list is the root itself.

pub const SEPARATOR: char = '/';

/// Resolves `path` against `cwd` into an absolute segment list.
///
/// An empty input yields a copy of `cwd`. A leading `/` starts from the
/// root, anything else starts from `cwd`. Empty tokens and `.` are skipped,
/// `..` pops one segment and is absorbed at the root. Never fails.
pub fn normalize<S: AsRef<str>>(path: &str, cwd: &[S]) -> Vec<String> {
    let mut segments: Vec<String> = if path.starts_with(SEPARATOR) {
        Vec::new()
    } else {
        cwd.iter().map(|s| s.as_ref().to_string()).collect()
    };

    for token in path.split(SEPARATOR) {
        match token {
            "" | "." => {}
            ".." => {
                _ = segments.pop();
            }
            name => segments.push(name.to_string()),
        }
    }

    segments
}

/// Renders a segment list as an absolute path string, `/` for the root
pub fn display<S: AsRef<str>>(segments: &[S]) -> String {
    if segments.is_empty() {
        return SEPARATOR.to_string();
    }
    segments.iter().fold(String::new(), |mut out, s| {
        out.push(SEPARATOR);
        out.push_str(s.as_ref());
        out
    })
}

/// Splits a segment list into its parent and final name.
///
/// Returns `None` for the root, which has neither.
pub fn split_last(segments: &[String]) -> Option<(&[String], &str)> {
    segments
        .split_last()
        .map(|(name, parent)| (parent, name.as_str()))
}

/// The final name of a segment list, `/` for the root
pub fn basename(segments: &[String]) -> &str {
    segments.last().map_or("/", String::as_str)
}
