// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! The fixed handler table: command name to implementing operation.

pub mod files;
pub mod navigate;
pub mod session;

use nebulafs::{Result, VirtualFileSystem};

/// What a handler asks the shell to do with its result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print these lines
    Text(String),
    /// Reset the visible transcript to the banner
    ClearTranscript,
}

pub type Handler = fn(&mut VirtualFileSystem, &[&str]) -> Result<Reply>;

pub const COMMANDS: &[(&str, Handler)] = &[
    ("help", session::help),
    ("ls", navigate::ls),
    ("pwd", navigate::pwd),
    ("cd", navigate::cd),
    ("cat", files::cat),
    ("mkdir", files::mkdir),
    ("touch", files::touch),
    ("write", files::write),
    ("tree", navigate::tree),
    ("clear", session::clear),
    ("reset", session::reset),
];

#[must_use]
pub fn lookup(name: &str) -> Option<Handler> {
    COMMANDS
        .iter()
        .find(|(command, _)| *command == name)
        .map(|(_, handler)| *handler)
}

/// Names of every command, in help order
pub fn names() -> impl Iterator<Item = &'static str> {
    COMMANDS.iter().map(|(name, _)| *name)
}

/// First argument, the path for most commands
pub(crate) fn first<'a>(args: &[&'a str]) -> Option<&'a str> {
    args.first().copied()
}
