// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

pub type Result<T> = std::result::Result<T, Error>;

/// Represents errors that can occur in filesystem operations.
///
/// Every variant is recoverable. The Display text is what the shell prints;
/// the offending path is kept on the variant but not shown.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A required path or content argument was empty; carries the usage line
    #[error("{0}")]
    MissingArgument(&'static str),

    #[error("Path not found")]
    PathNotFound(String),

    #[error("File not found")]
    FileNotFound(String),

    #[error("Directory not found")]
    DirectoryNotFound(String),

    #[error("Not a directory")]
    NotADirectory(String),

    #[error("Not a file")]
    NotAFile(String),

    #[error("Parent directory does not exist")]
    ParentMissing(String),

    #[error("Path already exists")]
    AlreadyExists(String),

    #[error("Cannot overwrite directory")]
    CannotOverwriteDirectory(String),

    #[error("Cannot use root for this operation")]
    RootNotAllowed,
}

impl Error {
    pub fn missing_argument(usage: &'static str) -> Self {
        Error::MissingArgument(usage)
    }

    pub fn path_not_found<S: AsRef<str>>(path: S) -> Self {
        Error::PathNotFound(path.as_ref().into())
    }

    pub fn file_not_found<S: AsRef<str>>(path: S) -> Self {
        Error::FileNotFound(path.as_ref().into())
    }

    pub fn directory_not_found<S: AsRef<str>>(path: S) -> Self {
        Error::DirectoryNotFound(path.as_ref().into())
    }

    pub fn not_a_directory<S: AsRef<str>>(path: S) -> Self {
        Error::NotADirectory(path.as_ref().into())
    }

    pub fn not_a_file<S: AsRef<str>>(path: S) -> Self {
        Error::NotAFile(path.as_ref().into())
    }

    pub fn parent_missing<S: AsRef<str>>(path: S) -> Self {
        Error::ParentMissing(path.as_ref().into())
    }

    pub fn already_exists<S: AsRef<str>>(path: S) -> Self {
        Error::AlreadyExists(path.as_ref().into())
    }

    pub fn cannot_overwrite_directory<S: AsRef<str>>(path: S) -> Self {
        Error::CannotOverwriteDirectory(path.as_ref().into())
    }
}

/// Failures reported by a [`crate::persistence::KeyValueStore`]
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage encoding error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Storage file could not be replaced: {0}")]
    Persist(#[from] tempfile::PersistError),
}
