// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

/*! Error handling. */

use {std::path::PathBuf, thiserror::Error};

/// Primary crate error type.
#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("I/O error: {0:?}")]
    Io(#[from] std::io::Error),

    #[error("I/O error on path {0}: {1:?}")]
    IoPath(PathBuf, std::io::Error),

    #[error("directory walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("template render error: {0}")]
    Render(#[from] handlebars::RenderError),

    #[error("resource error: {0}")]
    Resource(#[from] nano_res::ResourceError),

    #[error("the file at path '{0}' doesn't exist")]
    InputNotFound(PathBuf),

    #[error("input path '{0}' does not point to a file")]
    InputNotFile(PathBuf),

    #[error("input path '{0}' does not point to a directory")]
    InputNotDirectory(PathBuf),

    #[error("cannot encode a file that is 0 bytes in size: {0}")]
    EmptyFile(PathBuf),

    #[error("cannot encode {path}: {size} bytes exceeds the limit of {limit} bytes")]
    FileTooLarge { path: PathBuf, size: u64, limit: u64 },

    #[error("filename of {0} has no usable characters")]
    UnusableFilename(PathBuf),

    #[error("path {0} has no parent directory")]
    NoParentDirectory(PathBuf),
}

/// Result type for this crate.
pub type Result<T, E = GeneratorError> = std::result::Result<T, E>;
