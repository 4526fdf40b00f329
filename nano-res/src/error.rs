// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

/*! Error handling. */

use {std::path::PathBuf, thiserror::Error};

/// Errors constructing resources and checksums.
#[derive(Debug, Error)]
pub enum ResourceError {
    #[error("checksum must be 32 hex characters; got {0}")]
    ChecksumLength(usize),

    #[error("checksum contains non-hex character: {0:?}")]
    ChecksumCharacter(char),

    #[error("resource filename cannot be empty")]
    EmptyFilename,

    #[error("resource size {size} does not match data length {actual}")]
    SizeMismatch { size: usize, actual: usize },
}

/// Errors writing a resource to the filesystem.
///
/// These are the causes behind a [crate::WriteStatus::Failure].
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("unable to open {0} for writing: {1}")]
    Open(PathBuf, std::io::Error),

    #[error("I/O error writing {0}: {1}")]
    Write(PathBuf, std::io::Error),

    #[error("short write to {path}: wrote {written} of {expected} bytes")]
    ShortWrite {
        path: PathBuf,
        written: usize,
        expected: usize,
    },

    #[error("error closing {0}: {1}")]
    Close(PathBuf, std::io::Error),

    #[error("resource {filename} does not match its checksum {expected}")]
    ChecksumMismatch { filename: String, expected: String },
}

impl WriteError {
    /// Whether the target file may have been created or truncated.
    pub fn touched_filesystem(&self) -> bool {
        !matches!(self, Self::Open(..) | Self::ChecksumMismatch { .. })
    }
}
