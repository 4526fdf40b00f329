// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use {
    once_cell::sync::Lazy,
    std::path::{Path, PathBuf},
};

pub static DEFAULT_TEMP_DIR: Lazy<tempfile::TempDir> = Lazy::new(|| {
    tempfile::Builder::new()
        .prefix("nano-res-gen-test")
        .tempdir()
        .expect("unable to create temporary directory")
});

/// Create a fresh directory for a single test.
pub fn temp_dir() -> std::io::Result<tempfile::TempDir> {
    tempfile::Builder::new()
        .prefix("case")
        .tempdir_in(DEFAULT_TEMP_DIR.path())
}

/// Write files relative to a directory, creating parents as needed.
pub fn populate(root: &Path, files: &[(&str, &str)]) -> std::io::Result<Vec<PathBuf>> {
    let mut paths = vec![];

    for (rel, data) in files {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, data)?;
        paths.push(path);
    }

    Ok(paths)
}
