// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Removing generated files.

use {
    crate::{
        config::GeneratorConfig,
        error::{GeneratorError, Result},
    },
    log::debug,
    std::path::Path,
};

/// Delete generated resource files under a directory.
///
/// Every file with the output extension is removed recursively, as is the
/// manifest at the root of `dir`. Returns the number of files deleted.
pub fn purge_directory(dir: impl AsRef<Path>, config: &GeneratorConfig) -> Result<usize> {
    let dir = dir.as_ref();

    if !dir.exists() {
        return Err(GeneratorError::InputNotFound(dir.to_path_buf()));
    }
    if !dir.is_dir() {
        return Err(GeneratorError::InputNotDirectory(dir.to_path_buf()));
    }

    let mut count = 0;

    for entry in walkdir::WalkDir::new(dir) {
        let entry = entry?;

        if !entry.file_type().is_file()
            || !config.has_output_extension(&entry.file_name().to_string_lossy())
        {
            continue;
        }

        debug!("removing {}", entry.path().display());
        std::fs::remove_file(entry.path())
            .map_err(|e| GeneratorError::IoPath(entry.path().to_path_buf(), e))?;
        count += 1;
    }

    let manifest_path = dir.join(&config.manifest_name);
    if manifest_path.is_file() {
        debug!("removing {}", manifest_path.display());
        std::fs::remove_file(&manifest_path)
            .map_err(|e| GeneratorError::IoPath(manifest_path.clone(), e))?;
        count += 1;
    }

    Ok(count)
}
