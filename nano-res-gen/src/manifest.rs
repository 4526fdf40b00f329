// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

/*! Human readable index of generated resources. */

use {
    crate::encode::EncodedResource,
    std::{
        fmt::Write,
        path::{Path, PathBuf},
    },
};

/// Describes a single generated resource.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ManifestEntry {
    /// Input file, relative to the base directory when possible.
    pub source: PathBuf,
    /// Generated file, relative to the base directory when possible.
    pub output: PathBuf,
    /// Name of the generated `static`.
    pub static_name: String,
    /// Size of the resource in bytes.
    pub size: usize,
    /// Hex MD5 of the resource.
    pub md5: String,
}

fn relative_to(path: &Path, base: &Path) -> PathBuf {
    path.strip_prefix(base).unwrap_or(path).to_path_buf()
}

impl ManifestEntry {
    /// Describe an encoded resource, with paths relative to `base`.
    pub fn new(encoded: &EncodedResource, base: &Path) -> Self {
        Self {
            source: relative_to(&encoded.source_path, base),
            output: relative_to(&encoded.output_path, base),
            static_name: encoded.static_name(),
            size: encoded.resource.size(),
            md5: encoded.resource.checksum().to_string(),
        }
    }

    /// The statement that pulls the generated file into Rust code.
    ///
    /// Paths use `/` separators, which `include!` accepts everywhere.
    pub fn include_line(&self) -> String {
        let path = self.output.to_string_lossy().replace('\\', "/");

        format!("include!({:?});", path)
    }

    fn output_name(&self) -> String {
        self.output
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default()
    }
}

/// Render manifest entries to text.
pub fn render_manifest(entries: &[ManifestEntry]) -> String {
    let mut s = String::new();

    for entry in entries {
        // Writing to a String cannot fail.
        let _ = writeln!(s, "--| {} |--", entry.source.display());
        let _ = writeln!(s, "\tResource file: {}", entry.output_name());
        let _ = writeln!(s, "\tStatic name: {}", entry.static_name);
        let _ = writeln!(s, "\tInclusion line for Rust: `{}`", entry.include_line());
        let _ = writeln!(s, "\tFilesize (bytes): {}", entry.size);
        let _ = writeln!(s, "\tMD5: {}", entry.md5);
        let _ = writeln!(s);
    }

    s
}
