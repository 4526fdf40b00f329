// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

/*! Generator settings. */

/// Bytes in a megabyte, in decimal.
pub const BYTES_PER_MB: u64 = 1_000_000;

/// Default upper bound on the size of an input file.
pub const DEFAULT_MAX_SIZE: u64 = 16 * BYTES_PER_MB;

/// Default extension of generated resource files.
pub const DEFAULT_EXTENSION: &str = "nres";

/// Default filename of the manifest written alongside resource files.
pub const DEFAULT_MANIFEST_NAME: &str = "nres_manifest.txt";

/// Default path generated code uses to reference the runtime crate.
pub const DEFAULT_CRATE_PATH: &str = "::nano_res";

/// Settings controlling resource generation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GeneratorConfig {
    /// Input files larger than this many bytes are rejected.
    pub max_size: u64,

    /// Extension of generated files, without the leading `.`.
    pub extension: String,

    /// Filename of the manifest describing generated files.
    pub manifest_name: String,

    /// Path to the `nano-res` crate as seen by the code including the
    /// generated files.
    pub crate_path: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_size: DEFAULT_MAX_SIZE,
            extension: DEFAULT_EXTENSION.to_string(),
            manifest_name: DEFAULT_MANIFEST_NAME.to_string(),
            crate_path: DEFAULT_CRATE_PATH.to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Set the size limit in (decimal) megabytes.
    pub fn with_max_size_mb(mut self, mb: u64) -> Self {
        self.max_size = mb.saturating_mul(BYTES_PER_MB);
        self
    }

    /// Whether a filename looks like something this generator produced.
    pub fn is_generated_name(&self, name: &str) -> bool {
        name == self.manifest_name || self.has_output_extension(name)
    }

    /// Whether a filename ends with the output extension.
    pub fn has_output_extension(&self, name: &str) -> bool {
        name.len() > self.extension.len() + 1
            && name.ends_with(&self.extension)
            && name.as_bytes()[name.len() - self.extension.len() - 1] == b'.'
    }
}
