// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

/*! Generating resource files for files and directory trees. */

use {
    crate::{
        config::GeneratorConfig,
        encode::EncodedResource,
        error::{GeneratorError, Result},
        manifest::{render_manifest, ManifestEntry},
    },
    log::{info, warn},
    std::path::{Path, PathBuf},
};

/// Outcome of a generation run.
#[derive(Debug, Default)]
pub struct GenerateReport {
    /// Resources that were written.
    pub generated: Vec<ManifestEntry>,

    /// Inputs that were skipped, with the reason.
    pub failed: Vec<(PathBuf, GeneratorError)>,

    /// Where the manifest was written.
    pub manifest_path: PathBuf,
}

impl GenerateReport {
    /// Number of inputs processed.
    pub fn total(&self) -> usize {
        self.generated.len() + self.failed.len()
    }
}

/// Produces resource source files.
#[derive(Clone, Debug)]
pub struct Generator {
    config: GeneratorConfig,
    date: String,
}

impl Generator {
    /// Construct an instance stamping output with the current time.
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            config,
            date: chrono::Local::now().to_rfc3339(),
        }
    }

    /// Override the timestamp recorded in generated files.
    pub fn with_date(mut self, date: impl ToString) -> Self {
        self.date = date.to_string();
        self
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate the resource for a single file.
    ///
    /// The manifest is written next to the file. Paths recorded in the
    /// manifest are relative to `base` when possible.
    pub fn generate_file(
        &self,
        path: impl AsRef<Path>,
        base: impl AsRef<Path>,
    ) -> Result<GenerateReport> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(GeneratorError::InputNotFound(path.to_path_buf()));
        }
        if !path.is_file() {
            return Err(GeneratorError::InputNotFile(path.to_path_buf()));
        }

        let manifest_dir = path
            .parent()
            .ok_or_else(|| GeneratorError::NoParentDirectory(path.to_path_buf()))?;

        self.process(&[path.to_path_buf()], manifest_dir, base.as_ref())
    }

    /// Generate resources for every file under a directory.
    ///
    /// Previously generated files and the manifest are skipped. The
    /// manifest is written to the root of `dir`.
    pub fn generate_directory(
        &self,
        dir: impl AsRef<Path>,
        base: impl AsRef<Path>,
    ) -> Result<GenerateReport> {
        let dir = dir.as_ref();

        if !dir.exists() {
            return Err(GeneratorError::InputNotFound(dir.to_path_buf()));
        }
        if !dir.is_dir() {
            return Err(GeneratorError::InputNotDirectory(dir.to_path_buf()));
        }

        let inputs = self.collect_inputs(dir)?;

        self.process(&inputs, dir, base.as_ref())
    }

    /// Find input files under a directory, in a stable order.
    pub fn collect_inputs(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let mut inputs = vec![];

        for entry in walkdir::WalkDir::new(dir).sort_by_file_name() {
            let entry = entry?;

            if entry.file_type().is_dir() {
                continue;
            }

            let name = entry.file_name().to_string_lossy();
            if self.config.is_generated_name(&name) {
                continue;
            }

            inputs.push(entry.into_path());
        }

        Ok(inputs)
    }

    fn process(
        &self,
        inputs: &[PathBuf],
        manifest_dir: &Path,
        base: &Path,
    ) -> Result<GenerateReport> {
        let mut report = GenerateReport {
            manifest_path: manifest_dir.join(&self.config.manifest_name),
            ..Default::default()
        };

        for (idx, path) in inputs.iter().enumerate() {
            info!(
                "[{}/{}] processing '{}'",
                idx + 1,
                inputs.len(),
                path.display()
            );

            match self.process_one(path, base) {
                Ok(entry) => {
                    info!(
                        "wrote {} with MD5 {}; include it and use static {}",
                        entry.output.display(),
                        entry.md5,
                        entry.static_name
                    );
                    report.generated.push(entry);
                }
                Err(err) => {
                    warn!("skipping {}: {}", path.display(), err);
                    report.failed.push((path.clone(), err));
                }
            }
        }

        std::fs::write(&report.manifest_path, render_manifest(&report.generated))
            .map_err(|e| GeneratorError::IoPath(report.manifest_path.clone(), e))?;

        Ok(report)
    }

    fn process_one(&self, path: &Path, base: &Path) -> Result<ManifestEntry> {
        let encoded = EncodedResource::from_path(path, &self.config)?;
        encoded.write(&self.config, &self.date)?;

        Ok(ManifestEntry::new(&encoded, base))
    }
}
