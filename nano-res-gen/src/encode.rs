// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

/*! Encoding files as resource source code. */

use {
    crate::{
        config::GeneratorConfig,
        error::{GeneratorError, Result},
        naming::{byte_array_body, rust_string_literal, sanitize_filename, static_ident},
        template::{ResourceTemplateData, HANDLEBARS, RESOURCE_TEMPLATE},
    },
    nano_res::Resource,
    std::path::{Path, PathBuf},
};

/// Number of byte literals per line of generated source.
const BYTES_PER_LINE: usize = 16;

/// A file read into memory and prepared for code generation.
#[derive(Clone, Debug)]
pub struct EncodedResource {
    /// Path of the file that was read.
    pub source_path: PathBuf,

    /// Identifier derived from the filename, without the checksum suffix.
    pub ident: String,

    /// Path of the generated source file.
    pub output_path: PathBuf,

    /// The resource as it will appear in the generated file.
    pub resource: Resource<'static>,
}

impl EncodedResource {
    /// Read a file and derive everything needed to generate its resource.
    ///
    /// Missing, empty, and oversized files are rejected, as are files whose
    /// name has no portable characters.
    pub fn from_path(path: impl AsRef<Path>, config: &GeneratorConfig) -> Result<Self> {
        let path = path.as_ref();

        let metadata = std::fs::metadata(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                GeneratorError::InputNotFound(path.to_path_buf())
            } else {
                GeneratorError::IoPath(path.to_path_buf(), e)
            }
        })?;

        if !metadata.is_file() {
            return Err(GeneratorError::InputNotFile(path.to_path_buf()));
        }

        let size = metadata.len();
        if size == 0 {
            return Err(GeneratorError::EmptyFile(path.to_path_buf()));
        }
        if size > config.max_size {
            return Err(GeneratorError::FileTooLarge {
                path: path.to_path_buf(),
                size,
                limit: config.max_size,
            });
        }

        let raw_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let filename = sanitize_filename(&raw_name);
        let ident = static_ident(&filename)
            .ok_or_else(|| GeneratorError::UnusableFilename(path.to_path_buf()))?;

        let data =
            std::fs::read(path).map_err(|e| GeneratorError::IoPath(path.to_path_buf(), e))?;
        // The file may have been truncated between stat and read.
        if data.is_empty() {
            return Err(GeneratorError::EmptyFile(path.to_path_buf()));
        }

        let resource = Resource::from_data(filename, data)?;

        let parent = path
            .parent()
            .ok_or_else(|| GeneratorError::NoParentDirectory(path.to_path_buf()))?;
        let output_path = parent.join(format!("{}.{}", resource.filename(), config.extension));

        Ok(Self {
            source_path: path.to_path_buf(),
            ident,
            output_path,
            resource,
        })
    }

    /// Name of the generated `static` holding the resource.
    ///
    /// This is the identifier suffixed with the checksum's short id, so
    /// distinct files with the same name produce distinct items.
    pub fn static_name(&self) -> String {
        format!(
            "{}_{}",
            self.ident,
            self.resource.checksum().short_id().to_ascii_uppercase()
        )
    }

    /// Render the Rust source defining this resource.
    pub fn render(&self, config: &GeneratorConfig, date: &str) -> Result<String> {
        let data = ResourceTemplateData {
            date: date.to_string(),
            version: env!("CARGO_PKG_VERSION"),
            static_name: self.static_name(),
            filename: self.resource.filename().to_string(),
            filename_literal: rust_string_literal(self.resource.filename()),
            size: self.resource.size(),
            md5: self.resource.checksum().to_string(),
            bytes: byte_array_body(self.resource.data(), BYTES_PER_LINE),
            crate_path: config.crate_path.clone(),
        };

        Ok(HANDLEBARS.render(RESOURCE_TEMPLATE, &data)?)
    }

    /// Render and write the generated source file.
    pub fn write(&self, config: &GeneratorConfig, date: &str) -> Result<()> {
        let source = self.render(config, date)?;

        std::fs::write(&self.output_path, source)
            .map_err(|e| GeneratorError::IoPath(self.output_path.clone(), e))
    }
}
