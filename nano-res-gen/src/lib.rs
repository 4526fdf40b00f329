// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

/*! Generate embeddable resource files.

This crate turns files on disk into Rust source files defining
[nano_res::Resource] `static` items. Each input file `foo.png` produces a
sibling `foo.png.nres` which can be pulled into a crate with
`include!("path/to/foo.png.nres")`. A manifest listing every generated
file, its `static` name, size, and MD5 is written alongside.

Generated files reference the runtime crate as `::nano_res` by default.
See [GeneratorConfig::crate_path] to change this.
*/

pub mod config;
pub mod encode;
pub mod error;
pub mod generate;
pub mod manifest;
pub mod naming;
pub mod purge;
mod template;
#[cfg(test)]
mod testutil;

pub use crate::{
    config::GeneratorConfig,
    encode::EncodedResource,
    error::{GeneratorError, Result},
    generate::{GenerateReport, Generator},
    manifest::ManifestEntry,
    purge::purge_directory,
};
