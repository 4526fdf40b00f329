// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Templates for generated files.

use {handlebars::Handlebars, once_cell::sync::Lazy, serde::Serialize};

/// Name of the template producing a resource source file.
pub const RESOURCE_TEMPLATE: &str = "resource.nres";

pub static HANDLEBARS: Lazy<Handlebars<'static>> = Lazy::new(|| {
    let mut handlebars = Handlebars::new();

    // Output is Rust source, not HTML.
    handlebars.register_escape_fn(handlebars::no_escape);
    handlebars.set_strict_mode(true);

    handlebars
        .register_template_string(
            RESOURCE_TEMPLATE,
            include_str!("templates/resource.nres.hbs"),
        )
        .expect("resource template should parse");

    handlebars
});

/// Values substituted into [RESOURCE_TEMPLATE].
#[derive(Clone, Debug, Serialize)]
pub struct ResourceTemplateData {
    pub date: String,
    pub version: &'static str,
    pub static_name: String,
    pub filename: String,
    pub filename_literal: String,
    pub size: usize,
    pub md5: String,
    pub bytes: String,
    pub crate_path: String,
}
