// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

/*! Deriving names of generated files and items. */

/// Punctuation retained in sanitized filenames.
///
/// These are characters legal in filenames on both Windows and Linux.
const FILENAME_PUNCTUATION: &str = "`~!@#$%^&()-_=+[]{};',. ";

/// Strip characters from a filename that are not portable.
///
/// ASCII alphanumerics and [FILENAME_PUNCTUATION] are kept. Everything
/// else, including non-ASCII characters, is dropped.
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric() || FILENAME_PUNCTUATION.contains(*c))
        .collect()
}

/// Derive a Rust `static` identifier from a sanitized filename.
///
/// Characters that can't appear in an identifier become `_` and the result
/// is uppercased. A leading digit gets a `_` prefix.
///
/// Returns `None` if `name` is empty.
pub fn static_ident(name: &str) -> Option<String> {
    let ident = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect::<String>();

    match ident.chars().next() {
        None => None,
        Some(c) if c.is_ascii_digit() => Some(format!("_{}", ident)),
        Some(_) => Some(ident),
    }
}

/// Render a string as an escaped Rust string literal, including quotes.
pub fn rust_string_literal(s: &str) -> String {
    format!("\"{}\"", s.escape_default())
}

/// Render bytes as the body of a Rust array literal.
///
/// Each byte is a `0x..` literal. Lines hold `per_line` bytes and are
/// indented by 4 spaces. Every line ends with a trailing comma.
pub fn byte_array_body(data: &[u8], per_line: usize) -> String {
    data.chunks(per_line.max(1))
        .map(|chunk| {
            let line = chunk
                .iter()
                .map(|b| format!("0x{:02x}", b))
                .collect::<Vec<_>>()
                .join(", ");

            format!("    {},", line)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
