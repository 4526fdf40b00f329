// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

/*! Content digests carried by resources. */

use {
    crate::error::ResourceError,
    md5::{Digest, Md5},
    std::{fmt::Formatter, str::FromStr},
};

/// Number of hex characters in a [Checksum].
pub const CHECKSUM_HEX_LENGTH: usize = 32;

/// Number of leading hex characters used as a short identifier.
pub const SHORT_ID_LENGTH: usize = 6;

/// The MD5 content digest of a resource, as 32 ASCII hex characters.
///
/// The value is a claim made by whoever produced the resource. Nothing in
/// this crate recomputes it unless explicitly asked to.
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub struct Checksum([u8; CHECKSUM_HEX_LENGTH]);

const fn is_hex_digit(c: u8) -> bool {
    matches!(c, b'0'..=b'9' | b'a'..=b'f' | b'A'..=b'F')
}

impl Checksum {
    /// Construct an instance from hex characters.
    ///
    /// This is usable in `const` and `static` initializers. Evaluation
    /// panics if any byte is not an ASCII hex digit, which surfaces as a
    /// compile error in constant contexts.
    pub const fn from_hex_bytes(hex: [u8; CHECKSUM_HEX_LENGTH]) -> Self {
        let mut i = 0;
        while i < CHECKSUM_HEX_LENGTH {
            if !is_hex_digit(hex[i]) {
                panic!("checksum contains a non-hex character");
            }
            i += 1;
        }

        Self(hex)
    }

    /// Parse a hex string into an instance.
    pub fn parse(s: &str) -> Result<Self, ResourceError> {
        let bytes = s.as_bytes();

        if bytes.len() != CHECKSUM_HEX_LENGTH {
            return Err(ResourceError::ChecksumLength(bytes.len()));
        }

        if let Some(c) = s.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(ResourceError::ChecksumCharacter(c));
        }

        let mut hex = [0u8; CHECKSUM_HEX_LENGTH];
        hex.copy_from_slice(bytes);

        Ok(Self(hex))
    }

    /// Compute the checksum of some data.
    ///
    /// This is the same digest the generator records.
    pub fn compute(data: &[u8]) -> Self {
        let digest = Md5::digest(data);

        let mut hex = [0u8; CHECKSUM_HEX_LENGTH];
        // Both sides are exactly 32 bytes, so this cannot fail.
        hex::encode_to_slice(digest, &mut hex)
            .expect("MD5 digest encodes to 32 hex characters");

        Self(hex)
    }

    /// Obtain the hex characters as a string slice.
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.0).expect("checksum is validated ASCII")
    }

    /// The first few hex characters, lowercased.
    ///
    /// Used to derive unique names for generated items.
    pub fn short_id(&self) -> String {
        self.as_str()[..SHORT_ID_LENGTH].to_ascii_lowercase()
    }

    /// Whether this checksum describes the given data.
    ///
    /// Hex case is not significant.
    pub fn matches(&self, data: &[u8]) -> bool {
        Self::compute(data).as_str().eq_ignore_ascii_case(self.as_str())
    }
}

impl std::fmt::Debug for Checksum {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Md5({})", self.as_str())
    }
}

impl std::fmt::Display for Checksum {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Checksum {
    type Err = ResourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Checksum {
    type Error = ResourceError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}
