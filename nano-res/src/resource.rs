// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use {
    crate::{checksum::Checksum, error::ResourceError},
    std::{borrow::Cow, fmt::Formatter},
};

/// Represents an embedded file.
///
/// A resource holds the content of a file plus metadata describing it: the
/// checksum of the content, the original filename (including its extension),
/// and the size in bytes. Instances are immutable once constructed.
///
/// Data fields are `Cow<T>` so the same type can reference `'static` data
/// compiled into a binary or own data produced at run-time.
///
/// The checksum is trusted as given. It is computed when the resource is
/// generated and is not verified on construction or on access. Use
/// [Resource::verify_checksum()] to check it explicitly.
#[derive(Clone, Eq, Hash, PartialEq)]
pub struct Resource<'a> {
    checksum: Checksum,
    filename: Cow<'a, str>,
    size: usize,
    data: Cow<'a, [u8]>,
}

impl Resource<'static> {
    /// Construct an instance from static data.
    ///
    /// This is what generated resource files call. It can be evaluated in a
    /// `static` initializer, in which case an empty filename or a `size`
    /// not matching `data` is a compile error.
    pub const fn from_static(
        checksum: Checksum,
        filename: &'static str,
        size: usize,
        data: &'static [u8],
    ) -> Self {
        if filename.is_empty() {
            panic!("resource filename cannot be empty");
        }
        if size != data.len() {
            panic!("resource size does not match data length");
        }

        Self {
            checksum,
            filename: Cow::Borrowed(filename),
            size,
            data: Cow::Borrowed(data),
        }
    }
}

impl<'a> Resource<'a> {
    /// Construct an instance from a checksum, filename, and data.
    ///
    /// The size is derived from the data.
    pub fn new(
        checksum: Checksum,
        filename: impl Into<Cow<'a, str>>,
        data: impl Into<Cow<'a, [u8]>>,
    ) -> Result<Self, ResourceError> {
        let data = data.into();
        let size = data.len();

        Self::from_parts(checksum, filename, size, data)
    }

    /// Construct an instance from all of its fields.
    ///
    /// `size` must equal the length of `data`.
    pub fn from_parts(
        checksum: Checksum,
        filename: impl Into<Cow<'a, str>>,
        size: usize,
        data: impl Into<Cow<'a, [u8]>>,
    ) -> Result<Self, ResourceError> {
        let filename = filename.into();
        let data = data.into();

        if filename.is_empty() {
            return Err(ResourceError::EmptyFilename);
        }

        if size != data.len() {
            return Err(ResourceError::SizeMismatch {
                size,
                actual: data.len(),
            });
        }

        Ok(Self {
            checksum,
            filename,
            size,
            data,
        })
    }

    /// Construct an instance by computing the checksum of data.
    pub fn from_data(
        filename: impl Into<Cow<'a, str>>,
        data: impl Into<Cow<'a, [u8]>>,
    ) -> Result<Self, ResourceError> {
        let data = data.into();
        let checksum = Checksum::compute(&data);

        Self::new(checksum, filename, data)
    }

    /// The checksum of the content, as recorded when the resource was generated.
    pub fn checksum(&self) -> &Checksum {
        &self.checksum
    }

    /// The filename of the resource, including its extension.
    ///
    /// This is an opaque identifier and is not guaranteed to be a valid path.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// The size of the content in bytes.
    pub fn size(&self) -> usize {
        self.size
    }

    /// The content of the resource.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Whether the recorded checksum matches the content.
    pub fn verify_checksum(&self) -> bool {
        self.checksum.matches(&self.data)
    }

    /// Convert to an instance that owns all of its data.
    pub fn into_owned(self) -> Resource<'static> {
        Resource {
            checksum: self.checksum,
            filename: Cow::Owned(self.filename.into_owned()),
            size: self.size,
            data: Cow::Owned(self.data.into_owned()),
        }
    }
}

impl<'a> std::fmt::Debug for Resource<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resource")
            .field("checksum", &self.checksum)
            .field("filename", &self.filename)
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}

impl<'a> AsRef<[u8]> for Resource<'a> {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}
