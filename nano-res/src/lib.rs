// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

/*! Embedded file resources.

This crate defines a tiny runtime representation of a file whose content is
compiled into a program: a [Resource] holding the file's checksum, filename,
size, and bytes. Resources are typically defined as `static` items by source
files emitted by the `nano-res-gen` tool and pulled in with `include!`, so no
filesystem I/O is needed to access them.

A resource can be written back to a real file with [write_resource()] (or
[Resource::write()]), which reports a two-valued [WriteStatus]. The richer
[try_write_resource()] exposes the cause of failures via [WriteError].

```
use nano_res::{Checksum, Resource, WriteStatus};

static HELLO_TXT_BYTES: [u8; 13] = *b"Hello, World!";

static HELLO_TXT: Resource<'static> = Resource::from_static(
    Checksum::from_hex_bytes(*b"65a8e27d8879283831b664bd8b7f0ad4"),
    "hello.txt",
    13,
    &HELLO_TXT_BYTES,
);

let dir = tempfile::TempDir::new().unwrap();
let dest = dir.path().join("hello.txt.out");

assert_eq!(HELLO_TXT.write(Some(dest.as_path())), WriteStatus::Success);
assert_eq!(std::fs::read(&dest).unwrap(), HELLO_TXT.data());
```

Checksums are recorded by the generator and trusted as-is. Nothing verifies
them implicitly; see [Resource::verify_checksum()] and
[WriteOptions::verify_checksum].
*/

mod checksum;
mod error;
mod resource;
mod write;

pub use crate::{
    checksum::{Checksum, CHECKSUM_HEX_LENGTH, SHORT_ID_LENGTH},
    error::{ResourceError, WriteError},
    resource::Resource,
    write::{
        resolve_target_path, try_write_resource, write_resource, WriteOptions, WriteStatus,
    },
};
