// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

/*! Materializing resources to the filesystem. */

use {
    crate::{error::WriteError, resource::Resource},
    log::{debug, warn},
    std::{
        fs::File,
        io::{ErrorKind, Write},
        path::{Path, PathBuf},
    },
};

/// Outcome of writing a resource to disk.
///
/// This deliberately carries no detail. Use [try_write_resource()] to
/// obtain the cause of a failure.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum WriteStatus {
    Success,
    Failure,
}

impl WriteStatus {
    /// Whether the write succeeded.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// The conventional process exit code for this status.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Success => 0,
            Self::Failure => 1,
        }
    }
}

impl std::fmt::Display for WriteStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Success => "SUCCESS",
            Self::Failure => "FAILURE",
        })
    }
}

impl<T> From<Result<T, WriteError>> for WriteStatus {
    fn from(res: Result<T, WriteError>) -> Self {
        match res {
            Ok(_) => Self::Success,
            Err(_) => Self::Failure,
        }
    }
}

/// Controls how a resource is written.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct WriteOptions {
    /// Check the content against the recorded checksum before writing.
    pub verify_checksum: bool,

    /// Delete the destination file if writing fails after it was opened.
    pub remove_partial: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            verify_checksum: false,
            remove_partial: true,
        }
    }
}

/// Resolve the path a resource will be written to.
///
/// A missing or empty path resolves to the resource's filename, relative to
/// the current directory. Any other path is used verbatim.
pub fn resolve_target_path<'a>(resource: &'a Resource, target: Option<&'a Path>) -> &'a Path {
    match target {
        Some(path) if !path.as_os_str().is_empty() => path,
        _ => Path::new(resource.filename()),
    }
}

/// Write data, returning how many bytes the writer accepted.
///
/// Stops early if the writer accepts zero bytes.
fn write_counted(writer: &mut impl Write, data: &[u8]) -> std::io::Result<usize> {
    let mut written = 0;

    while written < data.len() {
        match writer.write(&data[written..]) {
            Ok(0) => break,
            Ok(count) => written += count,
            Err(e) if e.kind() == ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }

    Ok(written)
}

fn write_payload(writer: &mut impl Write, data: &[u8], path: &Path) -> Result<(), WriteError> {
    let written =
        write_counted(writer, data).map_err(|e| WriteError::Write(path.to_path_buf(), e))?;

    if written != data.len() {
        return Err(WriteError::ShortWrite {
            path: path.to_path_buf(),
            written,
            expected: data.len(),
        });
    }

    writer
        .flush()
        .map_err(|e| WriteError::Close(path.to_path_buf(), e))
}

/// Write a resource to a file, reporting the cause of any failure.
///
/// Returns the path that was written. The file is created if missing and
/// truncated if present. Parent directories are not created.
pub fn try_write_resource(
    resource: &Resource,
    target: Option<&Path>,
    options: &WriteOptions,
) -> Result<PathBuf, WriteError> {
    let path = resolve_target_path(resource, target).to_path_buf();

    if options.verify_checksum && !resource.verify_checksum() {
        return Err(WriteError::ChecksumMismatch {
            filename: resource.filename().to_string(),
            expected: resource.checksum().to_string(),
        });
    }

    let mut fh = File::create(&path).map_err(|e| WriteError::Open(path.clone(), e))?;
    debug!("writing {} bytes to {}", resource.size(), path.display());

    // Devices and pipes accept writes but cannot be synced or replaced.
    let regular = fh
        .metadata()
        .map(|m| m.file_type().is_file())
        .unwrap_or(false);

    let res = write_payload(&mut fh, resource.data(), &path).and_then(|_| {
        if regular {
            fh.sync_all()
                .map_err(|e| WriteError::Close(path.clone(), e))
        } else {
            Ok(())
        }
    });
    drop(fh);

    finish_write(res, &path, regular, options)?;

    Ok(path)
}

/// Report the outcome of writing to an opened file.
///
/// On failure a regular file is removed when `remove_partial` is set.
fn finish_write(
    res: Result<(), WriteError>,
    path: &Path,
    regular: bool,
    options: &WriteOptions,
) -> Result<(), WriteError> {
    let err = match res {
        Ok(()) => return Ok(()),
        Err(err) => err,
    };

    warn!("{}", err);

    if options.remove_partial && regular && err.touched_filesystem() {
        debug!("removing partial file {}", path.display());
        if let Err(e) = std::fs::remove_file(path) {
            warn!("unable to remove partial file {}: {}", path.display(), e);
        }
    }

    Err(err)
}

/// Write a resource to a file.
///
/// `target` defaults to the resource's filename when `None` or empty.
/// Every failure, including being unable to open the destination, is
/// reported as [WriteStatus::Failure].
pub fn write_resource(resource: &Resource, target: Option<&Path>) -> WriteStatus {
    match try_write_resource(resource, target, &WriteOptions::default()) {
        Ok(_) => WriteStatus::Success,
        Err(err) => {
            debug!("failed to write {}: {}", resource.filename(), err);
            WriteStatus::Failure
        }
    }
}

impl<'a> Resource<'a> {
    /// Write this resource to a file.
    ///
    /// See [write_resource()].
    pub fn write(&self, path: Option<&Path>) -> WriteStatus {
        write_resource(self, path)
    }

    /// Write this resource to a file, reporting the cause of any failure.
    pub fn try_write(&self, path: Option<&Path>) -> Result<PathBuf, WriteError> {
        try_write_resource(self, path, &WriteOptions::default())
    }

    /// Write this resource to a file using explicit options.
    pub fn write_with(
        &self,
        path: Option<&Path>,
        options: &WriteOptions,
    ) -> Result<PathBuf, WriteError> {
        try_write_resource(self, path, options)
    }
}

#[cfg(test)]
mod tests {
    use {super::*, crate::checksum::Checksum, anyhow::Result};

    /// A writer that stops accepting data after a limit.
    struct LimitedWriter {
        buf: Vec<u8>,
        limit: usize,
    }

    impl Write for LimitedWriter {
        fn write(&mut self, data: &[u8]) -> std::io::Result<usize> {
            let count = data.len().min(self.limit - self.buf.len()).min(4);
            self.buf.extend_from_slice(&data[..count]);
            Ok(count)
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn hello() -> Resource<'static> {
        Resource::from_data("hello.txt", b"Hello, World!".to_vec())
            .expect("valid resource")
    }

    #[test]
    fn status_codes() {
        assert_eq!(WriteStatus::Success.exit_code(), 0);
        assert_eq!(WriteStatus::Failure.exit_code(), 1);
        assert_eq!(WriteStatus::Success.to_string(), "SUCCESS");
        assert_eq!(WriteStatus::Failure.to_string(), "FAILURE");
        assert!(!WriteStatus::from(Err::<(), _>(WriteError::ShortWrite {
            path: PathBuf::from("x"),
            written: 0,
            expected: 1
        }))
        .is_success());
    }

    #[test]
    fn resolve_path() {
        let r = hello();

        assert_eq!(resolve_target_path(&r, None), Path::new("hello.txt"));
        assert_eq!(
            resolve_target_path(&r, Some(Path::new(""))),
            Path::new("hello.txt")
        );
        assert_eq!(
            resolve_target_path(&r, Some(Path::new("../out/x.bin"))),
            Path::new("../out/x.bin")
        );
    }

    #[test]
    fn counted_write_loops_over_partial_writes() -> Result<()> {
        let mut writer = LimitedWriter {
            buf: vec![],
            limit: 100,
        };

        write_payload(&mut writer, b"Hello, World!", Path::new("mem"))?;
        assert_eq!(writer.buf, b"Hello, World!");

        Ok(())
    }

    #[test]
    fn short_write_detected() {
        let mut writer = LimitedWriter {
            buf: vec![],
            limit: 5,
        };

        let res = write_payload(&mut writer, b"Hello, World!", Path::new("mem"));
        match res {
            Err(WriteError::ShortWrite {
                written, expected, ..
            }) => {
                assert_eq!(written, 5);
                assert_eq!(expected, 13);
            }
            _ => panic!("expected short write"),
        }
    }

    #[test]
    fn write_to_path() -> Result<()> {
        let td = tempfile::TempDir::new()?;
        let r = hello();
        let dest = td.path().join("out.bin");

        assert_eq!(r.write(Some(dest.as_path())), WriteStatus::Success);
        assert_eq!(std::fs::read(&dest)?, b"Hello, World!");

        Ok(())
    }

    #[test]
    fn write_truncates_existing() -> Result<()> {
        let td = tempfile::TempDir::new()?;
        let dest = td.path().join("hello.txt");
        std::fs::write(&dest, vec![0u8; 1024])?;

        let r = hello();
        assert!(r.write(Some(dest.as_path())).is_success());
        assert!(r.write(Some(dest.as_path())).is_success());
        assert_eq!(std::fs::read(&dest)?, b"Hello, World!");

        Ok(())
    }

    #[test]
    fn missing_parent_fails() -> Result<()> {
        let td = tempfile::TempDir::new()?;
        let dest = td.path().join("out").join("renamed.bin");

        let r = hello();
        assert_eq!(r.write(Some(dest.as_path())), WriteStatus::Failure);
        assert!(matches!(r.try_write(Some(dest.as_path())), Err(WriteError::Open(..))));
        assert!(!td.path().join("out").exists());

        Ok(())
    }

    #[test]
    fn directory_target_fails() -> Result<()> {
        let td = tempfile::TempDir::new()?;

        let r = hello();
        assert_eq!(r.write(Some(td.path())), WriteStatus::Failure);
        assert!(td.path().is_dir());

        Ok(())
    }

    #[test]
    fn verify_checksum_option() -> Result<()> {
        let td = tempfile::TempDir::new()?;
        let dest = td.path().join("bad.txt");

        let bad = Resource::new(
            Checksum::compute(b"something else"),
            "bad.txt",
            &b"Hello, World!"[..],
        )?;

        // Default behavior trusts the checksum.
        assert!(bad.write(Some(dest.as_path())).is_success());
        std::fs::remove_file(&dest)?;

        let options = WriteOptions {
            verify_checksum: true,
            ..Default::default()
        };
        let res = bad.write_with(Some(dest.as_path()), &options);
        assert!(matches!(res, Err(WriteError::ChecksumMismatch { .. })));
        assert!(!dest.exists());

        let written = hello().write_with(Some(dest.as_path()), &options)?;
        assert_eq!(written, dest);

        Ok(())
    }

    fn short_write(path: &Path) -> WriteError {
        WriteError::ShortWrite {
            path: path.to_path_buf(),
            written: 5,
            expected: 13,
        }
    }

    #[test]
    fn partial_file_removed() -> Result<()> {
        let td = tempfile::TempDir::new()?;
        let dest = td.path().join("partial.txt");
        std::fs::write(&dest, b"Hello")?;

        let options = WriteOptions::default();
        let res = finish_write(Err(short_write(&dest)), &dest, true, &options);
        assert!(matches!(res, Err(WriteError::ShortWrite { .. })));
        assert!(!dest.exists());

        Ok(())
    }

    #[test]
    fn partial_file_kept() -> Result<()> {
        let td = tempfile::TempDir::new()?;
        let dest = td.path().join("partial.txt");
        std::fs::write(&dest, b"Hello")?;

        let options = WriteOptions {
            remove_partial: false,
            ..Default::default()
        };
        assert!(finish_write(Err(short_write(&dest)), &dest, true, &options).is_err());
        assert_eq!(std::fs::read(&dest)?, b"Hello");

        // Non-regular targets are never removed.
        let options = WriteOptions::default();
        assert!(finish_write(Err(short_write(&dest)), &dest, false, &options).is_err());
        assert!(dest.exists());

        assert!(finish_write(Ok(()), &dest, true, &options).is_ok());
        assert!(dest.exists());

        Ok(())
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn write_to_device_symlink() -> Result<()> {
        if !Path::new("/dev/null").exists() {
            return Ok(());
        }

        let td = tempfile::TempDir::new()?;
        let link = td.path().join("sink");
        std::os::unix::fs::symlink("/dev/null", &link)?;

        let r = hello();
        assert_eq!(r.try_write(Some(link.as_path()))?, link);
        assert_eq!(r.write(Some(link.as_path())), WriteStatus::Success);
        assert!(std::fs::symlink_metadata(&link)?.file_type().is_symlink());

        Ok(())
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn failed_device_write_keeps_target() -> Result<()> {
        if !Path::new("/dev/full").exists() {
            return Ok(());
        }

        let td = tempfile::TempDir::new()?;
        let link = td.path().join("full");
        std::os::unix::fs::symlink("/dev/full", &link)?;

        let r = hello();
        for remove_partial in [true, false] {
            let options = WriteOptions {
                remove_partial,
                ..Default::default()
            };

            let res = r.write_with(Some(link.as_path()), &options);
            assert!(matches!(res, Err(WriteError::Write(..))));
            assert!(std::fs::symlink_metadata(&link)?.file_type().is_symlink());
        }
        assert_eq!(r.write(Some(link.as_path())), WriteStatus::Failure);

        Ok(())
    }

    #[test]
    fn error_classification() {
        let open = WriteError::Open(
            PathBuf::from("x"),
            std::io::Error::new(ErrorKind::NotFound, "missing"),
        );
        assert!(!open.touched_filesystem());

        let short = WriteError::ShortWrite {
            path: PathBuf::from("x"),
            written: 1,
            expected: 2,
        };
        assert!(short.touched_filesystem());
    }
}
