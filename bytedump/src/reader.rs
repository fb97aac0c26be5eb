//! Whole-file binary reading.
//!
//! The file is read into memory in a single operation. There is no
//! chunking, no streaming, and no partial-read recovery: any failure while
//! opening or reading is fatal to the caller. The file handle is scoped to
//! the read and is closed on every exit path.

use std::fs;
use std::io;

use crate::error::{Error, Result};
use crate::path::ResolvedPath;

/// Read the entire contents of a file as raw bytes.
///
/// # Errors
///
/// Returns:
/// - [`Error::PathNotFound`] if the path does not exist
/// - [`Error::PermissionDenied`] if the file is not readable
/// - [`Error::IsDirectory`] if the path names a directory
/// - [`Error::ReadFailed`] for any other OS-level read failure
///
/// # Examples
///
/// ```no_run
/// use bytedump::{read_bytes, resolve};
/// use std::path::Path;
///
/// let resolved = resolve(Path::new("data.bin")).unwrap();
/// let bytes = read_bytes(&resolved).unwrap();
/// println!("{} bytes", bytes.len());
/// ```
pub fn read_bytes(path: &ResolvedPath) -> Result<Vec<u8>> {
    fs::read(path.as_path()).map_err(|err| read_error(path, err))
}

/// Map an I/O error from a file read onto the library taxonomy.
fn read_error(path: &ResolvedPath, err: io::Error) -> Error {
    match err.kind() {
        io::ErrorKind::NotFound => Error::PathNotFound {
            path: path.as_path().to_path_buf(),
        },
        io::ErrorKind::PermissionDenied => Error::PermissionDenied {
            path: path.as_path().to_path_buf(),
        },
        // EISDIR surfaces with a kind that varies across platforms and
        // toolchain versions, so classify via metadata instead.
        _ if path.as_path().is_dir() => Error::IsDirectory {
            path: path.as_path().to_path_buf(),
        },
        _ => Error::ReadFailed {
            path: path.as_path().to_path_buf(),
            source: err,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::ResolvedPath;
    use std::io::Write;

    fn resolved(path: &std::path::Path) -> ResolvedPath {
        ResolvedPath::new(path.to_path_buf()).unwrap()
    }

    #[test]
    fn test_read_bytes_contents_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("data.bin");
        std::fs::File::create(&file)
            .unwrap()
            .write_all(&[0, 255, 128])
            .unwrap();

        let bytes = read_bytes(&resolved(&file)).unwrap();
        assert_eq!(bytes, vec![0, 255, 128]);
    }

    #[test]
    fn test_read_bytes_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("empty.bin");
        std::fs::File::create(&file).unwrap();

        let bytes = read_bytes(&resolved(&file)).unwrap();
        assert!(bytes.is_empty());
    }

    #[test]
    fn test_read_bytes_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.bin");

        let err = read_bytes(&resolved(&missing)).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_read_bytes_directory() {
        let dir = tempfile::tempdir().unwrap();

        let err = read_bytes(&resolved(dir.path())).unwrap_err();
        assert!(matches!(err, Error::IsDirectory { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_read_bytes_permission_denied() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("locked.bin");
        std::fs::write(&file, [1, 2, 3]).unwrap();
        std::fs::set_permissions(&file, std::fs::Permissions::from_mode(0o000)).unwrap();

        let result = read_bytes(&resolved(&file));

        // Restore so the tempdir can be cleaned up
        std::fs::set_permissions(&file, std::fs::Permissions::from_mode(0o644)).unwrap();

        // Root bypasses permission checks entirely
        if let Err(err) = result {
            assert!(err.is_permission_denied());
        }
    }
}
