//! Rendering byte buffers as decimal text.
//!
//! Each byte is rendered as its unsigned decimal value (no padding, no
//! leading zeros), values separated by exactly one space, with a single
//! trailing newline. An empty buffer renders as just the newline.

use std::io::Write;

use crate::error::Result;
use crate::path::ResolvedPath;
use crate::reader::read_bytes;

/// Render a byte buffer as space-separated decimal values.
///
/// # Examples
///
/// ```
/// use bytedump::format_bytes;
///
/// assert_eq!(format_bytes(&[65]), "65\n");
/// assert_eq!(format_bytes(&[0, 255, 128]), "0 255 128\n");
/// assert_eq!(format_bytes(&[]), "\n");
/// ```
#[must_use]
pub fn format_bytes(bytes: &[u8]) -> String {
    // Worst case is "255 " per byte plus the newline
    let mut out = String::with_capacity(bytes.len() * 4 + 1);
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(&b.to_string());
    }
    out.push('\n');
    out
}

/// Write a byte buffer as space-separated decimal values into a writer.
///
/// Output is identical to [`format_bytes`]; this variant streams into any
/// [`Write`] implementation instead of returning a `String`.
///
/// # Errors
///
/// Returns [`crate::Error::Io`] if writing fails.
pub fn write_bytes<W: Write>(writer: &mut W, bytes: &[u8]) -> Result<()> {
    writer.write_all(format_bytes(bytes).as_bytes())?;
    Ok(())
}

/// Read a file and write its byte dump into a writer.
///
/// The file is read completely before any output is produced, so a read
/// failure emits zero output. Returns the number of bytes dumped.
///
/// # Errors
///
/// Returns any error from [`read_bytes`] or [`write_bytes`].
///
/// # Examples
///
/// ```no_run
/// use bytedump::{dump_file, resolve};
/// use std::path::Path;
///
/// let resolved = resolve(Path::new("data.bin")).unwrap();
/// let count = dump_file(&resolved, &mut std::io::stdout().lock()).unwrap();
/// eprintln!("dumped {count} byte(s)");
/// ```
pub fn dump_file<W: Write>(path: &ResolvedPath, writer: &mut W) -> Result<usize> {
    let bytes = read_bytes(path)?;
    write_bytes(writer, &bytes)?;
    Ok(bytes.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::ResolvedPath;

    #[test]
    fn test_format_empty_buffer() {
        assert_eq!(format_bytes(&[]), "\n");
    }

    #[test]
    fn test_format_single_byte() {
        assert_eq!(format_bytes(&[65]), "65\n");
    }

    #[test]
    fn test_format_preserves_order() {
        assert_eq!(format_bytes(&[0, 255, 128]), "0 255 128\n");
    }

    #[test]
    fn test_format_no_trailing_space() {
        let rendered = format_bytes(&[1, 2, 3]);
        assert_eq!(rendered, "1 2 3\n");
        assert!(!rendered.contains(" \n"));
    }

    #[test]
    fn test_format_full_byte_range() {
        let bytes: Vec<u8> = (0..=255).collect();
        let expected = (0..=255)
            .map(|v: u16| v.to_string())
            .collect::<Vec<_>>()
            .join(" ")
            + "\n";
        assert_eq!(format_bytes(&bytes), expected);
    }

    #[test]
    fn test_format_is_decimal_only() {
        // 0x0A would render as "a" in hex; decimal must give "10"
        assert_eq!(format_bytes(&[0x0A, 0x10]), "10 16\n");
    }

    #[test]
    fn test_write_bytes_matches_format() {
        let bytes = [7, 0, 200];
        let mut out = Vec::new();
        write_bytes(&mut out, &bytes).unwrap();
        assert_eq!(out, format_bytes(&bytes).into_bytes());
    }

    #[test]
    fn test_dump_file_pipeline() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("data.bin");
        std::fs::write(&file, [0, 255, 128]).unwrap();

        let resolved = ResolvedPath::new(file).unwrap();
        let mut out = Vec::new();
        let count = dump_file(&resolved, &mut out).unwrap();

        assert_eq!(count, 3);
        assert_eq!(out, b"0 255 128\n");
    }

    #[test]
    fn test_dump_file_missing_emits_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let resolved = ResolvedPath::new(dir.path().join("missing.bin")).unwrap();

        let mut out = Vec::new();
        let err = dump_file(&resolved, &mut out).unwrap_err();

        assert!(err.is_not_found());
        assert!(out.is_empty());
    }
}
