#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # bytedump
//!
//! A library for dumping a file's raw contents as decimal byte values.
//!
//! Given a filesystem path, bytedump resolves it to an absolute path,
//! reads the entire file into memory, and renders each byte's unsigned
//! value (0-255) in decimal, space-separated, with a trailing newline.
//!
//! ## Core Types
//!
//! - [`ResolvedPath`]: An absolute path derived from user input
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use bytedump::format_bytes;
//!
//! assert_eq!(format_bytes(&[0, 255, 128]), "0 255 128\n");
//! assert_eq!(format_bytes(&[]), "\n");
//! ```

pub mod dump;
pub mod error;
pub mod logging;
pub mod path;
pub mod reader;

// Re-export key types at crate root for convenience
pub use dump::{dump_file, format_bytes, write_bytes};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::{resolve, ResolvedPath};
pub use reader::read_bytes;
