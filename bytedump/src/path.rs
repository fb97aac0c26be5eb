//! Path resolution to absolute form.
//!
//! This module turns a user-supplied path string into an absolute path by:
//! - Expanding tilde (~) to the home directory
//! - Joining relative paths onto the current working directory
//! - Resolving `.` and `..` components
//!
//! Resolution is pure path-string manipulation: the filesystem is never
//! consulted, so the result is deterministic for a given working directory
//! and input string, and non-existent paths resolve just fine. Whether the
//! path actually exists is discovered later, when the file is opened.

use std::env;
use std::fmt;
use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Expand tilde (~) to the home directory.
///
/// This function handles `~` and `~/path` but does not support `~user`
/// syntax. Paths that do not start with a tilde are returned unchanged.
///
/// # Errors
///
/// Returns an error if:
/// - The path contains invalid UTF-8
/// - The home directory cannot be determined
/// - The path uses `~user` syntax (not supported)
///
/// # Examples
///
/// ```
/// use bytedump::path::expand_tilde;
/// use std::path::Path;
///
/// let expanded = expand_tilde(Path::new("~/data.bin")).unwrap();
/// assert!(expanded.is_absolute());
/// assert!(expanded.ends_with("data.bin"));
///
/// let expanded = expand_tilde(Path::new("/absolute")).unwrap();
/// assert_eq!(expanded, Path::new("/absolute"));
/// ```
pub fn expand_tilde(path: &Path) -> Result<PathBuf> {
    let path_str = path.to_str().ok_or_else(|| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: "Path contains invalid UTF-8".to_string(),
    })?;

    if !path_str.starts_with('~') {
        return Ok(path.to_path_buf());
    }

    let home = home::home_dir().ok_or_else(|| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: "Cannot determine home directory".to_string(),
    })?;

    if path_str == "~" {
        Ok(home)
    } else if path_str.starts_with("~/") || path_str.starts_with("~\\") {
        Ok(home.join(&path_str[2..]))
    } else {
        // ~user syntax not supported
        Err(Error::InvalidPath {
            path: path.to_path_buf(),
            reason: "~user syntax is not supported; use ~ or ~/path".to_string(),
        })
    }
}

/// Resolve `.` and `..` components in an absolute path.
///
/// # Errors
///
/// Returns an error if the path contains too many `..` components that
/// would escape the root directory.
///
/// # Examples
///
/// ```
/// use bytedump::path::resolve_components;
/// use std::path::{Path, PathBuf};
///
/// let resolved = resolve_components(Path::new("/a/./b/../c")).unwrap();
/// assert_eq!(resolved, PathBuf::from("/a/c"));
///
/// let resolved = resolve_components(Path::new("/a/b/../../c")).unwrap();
/// assert_eq!(resolved, PathBuf::from("/c"));
/// ```
pub fn resolve_components(path: &Path) -> Result<PathBuf> {
    let mut result = PathBuf::new();
    let mut has_root = false;

    for component in path.components() {
        match component {
            Component::RootDir => {
                result.push(component);
                has_root = true;
            }
            Component::Prefix(prefix) => {
                // Windows prefix
                result.push(prefix.as_os_str());
                has_root = true;
            }
            Component::Normal(c) => {
                result.push(c);
            }
            Component::CurDir => {
                // Skip "." - it doesn't change the path
            }
            Component::ParentDir => {
                if !result.pop() {
                    // Already at root - can't go up further
                    return Err(Error::InvalidPath {
                        path: path.to_path_buf(),
                        reason: "Path contains too many '..' components (escapes root)".to_string(),
                    });
                }
            }
        }
    }

    // Ensure we at least have a root if we started with one
    if has_root && result.as_os_str().is_empty() {
        result.push(Component::RootDir);
    }

    Ok(result)
}

/// Resolve a path to its absolute form.
///
/// This is the main resolution function that:
/// 1. Expands tilde (~) if present
/// 2. Joins relative paths onto the current working directory
/// 3. Resolves `.` and `..` components
///
/// The filesystem is never consulted and symlinks are never followed.
///
/// # Errors
///
/// Returns an error if:
/// - Tilde expansion fails
/// - The current directory cannot be determined
/// - Component resolution escapes the root
///
/// # Examples
///
/// ```
/// use bytedump::path::resolve;
/// use std::path::Path;
///
/// // Relative paths resolve against the current working directory
/// let resolved = resolve(Path::new("data.bin")).unwrap();
/// assert!(resolved.as_path().is_absolute());
/// assert!(resolved.as_path().ends_with("data.bin"));
/// ```
pub fn resolve(path: &Path) -> Result<ResolvedPath> {
    let expanded = expand_tilde(path)?;

    let absolute = if expanded.is_absolute() {
        expanded
    } else {
        env::current_dir()?.join(expanded)
    };

    ResolvedPath::new(resolve_components(&absolute)?)
}

/// A path that has been resolved to absolute form.
///
/// Construction guarantees absoluteness: a `ResolvedPath` always holds an
/// absolute path with `.` and `..` components already resolved.
///
/// # Examples
///
/// ```
/// use bytedump::path::ResolvedPath;
/// use std::path::PathBuf;
///
/// let resolved = ResolvedPath::new(PathBuf::from("/absolute/path")).unwrap();
/// assert!(resolved.as_path().is_absolute());
///
/// assert!(ResolvedPath::new(PathBuf::from("relative/path")).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolvedPath {
    path: PathBuf,
}

impl ResolvedPath {
    /// Create a resolved path from an already-absolute path.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is not absolute.
    pub fn new(path: PathBuf) -> Result<Self> {
        if !path.is_absolute() {
            return Err(Error::InvalidPath {
                path,
                reason: "resolved path must be absolute".to_string(),
            });
        }
        Ok(Self { path })
    }

    /// Get the path as a `Path` reference.
    #[must_use]
    pub fn as_path(&self) -> &Path {
        &self.path
    }

    /// Consume the resolved path, returning the inner `PathBuf`.
    #[must_use]
    pub fn into_path_buf(self) -> PathBuf {
        self.path
    }
}

impl AsRef<Path> for ResolvedPath {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}

impl fmt::Display for ResolvedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}
