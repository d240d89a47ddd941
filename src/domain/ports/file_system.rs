//! FileSystem port - abstraction over the file operations an install needs
//!
//! Lets the installer run against the local disk or against test doubles that
//! refuse deletion or copying.

use std::io;
use std::path::Path;

use crate::domain::value_objects::ContentHash;

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O
/// - test mocks that inject failures
pub trait FileSystem {
    /// Check if anything exists at the path
    fn exists(&self, path: &Path) -> bool;

    /// Check if the path is an existing directory
    fn is_dir(&self, path: &Path) -> bool;

    /// Check if the path is an existing regular file
    fn is_file(&self, path: &Path) -> bool;

    /// Remove a single file
    fn remove_file(&self, path: &Path) -> io::Result<()>;

    /// Copy `from` to `to` byte for byte, returning the number of bytes copied.
    ///
    /// `to` must either hold the whole file afterwards or not exist.
    fn copy_file(&self, from: &Path, to: &Path) -> io::Result<u64>;

    /// Compute content hash (SHA256)
    fn hash(&self, path: &Path) -> io::Result<ContentHash>;

    /// Whether two existing paths name the same file
    fn same_file(&self, a: &Path, b: &Path) -> bool {
        a == b
    }
}

impl<F: FileSystem + ?Sized> FileSystem for &F {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        (**self).is_dir(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        (**self).is_file(path)
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        (**self).remove_file(path)
    }

    fn copy_file(&self, from: &Path, to: &Path) -> io::Result<u64> {
        (**self).copy_file(from, to)
    }

    fn hash(&self, path: &Path) -> io::Result<ContentHash> {
        (**self).hash(path)
    }

    fn same_file(&self, a: &Path, b: &Path) -> bool {
        (**self).same_file(a, b)
    }
}
