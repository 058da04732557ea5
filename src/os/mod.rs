//! OS abstraction layer
// (c) 2024 Ross Younger

use std::path::{Path, PathBuf};

use anyhow::Result;

/// Filesystem access needed to locate and read option files.
///
/// The active implementation is [`OsFileSystem`]; tests substitute an in-memory one.
pub trait FileSystem {
    /// The directory in which to look for the local option file.
    fn current_directory(&self) -> Result<PathBuf>;

    /// The absolute path to the global option file, if one is defined on this platform.
    ///
    /// # Note
    /// This is a _theoretical_ path construction; it does not guarantee that the path actually exists.
    ///
    /// If somehow we could not determine the path to use, returns None (and may emit a warning).
    fn global_config_file(&self) -> Option<PathBuf>;

    /// Whether `path` names an existing file.
    fn file_exists(&self, path: &Path) -> bool;

    /// Reads the whole of `path` as UTF-8.
    fn read_file(&self, path: &Path) -> Result<String>;
}

mod native;
pub use native::OsFileSystem;
