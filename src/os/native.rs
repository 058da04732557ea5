// OS abstraction layer - std::fs implementation
// (c) 2024 Ross Younger

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use tracing::warn;

use super::FileSystem;
use crate::config::{DEFAULT_CONFIG_FILENAME, GLOBAL_CONFIG_DIRNAME};

/// The real filesystem, with the global option file under the platform configuration directory
/// (e.g. `~/.config/scriptcs/scriptcs.opts` on Linux).
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFileSystem {}

impl FileSystem for OsFileSystem {
    fn current_directory(&self) -> Result<PathBuf> {
        std::env::current_dir().context("could not determine the current directory")
    }

    fn global_config_file(&self) -> Option<PathBuf> {
        let Some(mut path) = dirs::config_dir() else {
            warn!("could not determine the platform configuration directory");
            return None;
        };
        path.push(GLOBAL_CONFIG_DIRNAME);
        path.push(DEFAULT_CONFIG_FILENAME);
        Some(path)
    }

    fn file_exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read_file(&self, path: &Path) -> Result<String> {
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
    }
}
