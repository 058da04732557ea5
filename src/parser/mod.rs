//! Turning raw input into [`Configuration`]s
// (c) 2024 Ross Younger
//!
//! Each source produces a complete [`Configuration`] with schema defaults in every field
//! it does not mention, or nothing at all when there was no input.

use anyhow::Result;

use crate::config::Configuration;

/// Parses command-line tokens
pub trait ArgumentParser {
    /// Returns `None` if there was nothing to parse.
    fn parse(&self, tokens: &[String]) -> Result<Option<Configuration>>;
}

/// Parses the contents of an option file
pub trait ConfigFileParser {
    /// Returns `None` when `text` is absent or blank.
    fn parse(&self, text: Option<&str>) -> Result<Option<Configuration>>;
}

mod args;
pub use args::ClapArgumentParser;

mod file;
pub use file::JsonConfigFileParser;

mod errors;
pub use errors::ConfigFileError;
