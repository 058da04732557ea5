//! # scriptargs
//!
//! Works out the effective configuration of a script host from three layered sources:
//! the command line, an option file in the current directory, and a global option file.
//! Arguments after a lone `--` are separated out and passed through to the script untouched.
//!
//! The entry point is [`ArgumentHandler::parse`]; see [config] for precedence rules and file format.
// (c) 2024 Ross Younger
#![allow(clippy::module_name_repetitions)]

mod cli;
pub use cli::cli;
/// Configuration schema and merging
pub mod config;
/// Top-level argument handling
pub mod handler;
pub use handler::{ArgumentHandler, ParseResult};
/// OS abstraction layer
pub mod os;
/// Command-line and option file parsers
pub mod parser;
/// Host/script argument separation
pub mod split;
mod util;
