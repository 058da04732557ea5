// (c) 2024 Ross Younger
//! # Configuration management
//!
//! The script host obtains its run-time configuration from the following sources, in order:
//! 1. Command-line options (everything before a lone `--`)
//! 2. The local option file, `scriptcs.opts` in the current directory
//!    (or whatever `--config` names)
//! 3. The global option file, `scriptcs/scriptcs.opts` under the platform configuration directory
//! 4. Hard-wired defaults
//!
//! Each option may be set in several places; the first source in the list above which
//! sets it wins.
//!
//! ## File format
//!
//! Option files are JSON objects keyed by the long option names:
//!
//! ```text
//! {
//!     "loglevel": "info",
//!     "modules": "mono",
//!     "allow-prerelease": true
//! }
//! ```
//!
//! Unknown keys are ignored.
//!
//! ### Traps and tips
//! 1. Every source produces a complete [Configuration], so a value equal to the schema default
//!    looks the same as a value that was never given. A default can only override a non-default
//!    value from a lower-priority source when the option is also named on the command line.
//!    In practice: to turn something off that a global file turns on, pass it on the command line
//!    (`--repl=false`).
//! 1. The presence check is a plain substring match against the command-line tokens.
//!
//! The full list of supported fields is defined by [Configuration] and enumerated by [FIELDS].

mod structure;
pub use structure::{Configuration, LogLevel};

mod fields;
pub use fields::{Field, FIELDS};

mod reconcile;
pub use reconcile::reconcile;

/// Name of the option file, both locally and in the global configuration directory
pub const DEFAULT_CONFIG_FILENAME: &str = "scriptcs.opts";

/// Directory under the platform configuration directory which holds the global option file
pub const GLOBAL_CONFIG_DIRNAME: &str = "scriptcs";
