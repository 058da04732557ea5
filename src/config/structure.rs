//! Configuration structure
// (c) 2024 Ross Younger

use clap::{ArgAction, Parser};
use serde::{Deserialize, Serialize};
use struct_field_names_as_array::FieldNamesAsSlice;

use super::DEFAULT_CONFIG_FILENAME;

/// Verbosity of the script host's own log output
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    strum::Display,
    strum::IntoStaticStr,
    clap::ValueEnum,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Errors and warnings
    #[default]
    Warn,
    /// Informational messages
    Info,
    /// Debug output
    Debug,
    /// Everything
    Trace,
}

/// The set of options understood by the script host.
///
/// **Note:** The implementation of `default()` for this struct returns the hard-wired schema defaults.
///
/// The same struct is produced by every configuration source: the command line (via `clap`)
/// and the local and global option files (via `figment`). Each source fills in the schema
/// default for anything it does not mention, which is why merging needs the
/// [reconciler](super::reconcile()).
///
/// On the command line every field is spelled with its long name (`--loglevel debug`);
/// in an option file the same long name is the JSON key (`{"loglevel": "debug"}`).
///
// Maintainer note: None of the members of this struct should be Option<anything>.
// Booleans take an optional `=value` so the command line can say `--repl=false` explicitly.
// Every field must also be listed in `FIELDS` (see fields.rs); a unit test enforces this.
#[derive(Debug, Clone, PartialEq, Eq, Parser, Deserialize, Serialize, FieldNamesAsSlice)]
#[command(
    name = "scriptargs",
    version(env!("SCRIPTARGS_VERSION_STRING")),
    about,
    long_about = None,
    disable_version_flag(true),
    after_help = "Arguments after a lone `--` are passed through to the script untouched."
)]
#[command(styles=crate::cli::styles::CLAP_STYLES)]
#[serde(rename_all = "kebab-case")]
#[allow(clippy::struct_excessive_bools)]
pub struct Configuration {
    /// The script to execute
    #[arg(value_name = "SCRIPT", default_value = "", hide_default_value = true)]
    pub script: String,

    /// Launches the interactive REPL
    #[arg(
        short,
        long,
        help_heading("Modes"),
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true",
        hide_default_value = true,
        value_name = "BOOL"
    )]
    pub repl: bool,

    /// Emits debug information for the script
    #[arg(
        short,
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true",
        hide_default_value = true,
        value_name = "BOOL"
    )]
    pub debug: bool,

    /// Caches the compiled script
    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true",
        hide_default_value = true,
        value_name = "BOOL"
    )]
    pub cache: bool,

    /// Log level for the host's own output
    #[arg(long, alias("log"), value_enum, default_value_t)]
    pub loglevel: LogLevel,

    /// Installs the named package
    #[arg(
        short,
        long,
        value_name = "PACKAGE",
        default_value = "",
        hide_default_value = true,
        help_heading("Packages")
    )]
    pub install: String,

    /// Installs into the global package folder
    #[arg(
        short,
        long,
        help_heading("Packages"),
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true",
        hide_default_value = true,
        value_name = "BOOL"
    )]
    pub global: bool,

    /// Writes the installed package list to the packages file
    #[arg(
        long,
        help_heading("Packages"),
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true",
        hide_default_value = true,
        value_name = "BOOL"
    )]
    pub save: bool,

    /// Removes installed packages and compiled binaries
    #[arg(
        long,
        help_heading("Packages"),
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true",
        hide_default_value = true,
        value_name = "BOOL"
    )]
    pub clean: bool,

    /// Allows pre-release package versions
    #[arg(
        long,
        alias("pre"),
        help_heading("Packages"),
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true",
        hide_default_value = true,
        value_name = "BOOL"
    )]
    pub allow_prerelease: bool,

    /// Prints the version and exits
    #[arg(
        short,
        long,
        help_heading("Modes"),
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true",
        hide_default_value = true,
        value_name = "BOOL"
    )]
    pub version: bool,

    /// Comma-separated list of script modules to load
    #[arg(long, value_name = "MODULES", default_value = "", hide_default_value = true)]
    pub modules: String,

    /// Writes the compiled output to the given file
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "",
        hide_default_value = true
    )]
    pub output: String,

    /// Re-runs the script whenever it changes
    #[arg(
        short,
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true",
        hide_default_value = true,
        value_name = "BOOL"
    )]
    pub watch: bool,

    /// The local option file, relative to the current directory
    #[arg(long, value_name = "FILE", default_value = DEFAULT_CONFIG_FILENAME)]
    pub config: String,
}

impl Default for Configuration {
    /// **(Unusual!)**
    /// Returns the hard-wired schema defaults.
    fn default() -> Self {
        Self {
            script: String::new(),
            repl: false,
            debug: false,
            cache: false,
            loglevel: LogLevel::Warn,
            install: String::new(),
            global: false,
            save: false,
            clean: false,
            allow_prerelease: false,
            version: false,
            modules: String::new(),
            output: String::new(),
            watch: false,
            config: DEFAULT_CONFIG_FILENAME.into(),
        }
    }
}
