//! Resolving the effective configuration for one invocation
// (c) 2024 Ross Younger

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use tracing::{debug, trace};

use crate::{
    config::{reconcile, Configuration, DEFAULT_CONFIG_FILENAME},
    os::{FileSystem, OsFileSystem},
    parser::{ArgumentParser, ClapArgumentParser, ConfigFileParser, JsonConfigFileParser},
    split::split,
};

/// The outcome of [`ArgumentHandler::parse`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseResult {
    arguments: Vec<String>,
    configuration: Configuration,
    script_arguments: Vec<String>,
}

impl ParseResult {
    /// Constructor
    #[must_use]
    pub fn new(
        arguments: Vec<String>,
        configuration: Configuration,
        script_arguments: Vec<String>,
    ) -> Self {
        Self {
            arguments,
            configuration,
            script_arguments,
        }
    }

    /// The arguments exactly as given, including any `--` and what follows it
    #[must_use]
    pub fn arguments(&self) -> &[String] {
        &self.arguments
    }

    /// The merged configuration
    #[must_use]
    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    /// Arguments to pass through to the script
    #[must_use]
    pub fn script_arguments(&self) -> &[String] {
        &self.script_arguments
    }
}

/// Combines the command line, the local option file and the global option file
/// into one [`Configuration`].
#[derive(Debug, Clone)]
pub struct ArgumentHandler<A, C, F> {
    argument_parser: A,
    config_file_parser: C,
    file_system: F,
}

impl ArgumentHandler<ClapArgumentParser, JsonConfigFileParser, OsFileSystem> {
    /// A handler for the real command line and filesystem
    #[must_use]
    pub fn native() -> Self {
        Self::new(
            ClapArgumentParser::default(),
            JsonConfigFileParser::default(),
            OsFileSystem::default(),
        )
    }
}

impl<A, C, F> ArgumentHandler<A, C, F>
where
    A: ArgumentParser,
    C: ConfigFileParser,
    F: FileSystem,
{
    /// Constructor
    #[must_use]
    pub fn new(argument_parser: A, config_file_parser: C, file_system: F) -> Self {
        Self {
            argument_parser,
            config_file_parser,
            file_system,
        }
    }

    /// Resolves the configuration for `args` (not including the program name).
    ///
    /// Priority, highest first: command line, local option file, global option file, defaults.
    /// A missing option file counts as no input; any other I/O or parse error is returned.
    pub fn parse(&self, args: &[String]) -> Result<ParseResult> {
        let (host, script) = split(args).into_parts();
        debug!("host arguments {host:?}, script arguments {script:?}");

        let command_line = self.argument_parser.parse(&host)?;
        let local_file = command_line
            .as_ref()
            .map_or(DEFAULT_CONFIG_FILENAME, |c| c.config.as_str());
        let local_path = self.local_config_path(local_file)?;
        let local = self.read_config(&local_path)?;
        let global = match self.file_system.global_config_file() {
            Some(path) => self.read_config(&path)?,
            None => None,
        };

        let merged = reconcile(Some(global.unwrap_or_default()), local, &host);
        let merged = reconcile(merged, command_line, &host).unwrap_or_default();

        Ok(ParseResult::new(args.to_vec(), merged, script))
    }

    /// The option files consulted for a given configuration, local first.
    pub fn config_files(&self, configuration: &Configuration) -> Result<Vec<PathBuf>> {
        let mut files = vec![self.local_config_path(&configuration.config)?];
        files.extend(self.file_system.global_config_file());
        Ok(files)
    }

    fn local_config_path(&self, filename: &str) -> Result<PathBuf> {
        Ok(self.file_system.current_directory()?.join(filename))
    }

    fn read_config(&self, path: &Path) -> Result<Option<Configuration>> {
        let text = if self.file_system.file_exists(path) {
            debug!("reading option file {path:?}");
            Some(self.file_system.read_file(path)?)
        } else {
            trace!("option file {path:?} not present");
            None
        };
        self.config_file_parser
            .parse(text.as_deref())
            .with_context(|| format!("parsing option file {}", path.display()))
    }
}
