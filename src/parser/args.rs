// Command-line parsing
// (c) 2024 Ross Younger

use anyhow::Result;
use clap::Parser as _;

use super::ArgumentParser;
use crate::config::{Configuration, FIELDS};

/// Rewrites `-name` and `-name=value` to the `--` form clap expects, when `name` is an option's
/// long name or multi-character alias. Anything else passes through unchanged.
fn long_form(token: &str) -> String {
    let Some(rest) = token.strip_prefix('-').filter(|r| !r.starts_with('-')) else {
        return token.to_owned();
    };
    let name = rest.split_once('=').map_or(rest, |(name, _)| name);
    let known = name.len() > 1
        && FIELDS
            .iter()
            .any(|f| f.long == name || f.aliases.contains(&name));
    if known {
        format!("-{token}")
    } else {
        token.to_owned()
    }
}

/// Parses host arguments with `clap`.
///
/// Long options may be given with one dash or two (`-loglevel debug`, `--loglevel debug`).
///
/// Errors (including requests for `--help`) are [`clap::Error`]s wrapped in `anyhow`;
/// callers may downcast to print them the way clap would.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClapArgumentParser {}

impl ArgumentParser for ClapArgumentParser {
    fn parse(&self, tokens: &[String]) -> Result<Option<Configuration>> {
        if tokens.is_empty() {
            return Ok(None);
        }
        let argv = std::iter::once(env!("CARGO_PKG_NAME").to_owned())
            .chain(tokens.iter().map(|t| long_form(t)));
        Ok(Some(Configuration::try_parse_from(argv)?))
    }
}
