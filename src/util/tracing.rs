//! Tracing helpers
// (c) 2024 Ross Younger

use anyhow::Context as _;
use tracing_subscriber::{fmt, prelude::*, reload, EnvFilter, Registry};

use crate::config::LogLevel;

const STANDARD_ENV_VAR: &str = "RUST_LOG";

/// Result type for `filter_for()`
struct FilterResult {
    filter: EnvFilter,
    used_env: bool, // Did we use the environment variable we were requested to?
}

/// Only our own events, at the given level
fn level_filter(level: LogLevel) -> EnvFilter {
    let level: &'static str = level.into();
    EnvFilter::new(format!("{}={level}", env!("CARGO_CRATE_NAME")))
}

/// Log filter setup:
/// Use a given environment variable; if it wasn't present, log only our own items at a given level.
fn filter_for(level: LogLevel, key: &str) -> anyhow::Result<FilterResult> {
    EnvFilter::try_from_env(key)
        .map(|filter| FilterResult {
            filter,
            used_env: true,
        })
        .or_else(|e| {
            // The env var was unset or invalid. Which is it?
            if std::env::var(key).is_ok() {
                anyhow::bail!("{key} (set in environment) was invalid: {e}");
            }
            Ok(FilterResult {
                filter: level_filter(level),
                used_env: false,
            })
        })
}

/// Adjusts the active log filter once the configured level is known
#[derive(Debug)]
pub(crate) struct LogHandle {
    reload: reload::Handle<EnvFilter, Registry>,
    used_env: bool,
}

impl LogHandle {
    /// Switches to `level`, unless `RUST_LOG` is in charge.
    pub(crate) fn set_level(&self, level: LogLevel) -> anyhow::Result<()> {
        if self.used_env {
            return Ok(());
        }
        self.reload
            .reload(level_filter(level))
            .context("failed to change the log level")
    }
}

/// Set up rust tracing to stderr.
///
/// By default we log only our own events, starting at the given level;
/// the returned handle changes the level later.
/// This can be overridden by setting `RUST_LOG`.
///
/// **CAUTION:** If this function fails, tracing won't be set up; callers must take extra care to report the error.
pub(crate) fn setup(level: LogLevel) -> anyhow::Result<LogHandle> {
    let filter = filter_for(level, STANDARD_ENV_VAR)?;
    let (filter_layer, reload) = reload::Layer::new(filter.filter);
    // If we used the environment variable, show log targets; if we did not, we're only logging ourselves.
    let format = fmt::layer()
        .compact()
        .with_target(filter.used_env)
        .with_writer(std::io::stderr);
    tracing_subscriber::registry()
        .with(filter_layer)
        .with(format)
        .try_init()
        .context("failed to set up logging")?;
    Ok(LogHandle {
        reload,
        used_env: filter.used_env,
    })
}
