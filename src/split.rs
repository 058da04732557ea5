//! Separating host arguments from script arguments
// (c) 2024 Ross Younger

/// The token which ends the host's own arguments
pub const SEPARATOR: &str = "--";

/// Command-line tokens, partitioned at the first [`SEPARATOR`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitResult {
    host: Vec<String>,
    script: Vec<String>,
}

impl SplitResult {
    /// Tokens meant for the host itself
    #[must_use]
    pub fn host_arguments(&self) -> &[String] {
        &self.host
    }

    /// Tokens passed through to the script
    #[must_use]
    pub fn script_arguments(&self) -> &[String] {
        &self.script
    }

    /// Deconstructs into (host, script)
    #[must_use]
    pub fn into_parts(self) -> (Vec<String>, Vec<String>) {
        (self.host, self.script)
    }
}

/// Splits `args` at the first `--`.
///
/// Everything before it belongs to the host; everything after it belongs to the script and
/// is never inspected, so any later `--` is passed through as-is.
/// The separator itself appears in neither half.
#[must_use]
pub fn split(args: &[String]) -> SplitResult {
    match args.iter().position(|a| a == SEPARATOR) {
        None => SplitResult {
            host: args.to_vec(),
            script: Vec::new(),
        },
        Some(i) => SplitResult {
            host: args[..i].to_vec(),
            script: args[i + 1..].to_vec(),
        },
    }
}
