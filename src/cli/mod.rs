/// Command Line Interface for scriptargs
/// (c) 2024 Ross Younger
mod cli_main;
pub(crate) mod styles;
pub use cli_main::cli;
