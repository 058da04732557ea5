// (c) 2024 Ross Younger
//! CLI output styling
//!
//! Users of this module probably ought to use anstream's `println!` / `eprintln!` macros,
//! which strip styling when the output is not a terminal.

#[allow(clippy::enum_glob_use)]
use anstyle::AnsiColor::*;
use anstyle::{Color::Ansi, Style};
use clap::builder::styling::Styles;

pub(crate) const ERROR: Style = Style::new().bold().fg_color(Some(Ansi(Red)));
pub(crate) const WARNING: Style = Style::new().bold().fg_color(Some(Ansi(Yellow)));
/// Placeholders, and values which were left empty
pub(crate) const MUTED: Style = Style::new().fg_color(Some(Ansi(Cyan)));
/// Section headings
pub(crate) const HEADING: Style = Style::new().underline().fg_color(Some(Ansi(Yellow)));

pub(crate) const CLAP_STYLES: Styles = Styles::styled()
    .usage(HEADING)
    .header(HEADING)
    .literal(Style::new().bold())
    .invalid(WARNING)
    .error(ERROR)
    .valid(MUTED.bold().underline())
    .placeholder(MUTED);
