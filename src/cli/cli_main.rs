// Main CLI entrypoint
// (c) 2024 Ross Younger

use std::process::ExitCode;

use anstream::{eprintln, println};
use tabled::{settings::style::Style, Table, Tabled};
use tracing::debug;

use super::styles::{ERROR, HEADING, MUTED};
use crate::{
    config::{Configuration, LogLevel, FIELDS},
    handler::ArgumentHandler,
    split::split,
    util::setup_tracing,
};

/// One row of the resolved-configuration table
#[derive(Tabled)]
struct PrettyField {
    option: &'static str,
    value: String,
}

fn render_table(config: &Configuration) -> String {
    let rows = FIELDS.iter().map(|f| {
        let value = f.render(config);
        PrettyField {
            option: f.long,
            value: if value.is_empty() {
                format!("{}<empty>{}", MUTED.render(), MUTED.render_reset())
            } else {
                value
            },
        }
    });
    Table::new(rows).with(Style::sharp()).to_string()
}

fn collect_args() -> anyhow::Result<Vec<String>> {
    std::env::args_os()
        .skip(1)
        .map(|a| {
            a.into_string()
                .map_err(|a| anyhow::anyhow!("argument {a:?} is not valid UTF-8"))
        })
        .collect()
}

/// Main CLI entrypoint
///
/// Resolves the configuration from the command line and option files,
/// then prints it along with the arguments destined for the script.
pub fn cli() -> anyhow::Result<ExitCode> {
    let args = collect_args()?;
    // Until the configuration is resolved we only know the default level.
    let logging = setup_tracing(LogLevel::default()).inspect_err(|e| eprintln!("{e:?}"))?;
    let handler = ArgumentHandler::native();
    let result = match handler.parse(&args) {
        Ok(r) => r,
        Err(e) => {
            if let Some(clap_error) = e.downcast_ref::<clap::Error>() {
                clap_error.exit();
            }
            eprintln!("{}ERROR{} {e:#}", ERROR.render(), ERROR.render_reset());
            return Ok(ExitCode::FAILURE);
        }
    };
    let config = result.configuration();
    logging.set_level(config.loglevel)?;
    debug!(
        "host arguments {:?}, script arguments {:?}",
        split(result.arguments()).host_arguments(),
        result.script_arguments()
    );

    if config.version {
        println!(
            "{} {}",
            env!("CARGO_PKG_NAME"),
            env!("SCRIPTARGS_VERSION_STRING")
        );
        return Ok(ExitCode::SUCCESS);
    }

    for file in handler.config_files(config)? {
        debug!("option file {file:?} present: {}", file.is_file());
    }

    println!("{}", render_table(config));
    if !result.script_arguments().is_empty() {
        println!(
            "{}Script arguments{}",
            HEADING.render(),
            HEADING.render_reset()
        );
        for a in result.script_arguments() {
            println!("{a}");
        }
    }
    Ok(ExitCode::SUCCESS)
}
