mod cli;
mod command;
mod command_result;
mod commands;
mod output_utils;

use clap::Parser;
pub(crate) use cli::Cli;
pub(crate) use command::RunnableCommand;
pub(crate) use command_result::CommandResult;
use std::process::ExitCode;

const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::INFO;

#[tokio::main(flavor = "multi_thread", worker_threads = 10)]
async fn main() -> ExitCode {
    let mut cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.cmd.take() {
        Some(command) => render(command.run(cli).await),
        None => match cli.run_default().await {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("{err:#}");
                ExitCode::FAILURE
            },
        },
    }
}

fn render(result: CommandResult) -> ExitCode {
    if let Some(stdout) = result.stdout {
        println!("{stdout}");
    }
    if let Some(stderr) = result.stderr {
        eprintln!("{stderr}");
    }
    result.exit_code
}

/// Maps a `LOG_LEVEL` value to a level. `verbose` is accepted as an alias
/// of `debug`.
fn parse_log_level(value: &str) -> Option<tracing::Level> {
    match value.trim().to_ascii_lowercase().as_str() {
        "trace" => Some(tracing::Level::TRACE),
        "debug" | "verbose" => Some(tracing::Level::DEBUG),
        "info" => Some(tracing::Level::INFO),
        _ => None,
    }
}

fn init_logging(verbose: bool) {
    // Warnings are held until the subscriber exists to receive them.
    let mut pending_warning = None;
    let log_level = match (verbose, std::env::var("LOG_LEVEL")) {
        (true, _) => tracing::Level::DEBUG,
        (false, Ok(value)) => parse_log_level(&value).unwrap_or_else(|| {
            pending_warning = Some(format!(
                "Ignoring unrecognized LOG_LEVEL `{}`; using `{DEFAULT_LOG_LEVEL}`.",
                value.trim(),
            ));
            DEFAULT_LOG_LEVEL
        }),
        (false, Err(_)) => DEFAULT_LOG_LEVEL,
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();
    log::trace!("nodesdl logging at `{log_level}`.");

    if let Some(warning) = pending_warning {
        log::warn!("{warning}");
    }
}
