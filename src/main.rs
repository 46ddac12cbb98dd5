use std::io::IsTerminal;
use std::process::ExitCode;

use clap::Parser;
use irename::{Cli, RenameError};
use miette::Diagnostic;
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Diagnostics go to stderr; stdout carries prompts and verbose lines
    let filter = EnvFilter::try_from_env("IRENAME_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = irename::infra::interrupt::install() {
        tracing::warn!(error = %e, "could not install signal handler");
    }

    // Every session is dropped before we return, so the temp buffer is gone
    match irename::run(cli) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => report(&err),
    }
}

fn report(err: &anyhow::Error) -> ExitCode {
    let prefix = if std::io::stderr().is_terminal() {
        "irename:".red().bold().to_string()
    } else {
        "irename:".to_string()
    };
    eprintln!("{prefix} {err:#}");

    match err.downcast_ref::<RenameError>() {
        Some(typed) => {
            if let Some(help) = typed.help() {
                eprintln!("  help: {help}");
            }
            ExitCode::from(typed.exit_code())
        }
        None => ExitCode::FAILURE,
    }
}
