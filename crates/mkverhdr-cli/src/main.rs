//! makeversionhdr CLI

use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use mkverhdr_cli::{Cli, Options};
use mkverhdr_core::GenerateError;

fn main() -> ExitCode {
    // Logs go to stderr; stdout carries only the GEN notice.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let options = Options::from_env(Cli::parse());
    debug!(?options, "starting");

    match mkverhdr_cli::run(&options) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<GenerateError>() {
                Some(e) if e.is_configuration() => eprintln!("{e}"),
                _ => eprintln!("Error: {err:?}"),
            }
            ExitCode::FAILURE
        }
    }
}
