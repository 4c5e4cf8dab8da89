//! `folio`: a terminal portfolio page with a typewriter-style rotating title.

use clap::Parser;
use folio::config::{AppConfig, Cli};
use folio::{app, logging, FolioError};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "exiting");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), FolioError> {
    if let Err(source) = logging::init_tracing(cli.log_file.as_deref(), cli.headless) {
        return Err(FolioError::LogFile {
            path: cli.log_file.unwrap_or_default(),
            source,
        });
    }
    let config = AppConfig::try_from(cli)?;
    app::run(&config)
}
