//! errep - Entry Point
//!
//! Binary entry point for the errep command line. Lives in the `errep`
//! facade crate next to the library it drives.

// Force-link errep-providers to ensure linkme registrations are included
extern crate errep_providers;

use std::process::ExitCode;

use clap::Parser;
use errep::cli::{Cli, execute};
use errep::infrastructure::{AppContext, init_logging};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let config = cli.load_config()?;
    init_logging(config.logging.clone())?;

    let context = AppContext::init(config)?;
    let mut stdout = std::io::stdout().lock();
    let succeeded = execute(&cli.command, &context, &mut stdout).await?;

    Ok(if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
