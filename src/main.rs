//! wipguard - git pre-push hook for work-in-progress branches.

use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use wipguard::cli::{self, Cli, Commands};
use wipguard::Error;

fn main() -> ExitCode {
    // Stdout is reserved for the rejection message
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("wipguard=warn")))
        .init();

    let cli = Cli::parse();

    match run(cli.command) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            // Anything that goes wrong blocks the push
            eprintln!("wipguard: {}", e);
            ExitCode::from(1)
        }
    }
}

fn run(command: Commands) -> Result<u8, Error> {
    match command {
        Commands::PrePush { remote, url } => {
            debug!(remote = ?remote, url = ?url, "Invoked as pre-push hook");
            Ok(cli::pre_push::run()?.exit_code())
        }
        Commands::Check { branch } => Ok(cli::check::run(&branch)?.exit_code()),
        Commands::Install => {
            cli::hooks::install(&std::env::current_dir()?)?;
            Ok(0)
        }
        Commands::Uninstall => {
            cli::hooks::uninstall(&std::env::current_dir()?)?;
            Ok(0)
        }
    }
}
