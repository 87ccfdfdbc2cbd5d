use std::{io, process::ExitCode};

use clap::Parser;
use gas_reports::cli::{self, Cli};
use tracing_subscriber::EnvFilter;

/// Application entry point
///
/// This is the main function that:
/// 1. Sets up logging
/// 2. Parses the command line
/// 3. Loads the configuration the chosen tool reads
/// 4. Runs the selected tool and maps its outcome to an exit code
#[tokio::main]
async fn main() -> eyre::Result<ExitCode> {
    // Our own diagnostics at info, HTTP plumbing only when it warns
    let filter = EnvFilter::from_default_env()
        .add_directive("gas_reports=info".parse()?)
        .add_directive("hyper=warn".parse()?)
        .add_directive("reqwest=warn".parse()?);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    // Load configuration from environment variables
    let config = cli.command.load_config()?;
    let code = cli::execute(cli.command, &config, &mut io::stdout().lock()).await;

    Ok(ExitCode::from(code as u8))
}
