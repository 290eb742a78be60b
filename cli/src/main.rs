use clap::Parser;
use log::{error, warn};
use nvim_theme_core::{CacheEnvironment, ClientConfig};
use std::io;
use std::process::ExitCode;

mod app;
mod cli;
mod logging;
mod output;
mod theme_client;

use crate::cli::Args;
use crate::logging::{init_logging, log_level};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();

    // Load optional user configuration
    let loaded = ClientConfig::load();
    let config = loaded.as_ref().cloned().unwrap_or_default();
    init_logging(log_level(args.verbose, &config));
    if let Err(e) = loaded {
        warn!("Ignoring client configuration: {}", e);
    }

    let env = CacheEnvironment::from_process();
    let result = app::run(
        args.command.as_ref(),
        &env,
        config.timeout(),
        &mut io::stdout(),
        &mut io::stderr(),
    )
    .await;

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!("Failed to write command output: {}", e);
            ExitCode::FAILURE
        }
    }
}
