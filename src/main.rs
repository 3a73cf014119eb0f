//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `web_status_checker` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Exit code policy
//!
//! All core functionality is implemented in the library crate.

use std::process;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use web_status_checker::app::evaluate_exit_code;
use web_status_checker::config::EXIT_CODE_SETUP_FAILURE;
use web_status_checker::initialization::init_logger_with;
use web_status_checker::{run_check, Config, StdoutSink};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    let fail_on = config.fail_on.clone();
    match run_check(config, Arc::new(StdoutSink)).await {
        Ok(report) => {
            let code = evaluate_exit_code(&fail_on, &report);
            if code != 0 {
                process::exit(code);
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("web_status_checker error: {:#}", e);
            process::exit(EXIT_CODE_SETUP_FAILURE);
        }
    }
}
