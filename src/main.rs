//! Greenlight CLI entrypoint for approving required status checks.

mod cli;

use std::io::{self, Write};
use std::process::ExitCode;

use greenlight::{ApprovalError, GreenlightConfig};
use ortho_config::OrthoConfig;

use cli::RunStatus;

/// Exit code for any error (configuration, parsing, HTTP, or I/O).
const ERROR_EXIT_CODE: u8 = 2;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(status) => status.exit_code(),
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::from(ERROR_EXIT_CODE);
            }
            ExitCode::from(ERROR_EXIT_CODE)
        }
    }
}

async fn run() -> Result<RunStatus, ApprovalError> {
    let config = load_config()?;
    cli::logging::init(config.log_level())?;
    cli::approve::run(&config).await
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`ApprovalError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<GreenlightConfig, ApprovalError> {
    GreenlightConfig::load().map_err(|error| ApprovalError::Configuration {
        message: error.to_string(),
    })
}
