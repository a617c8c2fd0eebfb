//! sitewrite CLI entry point

use std::process::ExitCode;

use sitewrite_cli::error::exit_code_from_error;

#[tokio::main]
async fn main() -> ExitCode {
    match sitewrite_cli::run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(exit_code_from_error(&err))
        },
    }
}
