//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use std::process::ExitCode;

use courier_cli::CliError;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_LOG_FILTER: &str = "courier=warn";

fn main() -> ExitCode {
    init_logging();
    match courier_cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(&err);
            ExitCode::from(err.exit_code())
        }
    }
}

/// Send `log` records from the library crates to stderr, filtered by
/// `RUST_LOG` (default `courier=warn`, which silences dependencies).
fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
    if let Err(err) = installed {
        eprintln!("courier: logging disabled: {err}");
    }
}

fn report(err: &CliError) {
    if let CliError::ArgumentParsing(clap_err) = err {
        // Clap formats usage, help and version output itself.
        if clap_err.print().is_ok() {
            return;
        }
    }
    eprintln!("courier: {err}");
}
