//! Error types emitted by the Courier CLI.
//!
//! Every variant maps to a process exit status through
//! [`CliError::exit_code`].

use std::sync::Arc;

use courier_core::input::InputError;
use thiserror::Error;

/// Exit status for usage, configuration and output failures.
pub const EXIT_USAGE: u8 = 1;
/// Exit status for deliveries that fail to decode.
pub const EXIT_INVALID_DELIVERIES: u8 = 2;
/// Exit status for a truck path that fails to decode.
pub const EXIT_INVALID_TRUCK_PATH: u8 = 4;

/// Errors emitted by the Courier CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation, or help was requested.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required input is missing after configuration merging.
    #[error("missing {field} (pass it as an argument or set {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// Deliveries or truck path could not be decoded.
    #[error(transparent)]
    InvalidInput(#[from] InputError),
    /// Serialising the outcome failed.
    #[error("failed to serialise outcome: {0}")]
    SerialiseOutcome(#[source] serde_json::Error),
    /// Writing the outcome failed.
    #[error("failed to write outcome: {0}")]
    WriteOutcome(#[source] std::io::Error),
}

impl CliError {
    /// Process exit status for this error.
    ///
    /// Help and version requests surface as [`CliError::ArgumentParsing`] but
    /// exit successfully.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::ArgumentParsing(err) if !err.use_stderr() => 0,
            Self::InvalidInput(InputError::Deliveries(_) | InputError::NoDeliveries) => {
                EXIT_INVALID_DELIVERIES
            }
            Self::InvalidInput(InputError::TruckPath(_)) => EXIT_INVALID_TRUCK_PATH,
            Self::ArgumentParsing(_)
            | Self::Configuration(_)
            | Self::MissingArgument { .. }
            | Self::SerialiseOutcome(_)
            | Self::WriteOutcome(_) => EXIT_USAGE,
        }
    }
}
