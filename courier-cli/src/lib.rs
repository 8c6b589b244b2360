//! Command-line interface for planning a driver's itinerary.
//!
//! `courier <DELIVERIES> <TRUCK_PATH>` decodes a JSON array of
//! `[pickup, dropoff]` pairs and a JSON array of path addresses, runs
//! itinerary generation, and prints the outcome as JSON.
#![forbid(unsafe_code)]

use clap::Parser;
use courier_core::input::{parse_deliveries, parse_truck_path};
use courier_core::{DeliveryOutcome, generate_steps};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use std::io::Write;

mod error;

pub use error::{CliError, EXIT_INVALID_DELIVERIES, EXIT_INVALID_TRUCK_PATH, EXIT_USAGE};

const ARG_DELIVERIES: &str = "deliveries";
const ARG_TRUCK_PATH: &str = "truck-path";
const ENV_DELIVERIES: &str = "COURIER_CMDS_PLAN_DELIVERIES";
const ENV_TRUCK_PATH: &str = "COURIER_CMDS_PLAN_TRUCK_PATH";

/// Run the Courier CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    run_with(cli.plan, &mut stdout)
}

pub(crate) fn run_with(args: PlanArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let outcome = config.plan()?;
    write_outcome(writer, &outcome, config.pretty)
}

#[derive(Debug, Parser)]
#[command(
    name = "courier",
    about = "Turn parcel deliveries and a fixed truck path into a driver itinerary",
    version
)]
struct Cli {
    #[command(flatten)]
    plan: PlanArgs,
}

/// Arguments describing one itinerary request.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "plan",
    long_about = "Validate deliveries against a truck path and print the \
                 driver's stops in travel order. Inputs can come from \
                 positional arguments, configuration files, or environment \
                 variables."
)]
#[ortho_config(prefix = "COURIER")]
pub(crate) struct PlanArgs {
    /// JSON array of `[pickup, dropoff]` address pairs, e.g. `[[1,3],[2,5]]`.
    #[arg(value_name = "DELIVERIES")]
    #[serde(
        default,
        deserialize_with = "json_argument",
        skip_serializing_if = "Option::is_none"
    )]
    pub(crate) deliveries: Option<String>,
    /// JSON array of addresses in travel order, e.g. `[1,2,3,4,5]`.
    #[arg(value_name = "TRUCK_PATH")]
    #[serde(
        default,
        deserialize_with = "json_argument",
        skip_serializing_if = "Option::is_none"
    )]
    pub(crate) truck_path: Option<String>,
    /// Pretty-print the JSON outcome.
    #[arg(long)]
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub(crate) pretty: bool,
}

/// Accept a JSON argument either as text or as a structured value.
///
/// Configuration files and environment variables such as
/// `COURIER_CMDS_PLAN_TRUCK_PATH=[1,2]` yield arrays rather than strings;
/// those are re-encoded so decoding happens in one place.
fn json_argument<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<serde_json::Value>::deserialize(deserializer)?
        .map(|value| match value {
            serde_json::Value::String(text) => Ok(text),
            other => serde_json::to_string(&other).map_err(D::Error::custom),
        })
        .transpose()
}

impl PlanArgs {
    fn into_config(self) -> Result<PlanConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        PlanConfig::try_from(merged)
    }
}

/// Resolved itinerary request with both inputs present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PlanConfig {
    pub(crate) deliveries: String,
    pub(crate) truck_path: String,
    pub(crate) pretty: bool,
}

impl PlanConfig {
    /// Decode both inputs, deliveries first, and generate the itinerary.
    fn plan(&self) -> Result<DeliveryOutcome, CliError> {
        let parcels = parse_deliveries(&self.deliveries)?;
        let path = parse_truck_path(&self.truck_path)?;
        log::debug!(
            "planning {} deliveries over a path of {} stops",
            parcels.len(),
            path.len()
        );
        let outcome = generate_steps(&parcels, &path);
        if let Some(kind) = outcome.error_kind() {
            log::info!("deliveries cannot be served: {kind:?}");
        }
        Ok(outcome)
    }
}

impl TryFrom<PlanArgs> for PlanConfig {
    type Error = CliError;

    fn try_from(args: PlanArgs) -> Result<Self, Self::Error> {
        let deliveries = args.deliveries.ok_or(CliError::MissingArgument {
            field: ARG_DELIVERIES,
            env: ENV_DELIVERIES,
        })?;
        let truck_path = args.truck_path.ok_or(CliError::MissingArgument {
            field: ARG_TRUCK_PATH,
            env: ENV_TRUCK_PATH,
        })?;
        Ok(Self {
            deliveries,
            truck_path,
            pretty: args.pretty,
        })
    }
}

fn write_outcome(
    writer: &mut dyn Write,
    outcome: &DeliveryOutcome,
    pretty: bool,
) -> Result<(), CliError> {
    let payload = if pretty {
        serde_json::to_string_pretty(outcome)
    } else {
        serde_json::to_string(outcome)
    }
    .map_err(CliError::SerialiseOutcome)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutcome)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutcome)?;
    Ok(())
}

#[cfg(test)]
mod tests;
