//! Test helpers for driving the CLI against an in-memory stdout.

use super::*;

/// Result of one CLI invocation.
#[derive(Debug)]
pub(super) struct Invocation {
    pub(super) result: Result<(), CliError>,
    pub(super) stdout: String,
}

impl Invocation {
    /// Exit status the binary would report.
    pub(super) fn exit_code(&self) -> u8 {
        self.result.as_ref().map_or_else(CliError::exit_code, |()| 0)
    }
}

/// Parse `argv` as the binary would and run it, capturing stdout.
pub(super) fn invoke<I, T>(argv: I) -> Invocation
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let mut buffer = Vec::new();
    let result = Cli::try_parse_from(argv)
        .map_err(CliError::from)
        .and_then(|cli| run_with(cli.plan, &mut buffer));
    let stdout = String::from_utf8(buffer).expect("stdout utf-8");
    Invocation { result, stdout }
}

/// Arguments with both inputs set.
pub(super) fn plan_args(deliveries: &str, truck_path: &str) -> PlanArgs {
    PlanArgs {
        deliveries: Some(deliveries.to_owned()),
        truck_path: Some(truck_path.to_owned()),
        ..PlanArgs::default()
    }
}
