//! Focused unit tests covering CLI configuration, decoding and exit codes.

use super::helpers::{invoke, plan_args};
use super::*;
use courier_core::input::InputError;
use rstest::rstest;

#[rstest]
#[case(None, Some("[1,2]"), ARG_DELIVERIES, ENV_DELIVERIES)]
#[case(Some("[[1,2]]"), None, ARG_TRUCK_PATH, ENV_TRUCK_PATH)]
fn converting_without_required_inputs_errors(
    #[case] deliveries: Option<&str>,
    #[case] truck_path: Option<&str>,
    #[case] field: &'static str,
    #[case] env_var: &'static str,
) {
    let args = PlanArgs {
        deliveries: deliveries.map(str::to_owned),
        truck_path: truck_path.map(str::to_owned),
        ..PlanArgs::default()
    };
    let err = PlanConfig::try_from(args).expect_err("missing input should error");
    assert_eq!(err.exit_code(), EXIT_USAGE);
    match err {
        CliError::MissingArgument {
            field: missing,
            env,
        } => {
            assert_eq!(missing, field);
            assert_eq!(env, env_var);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn converting_with_both_inputs_keeps_them() {
    let config = PlanConfig::try_from(plan_args("[[1,2]]", "[1,2]")).expect("config");
    assert_eq!(
        config,
        PlanConfig {
            deliveries: "[[1,2]]".to_owned(),
            truck_path: "[1,2]".to_owned(),
            pretty: false,
        }
    );
}

#[rstest]
#[case(r#"{"deliveries":[[1,2]],"truck_path":[1,2]}"#, "[[1,2]]", "[1,2]")]
#[case(r#"{"deliveries":"[[1,2]]","truck_path":"[1,2]"}"#, "[[1,2]]", "[1,2]")]
#[case(r#"{"deliveries":[[3,1],[5,2]],"truck_path":[]}"#, "[[3,1],[5,2]]", "[]")]
fn layered_inputs_accept_arrays_and_strings(
    #[case] layer: &str,
    #[case] deliveries: &str,
    #[case] truck_path: &str,
) {
    let args: PlanArgs = serde_json::from_str(layer).expect("layer decodes");
    let config = PlanConfig::try_from(args).expect("config");
    assert_eq!(config.deliveries, deliveries);
    assert_eq!(config.truck_path, truck_path);
    assert!(config.plan().is_ok());
}

#[rstest]
fn layered_inputs_may_be_omitted() {
    let args: PlanArgs = serde_json::from_str("{}").expect("empty layer decodes");
    assert_eq!(args.deliveries, None);
    assert_eq!(args.truck_path, None);
}

#[rstest]
#[case("[]", "[1,2]", EXIT_INVALID_DELIVERIES)]
#[case("{not json", "[1,2]", EXIT_INVALID_DELIVERIES)]
#[case("[[1,\"2\"]]", "[1,2]", EXIT_INVALID_DELIVERIES)]
#[case("[]", "oops", EXIT_INVALID_DELIVERIES)]
#[case("[[1,2]]", "oops", EXIT_INVALID_TRUCK_PATH)]
#[case("[[1,2]]", "[1,[2]]", EXIT_INVALID_TRUCK_PATH)]
fn invalid_inputs_map_to_exit_codes(
    #[case] deliveries: &str,
    #[case] truck_path: &str,
    #[case] expected: u8,
) {
    let config = PlanConfig::try_from(plan_args(deliveries, truck_path)).expect("config");
    let err = config.plan().expect_err("input should be rejected");
    assert!(matches!(err, CliError::InvalidInput(_)));
    assert_eq!(err.exit_code(), expected);
}

#[rstest]
fn invalid_input_messages_name_the_argument() {
    let deliveries = CliError::from(InputError::NoDeliveries);
    assert!(deliveries.to_string().starts_with("Invalid deliveries"));
    let config = PlanConfig::try_from(plan_args("[[1,2]]", "[")).expect("config");
    let path = config.plan().expect_err("path should be rejected");
    assert!(path.to_string().starts_with("Invalid truckPath"));
}

#[rstest]
fn writes_success_outcome_as_single_json_line() {
    let mut stdout = Vec::new();
    run_with(plan_args("[[1,2]]", "[1,2]"), &mut stdout).expect("run succeeds");
    let text = String::from_utf8(stdout).expect("utf-8");
    assert_eq!(
        text,
        "{\"status\":\"success\",\"steps\":[{\"address\":1,\"action\":\"pickup\"},\
         {\"address\":2,\"action\":\"dropoff\"}]}\n"
    );
}

#[rstest]
fn writes_feasibility_errors_and_succeeds() {
    let mut stdout = Vec::new();
    run_with(plan_args("[[1,3],[2,5]]", "[1,2,4]"), &mut stdout).expect("run succeeds");
    let outcome: DeliveryOutcome =
        serde_json::from_slice(&stdout).expect("output should be a JSON outcome");
    assert_eq!(
        outcome,
        DeliveryOutcome::Failure {
            error_kind: courier_core::ErrorKind::DropoffNotInPath,
            message: "Dropoff address 3 not in path".to_owned(),
        }
    );
}

#[rstest]
fn pretty_output_spans_lines() {
    let mut stdout = Vec::new();
    let args = PlanArgs {
        pretty: true,
        ..plan_args("[[1,2]]", "[1,2]")
    };
    run_with(args, &mut stdout).expect("run succeeds");
    let text = String::from_utf8(stdout).expect("utf-8");
    assert!(text.lines().count() > 1);
    let outcome: DeliveryOutcome = serde_json::from_str(&text).expect("pretty JSON parses");
    assert!(outcome.is_success());
}

#[rstest]
fn help_exits_successfully() {
    let invocation = invoke(["courier", "--help"]);
    assert!(matches!(invocation.result, Err(CliError::ArgumentParsing(_))));
    assert_eq!(invocation.exit_code(), 0);
}

#[rstest]
fn surplus_arguments_are_usage_errors() {
    let invocation = invoke(["courier", "[[1,2]]", "[1,2]", "extra"]);
    assert_eq!(invocation.exit_code(), EXIT_USAGE);
    assert!(invocation.stdout.is_empty());
}
