//! CLI parsing tests: operation names, defaults, and flag conflicts.

use clap::Parser;

use signpost::cli::{Cli, Operation};

#[test]
fn unrecognized_operation_is_rejected_at_parse_time() {
    // Fails in clap, so the request file is never opened.
    let result = Cli::try_parse_from(["signpost", "make_coffee", "service.json"]);
    assert!(result.is_err());
}

#[test]
fn operations_use_snake_case_names() {
    let cli = Cli::try_parse_from(["signpost", "register_instance", "service.json"]).unwrap();
    assert_eq!(cli.operation, Operation::RegisterInstance);

    let cli = Cli::try_parse_from(["signpost", "get_instances", "service.json"]).unwrap();
    assert_eq!(cli.operation, Operation::GetInstances);

    let cli = Cli::try_parse_from(["signpost", "deregister_instance", "service.json"]).unwrap();
    assert_eq!(cli.operation, Operation::DeregisterInstance);

    let cli = Cli::try_parse_from(["signpost", "delete_service", "service.json"]).unwrap();
    assert_eq!(cli.operation, Operation::DeleteService);
}

#[test]
fn file_argument_is_required() {
    let result = Cli::try_parse_from(["signpost", "get_instances"]);
    assert!(result.is_err());
}

#[test]
fn polling_defaults_match_documented_values() {
    let cli = Cli::try_parse_from(["signpost", "get_instances", "service.json"]).unwrap();
    assert_eq!(cli.poll_interval, 5);
    assert_eq!(cli.operation_timeout, 3600);
}

#[test]
fn pretty_and_json_logs_conflict() {
    let result = Cli::try_parse_from([
        "signpost",
        "get_instances",
        "service.json",
        "--pretty",
        "--json-logs",
    ]);
    assert!(result.is_err());
}
