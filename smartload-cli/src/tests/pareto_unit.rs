//! Focused unit tests covering the pareto command.

use super::helpers::{RequestFile, compatible_pair_request, order_json, request_json};
use super::*;
use crate::pareto::{ParetoArgs, ParetoConfig, config_from_layers_for_test, execute_pareto};
use camino::Utf8PathBuf;
use rstest::rstest;
use serde_json::json;

fn config_for(path: &Utf8Path, max_solutions: usize) -> ParetoConfig {
    ParetoConfig {
        request_path: path.to_path_buf(),
        max_solutions,
        checker: ConstraintChecker::default(),
    }
}

/// A request with one high-payout load and one truck-filling load on
/// different lanes.
fn trade_off_request() -> serde_json::Value {
    let mut rich = order_json("rich", 1_000, 4_400, 300);
    rich["origin"] = json!("Chicago, IL");
    let full = order_json("full", 500, 39_600, 2_700);
    request_json(vec![rich, full])
}

#[rstest]
fn converting_pareto_without_request_errors() {
    let err = ParetoConfig::try_from(ParetoArgs::default())
        .expect_err("missing request should error");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_REQUEST);
            assert_eq!(env, ENV_PARETO_REQUEST);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn max_solutions_defaults_to_five() {
    let args = ParetoArgs {
        request_path: Some(Utf8PathBuf::from("request.json")),
        ..ParetoArgs::default()
    };
    let config = ParetoConfig::try_from(args).expect("config should build");
    assert_eq!(config.max_solutions, DEFAULT_MAX_SOLUTIONS);
    assert_eq!(config.checker.pickup_window(), PickupWindow::Unbounded);
}

#[rstest]
#[expect(clippy::float_cmp, reason = "rounded values are exact at two decimals")]
fn identical_loads_collapse_to_one_solution() {
    let file = RequestFile::new(&compatible_pair_request());
    let response = execute_pareto(&config_for(file.path(), 5)).expect("pareto should succeed");

    assert_eq!(response.truck_id, "T1");
    assert_eq!(response.count, 1);
    let [solution] = response.solutions.as_slice() else {
        panic!("expected one solution, found {:?}", response.solutions);
    };
    assert_eq!(solution.order_ids, ["O1", "O2"]);
    assert_eq!(solution.total_payout_cents, 430_000);
    assert_eq!(solution.utilization_weight_percent, 68.18);
    assert_eq!(solution.utilization_volume_percent, 70.0);
    assert_eq!(solution.score, 430_000.0);
}

#[rstest]
fn trade_offs_are_both_reported() {
    let file = RequestFile::new(&trade_off_request());
    let response = execute_pareto(&config_for(file.path(), 5)).expect("pareto should succeed");

    let ids: Vec<String> = response
        .solutions
        .iter()
        .map(|solution| solution.order_ids.join(","))
        .collect();
    assert_eq!(ids, ["rich", "full"]);
    assert_eq!(response.count, 2);
}

#[rstest]
#[case(0, 0)]
#[case(1, 1)]
fn frontier_respects_max_solutions(#[case] max_solutions: usize, #[case] expected: usize) {
    let file = RequestFile::new(&trade_off_request());
    let response =
        execute_pareto(&config_for(file.path(), max_solutions)).expect("pareto should succeed");
    assert_eq!(response.count, expected);
    assert_eq!(response.solutions.len(), expected);
}

#[rstest]
fn merge_layers_honour_precedence() {
    use ortho_config::MergeComposer;

    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({ "request_path": "from-file.json", "max_solutions": 2 }),
        None,
    );
    composer.push_cli(json!({ "max_solutions": 3, "pickup_window_days": 1 }));

    let config =
        config_from_layers_for_test(composer.layers()).expect("merged config should build");
    assert_eq!(config.request_path, Utf8PathBuf::from("from-file.json"));
    assert_eq!(config.max_solutions, 3);
    assert_eq!(config.checker, ConstraintChecker::strict());
}
