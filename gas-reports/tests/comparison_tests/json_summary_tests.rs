//! Comparison of the fetched proposeBatch summary with the publish summary

use crate::{fixture, init_logger};
use serde_json::json;
use std::fs;

use gas_reports::{
    analysis::PROPOSE_BATCH_METHOD,
    compare::{compare_summary_files, run_summary_comparison, PUBLISH_METHOD},
    display::ComparisonLabels,
    models::report::ComparisonOutcome,
    store::{FileReportStore, COMPARISON_RESULTS_FILE},
};

#[test]
fn test_fixture_summaries_compare() {
    init_logger();

    let outcome = compare_summary_files(
        &fixture("propose_batch_gas_analysis.json"),
        PROPOSE_BATCH_METHOD,
        &fixture("minimal_inbox_publish.json"),
        PUBLISH_METHOD,
    );

    match outcome {
        ComparisonOutcome::Compared(result) => {
            assert_eq!(result.first_value, 300000);
            assert_eq!(result.second_value, 150000);
            assert_eq!(result.difference, 150000);
            assert_eq!(result.percent_decrease, 50.0);
        }
        other => panic!("expected a comparison, got {other:?}"),
    }
}

#[test]
fn test_comparison_is_saved_and_printed() {
    init_logger();
    let dir = tempfile::tempdir().unwrap();
    let store = FileReportStore::new(dir.path());

    let mut out = Vec::new();
    let outcome = run_summary_comparison(
        &fixture("propose_batch_gas_analysis.json"),
        PROPOSE_BATCH_METHOD,
        &fixture("minimal_inbox_publish.json"),
        PUBLISH_METHOD,
        &ComparisonLabels::json_summaries(),
        &store,
        &mut out,
    )
    .unwrap();
    assert!(!outcome.is_error());

    let saved: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join(COMPARISON_RESULTS_FILE)).unwrap()).unwrap();
    assert_eq!(
        saved,
        json!({
            "first_value": 300000,
            "second_value": 150000,
            "difference": 150000,
            "percent_decrease": 50.0
        })
    );

    let printed = String::from_utf8(out).unwrap();
    assert!(printed.contains("proposeBatch average gas used: 300,000"));
    assert!(printed.contains("Publish average gas used: 150,000"));
    assert!(printed.contains("Difference: 150,000"));
    assert!(printed.contains("minimal_rollup_inbox_publish uses 50.00% LESS gas than alethia_inbox_propose"));
}

#[test]
fn test_missing_file_gives_error_object_and_no_output() {
    init_logger();
    let dir = tempfile::tempdir().unwrap();
    let store = FileReportStore::new(dir.path());
    let missing = dir.path().join("minimal_inbox_publish.json");

    let mut out = Vec::new();
    let outcome = run_summary_comparison(
        &fixture("propose_batch_gas_analysis.json"),
        PROPOSE_BATCH_METHOD,
        &missing,
        PUBLISH_METHOD,
        &ComparisonLabels::json_summaries(),
        &store,
        &mut out,
    )
    .unwrap();

    assert_eq!(
        outcome,
        ComparisonOutcome::error(format!("File not found: {}", missing.display()))
    );
    assert!(!dir.path().join(COMPARISON_RESULTS_FILE).exists());

    let printed: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert!(printed["error"].as_str().unwrap().starts_with("File not found"));
}

#[test]
fn test_zero_average_gives_error_object() {
    init_logger();
    let dir = tempfile::tempdir().unwrap();
    let zero = dir.path().join("zero.json");
    fs::write(&zero, r#"{ "average_gas_used_proposeBatch": 0 }"#).unwrap();

    let outcome = compare_summary_files(
        &zero,
        PROPOSE_BATCH_METHOD,
        &fixture("minimal_inbox_publish.json"),
        PUBLISH_METHOD,
    );
    assert_eq!(outcome, ComparisonOutcome::error("proposeBatch average gas is zero"));
}
