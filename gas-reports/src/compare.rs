use std::{fs, io::Write, path::Path};

use serde_json::Value;
use tracing::{error, info, instrument};

use crate::{
    display::{write_summary_comparison, ComparisonLabels},
    error::{ReportError, ReportResult},
    models::report::{average_key_for, ComparisonOutcome, ComparisonResult},
    store::{ReportStore, COMPARISON_RESULTS_FILE},
};

/// Summary produced by the fetch tool
pub const DEFAULT_PROPOSE_BATCH_SUMMARY: &str = "propose_batch_gas_analysis.json";

/// Summary of the minimal inbox publish measurements
pub const DEFAULT_PUBLISH_SUMMARY: &str = "minimal_inbox_publish.json";

/// Metric name of the publish summary
pub const PUBLISH_METHOD: &str = "publish";

/// Read and decode a JSON file
pub fn load_json(path: &Path) -> ReportResult<Value> {
    let raw = fs::read_to_string(path).map_err(|e| ReportError::from_io(path, e))?;
    serde_json::from_str(&raw).map_err(|source| ReportError::InvalidJson {
        path: path.to_path_buf(),
        source,
    })
}

/// Read `average_gas_used_<method>`
///
/// Absent and zero fields count as missing. Whole floats such as `150000.0`
/// are accepted; fractions, negatives and non-numbers are rejected.
pub fn average_gas(summary: &Value, method: &str) -> ReportResult<u64> {
    let missing = || ReportError::MissingField { label: method.to_string() };

    let gas = match summary.get(average_key_for(method)) {
        None | Some(Value::Null) => return Err(missing()),
        Some(value) => value
            .as_u64()
            .or_else(|| {
                value
                    .as_f64()
                    .filter(|f| f.fract() == 0.0 && *f >= 0.0 && *f < u64::MAX as f64)
                    .map(|f| f as u64)
            })
            .ok_or_else(|| ReportError::InvalidField {
                label: method.to_string(),
                found: value.to_string(),
            })?,
    };

    if gas == 0 {
        return Err(missing());
    }
    Ok(gas)
}

/// Compare the averages of two decoded summaries
pub fn compare_gas_usage(
    first: &Value,
    first_method: &str,
    second: &Value,
    second_method: &str,
) -> ComparisonOutcome {
    let compared = average_gas(first, first_method)
        .and_then(|a| average_gas(second, second_method).map(|b| (a, b)))
        .and_then(|(a, b)| ComparisonResult::new(a, b));

    match compared {
        Ok(result) => ComparisonOutcome::Compared(result),
        Err(e) => ComparisonOutcome::error(e),
    }
}

/// Load two summary files and compare their averages
///
/// Load failures abort the comparison and come back as an error outcome.
#[instrument]
pub fn compare_summary_files(
    first_path: &Path,
    first_method: &str,
    second_path: &Path,
    second_method: &str,
) -> ComparisonOutcome {
    let loaded = load_json(first_path).and_then(|a| load_json(second_path).map(|b| (a, b)));

    match loaded {
        Ok((first, second)) => compare_gas_usage(&first, first_method, &second, second_method),
        Err(e) => {
            error!("Could not load gas summaries: {}", e);
            ComparisonOutcome::error(e)
        }
    }
}

/// Compare two summary files, print the report and persist the result
///
/// Error outcomes are printed as JSON and never persisted.
pub fn run_summary_comparison<W: Write + ?Sized>(
    first_path: &Path,
    first_method: &str,
    second_path: &Path,
    second_method: &str,
    labels: &ComparisonLabels,
    store: &dyn ReportStore,
    out: &mut W,
) -> ReportResult<ComparisonOutcome> {
    let outcome = compare_summary_files(first_path, first_method, second_path, second_method);

    match &outcome {
        ComparisonOutcome::Error { error } => {
            error!("Gas comparison failed: {}", error);
            let rendered = serde_json::to_string_pretty(&outcome)?;
            writeln!(out, "{rendered}")?;
        }
        ComparisonOutcome::Compared(result) => {
            write_summary_comparison(out, result, labels)?;
            let report = serde_json::to_value(result)?;
            let saved = store.save(COMPARISON_RESULTS_FILE, &report)?;
            info!(difference = result.difference, "comparison saved");
            writeln!(out)?;
            writeln!(out, "Results saved to '{}'", saved.display())?;
        }
    }

    Ok(outcome)
}
