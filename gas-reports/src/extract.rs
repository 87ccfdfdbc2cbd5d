use std::{fs, io::Write, path::Path};

use regex::{Regex, RegexBuilder};
use tracing::{debug, instrument};

use crate::{
    display::{write_report_comparison, ComparisonLabels},
    error::{ReportError, ReportResult},
    models::report::ComparisonResult,
};

/// Forge gas report of the Taiko inbox proposeBatches test
pub const DEFAULT_PROPOSE_REPORT: &str = "test_inbox_measure_gas_used.txt";

/// Forge gas report of the minimal inbox publish test
pub const DEFAULT_PUBLISH_REPORT: &str = "taiko_inbox_publish.txt";

/// Line carrying the proposing cost in the Taiko inbox report
pub const PROPOSE_GAS_PATTERN: &str = r"Gas per proposeBatches:\s*(\d+)";

/// Line carrying the publication cost in the minimal inbox report
pub const PUBLISH_GAS_PATTERN: &str = r"Gas for publication:\s*(\d+)";

/// Compile a multi-line pattern whose first capture group holds the gas figure
pub fn compile_pattern(pattern: &str) -> ReportResult<Regex> {
    RegexBuilder::new(pattern)
        .multi_line(true)
        .build()
        .map_err(|source| ReportError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })
}

/// Pull the first captured integer matching `pattern` out of `content`
///
/// `origin` only names the source in error messages.
pub fn extract_gas_from_str(content: &str, pattern: &Regex, origin: &Path) -> ReportResult<u64> {
    let captures = pattern
        .captures(content)
        .ok_or_else(|| ReportError::PatternNotFound {
            path: origin.to_path_buf(),
            pattern: pattern.as_str().to_string(),
        })?;

    let matched = captures.get(0).map_or("", |m| m.as_str());
    let value = captures.get(1).ok_or_else(|| ReportError::ValueParse {
        matched: matched.to_string(),
    })?;

    value.as_str().trim().parse::<u64>().map_err(|_| ReportError::ValueParse {
        matched: matched.to_string(),
    })
}

/// Read `path` and extract the gas figure matched by `pattern`
#[instrument(skip(pattern), fields(pattern = pattern.as_str()))]
pub fn extract_gas_value(path: &Path, pattern: &Regex) -> ReportResult<u64> {
    let content = fs::read_to_string(path).map_err(|e| ReportError::from_io(path, e))?;
    let gas = extract_gas_from_str(&content, pattern, path)?;
    debug!("Extracted {} gas from {}", gas, path.display());
    Ok(gas)
}

/// Extract one figure from each report and compare them
pub fn compare_text_reports(
    first_path: &Path,
    first_pattern: &str,
    second_path: &Path,
    second_pattern: &str,
) -> ReportResult<ComparisonResult> {
    let first = extract_gas_value(first_path, &compile_pattern(first_pattern)?)?;
    let second = extract_gas_value(second_path, &compile_pattern(second_pattern)?)?;
    ComparisonResult::new(first, second)
}

/// Compare two text reports and print the result; nothing is persisted
pub fn run_report_comparison<W: Write + ?Sized>(
    first_path: &Path,
    first_pattern: &str,
    second_path: &Path,
    second_pattern: &str,
    labels: &ComparisonLabels,
    out: &mut W,
) -> ReportResult<ComparisonResult> {
    let result = compare_text_reports(first_path, first_pattern, second_path, second_pattern)?;
    write_report_comparison(out, &result, labels)?;
    Ok(result)
}
