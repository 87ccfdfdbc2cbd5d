//! Human readable report rendering

use std::io::{self, Write};

use crate::{
    analysis::round_two,
    models::report::{ComparisonResult, GasSummary},
};

const RULE_WIDTH: usize = 50;

/// How the two compared figures are named in printed reports
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonLabels {
    /// Description of the first figure, e.g. "Gas per proposing"
    pub first_metric: String,
    /// Where the first figure comes from, e.g. "alethia_inbox_propose"
    pub first_source: String,
    pub second_metric: String,
    pub second_source: String,
}

impl ComparisonLabels {
    /// Labels for comparing the fetched proposeBatch summary with the publish summary
    pub fn json_summaries() -> Self {
        Self {
            first_metric: "proposeBatch average gas used".to_string(),
            first_source: "alethia_inbox_propose".to_string(),
            second_metric: "Publish average gas used".to_string(),
            second_source: "minimal_rollup_inbox_publish".to_string(),
        }
    }

    /// Labels for comparing the two forge gas reports
    pub fn text_reports() -> Self {
        Self {
            first_metric: "Gas per proposing".to_string(),
            first_source: "inbox_without_provermarket".to_string(),
            second_metric: "Gas for publication".to_string(),
            second_source: "taiko_inbox_publish".to_string(),
        }
    }
}

/// Format an integer with `,` thousands separators
pub fn group_thousands(value: impl Into<i128>) -> String {
    let value: i128 = value.into();
    let digits = value.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Sentence stating which side uses less gas
pub fn verdict_line(percent_decrease: f64, labels: &ComparisonLabels) -> String {
    // compare at printed precision so "0.00% LESS" never appears
    let shown = round_two(percent_decrease);
    if shown > 0.0 {
        format!(
            "{} uses {:.2}% LESS gas than {}",
            labels.second_source, percent_decrease, labels.first_source
        )
    } else if shown < 0.0 {
        format!(
            "{} uses {:.2}% MORE gas than {}",
            labels.second_source,
            percent_decrease.abs(),
            labels.first_source
        )
    } else {
        "Both methods use the same amount of gas".to_string()
    }
}

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// Print the outcome of a fetch run
pub fn write_gas_summary<W: Write + ?Sized>(out: &mut W, summary: &GasSummary) -> io::Result<()> {
    writeln!(out, "Found {} {} transactions", summary.total_transactions, summary.method)?;
    writeln!(out, "{}", "-".repeat(60))?;
    writeln!(
        out,
        "Average gas_used over {} {} transactions: {}",
        summary.total_transactions,
        summary.method,
        group_thousands(summary.average_gas_used)
    )?;
    writeln!(
        out,
        "Minimum gas_used: {}, maximum gas_used: {}",
        group_thousands(summary.minimum_gas_used),
        group_thousands(summary.maximum_gas_used)
    )
}

/// Print the comparison of two JSON summaries
pub fn write_summary_comparison<W: Write + ?Sized>(
    out: &mut W,
    result: &ComparisonResult,
    labels: &ComparisonLabels,
) -> io::Result<()> {
    writeln!(out, "Gas Usage Comparison Analysis")?;
    writeln!(out, "{}", rule())?;
    writeln!(out, "{}: {}", labels.first_metric, group_thousands(result.first_value))?;
    writeln!(out, "{}: {}", labels.second_metric, group_thousands(result.second_value))?;
    writeln!(out, "Difference: {}", group_thousands(result.difference))?;
    writeln!(out, "{}", verdict_line(result.percent_decrease, labels))?;
    writeln!(out, "{}", rule())
}

/// Print the comparison of two text gas reports
pub fn write_report_comparison<W: Write + ?Sized>(
    out: &mut W,
    result: &ComparisonResult,
    labels: &ComparisonLabels,
) -> io::Result<()> {
    writeln!(out, "Gas Report Comparison")?;
    writeln!(out, "{}", rule())?;
    writeln!(
        out,
        "{} ({}): {}",
        labels.first_metric,
        labels.first_source,
        group_thousands(result.first_value)
    )?;
    writeln!(
        out,
        "{} ({}): {}",
        labels.second_metric,
        labels.second_source,
        group_thousands(result.second_value)
    )?;
    writeln!(out, "{}", rule())?;
    writeln!(out, "Absolute difference: {}", group_thousands(result.absolute_difference()))?;
    writeln!(out, "Percentage decrease: {:.2}%", result.percent_decrease)?;
    writeln!(out)?;
    writeln!(out, "{}", verdict_line(result.percent_decrease, labels))
}
