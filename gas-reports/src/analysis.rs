use crate::{
    error::{ReportError, ReportResult},
    models::{report::GasSummary, transaction::Transaction},
};
use tracing::{debug, instrument};

/// Method whose gas is measured on the Taiko inbox
pub const PROPOSE_BATCH_METHOD: &str = "proposeBatch";

/// Percentage by which `second` is lower than `first`
///
/// Negative when `second` is larger. Defined as zero when `first` is zero.
pub fn percent_decrease(first: u64, second: u64) -> f64 {
    if first == 0 {
        return 0.0;
    }
    (first as f64 - second as f64) / first as f64 * 100.0
}

/// Round to two decimal places
pub fn round_two(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Whether `tx` calls `method` and carries blob data
pub fn is_blob_call(tx: &Transaction, method: &str) -> bool {
    tx.calls(method) && tx.has_blobs()
}

/// Summarize gas usage of the blob-carrying `method` calls in `transactions`
///
/// The average is rounded up. Minimum and maximum start from the first
/// matching transaction.
///
/// # Errors
///
/// * `ReportError::NoMatchingTransactions` - nothing passed the filter
#[instrument(skip(transactions), fields(fetched = transactions.len()))]
pub fn summarize_gas(transactions: &[Transaction], method: &str) -> ReportResult<GasSummary> {
    let mut total: u128 = 0;
    let mut count: u64 = 0;
    let mut min: Option<u64> = None;
    let mut max: Option<u64> = None;

    for tx in transactions.iter().filter(|tx| is_blob_call(tx, method)) {
        total += u128::from(tx.gas_used);
        count += 1;
        min = Some(min.map_or(tx.gas_used, |m| m.min(tx.gas_used)));
        max = Some(max.map_or(tx.gas_used, |m| m.max(tx.gas_used)));
    }

    let (Some(minimum_gas_used), Some(maximum_gas_used)) = (min, max) else {
        return Err(ReportError::NoMatchingTransactions { method: method.to_string() });
    };

    // the mean never exceeds the maximum, so it fits back into u64
    let average_gas_used = u64::try_from(total.div_ceil(u128::from(count))).unwrap_or(maximum_gas_used);

    let summary = GasSummary {
        method: method.to_string(),
        total_transactions: count,
        average_gas_used,
        minimum_gas_used,
        maximum_gas_used,
    };
    debug!(?summary, "gas summary computed");
    Ok(summary)
}
