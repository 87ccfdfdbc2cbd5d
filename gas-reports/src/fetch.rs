use std::io::Write;

use tracing::{info, instrument};

use crate::{
    analysis::{is_blob_call, summarize_gas},
    display::write_gas_summary,
    error::ReportResult,
    models::report::GasSummary,
    source::{fetch_or_empty, parse_contract_address, TransactionSource},
    store::{ReportStore, PROPOSE_BATCH_ANALYSIS_FILE},
};

/// Fetch recent transactions, summarize the blob `method` calls and save the summary
///
/// A failed fetch is treated as an empty transaction list, which then fails
/// the summary with `NoMatchingTransactions`; nothing is written in that case.
#[instrument(skip(source, store, out))]
pub async fn run_fetch<W: Write + ?Sized>(
    source: &dyn TransactionSource,
    store: &dyn ReportStore,
    contract_address: &str,
    limit: usize,
    method: &str,
    out: &mut W,
) -> ReportResult<GasSummary> {
    let contract = parse_contract_address(contract_address)?;

    writeln!(out, "Fetching transactions for contract: {contract_address}")?;
    writeln!(out, "{}", "-".repeat(60))?;

    let transactions = fetch_or_empty(source, contract, limit).await;
    writeln!(out, "Total transactions fetched: {}", transactions.len())?;

    for tx in transactions.iter().filter(|tx| is_blob_call(tx, method)) {
        writeln!(out, "Transaction {} used {} gas", tx.hash, tx.gas_used)?;
    }

    let summary = summarize_gas(&transactions, method)?;
    write_gas_summary(out, &summary)?;

    let saved = store.save(PROPOSE_BATCH_ANALYSIS_FILE, &serde_json::to_value(&summary)?)?;
    info!(average = summary.average_gas_used, "summary saved");
    writeln!(out)?;
    writeln!(out, "Results saved to '{}'", saved.display())?;

    Ok(summary)
}
