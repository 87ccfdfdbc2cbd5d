//! Command line surface of the gas report tools

use std::{io::Write, path::PathBuf, time::Duration};

use clap::{Args, Parser, Subcommand};
use tracing::error;

use crate::{
    analysis::PROPOSE_BATCH_METHOD,
    compare::{run_summary_comparison, DEFAULT_PROPOSE_BATCH_SUMMARY, DEFAULT_PUBLISH_SUMMARY, PUBLISH_METHOD},
    config::Config,
    display::ComparisonLabels,
    error::{ReportError, ReportResult},
    extract::{
        run_report_comparison, DEFAULT_PROPOSE_REPORT, DEFAULT_PUBLISH_REPORT, PROPOSE_GAS_PATTERN,
        PUBLISH_GAS_PATTERN,
    },
    fetch::run_fetch,
    source::TenderlyClient,
    store::FileReportStore,
};

/// Gas usage reports for inbox contract calls
#[derive(Parser, Debug)]
#[command(name = "gas-reports")]
#[command(about = "Fetch, summarize and compare gas usage of inbox contract calls")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available tools
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Summarize gas of recent blob-carrying calls from the transaction explorer
    Fetch(FetchArgs),
    /// Compare the averages of two JSON gas summaries and save the result
    CompareJson(CompareJsonArgs),
    /// Compare gas figures extracted from two text gas reports
    CompareText(CompareTextArgs),
}

#[derive(Args, Debug)]
pub struct FetchArgs {
    /// Contract address (overrides CONTRACT_ADDRESS)
    #[arg(long)]
    pub contract: Option<String>,

    /// Number of recent transactions to request (overrides TRANSACTION_LIMIT)
    #[arg(long)]
    pub limit: Option<usize>,

    /// Contract method to summarize
    #[arg(long, default_value = PROPOSE_BATCH_METHOD)]
    pub method: String,

    /// Explorer API base URL (overrides TENDERLY_API_URL)
    #[arg(long)]
    pub api_url: Option<String>,

    /// Directory the summary is written to (overrides REPORTS_DIR)
    #[arg(long)]
    pub reports_dir: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct CompareJsonArgs {
    /// Summary holding the first average (default: <reports-dir>/propose_batch_gas_analysis.json)
    #[arg(long)]
    pub first: Option<PathBuf>,

    /// Summary holding the second average (default: <reports-dir>/minimal_inbox_publish.json)
    #[arg(long)]
    pub second: Option<PathBuf>,

    /// Method named by the first summary's average key
    #[arg(long, default_value = PROPOSE_BATCH_METHOD)]
    pub first_method: String,

    /// Method named by the second summary's average key
    #[arg(long, default_value = PUBLISH_METHOD)]
    pub second_method: String,

    /// Directory for inputs and the comparison result (overrides REPORTS_DIR)
    #[arg(long)]
    pub reports_dir: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct CompareTextArgs {
    /// First gas report (default: <reports-dir>/test_inbox_measure_gas_used.txt)
    #[arg(long)]
    pub first: Option<PathBuf>,

    /// Second gas report (default: <reports-dir>/taiko_inbox_publish.txt)
    #[arg(long)]
    pub second: Option<PathBuf>,

    /// Pattern whose first capture group is the first gas figure
    #[arg(long, default_value = PROPOSE_GAS_PATTERN)]
    pub first_pattern: String,

    /// Pattern whose first capture group is the second gas figure
    #[arg(long, default_value = PUBLISH_GAS_PATTERN)]
    pub second_pattern: String,

    /// Directory holding the reports (overrides REPORTS_DIR)
    #[arg(long)]
    pub reports_dir: Option<PathBuf>,
}

impl Commands {
    /// Whether the command talks to the transaction explorer
    pub fn needs_explorer(&self) -> bool {
        matches!(self, Commands::Fetch(_))
    }

    /// Load the configuration the command reads
    ///
    /// Comparisons read only `REPORTS_DIR`; a malformed explorer setting
    /// fails `fetch` alone.
    pub fn load_config(&self) -> eyre::Result<Config> {
        if self.needs_explorer() {
            Config::from_env()
        } else {
            Ok(Config::reports_from_env())
        }
    }
}

/// Run one tool and return the process exit code
///
/// Only `compare-text` turns a handled error into a non-zero exit code; the
/// other tools print the diagnostic and exit cleanly.
pub async fn execute<W: Write + ?Sized>(command: Commands, config: &Config, out: &mut W) -> i32 {
    match command {
        Commands::Fetch(args) => {
            if let Err(e) = fetch(args, config, out).await {
                report_failure(out, &e);
            }
            0
        }
        Commands::CompareJson(args) => {
            if let Err(e) = compare_json(args, config, out) {
                report_failure(out, &e);
            }
            0
        }
        Commands::CompareText(args) => match compare_text(args, config, out) {
            Ok(_) => 0,
            Err(e) => {
                report_failure(out, &e);
                1
            }
        },
    }
}

fn report_failure<W: Write + ?Sized>(out: &mut W, e: &ReportError) {
    error!("{}", e);
    let _ = writeln!(out, "Error: {e}");
}

async fn fetch<W: Write + ?Sized>(args: FetchArgs, config: &Config, out: &mut W) -> ReportResult<()> {
    let api_url = args.api_url.unwrap_or_else(|| config.api_url.clone());
    let contract = args.contract.unwrap_or_else(|| config.contract_address.clone());
    let limit = args.limit.unwrap_or(config.transaction_limit);
    let store = FileReportStore::new(args.reports_dir.unwrap_or_else(|| config.reports_dir.clone()));

    let client = TenderlyClient::new(&api_url, Duration::from_secs(config.request_timeout_secs))?;
    run_fetch(&client, &store, &contract, limit, &args.method, out).await?;
    Ok(())
}

fn compare_json<W: Write + ?Sized>(args: CompareJsonArgs, config: &Config, out: &mut W) -> ReportResult<()> {
    let dir = args.reports_dir.unwrap_or_else(|| config.reports_dir.clone());
    let first = args.first.unwrap_or_else(|| dir.join(DEFAULT_PROPOSE_BATCH_SUMMARY));
    let second = args.second.unwrap_or_else(|| dir.join(DEFAULT_PUBLISH_SUMMARY));
    let store = FileReportStore::new(dir);

    run_summary_comparison(
        &first,
        &args.first_method,
        &second,
        &args.second_method,
        &ComparisonLabels::json_summaries(),
        &store,
        out,
    )?;
    Ok(())
}

fn compare_text<W: Write + ?Sized>(args: CompareTextArgs, config: &Config, out: &mut W) -> ReportResult<()> {
    let dir = args.reports_dir.unwrap_or_else(|| config.reports_dir.clone());
    let first = args.first.unwrap_or_else(|| dir.join(DEFAULT_PROPOSE_REPORT));
    let second = args.second.unwrap_or_else(|| dir.join(DEFAULT_PUBLISH_REPORT));

    run_report_comparison(
        &first,
        &args.first_pattern,
        &second,
        &args.second_pattern,
        &ComparisonLabels::text_reports(),
        out,
    )?;
    Ok(())
}
