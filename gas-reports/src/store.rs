use std::{fs, path::PathBuf};

use mockall::automock;
use serde_json::Value;
use tracing::info;

use crate::error::ReportResult;

/// Output file of the fetch tool
pub const PROPOSE_BATCH_ANALYSIS_FILE: &str = "propose_batch_gas_analysis.json";

/// Output file of the JSON comparison tool
pub const COMPARISON_RESULTS_FILE: &str = "gas_comparison_results.json";

/// Destination for report artifacts
#[automock]
pub trait ReportStore {
    /// Persist `report` under `name`, returning where it ended up
    fn save(&self, name: &str, report: &Value) -> ReportResult<PathBuf>;
}

/// Writes pretty-printed JSON reports into a directory
#[derive(Debug, Clone)]
pub struct FileReportStore {
    dir: PathBuf,
}

impl FileReportStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl ReportStore for FileReportStore {
    fn save(&self, name: &str, report: &Value) -> ReportResult<PathBuf> {
        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(name);
        let body = serde_json::to_string_pretty(report)?;
        fs::write(&path, body)?;
        info!("Report written to {}", path.display());
        Ok(path)
    }
}
