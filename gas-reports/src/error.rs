use std::path::PathBuf;
use thiserror::Error;

/// Report-specific error types
///
/// This enum defines all possible errors that can occur while fetching,
/// extracting or comparing gas figures. Each variant carries the details
/// needed to print a useful diagnostic.
#[derive(Error, Debug)]
pub enum ReportError {
    /// An input file does not exist
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// An input file exists but does not hold valid JSON
    #[error("Invalid JSON in file '{}': {source}", .path.display())]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A summary is missing the expected gas field, or the field is zero
    #[error("{label} average gas is zero")]
    MissingField { label: String },

    /// A text report does not contain the expected line
    #[error("Pattern not found in {}: {pattern}", .path.display())]
    PatternNotFound { path: PathBuf, pattern: String },

    /// A pattern matched but its capture is not an integer
    #[error("Failed to parse gas value from match: {matched}")]
    ValueParse { matched: String },

    /// Two gas figures are too far apart for a signed difference
    #[error("Difference between {first} and {second} is out of range")]
    DifferenceOutOfRange { first: u64, second: u64 },

    /// A summary holds its gas field with the wrong type
    #[error("{label} average gas must be a non-negative integer, found {found}")]
    InvalidField { label: String, found: String },

    /// A user supplied pattern does not compile
    #[error("Invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Error talking to the transaction explorer API
    #[error("Error fetching data from transaction API: {0}")]
    Network(String),

    /// No transaction passed the method/blob filter
    #[error("No matching {method} transactions to summarize")]
    NoMatchingTransactions { method: String },

    /// The contract address is not a 20-byte hex address
    #[error("Invalid contract address '{address}': {reason}")]
    InvalidAddress { address: String, reason: String },

    /// A report could not be encoded as JSON
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic file I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for ReportError {
    fn from(e: reqwest::Error) -> Self {
        ReportError::Network(e.to_string())
    }
}

impl ReportError {
    /// Map an I/O error on `path` to `FileNotFound` when appropriate
    pub fn from_io(path: impl Into<PathBuf>, e: std::io::Error) -> Self {
        if e.kind() == std::io::ErrorKind::NotFound {
            ReportError::FileNotFound(path.into())
        } else {
            ReportError::Io(e)
        }
    }
}

pub type ReportResult<T> = Result<T, ReportError>;
