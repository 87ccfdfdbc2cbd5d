use eyre::Result;
use serde::Deserialize;
use std::{env, path::PathBuf};

/// Public Tenderly explorer API for Ethereum mainnet contracts
pub const DEFAULT_API_URL: &str = "https://api.tenderly.co/api/v1/public-contract/1";

/// Taiko inbox contract address
pub const DEFAULT_CONTRACT_ADDRESS: &str = "0x06a9ab27c7e2255df1815e6cc0168d7755feb19a";

/// Number of transactions requested from the explorer
pub const DEFAULT_TRANSACTION_LIMIT: usize = 20;

/// Directory holding the input and output gas reports
pub const DEFAULT_REPORTS_DIR: &str = "./gas-reports";

/// Upper bound on a single explorer request, in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Tool configuration structure
///
/// Holds the values that used to be fixed constants in the report scripts.
/// Every field can come from the environment; command line flags override
/// them per invocation.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Base URL of the transaction explorer API
    pub api_url: String,

    /// Contract whose transactions are fetched
    pub contract_address: String,

    /// How many recent transactions to request (default: 20)
    pub transaction_limit: usize,

    /// Directory where reports are read from and written to
    pub reports_dir: PathBuf,

    /// HTTP request timeout in seconds (default: 30)
    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_url: DEFAULT_API_URL.to_string(),
            contract_address: DEFAULT_CONTRACT_ADDRESS.to_string(),
            transaction_limit: DEFAULT_TRANSACTION_LIMIT,
            reports_dir: PathBuf::from(DEFAULT_REPORTS_DIR),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// This method reads configuration from environment variables,
    /// using default values when variables are not defined.
    ///
    /// # Environment Variables
    ///
    /// * `TENDERLY_API_URL` - Explorer API base URL
    /// * `CONTRACT_ADDRESS` - Contract to analyse
    /// * `TRANSACTION_LIMIT` - Number of transactions to fetch (default: 20)
    /// * `REPORTS_DIR` - Reports directory (default: "./gas-reports")
    /// * `REQUEST_TIMEOUT_SECS` - HTTP timeout (default: 30)
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists (useful for development)
        let _ = dotenv::dotenv();

        Self::from_vars(|key| env::var(key).ok())
    }

    /// Load only `REPORTS_DIR`, leaving the explorer settings at their defaults
    pub fn reports_from_env() -> Self {
        let _ = dotenv::dotenv();

        Self::reports_from_vars(|key| env::var(key).ok())
    }

    /// Like [`Config::reports_from_env`] but over an arbitrary variable lookup
    pub fn reports_from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();
        Config {
            reports_dir: lookup("REPORTS_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.reports_dir),
            ..defaults
        }
    }

    /// Build a full configuration from an arbitrary variable lookup
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let transaction_limit = match lookup("TRANSACTION_LIMIT") {
            Some(raw) => raw
                .parse::<usize>()
                .map_err(|e| eyre::eyre!("TRANSACTION_LIMIT must be an integer: {e}"))?,
            None => defaults.transaction_limit,
        };

        let request_timeout_secs = match lookup("REQUEST_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse::<u64>()
                .map_err(|e| eyre::eyre!("REQUEST_TIMEOUT_SECS must be an integer: {e}"))?,
            None => defaults.request_timeout_secs,
        };

        Ok(Config {
            api_url: lookup("TENDERLY_API_URL").unwrap_or(defaults.api_url),
            contract_address: lookup("CONTRACT_ADDRESS").unwrap_or(defaults.contract_address),
            transaction_limit,
            reports_dir: lookup("REPORTS_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.reports_dir),
            request_timeout_secs,
        })
    }
}
