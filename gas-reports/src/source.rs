use std::{str::FromStr, time::Duration};

use alloy_primitives::Address;
use async_trait::async_trait;
use mockall::automock;
use tracing::{debug, error, instrument};

use crate::{
    error::{ReportError, ReportResult},
    models::transaction::{Transaction, TransactionsResponse},
};

/// Parse and validate a contract address
pub fn parse_contract_address(address: &str) -> ReportResult<Address> {
    Address::from_str(address.trim()).map_err(|e| ReportError::InvalidAddress {
        address: address.to_string(),
        reason: e.to_string(),
    })
}

/// Anything that can list recent transactions sent to a contract
#[automock]
#[async_trait]
pub trait TransactionSource: Send + Sync {
    /// Fetch up to `limit` recent transactions for `contract`
    async fn fetch_transactions(&self, contract: Address, limit: usize) -> ReportResult<Vec<Transaction>>;
}

/// Fetch transactions, degrading any failure to an empty list
///
/// The error is logged; an empty result means "nothing fetched" and is
/// left to the caller to interpret.
pub async fn fetch_or_empty(
    source: &dyn TransactionSource,
    contract: Address,
    limit: usize,
) -> Vec<Transaction> {
    match source.fetch_transactions(contract, limit).await {
        Ok(txs) => txs,
        Err(e) => {
            error!("Fetching transactions failed: {}", e);
            Vec::new()
        }
    }
}

/// Client for the Tenderly public contract explorer
///
/// Queries `<base_url>/address/<contract>/explorer/transactions`.
#[derive(Clone, Debug)]
pub struct TenderlyClient {
    http: reqwest::Client,
    base_url: String,
}

impl TenderlyClient {
    /// Create a new client for the explorer rooted at `base_url`
    ///
    /// # Arguments
    ///
    /// * `base_url` - API root, e.g. `https://api.tenderly.co/api/v1/public-contract/1`
    /// * `timeout` - Upper bound for a single request
    pub fn new(base_url: &str, timeout: Duration) -> ReportResult<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Listing endpoint for `contract`
    pub fn transactions_url(&self, contract: Address) -> String {
        let contract = contract.to_string().to_lowercase();
        format!("{}/address/{}/explorer/transactions", self.base_url, contract)
    }
}

#[async_trait]
impl TransactionSource for TenderlyClient {
    #[instrument(skip(self), err)]
    async fn fetch_transactions(&self, contract: Address, limit: usize) -> ReportResult<Vec<Transaction>> {
        let url = self.transactions_url(contract);
        debug!("Requesting {} with limit {}", url, limit);

        let response = self
            .http
            .get(&url)
            .query(&[("limit", limit)])
            .send()
            .await?
            .error_for_status()?;

        let body: TransactionsResponse = response.json().await?;
        let txs = body.into_transactions();
        debug!("Explorer returned {} transactions", txs.len());
        Ok(txs)
    }
}
