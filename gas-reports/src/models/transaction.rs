use serde::Deserialize;

/// Transaction record returned by the explorer API
///
/// Only the fields needed for gas analysis are kept; everything else in the
/// explorer payload is ignored.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Transaction {
    /// Transaction hash
    #[serde(default)]
    pub hash: String,

    /// Decoded contract method name (absent for plain transfers)
    #[serde(default)]
    pub method: Option<String>,

    /// Blob versioned hashes; `null` and missing both mean no blobs
    #[serde(default)]
    pub blob_versioned_hashes: Option<Vec<String>>,

    /// Gas consumed by the transaction
    #[serde(default)]
    pub gas_used: u64,
}

impl Transaction {
    /// Whether the transaction carried at least one blob
    pub fn has_blobs(&self) -> bool {
        self.blob_versioned_hashes
            .as_ref()
            .is_some_and(|hashes| !hashes.is_empty())
    }

    /// Whether the transaction called `method`
    pub fn calls(&self, method: &str) -> bool {
        self.method.as_deref() == Some(method)
    }
}

/// Explorer response body
///
/// The endpoint answers either with a bare list or with an object wrapping
/// the list in `data`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum TransactionsResponse {
    List(Vec<Transaction>),
    Wrapped {
        #[serde(default)]
        data: Vec<Transaction>,
    },
}

impl TransactionsResponse {
    pub fn into_transactions(self) -> Vec<Transaction> {
        match self {
            TransactionsResponse::List(txs) => txs,
            TransactionsResponse::Wrapped { data } => data,
        }
    }
}
