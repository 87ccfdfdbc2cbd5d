use serde::{
    ser::{SerializeMap, Serializer},
    Deserialize, Serialize,
};

use crate::{
    analysis::{percent_decrease, round_two},
    error::{ReportError, ReportResult},
};

/// Aggregate gas usage over the transactions matching one method
///
/// Serialized as `{total_transactions, average_gas_used_<method>,
/// minimum_gas_used, maximum_gas_used}` so the average key names the method
/// it was computed for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GasSummary {
    /// Method the summary was computed for (e.g. `proposeBatch`)
    pub method: String,
    pub total_transactions: u64,
    /// Ceiling of the mean gas used
    pub average_gas_used: u64,
    pub minimum_gas_used: u64,
    pub maximum_gas_used: u64,
}

impl GasSummary {
    /// Key under which the average is written
    pub fn average_key(&self) -> String {
        average_key_for(&self.method)
    }
}

/// `average_gas_used_<method>`
pub fn average_key_for(method: &str) -> String {
    format!("average_gas_used_{method}")
}

impl Serialize for GasSummary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(4))?;
        map.serialize_entry("total_transactions", &self.total_transactions)?;
        map.serialize_entry(&self.average_key(), &self.average_gas_used)?;
        map.serialize_entry("minimum_gas_used", &self.minimum_gas_used)?;
        map.serialize_entry("maximum_gas_used", &self.maximum_gas_used)?;
        map.end()
    }
}

/// Comparison of two gas figures
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub first_value: u64,
    pub second_value: u64,
    /// `first_value - second_value`, negative when the second uses more gas
    pub difference: i64,
    /// Rounded to two decimals when serialized
    #[serde(serialize_with = "serialize_rounded")]
    pub percent_decrease: f64,
}

impl ComparisonResult {
    /// # Errors
    ///
    /// * `ReportError::DifferenceOutOfRange` - `first_value - second_value` does not fit in an `i64`
    pub fn new(first_value: u64, second_value: u64) -> ReportResult<Self> {
        let difference = i64::try_from(i128::from(first_value) - i128::from(second_value)).map_err(|_| {
            ReportError::DifferenceOutOfRange {
                first: first_value,
                second: second_value,
            }
        })?;

        Ok(Self {
            first_value,
            second_value,
            difference,
            percent_decrease: percent_decrease(first_value, second_value),
        })
    }

    /// Magnitude of the difference regardless of direction
    pub fn absolute_difference(&self) -> u64 {
        self.difference.unsigned_abs()
    }
}

fn serialize_rounded<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(round_two(*value))
}

/// Result of a JSON comparison: either computed figures or an error object
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ComparisonOutcome {
    Compared(ComparisonResult),
    Error { error: String },
}

impl ComparisonOutcome {
    pub fn error(message: impl ToString) -> Self {
        ComparisonOutcome::Error { error: message.to_string() }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ComparisonOutcome::Error { .. })
    }
}
