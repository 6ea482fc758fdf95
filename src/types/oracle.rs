use serde::{Deserialize, Serialize};

/// HNT price reported by the oracles, effective from `block`.
///
/// `price` is USD scaled by 10^8; see [`OraclePrice::usd`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OraclePrice {
    pub price: u64,
    pub block: u64,
    #[serde(default)]
    pub timestamp: Option<chrono::DateTime<chrono::Utc>>,
}

/// Price statistics, in USD, over the queried window.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OraclePriceStats {
    pub avg: f64,
    pub max: f64,
    pub median: f64,
    pub min: f64,
    pub stddev: f64,
}

/// A `price_oracle_v1` transaction submitted by one oracle key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OracleActivity {
    #[serde(rename = "type")]
    pub kind: String,
    pub hash: String,
    pub height: u64,
    pub time: i64,
    pub price: u64,
    /// Height of the block the report refers to.
    pub block_height: u64,
    pub public_key: String,
    #[serde(default)]
    pub fee: u64,
}
