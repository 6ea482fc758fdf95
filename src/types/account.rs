use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An account record. Balances are in bones (HNT), data credits, and security tokens.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub address: String,
    #[serde(default)]
    pub balance: u64,
    #[serde(default)]
    pub nonce: u64,
    #[serde(default)]
    pub dc_balance: u64,
    #[serde(default)]
    pub dc_nonce: u64,
    #[serde(default)]
    pub sec_balance: u64,
    #[serde(default)]
    pub sec_nonce: u64,
    /// Height at which this snapshot was taken.
    #[serde(default)]
    pub block: Option<u64>,
}

/// An organizationally unique identifier used for packet routing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Oui {
    pub oui: u64,
    pub owner: String,
    #[serde(default)]
    pub nonce: u64,
    #[serde(default)]
    pub block: Option<u64>,
    #[serde(default)]
    pub addresses: Vec<String>,
    #[serde(default)]
    pub subnets: Vec<Subnet>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subnet {
    pub base: u64,
    pub mask: u64,
}

/// Balance history sampled over the last day, week and month.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountStats {
    #[serde(default)]
    pub last_day: Vec<BalancePoint>,
    #[serde(default)]
    pub last_week: Vec<BalancePoint>,
    #[serde(default)]
    pub last_month: Vec<BalancePoint>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BalancePoint {
    pub timestamp: DateTime<Utc>,
    /// Balance in bones.
    pub balance: i64,
}
