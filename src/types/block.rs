use serde::{Deserialize, Serialize};

use super::{PeriodStats, TimingStats};

/// Block descriptor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub height: u64,
    pub hash: String,
    pub prev_hash: String,
    /// Unix timestamp, in seconds.
    pub time: i64,
    #[serde(default)]
    pub transaction_count: u64,
    #[serde(default)]
    pub snapshot_hash: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Height {
    pub height: u64,
}

/// Block production times over rolling windows.
pub type BlockStats = PeriodStats<TimingStats>;
