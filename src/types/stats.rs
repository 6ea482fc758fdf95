use serde::{Deserialize, Serialize};

use super::{PeriodStats, TimingStats};

/// Network-wide statistics.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    #[serde(default)]
    pub token_supply: f64,
    pub counts: Counts,
    #[serde(default)]
    pub block_times: Option<PeriodStats<TimingStats>>,
    #[serde(default)]
    pub election_times: Option<PeriodStats<TimingStats>>,
    #[serde(default)]
    pub challenge_counts: Option<ChallengeCounts>,
    #[serde(default)]
    pub fees: Option<PeriodStats<FeeTotals>>,
    #[serde(default)]
    pub state_channel_counts: Option<PeriodStats<StateChannelCounts>>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Counts {
    pub blocks: u64,
    pub challenges: u64,
    pub cities: u64,
    pub consensus_groups: u64,
    pub countries: u64,
    pub hotspots: u64,
    pub transactions: u64,
    pub validators: u64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChallengeCounts {
    pub active: u64,
    pub last_day: u64,
}

/// Fees burned, in data credits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeeTotals {
    pub transaction: u64,
    pub staking: u64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StateChannelCounts {
    pub num_packets: u64,
    pub num_dcs: u64,
}

/// Circulating supply, in HNT.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TokenSupply {
    pub token_supply: f64,
}
