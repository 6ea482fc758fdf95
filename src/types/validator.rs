use serde::{Deserialize, Serialize};

/// A staked validator node.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Validator {
    pub address: String,
    #[serde(default)]
    pub name: Option<String>,
    pub owner: String,
    /// Stake in bones.
    #[serde(default)]
    pub stake: u64,
    /// `staked`, `cooldown` or `unstaked`.
    #[serde(default)]
    pub stake_status: Option<String>,
    #[serde(default)]
    pub status: ValidatorStatus,
    #[serde(default)]
    pub penalty: f64,
    #[serde(default)]
    pub penalties: Vec<Penalty>,
    #[serde(default)]
    pub last_heartbeat: Option<u64>,
    #[serde(default)]
    pub version_heartbeat: Option<u64>,
    #[serde(default)]
    pub block: Option<u64>,
    #[serde(default)]
    pub block_added: Option<u64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidatorStatus {
    #[serde(default)]
    pub online: Option<String>,
    #[serde(default)]
    pub listen_addrs: Vec<String>,
    #[serde(default)]
    pub height: Option<u64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Penalty {
    /// `tenure`, `dkg` or `performance`.
    #[serde(rename = "type")]
    pub kind: String,
    pub height: u64,
    pub amount: f64,
}

/// A validator heartbeat or other validator-specific transaction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorActivity {
    #[serde(rename = "type")]
    pub kind: String,
    pub hash: String,
    pub height: u64,
    pub time: i64,
    pub address: String,
    #[serde(default)]
    pub signature: Option<String>,
    #[serde(default)]
    pub version: Option<u64>,
}

/// Validator counts and stake totals by stake status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidatorStats {
    #[serde(default)]
    pub active: u64,
    #[serde(default)]
    pub staked: StakeBucket,
    #[serde(default)]
    pub cooldown: StakeBucket,
    #[serde(default)]
    pub unstaked: StakeBucket,
}

/// Amount is in HNT.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StakeBucket {
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub count: u64,
}
