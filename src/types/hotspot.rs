use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Geocode;

/// A hotspot (gateway) as registered on the blockchain.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Hotspot {
    pub address: String,
    /// Three-word animal name derived from the address.
    pub name: String,
    pub owner: String,
    /// H3 index of the asserted location; absent until a location is asserted.
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
    #[serde(default)]
    pub geocode: Geocode,
    #[serde(default)]
    pub status: HotspotStatus,
    #[serde(default)]
    pub nonce: u64,
    #[serde(default)]
    pub block: Option<u64>,
    #[serde(default)]
    pub block_added: Option<u64>,
    #[serde(default)]
    pub timestamp_added: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_change_block: Option<u64>,
    #[serde(default)]
    pub last_poc_challenge: Option<u64>,
    #[serde(default)]
    pub reward_scale: Option<f64>,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub score_update_height: Option<u64>,
    /// Antenna gain in tenths of a dBi.
    #[serde(default)]
    pub gain: Option<i64>,
    #[serde(default)]
    pub elevation: Option<i64>,
}

impl Hotspot {
    pub fn is_online(&self) -> bool {
        self.status.online.as_deref() == Some("online")
    }

    /// Asserted coordinates, if both are known.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        self.lat.zip(self.lng)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HotspotStatus {
    #[serde(default)]
    pub online: Option<String>,
    #[serde(default)]
    pub listen_addrs: Vec<String>,
    #[serde(default)]
    pub height: Option<u64>,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

/// A hotspot that has witnessed beacons from another hotspot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Witness {
    #[serde(flatten)]
    pub hotspot: Hotspot,
    /// Address of the hotspot that was witnessed.
    #[serde(default)]
    pub witness_for: Option<String>,
    #[serde(default)]
    pub witness_info: Option<WitnessInfo>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WitnessInfo {
    #[serde(default)]
    pub first_time: Option<i64>,
    #[serde(default)]
    pub recent_time: Option<i64>,
    /// RSSI bucket counts, keyed by signal strength.
    #[serde(default)]
    pub histogram: serde_json::Map<String, serde_json::Value>,
}
