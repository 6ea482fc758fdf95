use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Geocode;

/// A blockchain transaction.
///
/// Transactions come in dozens of types (`payment_v2`, `poc_receipts_v1`,
/// `rewards_v2`, ...). The fields shared by every type are decoded
/// explicitly; everything else is kept in `fields` under its JSON name.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u64>,
    /// Unix timestamp, in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<i64>,
    /// Transaction fee, in data credits.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee: Option<u64>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Transaction {
    /// A type-specific field by JSON name.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Decode the type-specific fields into a caller-supplied record.
    pub fn fields_as<T: serde::de::DeserializeOwned>(&self) -> serde_json::Result<T> {
        serde_json::from_value(Value::Object(self.fields.clone()))
    }
}

/// A transaction submitted to the API that may not have cleared yet.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PendingTransaction {
    pub hash: String,
    /// `pending`, `cleared` or `failed`.
    pub status: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub failed_reason: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Decoded transaction body; absent for types the API cannot render.
    #[serde(default)]
    pub txn: Option<Map<String, Value>>,
}

impl PendingTransaction {
    pub fn is_failed(&self) -> bool {
        self.status == "failed"
    }

    pub fn is_cleared(&self) -> bool {
        self.status == "cleared"
    }
}

/// Acknowledgement returned for a submitted transaction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmittedTransaction {
    pub hash: String,
}

/// Body of the transaction submission endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitTransaction {
    /// Base64-encoded signed transaction.
    pub txn: String,
}

/// A consensus group election.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Election {
    #[serde(rename = "type")]
    pub kind: String,
    pub hash: String,
    pub height: u64,
    pub time: i64,
    #[serde(default)]
    pub members: Vec<String>,
    #[serde(default)]
    pub proof: Option<String>,
    #[serde(default)]
    pub delay: Option<u64>,
}

/// A proof-of-coverage challenge with its receipts.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Challenge {
    #[serde(rename = "type")]
    pub kind: String,
    pub hash: String,
    pub height: u64,
    pub time: i64,
    pub challenger: String,
    #[serde(default)]
    pub challenger_owner: Option<String>,
    #[serde(default)]
    pub challenger_location: Option<String>,
    #[serde(default)]
    pub challenger_lat: Option<f64>,
    #[serde(default)]
    pub challenger_lon: Option<f64>,
    #[serde(default)]
    pub secret: Option<String>,
    #[serde(default)]
    pub onion_key_hash: Option<String>,
    #[serde(default)]
    pub request_block_hash: Option<String>,
    #[serde(default)]
    pub fee: u64,
    #[serde(default)]
    pub path: Vec<ChallengePath>,
}

/// One hop of a challenge: the challengee and who heard it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChallengePath {
    pub challengee: String,
    #[serde(default)]
    pub challengee_owner: Option<String>,
    #[serde(default)]
    pub challengee_location: Option<String>,
    #[serde(default)]
    pub challengee_lat: Option<f64>,
    #[serde(default)]
    pub challengee_lon: Option<f64>,
    #[serde(default)]
    pub geocode: Option<Geocode>,
    #[serde(default)]
    pub receipt: Option<ChallengeReceipt>,
    #[serde(default)]
    pub witnesses: Vec<ChallengeWitness>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChallengeReceipt {
    pub gateway: String,
    pub timestamp: i64,
    #[serde(default)]
    pub origin: Option<String>,
    #[serde(default)]
    pub signal: Option<i64>,
    #[serde(default)]
    pub snr: Option<f64>,
    #[serde(default)]
    pub frequency: Option<f64>,
    #[serde(default)]
    pub channel: Option<i64>,
    /// Either a string such as `SF9BW125` or a list of rates, depending on firmware.
    #[serde(default)]
    pub datarate: Option<Value>,
    #[serde(default)]
    pub data: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChallengeWitness {
    pub gateway: String,
    pub timestamp: i64,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub is_valid: Option<bool>,
    #[serde(default)]
    pub packet_hash: Option<String>,
    #[serde(default)]
    pub signal: Option<i64>,
    #[serde(default)]
    pub snr: Option<f64>,
    #[serde(default)]
    pub frequency: Option<f64>,
    #[serde(default)]
    pub channel: Option<i64>,
    #[serde(default)]
    pub datarate: Option<String>,
}
