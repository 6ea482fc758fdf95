//! Response records for the Helium explorer API.
//!
//! Single objects arrive wrapped as `{"data": {...}}` ([`Response`]) and lists as
//! `{"data": [...], "cursor": "..."}` ([`Page`]). Each record below follows one
//! documented schema and shares no fields with the others.

mod account;
mod block;
mod city;
mod common;
mod hotspot;
mod location;
mod oracle;
mod stats;
mod transaction;
mod validator;

pub use account::{Account, AccountStats, BalancePoint, Oui, Subnet};
pub use block::{Block, BlockStats, Height};
pub use city::City;
pub use common::{
    ActivityCounts, Geocode, Meta, Page, PeriodStats, Response, RewardEntry, RewardSummary,
    TimingStats,
};
pub use hotspot::{Hotspot, HotspotStatus, Witness, WitnessInfo};
pub use location::Location;
pub use oracle::{OracleActivity, OraclePrice, OraclePriceStats};
pub use stats::{ChallengeCounts, Counts, FeeTotals, StateChannelCounts, Stats, TokenSupply};
pub use transaction::{
    Challenge, ChallengePath, ChallengeReceipt, ChallengeWitness, Election, PendingTransaction,
    SubmitTransaction, SubmittedTransaction, Transaction,
};
pub use validator::{
    Penalty, StakeBucket, Validator, ValidatorActivity, ValidatorStats, ValidatorStatus,
};
