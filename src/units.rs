//! Conversions between on-chain integer amounts and human units.
//!
//! HNT balances, stakes and rewards are reported in bones; oracle prices are
//! USD scaled by the same factor.

use crate::types::{Account, OraclePrice, RewardEntry};

/// 1 HNT = 10^8 bones.
pub const BONES_PER_HNT: u64 = 100_000_000;

/// Oracle prices are USD × 10^8.
pub const ORACLE_PRICE_SCALE: u64 = 100_000_000;

/// Approximate value in HNT as `f64` (useful for display).
pub fn bones_to_hnt(bones: u64) -> f64 {
    bones as f64 / BONES_PER_HNT as f64
}

/// Whole and fractional HNT to bones, rounded to the nearest bone.
/// Negative and non-finite inputs saturate to zero.
pub fn hnt_to_bones(hnt: f64) -> u64 {
    if !hnt.is_finite() || hnt <= 0.0 {
        return 0;
    }
    (hnt * BONES_PER_HNT as f64).round() as u64
}

impl Account {
    pub fn balance_hnt(&self) -> f64 {
        bones_to_hnt(self.balance)
    }
}

impl OraclePrice {
    /// Price of one HNT in USD.
    pub fn usd(&self) -> f64 {
        self.price as f64 / ORACLE_PRICE_SCALE as f64
    }
}

impl RewardEntry {
    pub fn amount_hnt(&self) -> f64 {
        bones_to_hnt(self.amount)
    }
}
