//! `/oracle/prices` endpoints.

use super::{HeliumClient, Result};
use crate::params::{CursorParams, TimeRangeParams};
use crate::types::{OracleActivity, OraclePrice, OraclePriceStats, Page, Response};

/// HNT oracle prices, obtained from [`HeliumClient::oracle`].
#[derive(Clone, Copy, Debug)]
pub struct Oracle<'a> {
    pub(super) client: &'a HeliumClient,
}

impl Oracle<'_> {
    /// Price history, newest first.
    pub async fn list(&self, params: &CursorParams) -> Result<Page<OraclePrice>> {
        self.client.get_json("/oracle/prices", params).await
    }

    pub async fn current(&self) -> Result<Response<OraclePrice>> {
        self.client.get_json("/oracle/prices/current", &()).await
    }

    /// Price statistics over a time window.
    pub async fn stats(&self, params: &TimeRangeParams) -> Result<Response<OraclePriceStats>> {
        self.client.get_json("/oracle/prices/stats", params).await
    }

    /// The price in effect at `block`.
    pub async fn at_block(&self, block: u64) -> Result<Response<OraclePrice>> {
        self.client
            .get_json(&format!("/oracle/prices/{block}"), &())
            .await
    }

    /// Price reports submitted by the oracles.
    pub async fn activity(&self, params: &CursorParams) -> Result<Page<OracleActivity>> {
        self.client
            .get_json("/oracle/prices/activity", params)
            .await
    }
}
