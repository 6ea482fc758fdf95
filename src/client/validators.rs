//! `/validators` endpoints.

use serde::de::DeserializeOwned;

use super::{HeliumClient, Result};
use crate::params::{
    ActivityCountParams, CursorParams, QueryParams, SearchParams, TimeRangeParams, require_id,
};
use crate::types::{
    ActivityCounts, Page, Response, RewardEntry, RewardSummary, Validator, ValidatorActivity,
    ValidatorStats,
};

/// Validator queries, obtained from [`HeliumClient::validators`].
#[derive(Clone, Copy, Debug)]
pub struct Validators<'a> {
    pub(super) client: &'a HeliumClient,
}

impl Validators<'_> {
    pub async fn list(&self, params: &CursorParams) -> Result<Page<Validator>> {
        self.client.get_json("/validators", params).await
    }

    pub async fn get(&self, address: &str) -> Result<Response<Validator>> {
        require_id("address", address)?;
        self.client
            .get_json(&format!("/validators/{address}"), &())
            .await
    }

    /// Validators with exactly this animal name. Names are not unique.
    pub async fn by_name(&self, name: &str) -> Result<Page<Validator>> {
        require_id("name", name)?;
        self.client
            .get_json(&format!("/validators/name/{name}"), &())
            .await
    }

    pub async fn search(&self, params: &SearchParams) -> Result<Page<Validator>> {
        self.client.get_json("/validators/name", params).await
    }

    /// Heartbeats and other transactions involving the validator.
    pub async fn activity(
        &self,
        address: &str,
        params: &CursorParams,
    ) -> Result<Page<ValidatorActivity>> {
        self.sub(address, "activity", params).await
    }

    pub async fn activity_count(
        &self,
        address: &str,
        params: &ActivityCountParams,
    ) -> Result<Response<ActivityCounts>> {
        self.sub(address, "activity/count", params).await
    }

    /// Stake totals by status across all validators.
    pub async fn stats(&self) -> Result<Response<ValidatorStats>> {
        self.client.get_json("/validators/stats", &()).await
    }

    /// Validators in the current consensus group.
    pub async fn elected(&self) -> Result<Page<Validator>> {
        self.client.get_json("/validators/elected", &()).await
    }

    /// Consensus group members as of the given block.
    pub async fn elected_at_height(&self, height: u64) -> Result<Page<Validator>> {
        self.client
            .get_json(&format!("/validators/elected/{height}"), &())
            .await
    }

    /// Consensus group members chosen by the election transaction `hash`.
    pub async fn elected_at_hash(&self, hash: &str) -> Result<Page<Validator>> {
        require_id("hash", hash)?;
        self.client
            .get_json(&format!("/validators/elected/hash/{hash}"), &())
            .await
    }

    pub async fn rewards(
        &self,
        address: &str,
        params: &TimeRangeParams,
    ) -> Result<Page<RewardEntry>> {
        self.sub(address, "rewards", params).await
    }

    pub async fn rewards_sum(
        &self,
        address: &str,
        params: &TimeRangeParams,
    ) -> Result<Response<RewardSummary>> {
        self.sub(address, "rewards/sum", params).await
    }

    async fn sub<T: DeserializeOwned>(
        &self,
        address: &str,
        resource: &str,
        params: &impl QueryParams,
    ) -> Result<T> {
        require_id("address", address)?;
        self.client
            .get_json(&format!("/validators/{address}/{resource}"), params)
            .await
    }
}
