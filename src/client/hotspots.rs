//! `/hotspots` endpoints.

use serde::de::DeserializeOwned;

use super::{HeliumClient, Result};
use crate::params::{
    ActivityCountParams, BoxParams, CursorParams, DistanceParams, QueryParams, SearchParams,
    TimeRangeParams, require_id,
};
use crate::types::{
    ActivityCounts, Challenge, Election, Hotspot, Page, Response, RewardEntry, RewardSummary,
    Transaction, Witness,
};

/// Hotspot queries, obtained from [`HeliumClient::hotspots`].
#[derive(Clone, Copy, Debug)]
pub struct Hotspots<'a> {
    pub(super) client: &'a HeliumClient,
}

impl Hotspots<'_> {
    pub async fn list(&self, params: &CursorParams) -> Result<Page<Hotspot>> {
        self.client.get_json("/hotspots", params).await
    }

    pub async fn get(&self, address: &str) -> Result<Response<Hotspot>> {
        require_id("address", address)?;
        self.client
            .get_json(&format!("/hotspots/{address}"), &())
            .await
    }

    /// Hotspots with exactly this three-word name, e.g. `fancy-lemon-owl`.
    /// Names are not unique.
    pub async fn by_name(&self, name: &str) -> Result<Page<Hotspot>> {
        require_id("name", name)?;
        self.client
            .get_json(&format!("/hotspots/name/{name}"), &())
            .await
    }

    /// Fuzzy name search. The term must not be empty.
    pub async fn search(&self, params: &SearchParams) -> Result<Page<Hotspot>> {
        self.client.get_json("/hotspots/name", params).await
    }

    /// Hotspots within `distance` meters of a point.
    pub async fn within_distance(&self, params: &DistanceParams) -> Result<Page<Hotspot>> {
        self.client
            .get_json("/hotspots/location/distance", params)
            .await
    }

    /// Hotspots inside a geographic box.
    pub async fn within_box(&self, params: &BoxParams) -> Result<Page<Hotspot>> {
        self.client.get_json("/hotspots/location/box", params).await
    }

    /// Hotspots asserted in an H3 cell.
    pub async fn by_hex(&self, h3: &str, params: &CursorParams) -> Result<Page<Hotspot>> {
        require_id("h3", h3)?;
        self.client
            .get_json(&format!("/hotspots/hex/{h3}"), params)
            .await
    }

    pub async fn activity(
        &self,
        address: &str,
        params: &CursorParams,
    ) -> Result<Page<Transaction>> {
        self.sub(address, "activity", params).await
    }

    pub async fn activity_count(
        &self,
        address: &str,
        params: &ActivityCountParams,
    ) -> Result<Response<ActivityCounts>> {
        self.sub(address, "activity/count", params).await
    }

    pub async fn elections(&self, address: &str, params: &CursorParams) -> Result<Page<Election>> {
        self.sub(address, "elections", params).await
    }

    /// Proof-of-coverage challenges the hotspot issued, received or
    /// witnessed.
    pub async fn challenges(
        &self,
        address: &str,
        params: &CursorParams,
    ) -> Result<Page<Challenge>> {
        self.sub(address, "challenges", params).await
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

    /// Hotspots that recently witnessed this one's beacons.
    pub async fn witnesses(&self, address: &str, params: &CursorParams) -> Result<Page<Witness>> {
        self.sub(address, "witnesses", params).await
    }

    /// Hotspots in the current consensus group.
    pub async fn elected(&self) -> Result<Page<Hotspot>> {
        self.client.get_json("/hotspots/elected", &()).await
    }

    async fn sub<T: DeserializeOwned>(
        &self,
        address: &str,
        resource: &str,
        params: &impl QueryParams,
    ) -> Result<T> {
        require_id("address", address)?;
        self.client
            .get_json(&format!("/hotspots/{address}/{resource}"), params)
            .await
    }
}
