//! `/stats` endpoints.

use super::{HeliumClient, Result};
use crate::types::{Response, Stats, TokenSupply};

/// Network-wide statistics, obtained from [`HeliumClient::stats`].
#[derive(Clone, Copy, Debug)]
pub struct NetworkStats<'a> {
    pub(super) client: &'a HeliumClient,
}

impl NetworkStats<'_> {
    pub async fn get(&self) -> Result<Response<Stats>> {
        self.client.get_json("/stats", &()).await
    }

    /// Circulating HNT supply.
    pub async fn token_supply(&self) -> Result<Response<TokenSupply>> {
        self.client.get_json("/stats/token_supply", &()).await
    }
}
