//! `/transactions` endpoint.

use super::{HeliumClient, Result};
use crate::params::require_id;
use crate::types::{Response, Transaction};

/// Confirmed transactions, obtained from [`HeliumClient::transactions`].
#[derive(Clone, Copy, Debug)]
pub struct Transactions<'a> {
    pub(super) client: &'a HeliumClient,
}

impl Transactions<'_> {
    pub async fn get(&self, hash: &str) -> Result<Response<Transaction>> {
        require_id("hash", hash)?;
        self.client
            .get_json(&format!("/transactions/{hash}"), &())
            .await
    }
}
