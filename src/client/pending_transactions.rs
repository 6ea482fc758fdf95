//! `/pending_transactions` endpoints.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use super::{HeliumClient, Result};
use crate::params::require_id;
use crate::types::{Page, PendingTransaction, Response, SubmitTransaction, SubmittedTransaction};

/// Transactions awaiting inclusion in a block, obtained from
/// [`HeliumClient::pending_transactions`].
#[derive(Clone, Copy, Debug)]
pub struct PendingTransactions<'a> {
    pub(super) client: &'a HeliumClient,
}

impl PendingTransactions<'_> {
    /// Every submission of the transaction with this hash, with its status
    /// (`pending`, `cleared` or `failed`).
    pub async fn get(&self, hash: &str) -> Result<Page<PendingTransaction>> {
        require_id("hash", hash)?;
        self.client
            .get_json(&format!("/pending_transactions/{hash}"), &())
            .await
    }

    /// Submit a signed, serialized transaction.
    ///
    /// The bytes are sent base64-encoded; the API answers with the hash under
    /// which the submission can be tracked with [`get`](Self::get).
    pub async fn submit(&self, txn: &[u8]) -> Result<Response<SubmittedTransaction>> {
        let body = SubmitTransaction {
            txn: STANDARD.encode(txn),
        };
        self.client.post_json("/pending_transactions", &body).await
    }
}
