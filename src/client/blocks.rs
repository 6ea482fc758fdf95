//! `/blocks` endpoints.

use super::{HeliumClient, Result};
use crate::params::{CursorParams, require_id};
use crate::types::{Block, BlockStats, Height, Page, Response, Transaction};

/// Block queries, obtained from [`HeliumClient::blocks`].
#[derive(Clone, Copy, Debug)]
pub struct Blocks<'a> {
    pub(super) client: &'a HeliumClient,
}

impl Blocks<'_> {
    /// Blocks in descending height order.
    pub async fn list(&self, params: &CursorParams) -> Result<Page<Block>> {
        self.client.get_json("/blocks", params).await
    }

    /// Current chain height.
    pub async fn height(&self) -> Result<Response<Height>> {
        self.client.get_json("/blocks/height", &()).await
    }

    /// Block time averages over the last hour, day, week and month.
    pub async fn stats(&self) -> Result<Response<BlockStats>> {
        self.client.get_json("/blocks/stats", &()).await
    }

    pub async fn at_height(&self, height: u64) -> Result<Response<Block>> {
        self.client
            .get_json(&format!("/blocks/{height}"), &())
            .await
    }

    pub async fn by_hash(&self, hash: &str) -> Result<Response<Block>> {
        require_id("hash", hash)?;
        self.client
            .get_json(&format!("/blocks/hash/{hash}"), &())
            .await
    }

    pub async fn transactions(
        &self,
        height: u64,
        params: &CursorParams,
    ) -> Result<Page<Transaction>> {
        self.client
            .get_json(&format!("/blocks/{height}/transactions"), params)
            .await
    }

    pub async fn transactions_by_hash(
        &self,
        hash: &str,
        params: &CursorParams,
    ) -> Result<Page<Transaction>> {
        require_id("hash", hash)?;
        self.client
            .get_json(&format!("/blocks/hash/{hash}/transactions"), params)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::super::mock::MockServer;
    use super::*;

    const BLOCK: &str = r#"{"data":{"height":771234,"hash":"La6PuV80Ps9qTP0339Pwm64q3_deMTkv6JOo1251EJI",
        "prev_hash":"1AJPPqxOuXh9Qg6Rx3iy5IiO4TfPwcGm_hL5uVNmkzk","time":1615830000,
        "transaction_count":12,"snapshot_hash":""}}"#;

    #[tokio::test]
    async fn height_hits_height_endpoint() {
        let server = MockServer::start().await;
        server.ok("/blocks/height", r#"{"data":{"height":771234}}"#);
        let height = server.client().blocks().height().await.unwrap();
        assert_eq!(height.data.height, 771_234);

        let request = server.last_request();
        assert_eq!(request.path, "/v1/blocks/height");
        assert_eq!(request.query, None);
    }

    #[tokio::test]
    async fn block_by_height_and_hash() {
        let server = MockServer::start().await;
        server.ok("/blocks/771234", BLOCK);
        server.ok(
            "/blocks/hash/La6PuV80Ps9qTP0339Pwm64q3_deMTkv6JOo1251EJI",
            BLOCK,
        );
        let client = server.client();
        let blocks = client.blocks();

        let by_height = blocks.at_height(771_234).await.unwrap().data;
        let by_hash = blocks
            .by_hash("La6PuV80Ps9qTP0339Pwm64q3_deMTkv6JOo1251EJI")
            .await
            .unwrap()
            .data;
        assert_eq!(by_height, by_hash);
        assert_eq!(by_height.transaction_count, 12);
        assert!(blocks.by_hash("").await.unwrap_err().is_config());
        assert_eq!(server.requests().len(), 2);
    }

    #[tokio::test]
    async fn list_and_transactions_pass_cursor() {
        let server = MockServer::start().await;
        server.ok(
            "/blocks",
            r#"{"data":[{"height":2,"hash":"b","prev_hash":"a","time":2,"transaction_count":0}],
                "cursor":"eyJiZWZvcmUiOjJ9"}"#,
        );
        server.ok(
            "/blocks/2/transactions",
            r#"{"data":[{"type":"poc_request_v1","hash":"t1","height":2,"time":2,
                "challenger":"11abc","fee":0}]}"#,
        );
        let client = server.client();
        let blocks = client.blocks();

        let page = blocks.list(&CursorParams::after("xyz")).await.unwrap();
        assert_eq!(server.last_request().query.as_deref(), Some("cursor=xyz"));
        assert_eq!(page.next_cursor(), Some("eyJiZWZvcmUiOjJ9"));

        let txns = blocks
            .transactions(page.data[0].height, &page.next_params().unwrap())
            .await
            .unwrap();
        assert_eq!(txns.data[0].kind, "poc_request_v1");
        assert_eq!(txns.data[0].field("challenger").unwrap(), "11abc");

        let request = server.last_request();
        assert_eq!(request.path, "/v1/blocks/2/transactions");
        assert_eq!(request.query.as_deref(), Some("cursor=eyJiZWZvcmUiOjJ9"));
    }

    #[tokio::test]
    async fn transactions_by_hash_path() {
        let server = MockServer::start().await;
        server.ok("/blocks/hash/abc/transactions", r#"{"data":[]}"#);
        server
            .client()
            .blocks()
            .transactions_by_hash("abc", &CursorParams::first())
            .await
            .unwrap();
        assert_eq!(
            server.last_request().path,
            "/v1/blocks/hash/abc/transactions"
        );
    }

    #[tokio::test]
    async fn stats_decodes_periods() {
        let server = MockServer::start().await;
        server.ok(
            "/blocks/stats",
            r#"{"data":{"last_hour":{"avg":59.2,"stddev":4.1},
                "last_day":{"avg":60.1,"stddev":5.0},
                "last_week":{"avg":61.0,"stddev":8.7},
                "last_month":{"avg":60.4,"stddev":9.9}}}"#,
        );
        let stats = server.client().blocks().stats().await.unwrap().data;
        assert!((stats.last_day.unwrap().avg - 60.1).abs() < 1e-9);
        assert!(stats.last_month.is_some());
    }
}
