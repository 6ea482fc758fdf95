//! `/accounts` endpoints.

use super::{HeliumClient, Result};
use crate::params::{ActivityCountParams, CursorParams, RichestParams, TimeRangeParams, require_id};
use crate::types::{
    Account, AccountStats, ActivityCounts, Challenge, Election, Hotspot, Oui, Page,
    PendingTransaction, Response, RewardEntry, RewardSummary, Transaction,
};

/// Account queries, obtained from [`HeliumClient::accounts`].
#[derive(Clone, Copy, Debug)]
pub struct Accounts<'a> {
    pub(super) client: &'a HeliumClient,
}

impl Accounts<'_> {
    /// All accounts, newest first.
    pub async fn list(&self, params: &CursorParams) -> Result<Page<Account>> {
        self.client.get_json("/accounts", params).await
    }

    /// Accounts with the largest HNT balances.
    pub async fn richest(&self, params: &RichestParams) -> Result<Page<Account>> {
        self.client.get_json("/accounts/rich", params).await
    }

    pub async fn get(&self, address: &str) -> Result<Response<Account>> {
        require_id("address", address)?;
        self.client
            .get_json(&format!("/accounts/{address}"), &())
            .await
    }

    /// Hotspots owned by the account.
    pub async fn hotspots(&self, address: &str, params: &CursorParams) -> Result<Page<Hotspot>> {
        self.paged(address, "hotspots", params).await
    }

    /// Organizationally unique identifiers owned by the account.
    pub async fn ouis(&self, address: &str, params: &CursorParams) -> Result<Page<Oui>> {
        self.paged(address, "ouis", params).await
    }

    pub async fn activity(
        &self,
        address: &str,
        params: &CursorParams,
    ) -> Result<Page<Transaction>> {
        self.paged(address, "activity", params).await
    }

    /// Number of transactions of each type involving the account.
    pub async fn activity_count(
        &self,
        address: &str,
        params: &ActivityCountParams,
    ) -> Result<Response<ActivityCounts>> {
        require_id("address", address)?;
        self.client
            .get_json(&format!("/accounts/{address}/activity/count"), params)
            .await
    }

    /// Consensus group elections the account's hotspots and validators took
    /// part in.
    pub async fn elections(&self, address: &str, params: &CursorParams) -> Result<Page<Election>> {
        self.paged(address, "elections", params).await
    }

    pub async fn challenges(
        &self,
        address: &str,
        params: &CursorParams,
    ) -> Result<Page<Challenge>> {
        self.paged(address, "challenges", params).await
    }

    pub async fn pending_transactions(
        &self,
        address: &str,
        params: &CursorParams,
    ) -> Result<Page<PendingTransaction>> {
        self.paged(address, "pending_transactions", params).await
    }

    /// Individual reward payments within the time window.
    pub async fn rewards(
        &self,
        address: &str,
        params: &TimeRangeParams,
    ) -> Result<Page<RewardEntry>> {
        require_id("address", address)?;
        self.client
            .get_json(&format!("/accounts/{address}/rewards"), params)
            .await
    }

    /// Aggregate of the rewards within the time window.
    pub async fn rewards_sum(
        &self,
        address: &str,
        params: &TimeRangeParams,
    ) -> Result<Response<RewardSummary>> {
        require_id("address", address)?;
        self.client
            .get_json(&format!("/accounts/{address}/rewards/sum"), params)
            .await
    }

    /// Balance history over the last day, week and month.
    pub async fn stats(&self, address: &str) -> Result<Response<AccountStats>> {
        require_id("address", address)?;
        self.client
            .get_json(&format!("/accounts/{address}/stats"), &())
            .await
    }

    async fn paged<T: serde::de::DeserializeOwned>(
        &self,
        address: &str,
        resource: &str,
        params: &CursorParams,
    ) -> Result<Page<T>> {
        require_id("address", address)?;
        self.client
            .get_json(&format!("/accounts/{address}/{resource}"), params)
            .await
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::super::Error;
    use super::super::mock::MockServer;
    use super::*;
    use crate::params::{ParamError, TimeBound};

    const ADDRESS: &str = "13GCcF7oGb6waFBzYDMmydmXx4vNDUZGX4LE3QHZxVqA7mb3M";

    #[tokio::test]
    async fn get_decodes_account() {
        let server = MockServer::start().await;
        server.ok(
            &format!("/accounts/{ADDRESS}"),
            r#"{"data":{"address":"13GCcF7oGb6waFBzYDMmydmXx4vNDUZGX4LE3QHZxVqA7mb3M",
                "balance":1250000000,"nonce":3,"dc_balance":0,"dc_nonce":0,
                "sec_balance":0,"sec_nonce":0,"block":771234}}"#,
        );

        let account = server.client().accounts().get(ADDRESS).await.unwrap().data;
        assert_eq!(account.address, ADDRESS);
        assert_eq!(account.balance, 1_250_000_000);
        assert_eq!(account.block, Some(771_234));
        assert_eq!(
            server.last_request().path,
            format!("/v1/accounts/{ADDRESS}")
        );
    }

    #[tokio::test]
    async fn list_passes_cursor_through() {
        let server = MockServer::start().await;
        server.ok(
            "/accounts",
            r#"{"data":[{"address":"a1","balance":1},{"address":"a2","balance":2}],"cursor":"next"}"#,
        );
        let client = server.client();
        let accounts = client.accounts();

        let page = accounts.list(&"xyz".into()).await.unwrap();
        assert_eq!(page.len(), 2);
        assert_eq!(page.next_cursor(), Some("next"));
        assert_eq!(server.last_request().query.as_deref(), Some("cursor=xyz"));

        let next = page.next_params().unwrap();
        accounts.list(&next).await.unwrap();
        assert_eq!(server.last_request().query.as_deref(), Some("cursor=next"));
    }

    #[tokio::test]
    async fn first_page_has_no_query_string() {
        let server = MockServer::start().await;
        server.ok("/accounts", r#"{"data":[]}"#);
        let page = server
            .client()
            .accounts()
            .list(&Default::default())
            .await
            .unwrap();
        assert!(page.is_empty());
        assert!(!page.has_more());
        assert_eq!(server.last_request().query, None);
    }

    #[tokio::test]
    async fn richest_sends_limit_and_rejects_out_of_range() {
        let server = MockServer::start().await;
        server.ok("/accounts/rich", r#"{"data":[{"address":"whale","balance":99}]}"#);
        let client = server.client();
        let accounts = client.accounts();

        let page = accounts
            .richest(&RichestParams::with_limit(10))
            .await
            .unwrap();
        assert_eq!(page.data[0].address, "whale");
        assert_eq!(server.last_request().query.as_deref(), Some("limit=10"));

        let err = accounts
            .richest(&RichestParams::with_limit(500))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Params(ParamError::LimitOutOfRange { limit: 500, .. })
        ));
        assert_eq!(server.requests().len(), 1);
    }

    #[tokio::test]
    async fn empty_address_is_rejected_before_io() {
        let server = MockServer::start().await;
        let err = server.client().accounts().get("").await.unwrap_err();
        assert!(matches!(
            err,
            Error::Params(ParamError::EmptyIdentifier("address"))
        ));
        assert!(server.requests().is_empty());
    }

    #[tokio::test]
    async fn address_cannot_escape_its_path_segment() {
        let server = MockServer::start().await;
        server.ok("/hotspots", r#"{"data":[]}"#);
        server.ok("/accounts/ABC", r#"{"data":{"address":"ABC","balance":1}}"#);
        let client = server.client();
        let accounts = client.accounts();

        let err = accounts
            .hotspots("..", &CursorParams::first())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Params(ParamError::InvalidIdentifier { name: "address", .. })
        ));

        let err = accounts.get("ABC?cursor=evil").await.unwrap_err();
        assert!(err.is_config(), "{err}");
        assert!(accounts.get("ABC#top").await.is_err());
        assert!(accounts.stats("../../stats").await.is_err());
        assert!(server.requests().is_empty());
    }

    #[tokio::test]
    async fn sub_resources_use_address_paths() {
        let server = MockServer::start().await;
        for resource in [
            "hotspots",
            "ouis",
            "activity",
            "elections",
            "challenges",
            "pending_transactions",
        ] {
            server.ok(&format!("/accounts/{ADDRESS}/{resource}"), r#"{"data":[]}"#);
        }
        let client = server.client();
        let accounts = client.accounts();
        let cursor = CursorParams::after("c1");

        accounts.hotspots(ADDRESS, &cursor).await.unwrap();
        accounts.ouis(ADDRESS, &cursor).await.unwrap();
        accounts.activity(ADDRESS, &cursor).await.unwrap();
        accounts.elections(ADDRESS, &cursor).await.unwrap();
        accounts.challenges(ADDRESS, &cursor).await.unwrap();
        accounts.pending_transactions(ADDRESS, &cursor).await.unwrap();

        let paths: Vec<_> = server
            .requests()
            .into_iter()
            .map(|r| {
                assert_eq!(r.query.as_deref(), Some("cursor=c1"));
                r.path
            })
            .collect();
        assert_eq!(
            paths,
            [
                "hotspots",
                "ouis",
                "activity",
                "elections",
                "challenges",
                "pending_transactions"
            ]
            .map(|r| format!("/v1/accounts/{ADDRESS}/{r}"))
        );
    }

    #[tokio::test]
    async fn activity_count_sends_filter_types() {
        let server = MockServer::start().await;
        server.ok(
            &format!("/accounts/{ADDRESS}/activity/count"),
            r#"{"data":{"payment_v1":3,"payment_v2":7}}"#,
        );
        let counts = server
            .client()
            .accounts()
            .activity_count(
                ADDRESS,
                &ActivityCountParams::of_types(["payment_v1", "payment_v2"]),
            )
            .await
            .unwrap()
            .data;
        assert_eq!(counts.total(), 10);
        assert_eq!(
            server.last_request().query_pairs(),
            vec![(
                "filter_types".to_string(),
                "payment_v1,payment_v2".to_string()
            )]
        );
    }

    #[tokio::test]
    async fn rewards_window_is_sent_as_query() {
        let server = MockServer::start().await;
        server.ok(
            &format!("/accounts/{ADDRESS}/rewards"),
            r#"{"data":[{"account":"13GC","amount":120000000,"block":771000,
                "gateway":"112abc","hash":"h1","timestamp":"2021-03-01T10:00:00.000000Z"}],
                "cursor":"more"}"#,
        );
        let min = Utc.with_ymd_and_hms(2021, 3, 1, 0, 0, 0).unwrap();
        let params = TimeRangeParams::between(min, TimeBound::relative("now"));

        let page = server
            .client()
            .accounts()
            .rewards(ADDRESS, &params)
            .await
            .unwrap();
        assert!(page.has_more());
        assert!((page.data[0].amount_hnt() - 1.2).abs() < 1e-9);
        assert_eq!(
            server.last_request().query_pairs(),
            vec![
                ("min_time".to_string(), "2021-03-01T00:00:00Z".to_string()),
                ("max_time".to_string(), "now".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn rewards_sum_carries_meta_window() {
        let server = MockServer::start().await;
        server.ok(
            &format!("/accounts/{ADDRESS}/rewards/sum"),
            r#"{"meta":{"min_time":"2021-02-01T00:00:00Z","max_time":"2021-03-01T00:00:00Z"},
                "data":{"sum":3500000000,"total":35.0,"avg":1.25,"max":2.0,"median":1.1,
                "min":0.5,"stddev":0.3}}"#,
        );
        let response = server
            .client()
            .accounts()
            .rewards_sum(ADDRESS, &TimeRangeParams::since(TimeBound::relative("-30 day")))
            .await
            .unwrap();
        assert_eq!(response.data.sum, 3_500_000_000);
        let meta = response.meta.unwrap();
        assert_eq!(
            meta.max_time,
            Utc.with_ymd_and_hms(2021, 3, 1, 0, 0, 0).unwrap()
        );
        assert_eq!(
            server.last_request().query.as_deref(),
            Some("min_time=-30+day")
        );
    }

    #[tokio::test]
    async fn stats_decodes_balance_history() {
        let server = MockServer::start().await;
        server.ok(
            &format!("/accounts/{ADDRESS}/stats"),
            r#"{"data":{"last_day":[{"timestamp":"2021-03-01T00:00:00Z","balance":100}],
                "last_week":[],"last_month":[]}}"#,
        );
        let stats = server
            .client()
            .accounts()
            .stats(ADDRESS)
            .await
            .unwrap()
            .into_inner();
        assert_eq!(stats.last_day.len(), 1);
        assert_eq!(stats.last_day[0].balance, 100);
    }
}
