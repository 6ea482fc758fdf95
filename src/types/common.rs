//! Envelopes and small records shared by several endpoints.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::params::CursorParams;

/// One page of a list endpoint.
///
/// The API returns at most one page per request. A non-empty `cursor` means
/// more data is available; pass it back verbatim to fetch the next page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

impl<T> Page<T> {
    /// Returns `true` if the server signalled that more data is available.
    pub fn has_more(&self) -> bool {
        self.cursor.as_deref().is_some_and(|c| !c.is_empty())
    }

    /// The cursor to resume from, if any.
    pub fn next_cursor(&self) -> Option<&str> {
        self.cursor.as_deref().filter(|c| !c.is_empty())
    }

    /// Parameters for fetching the following page, or `None` on the last page.
    pub fn next_params(&self) -> Option<CursorParams> {
        self.next_cursor().map(CursorParams::after)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

/// Single-object response: `{"data": ..., "meta": ...}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Response<T> {
    pub data: T,
    /// Present on aggregate endpoints that report the time window they covered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}

impl<T> Response<T> {
    pub fn into_inner(self) -> T {
        self.data
    }
}

/// Effective time window of an aggregate query.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Meta {
    pub min_time: DateTime<Utc>,
    pub max_time: DateTime<Utc>,
}

/// Reverse-geocoded address of an asserted location.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Geocode {
    #[serde(default)]
    pub short_street: Option<String>,
    #[serde(default)]
    pub short_state: Option<String>,
    #[serde(default)]
    pub short_country: Option<String>,
    #[serde(default)]
    pub short_city: Option<String>,
    #[serde(default)]
    pub long_street: Option<String>,
    #[serde(default)]
    pub long_state: Option<String>,
    #[serde(default)]
    pub long_country: Option<String>,
    #[serde(default)]
    pub long_city: Option<String>,
    #[serde(default)]
    pub city_id: Option<String>,
}

/// Per-transaction-type counters, keyed by type name (e.g. `assert_location_v1`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivityCounts(pub BTreeMap<String, u64>);

impl ActivityCounts {
    /// Count for one transaction type; types the server omitted count as zero.
    pub fn get(&self, kind: &str) -> u64 {
        self.0.get(kind).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.0.values().sum()
    }
}

/// A single reward paid to an account, per block and gateway.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RewardEntry {
    pub account: String,
    /// Amount in bones.
    pub amount: u64,
    pub block: u64,
    #[serde(default)]
    pub gateway: Option<String>,
    pub hash: String,
    pub timestamp: DateTime<Utc>,
}

/// Aggregated rewards over a time window. Amounts are in bones except `total`,
/// which the API reports in HNT.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RewardSummary {
    #[serde(default)]
    pub sum: i64,
    #[serde(default)]
    pub total: f64,
    #[serde(default)]
    pub avg: f64,
    #[serde(default)]
    pub max: f64,
    #[serde(default)]
    pub median: f64,
    #[serde(default)]
    pub min: f64,
    #[serde(default)]
    pub stddev: f64,
}

/// Mean and standard deviation, in seconds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TimingStats {
    pub avg: f64,
    pub stddev: f64,
}

/// A statistic reported over the usual rolling windows.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PeriodStats<T> {
    #[serde(default = "none", skip_serializing_if = "Option::is_none")]
    pub last_hour: Option<T>,
    #[serde(default = "none", skip_serializing_if = "Option::is_none")]
    pub last_day: Option<T>,
    #[serde(default = "none", skip_serializing_if = "Option::is_none")]
    pub last_week: Option<T>,
    #[serde(default = "none", skip_serializing_if = "Option::is_none")]
    pub last_month: Option<T>,
}

fn none<T>() -> Option<T> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_with_cursor_has_more() {
        let page: Page<u32> = serde_json::from_str(r#"{"data":[1,2],"cursor":"xyz"}"#).unwrap();
        assert!(page.has_more());
        assert_eq!(page.next_cursor(), Some("xyz"));
        assert_eq!(page.next_params(), Some(CursorParams::after("xyz")));
        assert_eq!(page.len(), 2);
    }

    #[test]
    fn page_without_cursor_is_last() {
        let page: Page<u32> = serde_json::from_str(r#"{"data":[]}"#).unwrap();
        assert!(!page.has_more());
        assert!(page.next_params().is_none());
        assert!(page.is_empty());
    }

    #[test]
    fn empty_cursor_means_no_more_data() {
        let page: Page<u32> = serde_json::from_str(r#"{"data":[7],"cursor":""}"#).unwrap();
        assert!(!page.has_more());
        assert_eq!(page.next_cursor(), None);
    }

    #[test]
    fn response_reads_meta_window() {
        let json = r#"{
            "meta": {"min_time": "2021-03-01T00:00:00Z", "max_time": "2021-03-02T00:00:00Z"},
            "data": {"sum": 12345, "total": 0.00012345}
        }"#;
        let resp: Response<RewardSummary> = serde_json::from_str(json).unwrap();
        let meta = resp.meta.clone().unwrap();
        assert!(meta.min_time < meta.max_time);
        assert_eq!(resp.into_inner().sum, 12345);
    }

    #[test]
    fn activity_counts_default_to_zero() {
        let counts: ActivityCounts =
            serde_json::from_str(r#"{"add_gateway_v1": 1, "assert_location_v1": 2}"#).unwrap();
        assert_eq!(counts.get("assert_location_v1"), 2);
        assert_eq!(counts.get("payment_v2"), 0);
        assert_eq!(counts.total(), 3);
    }

    #[test]
    fn period_stats_tolerate_missing_windows() {
        let stats: PeriodStats<TimingStats> =
            serde_json::from_str(r#"{"last_day": {"avg": 60.5, "stddev": 3.2}}"#).unwrap();
        assert!(stats.last_hour.is_none());
        assert_eq!(stats.last_day.unwrap().avg, 60.5);
    }
}
