//! `/cities` endpoints.

use super::{HeliumClient, Result};
use crate::params::{CursorParams, SearchParams, require_id};
use crate::types::{City, Hotspot, Page};

/// City queries, obtained from [`HeliumClient::cities`].
#[derive(Clone, Copy, Debug)]
pub struct Cities<'a> {
    pub(super) client: &'a HeliumClient,
}

impl Cities<'_> {
    /// Cities whose name matches the search term, ordered by hotspot count.
    pub async fn search(&self, params: &SearchParams) -> Result<Page<City>> {
        self.client.get_json("/cities", params).await
    }

    pub async fn hotspots(&self, city_id: &str, params: &CursorParams) -> Result<Page<Hotspot>> {
        require_id("city_id", city_id)?;
        self.client
            .get_json(&format!("/cities/{city_id}/hotspots"), params)
            .await
    }
}
