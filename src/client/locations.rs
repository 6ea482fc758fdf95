//! `/locations` endpoint.

use super::{HeliumClient, Result};
use crate::params::require_id;
use crate::types::{Location, Response};

/// Geocoding of H3 cells, obtained from [`HeliumClient::locations`].
#[derive(Clone, Copy, Debug)]
pub struct Locations<'a> {
    pub(super) client: &'a HeliumClient,
}

impl Locations<'_> {
    /// Reverse-geocoded address of an H3 index (resolution 12).
    pub async fn get(&self, h3: &str) -> Result<Response<Location>> {
        require_id("location", h3)?;
        self.client
            .get_json(&format!("/locations/{h3}"), &())
            .await
    }
}
