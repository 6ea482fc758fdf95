use serde::{Deserialize, Serialize};

/// A city with at least one hotspot, as returned by city search.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    /// Opaque identifier used by the city hotspots endpoint.
    pub city_id: String,
    #[serde(default)]
    pub hotspot_count: u64,
    #[serde(default)]
    pub online_count: Option<u64>,
    #[serde(default)]
    pub offline_count: Option<u64>,
    #[serde(default)]
    pub long_city: Option<String>,
    #[serde(default)]
    pub long_country: Option<String>,
    #[serde(default)]
    pub long_state: Option<String>,
    #[serde(default)]
    pub short_city: Option<String>,
    #[serde(default)]
    pub short_country: Option<String>,
    #[serde(default)]
    pub short_state: Option<String>,
}
