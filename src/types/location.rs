use serde::{Deserialize, Serialize};

/// Geographic information for an H3 location index.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub location: String,
    #[serde(default)]
    pub city_id: Option<String>,
    #[serde(default)]
    pub long_city: Option<String>,
    #[serde(default)]
    pub long_country: Option<String>,
    #[serde(default)]
    pub long_state: Option<String>,
    #[serde(default)]
    pub long_street: Option<String>,
    #[serde(default)]
    pub short_city: Option<String>,
    #[serde(default)]
    pub short_country: Option<String>,
    #[serde(default)]
    pub short_state: Option<String>,
    #[serde(default)]
    pub short_street: Option<String>,
}
