//! Parameter objects for paginated, search and time-windowed endpoints.
//!
//! Every operation that takes query parameters takes exactly one of these
//! structs. They are validated before any request is issued, and rendered as
//! `key=value` query pairs in a fixed order.

use chrono::{DateTime, SecondsFormat, Utc};

/// Upper bound the API accepts for `/accounts/rich`.
pub const MAX_RICHEST_LIMIT: u32 = 100;

/// A parameter object was rejected before any network call was made.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParamError {
    #[error("search term must be 1 character or more, 3 is recommended")]
    EmptySearchTerm,
    #[error("limit must be between 1 and {max}, got {limit}")]
    LimitOutOfRange { limit: u32, max: u32 },
    #[error("{name} must be a finite value within [{min}, {max}], got {value}")]
    CoordinateOutOfRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("min_time {min} is after max_time {max}")]
    InvertedTimeRange {
        min: DateTime<Utc>,
        max: DateTime<Utc>,
    },
    #[error("{0} must not be empty")]
    EmptyIdentifier(&'static str),
    #[error("{name} {value:?} is not a single path segment")]
    InvalidIdentifier { name: &'static str, value: String },
}

/// Query parameters of one API operation.
pub trait QueryParams {
    /// Reject values the API would refuse or misinterpret.
    fn validate(&self) -> Result<(), ParamError> {
        Ok(())
    }

    /// The `key=value` pairs to append to the URL. Keys are unique.
    fn query_pairs(&self) -> Vec<(&'static str, String)>;
}

impl QueryParams for () {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }
}

/// Reject a path identifier (address, hash, city id, ...) that would not land
/// as exactly one path segment.
///
/// An empty identifier turns `/accounts/{address}` into the account list
/// endpoint; `..`, separators, `?` and `#` are resolved by URL parsing and
/// would send the call to another endpoint or add query parameters. `%` is
/// refused as well since `%2e%2e` also parses as `..`.
pub(crate) fn require_id(what: &'static str, value: &str) -> Result<(), ParamError> {
    if value.is_empty() {
        return Err(ParamError::EmptyIdentifier(what));
    }
    if value == "." || value == ".." || value.contains(['/', '\\', '?', '#', '%']) {
        return Err(ParamError::InvalidIdentifier {
            name: what,
            value: value.to_string(),
        });
    }
    Ok(())
}

fn push_cursor(pairs: &mut Vec<(&'static str, String)>, cursor: &Option<String>) {
    if let Some(cursor) = cursor.as_deref().filter(|c| !c.is_empty()) {
        pairs.push(("cursor", cursor.to_string()));
    }
}

fn check_coordinate(name: &'static str, value: f64, limit: f64) -> Result<(), ParamError> {
    if value.is_finite() && (-limit..=limit).contains(&value) {
        return Ok(());
    }
    Err(ParamError::CoordinateOutOfRange {
        name,
        value,
        min: -limit,
        max: limit,
    })
}

// ---------------------------------------------------------------------------
// Pagination
// ---------------------------------------------------------------------------

/// Cursor for list endpoints. The default fetches the first page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CursorParams {
    pub cursor: Option<String>,
}

impl CursorParams {
    pub fn first() -> Self {
        Self::default()
    }

    /// Resume after a cursor returned by a previous page.
    pub fn after(cursor: impl Into<String>) -> Self {
        Self {
            cursor: Some(cursor.into()),
        }
    }
}

impl From<&str> for CursorParams {
    fn from(value: &str) -> Self {
        Self::after(value)
    }
}

impl From<String> for CursorParams {
    fn from(value: String) -> Self {
        Self::after(value)
    }
}

impl From<Option<String>> for CursorParams {
    fn from(cursor: Option<String>) -> Self {
        Self { cursor }
    }
}

impl QueryParams for CursorParams {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push_cursor(&mut pairs, &self.cursor);
        pairs
    }
}

/// Limit for the richest-accounts endpoint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RichestParams {
    pub limit: Option<u32>,
}

impl RichestParams {
    pub fn with_limit(limit: u32) -> Self {
        Self { limit: Some(limit) }
    }
}

impl QueryParams for RichestParams {
    fn validate(&self) -> Result<(), ParamError> {
        match self.limit {
            Some(limit) if limit == 0 || limit > MAX_RICHEST_LIMIT => {
                Err(ParamError::LimitOutOfRange {
                    limit,
                    max: MAX_RICHEST_LIMIT,
                })
            }
            _ => Ok(()),
        }
    }

    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        self.limit
            .map(|limit| vec![("limit", limit.to_string())])
            .unwrap_or_default()
    }
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// Free-text search over hotspot, validator or city names.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchParams {
    pub term: String,
    pub cursor: Option<String>,
}

impl SearchParams {
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            cursor: None,
        }
    }

    pub fn with_cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }
}

impl QueryParams for SearchParams {
    fn validate(&self) -> Result<(), ParamError> {
        if self.term.is_empty() {
            return Err(ParamError::EmptySearchTerm);
        }
        Ok(())
    }

    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("search", self.term.clone())];
        push_cursor(&mut pairs, &self.cursor);
        pairs
    }
}

// ---------------------------------------------------------------------------
// Geography
// ---------------------------------------------------------------------------

/// Hotspots within `distance` meters of a point.
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceParams {
    pub lat: f64,
    pub lon: f64,
    /// Radius in meters.
    pub distance: u32,
    pub cursor: Option<String>,
}

impl DistanceParams {
    pub fn new(lat: f64, lon: f64, distance: u32) -> Self {
        Self {
            lat,
            lon,
            distance,
            cursor: None,
        }
    }

    pub fn with_cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }
}

impl QueryParams for DistanceParams {
    fn validate(&self) -> Result<(), ParamError> {
        check_coordinate("lat", self.lat, 90.0)?;
        check_coordinate("lon", self.lon, 180.0)
    }

    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("lat", self.lat.to_string()),
            ("lon", self.lon.to_string()),
            ("distance", self.distance.to_string()),
        ];
        push_cursor(&mut pairs, &self.cursor);
        pairs
    }
}

/// Hotspots inside a box given by its south-west and north-east corners.
#[derive(Clone, Debug, PartialEq)]
pub struct BoxParams {
    pub sw_lat: f64,
    pub sw_lon: f64,
    pub ne_lat: f64,
    pub ne_lon: f64,
    pub cursor: Option<String>,
}

impl BoxParams {
    pub fn new(sw: (f64, f64), ne: (f64, f64)) -> Self {
        Self {
            sw_lat: sw.0,
            sw_lon: sw.1,
            ne_lat: ne.0,
            ne_lon: ne.1,
            cursor: None,
        }
    }

    pub fn with_cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }
}

impl QueryParams for BoxParams {
    fn validate(&self) -> Result<(), ParamError> {
        check_coordinate("swlat", self.sw_lat, 90.0)?;
        check_coordinate("swlon", self.sw_lon, 180.0)?;
        check_coordinate("nelat", self.ne_lat, 90.0)?;
        check_coordinate("nelon", self.ne_lon, 180.0)
    }

    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("swlat", self.sw_lat.to_string()),
            ("swlon", self.sw_lon.to_string()),
            ("nelat", self.ne_lat.to_string()),
            ("nelon", self.ne_lon.to_string()),
        ];
        push_cursor(&mut pairs, &self.cursor);
        pairs
    }
}

// ---------------------------------------------------------------------------
// Time windows
// ---------------------------------------------------------------------------

/// One end of a time window.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TimeBound {
    /// An absolute instant, sent as RFC 3339.
    At(DateTime<Utc>),
    /// A server-side relative expression such as `-30 day`.
    Relative(String),
}

impl TimeBound {
    pub fn relative(expr: impl Into<String>) -> Self {
        Self::Relative(expr.into())
    }

    fn render(&self) -> String {
        match self {
            Self::At(at) => at.to_rfc3339_opts(SecondsFormat::Secs, true),
            Self::Relative(expr) => expr.clone(),
        }
    }
}

impl From<DateTime<Utc>> for TimeBound {
    fn from(value: DateTime<Utc>) -> Self {
        Self::At(value)
    }
}

/// Time window for reward and price aggregates. Unset bounds use the server
/// defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TimeRangeParams {
    pub min_time: Option<TimeBound>,
    pub max_time: Option<TimeBound>,
    pub cursor: Option<String>,
}

impl TimeRangeParams {
    pub fn between(min_time: impl Into<TimeBound>, max_time: impl Into<TimeBound>) -> Self {
        Self {
            min_time: Some(min_time.into()),
            max_time: Some(max_time.into()),
            cursor: None,
        }
    }

    pub fn since(min_time: impl Into<TimeBound>) -> Self {
        Self {
            min_time: Some(min_time.into()),
            ..Self::default()
        }
    }

    pub fn with_cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }
}

impl QueryParams for TimeRangeParams {
    fn validate(&self) -> Result<(), ParamError> {
        if let (Some(TimeBound::At(min)), Some(TimeBound::At(max))) =
            (&self.min_time, &self.max_time)
        {
            if min > max {
                return Err(ParamError::InvertedTimeRange {
                    min: *min,
                    max: *max,
                });
            }
        }
        Ok(())
    }

    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(min) = &self.min_time {
            pairs.push(("min_time", min.render()));
        }
        if let Some(max) = &self.max_time {
            pairs.push(("max_time", max.render()));
        }
        push_cursor(&mut pairs, &self.cursor);
        pairs
    }
}

// ---------------------------------------------------------------------------
// Activity counts
// ---------------------------------------------------------------------------

/// Restrict an activity count to some transaction types. Empty means all types.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActivityCountParams {
    pub filter_types: Vec<String>,
}

impl ActivityCountParams {
    pub fn of_types<I, S>(types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            filter_types: types.into_iter().map(Into::into).collect(),
        }
    }
}

impl QueryParams for ActivityCountParams {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        if self.filter_types.is_empty() {
            return Vec::new();
        }
        vec![("filter_types", self.filter_types.join(","))]
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
