//! Typed request parameters for Discover URL generation.
//!
//! Every field has a documented default, so `DiscoverRequest::default()`
//! describes the viewer's stock view: all fields collapsed into `_source`,
//! a match-all query, newest entries first, a 15-minute relative window.

use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sort direction for the result list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    /// Oldest (or smallest) values first; wire token `asc`.
    #[serde(rename = "asc")]
    Ascending,

    /// Newest (or largest) values first; wire token `desc`.
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    /// Token embedded in the generated URL.
    #[must_use]
    pub const fn as_token(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }
}

/// Which field to sort on, and in which direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sort {
    /// Log field to sort on.
    pub field: String,

    /// Sort direction.
    pub direction: SortDirection,
}

impl Sort {
    /// Create a sort specification.
    #[must_use]
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    /// Sort ascending on `field`.
    #[must_use]
    pub fn ascending(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Ascending)
    }

    /// Sort descending on `field`.
    #[must_use]
    pub fn descending(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Descending)
    }
}

impl Default for Sort {
    /// Newest entries first.
    fn default() -> Self {
        Self::descending("time")
    }
}

/// Time window covered by the generated view.
///
/// Omitted bounds are resolved against a single clock read at generation
/// time: `from` defaults to 15 minutes before that instant, `to` to the
/// instant itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum TimeScope {
    /// Window expressed as "N seconds before now".
    Relative {
        /// Lower bound of the window.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        from: Option<DateTime<Utc>>,
    },

    /// Window between two fixed instants.
    Absolute {
        /// Lower bound of the window.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        from: Option<DateTime<Utc>>,

        /// Upper bound of the window.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        to: Option<DateTime<Utc>>,
    },
}

impl Default for TimeScope {
    /// The last 15 minutes.
    fn default() -> Self {
        Self::Relative { from: None }
    }
}

/// Parameters for one generated Discover URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoverRequest {
    /// Data source to query; `None` selects the first configured entry.
    pub data_source: Option<String>,

    /// Columns to display, in order.
    pub columns: Vec<String>,

    /// Free-form query string; escaped before embedding.
    pub query: String,

    /// Sort order.
    pub sort: Sort,

    /// Auto-refresh period in seconds; `None` disables auto-refresh.
    pub refresh_interval_secs: Option<u64>,

    /// Time window.
    pub time_scope: TimeScope,
}

impl Default for DiscoverRequest {
    fn default() -> Self {
        Self {
            data_source: None,
            columns: vec!["_source".to_string()],
            query: "*".to_string(),
            sort: Sort::default(),
            refresh_interval_secs: None,
            time_scope: TimeScope::default(),
        }
    }
}

impl DiscoverRequest {
    /// Create a request with all defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a data source by name.
    #[must_use]
    pub fn with_data_source(mut self, name: impl Into<String>) -> Self {
        self.data_source = Some(name.into());
        self
    }

    /// Set the columns to display.
    #[must_use]
    pub fn with_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Set the query string.
    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Set the sort order.
    #[must_use]
    pub fn with_sort(mut self, sort: Sort) -> Self {
        self.sort = sort;
        self
    }

    /// Enable auto-refresh with the given period.
    #[must_use]
    pub const fn with_refresh_interval(mut self, seconds: u64) -> Self {
        self.refresh_interval_secs = Some(seconds);
        self
    }

    /// Set the time window.
    #[must_use]
    pub const fn with_time_scope(mut self, time_scope: TimeScope) -> Self {
        self.time_scope = time_scope;
        self
    }

    /// Confirm the request can be encoded as a well-formed URL.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRequest`] when the column list is empty, a
    /// column name is empty, or the sort field is empty.
    pub fn check(&self) -> Result<()> {
        if self.columns.is_empty() {
            return Err(Error::InvalidRequest(
                "column list must not be empty".to_string(),
            ));
        }
        if self.columns.iter().any(String::is_empty) {
            return Err(Error::InvalidRequest(
                "column names must not be empty".to_string(),
            ));
        }
        if self.sort.field.is_empty() {
            return Err(Error::InvalidRequest(
                "sort field must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_default_request() {
        let request = DiscoverRequest::default();
        assert_eq!(request.data_source, None);
        assert_eq!(request.columns, vec!["_source".to_string()]);
        assert_eq!(request.query, "*");
        assert_eq!(request.sort, Sort::descending("time"));
        assert_eq!(request.refresh_interval_secs, None);
        assert_eq!(request.time_scope, TimeScope::Relative { from: None });
    }

    #[test]
    fn test_sort_direction_tokens() {
        assert_eq!(SortDirection::Ascending.as_token(), "asc");
        assert_eq!(SortDirection::Descending.as_token(), "desc");
    }

    #[test]
    fn test_builder_methods() {
        let request = DiscoverRequest::new()
            .with_data_source("aws")
            .with_columns(["hostname", "message"])
            .with_query("status:500")
            .with_sort(Sort::ascending("remote_ip"))
            .with_refresh_interval(30);

        assert_eq!(request.data_source.as_deref(), Some("aws"));
        assert_eq!(request.columns, vec!["hostname", "message"]);
        assert_eq!(request.query, "status:500");
        assert_eq!(request.sort, Sort::ascending("remote_ip"));
        assert_eq!(request.refresh_interval_secs, Some(30));
    }

    #[test]
    fn test_check_rejects_empty_columns() {
        let request = DiscoverRequest::new().with_columns(Vec::<String>::new());
        assert!(matches!(request.check(), Err(Error::InvalidRequest(_))));
    }

    #[test]
    fn test_check_rejects_empty_column_name() {
        let request = DiscoverRequest::new().with_columns(["hostname", ""]);
        assert!(matches!(request.check(), Err(Error::InvalidRequest(_))));
    }

    #[test]
    fn test_check_rejects_empty_sort_field() {
        let request = DiscoverRequest::new().with_sort(Sort::descending(""));
        assert!(matches!(request.check(), Err(Error::InvalidRequest(_))));
    }

    #[test]
    fn test_check_accepts_default() {
        assert!(DiscoverRequest::default().check().is_ok());
    }

    #[test]
    fn test_time_scope_serialization_tags_mode() {
        let from = Utc.with_ymd_and_hms(2015, 1, 2, 11, 4, 5).unwrap();
        let scope = TimeScope::Absolute {
            from: Some(from),
            to: None,
        };

        let json = serde_json::to_value(&scope).unwrap();
        assert_eq!(json["mode"], "absolute");

        let roundtrip: TimeScope = serde_json::from_value(json).unwrap();
        assert_eq!(roundtrip, scope);
    }

    #[test]
    fn test_request_deserialization_defaults() {
        let request: DiscoverRequest = serde_json::from_str(r#"{"query":"error"}"#).unwrap();
        assert_eq!(request.query, "error");
        assert_eq!(request.columns, vec!["_source".to_string()]);
        assert_eq!(request.time_scope, TimeScope::Relative { from: None });
    }
}
