//! Serializers for the individual clauses of the Discover parameter syntax.
//!
//! Each function renders one self-contained clause of the `_g`/`_a` groups;
//! the builder composes them with fixed separators. User-supplied free text
//! is escaped here; structural tokens and configured index patterns are
//! embedded verbatim.

use chrono::{DateTime, Utc};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::error::{Error, Result};
use crate::request::Sort;

/// Characters that survive escaping: alphanumerics plus `-`, `.` and `_`.
/// Space is left in here so it can be rewritten to `+` afterwards.
const FORM_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b' ')
    .remove(b'-')
    .remove(b'.')
    .remove(b'_');

/// Percent-escape a user-supplied token, form-style: spaces become `+`,
/// everything outside the safe set becomes uppercase `%XX`.
pub(crate) fn escape(raw: &str) -> String {
    utf8_percent_encode(raw, FORM_ENCODE_SET)
        .flat_map(str::chars)
        .map(|c| if c == ' ' { '+' } else { c })
        .collect()
}

/// `columns:!(<c1>,<c2>,...)` with each name escaped independently.
pub(crate) fn columns(names: &[String]) -> String {
    let escaped: Vec<String> = names.iter().map(|name| escape(name)).collect();
    format!("columns:!({})", escaped.join(","))
}

/// `index:'<pattern>'` with the pattern verbatim.
pub(crate) fn index(pattern: &str) -> String {
    format!("index:'{pattern}'")
}

/// `interval:auto` - histogram bucketing hint, fixed in the grammar.
pub(crate) const INTERVAL: &str = "interval:auto";

/// `query:(query_string:(analyze_wildcard:!t,query:'<escaped>'))`
pub(crate) fn query(raw: &str) -> String {
    format!(
        "query:(query_string:(analyze_wildcard:!t,query:'{}'))",
        escape(raw)
    )
}

/// `sort:!(<escaped field>,<asc|desc>)`
pub(crate) fn sort(sort: &Sort) -> String {
    format!("sort:!({},{})", escape(&sort.field), sort.direction.as_token())
}

/// `refreshInterval:(display:'<n>%20seconds',pause:!f,section:1,value:<ms>)`
///
/// The display string is human-readable seconds with a pre-escaped space;
/// the value is the same period in milliseconds.
pub(crate) fn refresh_interval(seconds: u64) -> Result<String> {
    let millis = seconds.checked_mul(1000).ok_or_else(|| {
        Error::InvalidRequest(format!(
            "refresh interval of {seconds}s does not fit in milliseconds"
        ))
    })?;
    Ok(format!(
        "refreshInterval:(display:'{seconds}%20seconds',pause:!f,section:1,value:{millis})"
    ))
}

/// Time window with clock defaults already applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ResolvedTimeScope {
    /// Whole seconds between the lower bound and the call instant.
    Relative { elapsed_secs: i64 },
    /// Two explicit instants.
    Absolute {
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    },
}

/// `time:(from:'<from>',mode:<relative|absolute>,to:'<to>')`
///
/// In relative mode the upper bound is always the literal `now`; only the
/// elapsed-seconds delta is numerically meaningful.
pub(crate) fn time(scope: &ResolvedTimeScope) -> String {
    match scope {
        ResolvedTimeScope::Relative { elapsed_secs } => {
            format!("time:(from:'now-{elapsed_secs}s',mode:relative,to:'now')")
        }
        ResolvedTimeScope::Absolute { from, to } => format!(
            "time:(from:'{}',mode:absolute,to:'{}')",
            timestamp(*from),
            timestamp(*to)
        ),
    }
}

/// UTC instant as `YYYY-MM-DDTHH:MM:SS.mmmZ`, millisecond precision.
fn timestamp(instant: DateTime<Utc>) -> String {
    instant.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_escape_passthrough() {
        assert_eq!(escape("_source"), "_source");
        assert_eq!(escape("metadata._COMM"), "metadata._COMM");
        assert_eq!(escape("quarter-pounder"), "quarter-pounder");
    }

    #[test]
    fn test_escape_spaces_become_plus() {
        assert_eq!(escape("royal with cheese"), "royal+with+cheese");
    }

    #[test]
    fn test_escape_specials_use_uppercase_hex() {
        assert_eq!(escape("*"), "%2A");
        assert_eq!(
            escape(r#"*quarter-pounder* || ("royal with cheese" && burger)"#),
            "%2Aquarter-pounder%2A+%7C%7C+%28%22royal+with+cheese%22+%26%26+burger%29"
        );
    }

    #[test]
    fn test_escape_non_ascii() {
        assert_eq!(escape("caf\u{e9}"), "caf%C3%A9");
    }

    #[test]
    fn test_columns_clause() {
        let names = vec!["_index".to_string(), "metadata._COMM".to_string()];
        assert_eq!(columns(&names), "columns:!(_index,metadata._COMM)");
    }

    #[test]
    fn test_index_clause_is_verbatim() {
        assert_eq!(index("application-logs-*"), "index:'application-logs-*'");
    }

    #[test]
    fn test_query_clause() {
        assert_eq!(
            query("*"),
            "query:(query_string:(analyze_wildcard:!t,query:'%2A'))"
        );
    }

    #[test]
    fn test_sort_clause() {
        assert_eq!(sort(&Sort::descending("time")), "sort:!(time,desc)");
        assert_eq!(
            sort(&Sort::ascending("remote ip")),
            "sort:!(remote+ip,asc)"
        );
    }

    #[test]
    fn test_refresh_interval_clause() {
        assert_eq!(
            refresh_interval(30).unwrap(),
            "refreshInterval:(display:'30%20seconds',pause:!f,section:1,value:30000)"
        );
        assert_eq!(
            refresh_interval(0).unwrap(),
            "refreshInterval:(display:'0%20seconds',pause:!f,section:1,value:0)"
        );
    }

    #[test]
    fn test_refresh_interval_overflow() {
        assert!(matches!(
            refresh_interval(u64::MAX),
            Err(Error::InvalidRequest(_))
        ));
    }

    #[test]
    fn test_relative_time_clause() {
        let scope = ResolvedTimeScope::Relative { elapsed_secs: 900 };
        assert_eq!(
            time(&scope),
            "time:(from:'now-900s',mode:relative,to:'now')"
        );
    }

    #[test]
    fn test_absolute_time_clause_pads_milliseconds() {
        let scope = ResolvedTimeScope::Absolute {
            from: Utc.with_ymd_and_hms(2015, 1, 2, 11, 4, 5).unwrap(),
            to: Utc.with_ymd_and_hms(2015, 11, 25, 7, 59, 50).unwrap(),
        };
        assert_eq!(
            time(&scope),
            "time:(from:'2015-01-02T11:04:05.000Z',mode:absolute,to:'2015-11-25T07:59:50.000Z')"
        );
    }

    #[test]
    fn test_timestamp_keeps_subsecond_precision() {
        let instant = Utc
            .with_ymd_and_hms(2015, 1, 2, 3, 4, 5)
            .unwrap()
            .checked_add_signed(chrono::Duration::milliseconds(42))
            .unwrap();
        assert_eq!(timestamp(instant), "2015-01-02T03:04:05.042Z");
    }
}
