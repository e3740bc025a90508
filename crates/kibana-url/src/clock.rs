//! Injectable time source.
//!
//! Relative windows and defaulted absolute bounds depend on "now".
//! [`UrlBuilder`](crate::UrlBuilder) reads its clock at most once per call
//! so the implicit upper bound and the defaulted lower bound observe the
//! same instant, keeping the elapsed-seconds arithmetic consistent.

use chrono::{DateTime, Utc};

/// Source of the current instant.
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    /// The current instant in UTC.
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at a fixed instant.
///
/// Useful in tests and anywhere byte-identical output must be reproducible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    instant: DateTime<Utc>,
}

impl FixedClock {
    /// Create a clock that always reports `instant`.
    #[must_use]
    pub const fn new(instant: DateTime<Utc>) -> Self {
        Self { instant }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.instant
    }
}
