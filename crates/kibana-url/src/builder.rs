//! Discover URL assembly.
//!
//! [`UrlBuilder`] turns a [`DiscoverRequest`] into the viewer's two-parameter
//! encoding: five clauses joined into `_a` (columns, index, interval, query,
//! sort) and up to two clauses joined into `_g` (refresh interval, time),
//! both in fixed order. Generation either succeeds fully or fails before any
//! output is assembled.

use std::fmt;

use chrono::Duration;
use tracing::debug;

use crate::clock::{Clock, SystemClock};
use crate::config::KibanaConfig;
use crate::error::{Error, Result};
use crate::fragment::{self, ResolvedTimeScope};
use crate::request::{DiscoverRequest, TimeScope};

/// Path appended to the base URL ahead of the encoded parameters.
const DISCOVER_PATH: &str = "#/discover";

/// Length of the default time window, in seconds.
const DEFAULT_WINDOW_SECS: i64 = 900;

/// Builds Discover deep-link URLs from typed requests.
///
/// The configuration is owned by the builder and immutable afterwards, so a
/// builder can be shared freely across threads. Generation is a pure
/// computation over the request plus at most one clock read.
pub struct UrlBuilder {
    config: KibanaConfig,
    clock: Box<dyn Clock>,
}

impl UrlBuilder {
    /// Create a builder over `config` using the system clock.
    #[must_use]
    pub fn new(config: KibanaConfig) -> Self {
        Self {
            config,
            clock: Box::new(SystemClock),
        }
    }

    /// Replace the time source, making output reproducible.
    #[must_use]
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// The configuration this builder serves.
    #[must_use]
    pub fn config(&self) -> &KibanaConfig {
        &self.config
    }

    /// Generate a Discover URL for `request`.
    ///
    /// # Errors
    ///
    /// * [`Error::NotConfigured`] if the configuration lacks a base URL or
    ///   any data sources.
    /// * [`Error::UnknownDataSource`] if the request names an unregistered
    ///   data source.
    /// * [`Error::InvalidRequest`] if the request cannot be encoded as a
    ///   well-formed URL.
    pub fn generate(&self, request: &DiscoverRequest) -> Result<String> {
        if !self.config.is_configured() {
            return Err(Error::NotConfigured);
        }
        request.check()?;

        let pattern = self.resolve_data_source(request)?;
        let time_scope = self.resolve_time_scope(request.time_scope)?;

        let a_params = [
            fragment::columns(&request.columns),
            fragment::index(pattern),
            fragment::INTERVAL.to_string(),
            fragment::query(&request.query),
            fragment::sort(&request.sort),
        ];

        let mut g_params = Vec::with_capacity(2);
        if let Some(seconds) = request.refresh_interval_secs {
            g_params.push(fragment::refresh_interval(seconds)?);
        }
        g_params.push(fragment::time(&time_scope));

        debug!(index = pattern, query = %request.query, "generating Discover URL");

        Ok(format!(
            "{}{DISCOVER_PATH}?_g=({})&_a=({})",
            self.config.base_url,
            g_params.join(","),
            a_params.join(",")
        ))
    }

    fn resolve_data_source<'a>(&'a self, request: &DiscoverRequest) -> Result<&'a str> {
        match request.data_source.as_deref() {
            Some(name) => self
                .config
                .data_source(name)
                .ok_or_else(|| Error::UnknownDataSource(name.to_string())),
            None => self
                .config
                .default_data_source()
                .map(|entry| entry.pattern.as_str())
                .ok_or(Error::NotConfigured),
        }
    }

    fn resolve_time_scope(&self, scope: TimeScope) -> Result<ResolvedTimeScope> {
        match scope {
            TimeScope::Relative { from } => {
                let now = self.clock.now();
                let from = from.unwrap_or_else(|| now - Duration::seconds(DEFAULT_WINDOW_SECS));
                // Whole seconds, truncated toward zero.
                let elapsed_secs = (now - from).num_seconds();
                if elapsed_secs < 0 {
                    return Err(Error::InvalidRequest(
                        "relative time scope starts in the future".to_string(),
                    ));
                }
                Ok(ResolvedTimeScope::Relative { elapsed_secs })
            }
            TimeScope::Absolute { from, to } => {
                let (from, to) = match (from, to) {
                    (Some(from), Some(to)) => (from, to),
                    (from, to) => {
                        // Defaults observe one shared clock read, mirroring
                        // the relative case.
                        let now = self.clock.now();
                        (
                            from.unwrap_or_else(|| {
                                now - Duration::seconds(DEFAULT_WINDOW_SECS)
                            }),
                            to.unwrap_or(now),
                        )
                    }
                };
                Ok(ResolvedTimeScope::Absolute { from, to })
            }
        }
    }
}

impl fmt::Debug for UrlBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UrlBuilder")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
