//! Configuration for the URL builder.
//!
//! Holds the viewer's base URL and the registered data sources. The
//! configuration is an explicit value owned by the builder rather than
//! process-global state; callers that need runtime reconfiguration wrap it
//! in their own synchronization.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use url::Url;
use validator::Validate;

/// A named log stream selector.
///
/// Maps a short symbolic name to an index-pattern string understood by
/// Kibana. Pattern strings are trusted configuration and are embedded in
/// generated URLs verbatim, never escaped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSource {
    /// Short symbolic name used to select this entry in a request.
    pub name: String,

    /// Index pattern passed through to Kibana (e.g. `application-logs-*`).
    pub pattern: String,
}

impl DataSource {
    /// Create a new data-source entry.
    #[must_use]
    pub fn new(name: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pattern: pattern.into(),
        }
    }
}

/// Configuration for a [`UrlBuilder`](crate::UrlBuilder).
///
/// Entries keep their registration order; the first data source is the
/// default for requests that do not name one.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct KibanaConfig {
    /// Kibana root URL (e.g. `https://kibana.intranet.net/app/kibana`).
    #[validate(url)]
    #[serde(default)]
    pub base_url: String,

    /// Registered data sources, in registration order.
    #[validate(length(min = 1))]
    #[serde(default)]
    pub data_sources: Vec<DataSource>,
}

impl KibanaConfig {
    /// Create an empty, unconfigured instance.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply incremental configuration through a mutator closure.
    ///
    /// Re-invokable; later calls may overwrite fields set by earlier ones.
    pub fn configure<F>(&mut self, mutator: F)
    where
        F: FnOnce(&mut Self),
    {
        mutator(self);
    }

    /// Set the base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Register a data source.
    #[must_use]
    pub fn with_data_source(
        mut self,
        name: impl Into<String>,
        pattern: impl Into<String>,
    ) -> Self {
        self.add_data_source(name, pattern);
        self
    }

    /// Register a data source, replacing an existing entry with the same
    /// name in place so registration order stays stable.
    pub fn add_data_source(&mut self, name: impl Into<String>, pattern: impl Into<String>) {
        let entry = DataSource::new(name, pattern);
        match self
            .data_sources
            .iter_mut()
            .find(|existing| existing.name == entry.name)
        {
            Some(existing) => existing.pattern = entry.pattern,
            None => self.data_sources.push(entry),
        }
    }

    /// True once a base URL and at least one data source are present.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.base_url.is_empty() && !self.data_sources.is_empty()
    }

    /// Look up the index pattern registered under `name`.
    #[must_use]
    pub fn data_source(&self, name: &str) -> Option<&str> {
        self.data_sources
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.pattern.as_str())
    }

    /// The default data source: the first registered entry.
    #[must_use]
    pub fn default_data_source(&self) -> Option<&DataSource> {
        self.data_sources.first()
    }

    /// Validate the configuration eagerly.
    ///
    /// [`UrlBuilder::generate`](crate::UrlBuilder::generate) only requires
    /// [`is_configured`](Self::is_configured); this is a stricter check for
    /// callers that want structural errors (e.g. a base URL that does not
    /// parse) surfaced at startup.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if any field fails validation.
    pub fn check(&self) -> Result<()> {
        self.validate()
            .map_err(|e| Error::ConfigError(format!("invalid configuration: {e}")))
    }

    /// Parse and validate the base URL.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if the URL cannot be parsed.
    pub fn parse_base_url(&self) -> Result<Url> {
        Url::parse(&self.base_url)
            .map_err(|e| Error::ConfigError(format!("invalid base URL: {e}")))
    }
}
