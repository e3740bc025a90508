//! # kibana-url
//!
//! Builds deep-link URLs into Kibana's Discover view.
//!
//! A generated URL encodes a complete saved search: which data source to
//! query, which columns to show, the query string, sort order, an optional
//! auto-refresh interval, and a time window. Operators use these links to
//! jump from an alert or a script straight into a pre-filtered log view
//! without hand-assembling Kibana's encoded parameter syntax:
//!
//! ```text
//! https://kibana.example.net/app/kibana#/discover?
//! _g=(refreshInterval:(display:'30%20seconds',pause:!f,section:1,value:30000),
//! time:(from:'now-900s',mode:relative,to:'now'))&
//! _a=(columns:!(container_name,hostname,message),index:'logs-*',interval:auto,
//! query:(query_string:(analyze_wildcard:!t,query:'foo+bar')),sort:!(time,desc))
//! ```
//!
//! ## Modules
//!
//! - [`config`] - Viewer configuration: base URL and named data sources
//! - [`request`] - Typed request parameters with per-field defaults
//! - [`builder`] - Fragment assembly into the final URL
//! - [`clock`] - Injectable time source for reproducible output
//! - [`error`] - Error types
//!
//! ## Example
//!
//! ```
//! use kibana_url::{DiscoverRequest, KibanaConfig, UrlBuilder};
//!
//! let config = KibanaConfig::new()
//!     .with_base_url("https://kibana.intranet.net/app/kibana")
//!     .with_data_source("app", "application-logs-*");
//!
//! let builder = UrlBuilder::new(config);
//! let url = builder.generate(&DiscoverRequest::default())?;
//! assert!(url.starts_with("https://kibana.intranet.net/app/kibana#/discover?"));
//! # Ok::<(), kibana_url::Error>(())
//! ```

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod builder;
pub mod clock;
pub mod config;
pub mod error;
mod fragment;
pub mod request;

// Re-export commonly used types
pub use builder::UrlBuilder;
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{DataSource, KibanaConfig};
pub use error::{Error, Result};
pub use request::{DiscoverRequest, Sort, SortDirection, TimeScope};
