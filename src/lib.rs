// SPDX-License-Identifier: MIT

//! # Router Web Exporter
//!
//! Prometheus exporter for home routers that only expose their network
//! statistics through the web administration interface.
//!
//! A headless browser session logs into the router, periodically scrapes the
//! diagnostics page's statistics table, and republishes the parsed values as
//! labeled gauges served over HTTP.
//!
//! ## Main modules
//! - `api`: HTTP API handlers
//! - `browser`: browser automation capability and WebDriver binding
//! - `collector`: poll and restart loops
//! - `config`: configuration management
//! - `error`: error types
//! - `metrics`: Prometheus gauge registry
//! - `router`: login, diagnostics fetch, and table parsing
//! - `prelude`: commonly used types and traits

mod api;
mod browser;
mod collector;
mod config;
mod error;
mod metrics;
mod router;
pub mod prelude;

// Re-export commonly used types
/// Application configuration
pub use config::Config;

/// Application error and result type
pub use error::{AppError, Result};

/// HTTP API router and state
pub use api::{AppState, create_router};

/// Scrape orchestration loop
pub use collector::start_scrape_loop;

/// Metrics registry and labels
pub use metrics::{InterfaceLabels, MetricsRegistry};

/// Browser automation capability and WebDriver binding
pub use browser::{Driver, Element, Locator, WebDriverSession};

/// Diagnostics records and typed counters
pub use router::{InterfaceCounters, Record};

/// Table parsing entry points
pub use router::table::{parse_table, records_from_json, table_to_json};
