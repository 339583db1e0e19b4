// SPDX-License-Identifier: MIT

//! Metrics registry and update module
//!
//! Contains label types and the Prometheus gauge registry the scrape loop
//! writes into.

mod labels;
mod registry;

/// Labels identifying one interface series
pub use labels::InterfaceLabels;

/// Prometheus metrics registry
pub use registry::MetricsRegistry;
