// SPDX-License-Identifier: MIT

//! Metrics registry and update logic

mod init;
mod scrape;
mod update;

use std::sync::Arc;

use prometheus_client::metrics::counter::Counter;
use prometheus_client::metrics::family::Family;
use prometheus_client::metrics::gauge::Gauge;
use prometheus_client::registry::Registry;
use tokio::sync::Mutex;

use crate::metrics::labels::InterfaceLabels;

/// Registry handle shared between the scrape loop and the HTTP server.
///
/// Families are internally synchronized, so snapshot updates from the scrape
/// task are safe to run concurrently with text encoding in the `/metrics`
/// handler.
#[derive(Clone)]
pub struct MetricsRegistry {
    registry: Arc<Mutex<Registry>>,
    // per-interface gauges, overwritten on every snapshot
    bytes_rx: Family<InterfaceLabels, Gauge>,
    bytes_tx: Family<InterfaceLabels, Gauge>,
    packets_rx: Family<InterfaceLabels, Gauge>,
    packets_tx: Family<InterfaceLabels, Gauge>,
    errors_rx: Family<InterfaceLabels, Gauge>,
    errors_tx: Family<InterfaceLabels, Gauge>,
    // exporter self-observability
    scrape_success: Counter,
    scrape_errors: Counter,
    scrape_duration_milliseconds: Gauge,
    scrape_last_success_timestamp_seconds: Gauge,
    session_restarts: Counter,
}

impl Default for MetricsRegistry {
    fn default() -> Self {
        Self::new()
    }
}
