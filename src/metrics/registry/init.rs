// SPDX-License-Identifier: MIT

//! Registry initialization and metric registration

use std::sync::Arc;

use prometheus_client::metrics::counter::Counter;
use prometheus_client::metrics::family::Family;
use prometheus_client::metrics::gauge::Gauge;
use prometheus_client::registry::Registry;
use tokio::sync::Mutex;

use crate::metrics::labels::InterfaceLabels;

use super::MetricsRegistry;

impl MetricsRegistry {
    #[allow(clippy::similar_names)]
    pub fn new() -> Self {
        let mut registry = Registry::default();

        let bytes_rx = Family::<InterfaceLabels, Gauge>::default();
        registry.register("bytes_rx", "Bytes received", bytes_rx.clone());
        let bytes_tx = Family::<InterfaceLabels, Gauge>::default();
        registry.register("bytes_tx", "Bytes sent", bytes_tx.clone());
        let packets_rx = Family::<InterfaceLabels, Gauge>::default();
        registry.register("packets_rx", "Packets received", packets_rx.clone());
        let packets_tx = Family::<InterfaceLabels, Gauge>::default();
        registry.register("packets_tx", "Packets sent", packets_tx.clone());
        let errors_rx = Family::<InterfaceLabels, Gauge>::default();
        registry.register("errors_rx", "Received errors", errors_rx.clone());
        let errors_tx = Family::<InterfaceLabels, Gauge>::default();
        registry.register("errors_tx", "Sent errors", errors_tx.clone());

        let scrape_success = Counter::default();
        registry.register(
            "scrape_success",
            "Successful scrape cycles",
            scrape_success.clone(),
        );
        let scrape_errors = Counter::default();
        registry.register(
            "scrape_errors",
            "Failed scrape cycles",
            scrape_errors.clone(),
        );
        let scrape_duration_milliseconds = Gauge::default();
        registry.register(
            "scrape_duration_milliseconds",
            "Duration of last scrape in milliseconds",
            scrape_duration_milliseconds.clone(),
        );
        let scrape_last_success_timestamp_seconds = Gauge::default();
        registry.register(
            "scrape_last_success_timestamp_seconds",
            "Unix timestamp of last successful scrape",
            scrape_last_success_timestamp_seconds.clone(),
        );
        let session_restarts = Counter::default();
        registry.register(
            "session_restarts",
            "Completed browser session recycles",
            session_restarts.clone(),
        );

        Self {
            registry: Arc::new(Mutex::new(registry)),
            bytes_rx,
            bytes_tx,
            packets_rx,
            packets_tx,
            errors_rx,
            errors_tx,
            scrape_success,
            scrape_errors,
            scrape_duration_milliseconds,
            scrape_last_success_timestamp_seconds,
            session_restarts,
        }
    }
}
