// SPDX-License-Identifier: MIT

//! Gauge update logic for diagnostics snapshots

use crate::metrics::labels::InterfaceLabels;
use crate::router::InterfaceCounters;

use super::MetricsRegistry;

impl MetricsRegistry {
    /// Applies one diagnostics snapshot to the six gauge families.
    ///
    /// Every touched series is overwritten with the snapshot's value; gauges
    /// never accumulate across snapshots. Series for interfaces absent from
    /// the snapshot keep their previous value — stale label pairs are never
    /// removed, so the surfaced-metric footprint only grows when interfaces
    /// are added.
    #[allow(clippy::similar_names)]
    pub fn update_snapshot(&self, snapshot: &[InterfaceCounters]) {
        for iface in snapshot {
            let labels = InterfaceLabels {
                interface: iface.interface.clone(),
                interface_state: iface.state.clone(),
            };
            self.bytes_rx.get_or_create(&labels).set(iface.rx_bytes);
            self.bytes_tx.get_or_create(&labels).set(iface.tx_bytes);
            self.packets_rx.get_or_create(&labels).set(iface.rx_packets);
            self.packets_tx.get_or_create(&labels).set(iface.tx_packets);
            self.errors_rx.get_or_create(&labels).set(iface.rx_errors);
            self.errors_tx.get_or_create(&labels).set(iface.tx_errors);
        }
    }
}
