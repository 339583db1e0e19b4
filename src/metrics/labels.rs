//! Label types for Prometheus metrics

use prometheus_client::encoding::EncodeLabelSet;

/// Composite label key for the six per-interface gauge families
#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct InterfaceLabels {
    pub interface: String,
    pub interface_state: String,
}
