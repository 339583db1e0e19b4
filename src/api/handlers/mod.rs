// SPDX-License-Identifier: MIT

//! HTTP endpoint handlers

mod health;
mod metrics;

pub use health::health_check;
pub use metrics::metrics_handler;
