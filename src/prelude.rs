// SPDX-License-Identifier: MIT

//! Prelude module for convenient imports
//!
//! This module re-exports commonly used types and traits for convenient use.
//! Users of the library can import everything they need with:
//!
//! ```rust
//! use router_web_exporter::prelude::*;
//! ```

// Core types
pub use crate::config::Config;
pub use crate::error::{AppError, Result};

// Metrics types
pub use crate::metrics::{InterfaceLabels, MetricsRegistry};

// Browser capability
pub use crate::browser::{Driver, Element, Locator, WebDriverSession};

// Router interaction
pub use crate::router::{InterfaceCounters, Record};
