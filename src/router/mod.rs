//! Router admin-page interaction
//!
//! Login session establishment, diagnostics page fetch, and table parsing
//! against the router's web administration interface.

pub mod diagnostics;
pub mod session;
pub mod table;
mod types;

/// One parsed table row
pub use table::Record;

/// Typed counters for one interface row
pub use types::InterfaceCounters;
