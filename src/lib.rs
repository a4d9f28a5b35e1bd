//! Ticket Arbitrage Scanner - cross-platform resale opportunity detection
//!
//! The scanner consumes raw ticket-listing data dropped by an external
//! extraction process, reconciles events across resale platforms despite
//! textual drift, and emits a ranked, fee-aware list of arbitrage
//! opportunities.

pub mod config;
pub mod types;
pub mod errors;
pub mod normalize;
pub mod matching;
pub mod arbitrage;
pub mod sources;
pub mod storage;
pub mod utils;

// Re-export commonly used items
pub use config::{Config, FeeSchedule};
pub use errors::{ScannerError, ScannerResult};
pub use types::*;
