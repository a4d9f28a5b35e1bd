//! Raw listing and event normalization

pub mod listing;
pub mod event;

pub use listing::*;
pub use event::*;
