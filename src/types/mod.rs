//! Core data types and structures

pub mod listings;
pub mod events;
pub mod opportunities;

pub use listings::*;
pub use events::*;
pub use opportunities::*;
