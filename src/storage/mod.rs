//! Data persistence and file operations

pub mod reports;

pub use reports::*;
