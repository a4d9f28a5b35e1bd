//! Error handling for the scanner

pub mod scanner_error;

pub use scanner_error::*;
