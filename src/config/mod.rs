//! Configuration management for the scanner

pub mod settings;

pub use settings::*;
