//! Custom error types for the scanner
//!
//! Data-quality problems (unparsable prices, missing fields, empty
//! platforms) are absorbed by the normalizer and never surface here.
//! Errors are reserved for invalid configuration and boundary IO.

use thiserror::Error;

use crate::types::Platform;

#[derive(Error, Debug)]
pub enum ScannerError {
    #[error("Invalid configuration: {parameter} = {value} - {reason}")]
    Configuration {
        parameter: &'static str,
        value: String,
        reason: String,
    },

    #[error("Failed to read listings for {platform}: {message}")]
    Source {
        platform: Platform,
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    #[error("Failed to persist report: {context}")]
    Storage {
        context: String,
        #[source]
        source: anyhow::Error,
    },
}

pub type ScannerResult<T> = Result<T, ScannerError>;
