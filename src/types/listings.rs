//! Raw and normalized listing types

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A scraped field that platforms render as text, as a number, or not
/// at all ("$1,234.56", 1234.56, missing).
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Text(String),
    Number(f64),
}

/// One listing exactly as the extraction collaborator delivered it.
/// Every field may be missing or malformed.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawListing {
    pub title: Option<String>,
    pub price: Option<RawValue>,
    pub section: Option<String>,
    pub row: Option<String>,
    pub ticket_count: Option<RawValue>,
    pub fees_included: bool,
    pub url: Option<String>,
}

/// One event as scraped: loose title/date/venue text plus its raw
/// listings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawEvent {
    pub title: Option<String>,
    pub date: Option<String>,
    pub venue: Option<String>,
    pub listings: Vec<RawListing>,
}

/// A listing after normalization. All fields are populated; price and
/// ticket count are always finite and non-negative, so downstream
/// arithmetic never fails.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedListing {
    pub title: String,
    pub price: Decimal,
    pub ticket_count: u32,
    pub fees_included: bool,
    pub section: String,
    pub row: String,
}
