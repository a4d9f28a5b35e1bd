//! Listing field canonicalization
//!
//! Scraped fields arrive in whatever shape each platform renders them.
//! Everything downstream assumes complete, finite values, so
//! normalization is total: unparsable prices become zero, unparsable
//! quantities become one, missing text becomes "N/A".

use rust_decimal::prelude::*;
use rust_decimal_macros::dec;
use std::str::FromStr;

use crate::types::{NormalizedListing, RawListing, RawValue};

const MISSING_FIELD: &str = "N/A";

/// Canonicalize one raw listing. Never fails.
pub fn normalize_listing(raw: &RawListing) -> NormalizedListing {
    NormalizedListing {
        title: normalize_text(raw.title.as_deref()),
        price: parse_price(raw.price.as_ref()),
        ticket_count: parse_ticket_count(raw.ticket_count.as_ref()),
        fees_included: raw.fees_included,
        section: normalize_text(raw.section.as_deref()),
        row: normalize_text(raw.row.as_deref()),
    }
}

fn normalize_text(field: Option<&str>) -> String {
    match field.map(str::trim) {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => MISSING_FIELD.to_string(),
    }
}

/// Strip currency symbols and thousands separators, then parse as a
/// decimal. Unparsable or negative prices become zero.
pub fn parse_price(value: Option<&RawValue>) -> Decimal {
    let parsed = match value {
        Some(RawValue::Number(n)) => Decimal::from_f64(*n),
        Some(RawValue::Text(s)) => {
            let cleaned: String = s
                .chars()
                .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
                .collect();
            Decimal::from_str(&cleaned).ok()
        }
        None => None,
    };

    match parsed {
        Some(price) if price >= dec!(0) => price,
        _ => dec!(0),
    }
}

/// Extract the first integer run from free text ("3 tickets available"
/// becomes 3). Anything unusable becomes one so quantity math always
/// has a floor.
pub fn parse_ticket_count(value: Option<&RawValue>) -> u32 {
    let parsed = match value {
        Some(RawValue::Number(n)) if n.is_finite() && *n >= 1.0 => Some(*n as u32),
        Some(RawValue::Text(s)) => first_integer(s),
        _ => None,
    };

    parsed.filter(|count| *count >= 1).unwrap_or(1)
}

fn first_integer(text: &str) -> Option<u32> {
    let digits: String = text
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}
