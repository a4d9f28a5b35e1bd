//! Platform and event types

use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

use super::NormalizedListing;

/// The resale platforms the scanner currently covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Platform {
    VividSeats,
    StubHub,
}

impl Platform {
    /// The other side of the pair, used as the assumed resale venue for
    /// single-source estimates.
    pub fn counterpart(self) -> Platform {
        match self {
            Platform::VividSeats => Platform::StubHub,
            Platform::StubHub => Platform::VividSeats,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::VividSeats => write!(f, "VividSeats"),
            Platform::StubHub => write!(f, "StubHub"),
        }
    }
}

/// One event on one platform, grouping its normalized listings.
/// Built once per scan cycle from raw extraction output; immutable
/// afterward. `min_price`/`max_price` are zero when there are no
/// listings.
#[derive(Debug, Clone, Serialize)]
pub struct Event {
    pub platform: Platform,
    pub title: String,
    pub date: Option<String>,
    pub venue: Option<String>,
    pub listings: Vec<NormalizedListing>,
    pub min_price: Decimal,
    pub max_price: Decimal,
}

impl Event {
    /// Tightest quantity constraint across this event's listings; the
    /// most tickets a buyer could actually execute against.
    pub fn tickets_available(&self) -> u32 {
        self.listings
            .iter()
            .map(|l| l.ticket_count)
            .min()
            .unwrap_or(0)
    }
}
