//! Event construction from raw platform output

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::types::{Event, NormalizedListing, Platform, RawEvent};

use super::normalize_listing;

/// Build one platform event: normalize every listing and derive the
/// price range. Events keep their raw (trimmed) title; the comparison
/// key is derived separately at match time.
pub fn build_event(platform: Platform, raw: &RawEvent) -> Event {
    let listings: Vec<NormalizedListing> = raw.listings.iter().map(normalize_listing).collect();
    let (min_price, max_price) = price_range(&listings);

    Event {
        platform,
        title: raw
            .title
            .as_deref()
            .map(str::trim)
            .unwrap_or_default()
            .to_string(),
        date: clean_optional(raw.date.as_deref()),
        venue: clean_optional(raw.venue.as_deref()),
        listings,
        min_price,
        max_price,
    }
}

/// Build a platform's events from raw extraction output, capped at
/// `max_events` to bound per-cycle work. Input order is preserved.
pub fn build_platform_events(
    platform: Platform,
    raws: &[RawEvent],
    max_events: usize,
) -> Vec<Event> {
    raws.iter()
        .take(max_events)
        .map(|raw| build_event(platform, raw))
        .collect()
}

fn clean_optional(field: Option<&str>) -> Option<String> {
    field
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn price_range(listings: &[NormalizedListing]) -> (Decimal, Decimal) {
    let mut prices = listings.iter().map(|l| l.price);
    match prices.next() {
        None => (dec!(0), dec!(0)),
        Some(first) => prices.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p))),
    }
}
