//! End-to-end pipeline tests: raw extraction output through normalized
//! events, cross-platform matching, profit computation, and the final
//! report document.

use chrono::Utc;
use rust_decimal_macros::dec;
use ticket_arb_scanner::{
    arbitrage, matching, normalize, ArbitrageReport, Config, Platform, RawEvent, RawListing,
    RawValue,
};

fn raw_listing(price: &str, tickets: &str) -> RawListing {
    RawListing {
        price: Some(RawValue::Text(price.to_string())),
        ticket_count: Some(RawValue::Text(tickets.to_string())),
        ..RawListing::default()
    }
}

fn raw_event(title: &str, listings: Vec<RawListing>) -> RawEvent {
    RawEvent {
        title: Some(title.to_string()),
        date: Some("2026-09-12".to_string()),
        venue: Some("The Forum".to_string()),
        listings,
    }
}

fn run_pipeline(
    vivid: Vec<RawEvent>,
    stub: Vec<RawEvent>,
    config: &Config,
) -> Vec<ticket_arb_scanner::ArbitrageOpportunity> {
    let vivid_events = normalize::build_platform_events(
        Platform::VividSeats,
        &vivid,
        config.max_events_per_platform,
    );
    let stub_events =
        normalize::build_platform_events(Platform::StubHub, &stub, config.max_events_per_platform);
    let outcome = matching::match_events(vivid_events, stub_events);
    arbitrage::rank_opportunities(outcome, config, Utc::now())
}

#[test]
fn cross_platform_spread_survives_messy_input() {
    let vivid = vec![raw_event(
        "Drake & The Weeknd",
        vec![raw_listing("$100.00", "3 tickets available")],
    )];
    let stub = vec![raw_event(
        "drake the weeknd",
        vec![raw_listing("From $150 each", "6")],
    )];

    let opps = run_pipeline(vivid, stub, &Config::default());

    assert_eq!(opps.len(), 1);
    let opp = &opps[0];
    assert!(!opp.estimated);
    assert_eq!(opp.buy_from, Platform::VividSeats);
    assert_eq!(opp.sell_to, Platform::StubHub);
    assert_eq!(opp.profit_per_ticket, dec!(9.50));
    assert_eq!(opp.margin_percent.round_dp(2), dec!(8.05));
    assert_eq!(opp.tickets_available, 3);
}

#[test]
fn fee_eaten_spread_is_not_emitted() {
    let vivid = vec![raw_event("Adele", vec![raw_listing("$100", "2")])];
    let stub = vec![raw_event("Adele", vec![raw_listing("$110", "4")])];

    let opps = run_pipeline(vivid, stub, &Config::default());
    assert!(opps.is_empty());
}

#[test]
fn empty_platform_yields_only_tagged_estimates() {
    let vivid = vec![raw_event("Adele", vec![raw_listing("$50", "2")])];

    let opps = run_pipeline(vivid, vec![], &Config::default());

    assert_eq!(opps.len(), 1);
    assert!(opps[0].estimated);
    assert_eq!(opps[0].sell_price, dec!(60.00));
    assert_eq!(opps[0].profit_per_ticket, dec!(10.00));
}

#[test]
fn guest_credited_title_misses_and_falls_back_to_estimates() {
    // Known recall limit: "Special Guest" is not filler, so the titles
    // key differently and no confirmed pair forms.
    let vivid = vec![raw_event("Imagine Dragons", vec![raw_listing("$80", "2")])];
    let stub = vec![raw_event(
        "Imagine Dragons ft. Special Guest",
        vec![raw_listing("$120", "2")],
    )];

    let opps = run_pipeline(vivid, stub, &Config::default());

    assert_eq!(opps.len(), 2);
    assert!(opps.iter().all(|o| o.estimated));
}

#[test]
fn volume_cap_bounds_events_per_platform() {
    let many: Vec<RawEvent> = (0..10)
        .map(|i| raw_event(&format!("Event {}", i), vec![raw_listing("$40", "1")]))
        .collect();

    let opps = run_pipeline(many, vec![], &Config::default());

    // Default cap is 3 events per platform; estimates for each.
    assert_eq!(opps.len(), 3);
}

#[test]
fn emitted_opportunities_form_a_descending_total_order() {
    let vivid = vec![
        raw_event("Alpha", vec![raw_listing("$100", "2")]),
        raw_event("Beta", vec![raw_listing("$100", "2")]),
    ];
    let stub = vec![
        raw_event("Alpha", vec![raw_listing("$200", "2")]),
        raw_event("Beta", vec![raw_listing("$160", "2")]),
    ];

    let opps = run_pipeline(vivid, stub, &Config::default());

    assert_eq!(opps.len(), 2);
    for window in opps.windows(2) {
        assert!(window[0].profit_per_ticket >= window[1].profit_per_ticket);
    }
    assert!(opps.iter().filter(|o| !o.estimated).all(|o| o.profit_per_ticket > dec!(0)));
}

#[test]
fn report_document_uses_the_published_wire_shape() {
    let vivid = vec![raw_event("Drake", vec![raw_listing("$100", "2")])];
    let stub = vec![raw_event("Drake", vec![raw_listing("$150", "2")])];

    let scraped_at = Utc::now();
    let report = ArbitrageReport {
        scraped_at,
        opportunities: run_pipeline(vivid, stub, &Config::default()),
    };

    let doc = serde_json::to_value(&report).unwrap();
    assert!(doc.get("scrapedAt").is_some());

    let opp = &doc["opportunities"][0];
    for key in [
        "event",
        "buyFrom",
        "buyPrice",
        "sellTo",
        "sellPrice",
        "ticketsAvailable",
        "profitPerTicket",
        "marginPercent",
        "estimated",
        "generatedAt",
    ] {
        assert!(opp.get(key).is_some(), "missing key {key}");
    }
    assert_eq!(opp["buyFrom"], "VividSeats");
    assert_eq!(opp["sellTo"], "StubHub");
}
