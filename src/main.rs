//! Ticket Arbitrage Scanner - Main Entry Point
//!
//! Runs one scan cycle: collect the extraction collaborator's drops,
//! normalize and match events across platforms, compute fee-aware
//! profits, and persist the ranked opportunity report.

use anyhow::Result;
use chrono::Utc;
use rust_decimal_macros::dec;
use std::path::Path;
use ticket_arb_scanner::*;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Initialize logging
    let _logging_guard = utils::setup_logging()?;
    utils::setup_output_directories()?;

    // Load and validate configuration before touching any data
    let config = Config::load();
    config.validate()?;

    info!("🎟️  Ticket Arbitrage Scanner v0.3.0");
    info!("📋 Configuration:");
    info!("   Buyer Fee: {:.0}%", config.fees.buyer_fee_rate * dec!(100));
    info!("   Seller Fee: {:.0}%", config.fees.seller_fee_rate * dec!(100));
    info!("   Estimated Margin Multiplier: {}x", config.estimated_margin_multiplier);
    info!("   Fallback Estimates: {}", config.enable_fallback_estimates);
    info!("   Max Events/Platform: {}", config.max_events_per_platform);
    info!("   Input Dir: {}", config.input_dir);

    // Collect raw listings, one task per platform; a failed platform
    // degrades to an empty set rather than aborting the cycle
    let sources = vec![
        sources::JsonFileSource::new(Platform::VividSeats, &config.input_dir),
        sources::JsonFileSource::new(Platform::StubHub, &config.input_dir),
    ];
    let mut raw = sources::gather_platform_events(sources).await;

    let vivid_events = normalize::build_platform_events(
        Platform::VividSeats,
        &raw.remove(&Platform::VividSeats).unwrap_or_default(),
        config.max_events_per_platform,
    );
    let stub_events = normalize::build_platform_events(
        Platform::StubHub,
        &raw.remove(&Platform::StubHub).unwrap_or_default(),
        config.max_events_per_platform,
    );

    info!(
        "🎫 Normalized events: {} VividSeats, {} StubHub",
        vivid_events.len(),
        stub_events.len()
    );

    let outcome = matching::match_events(vivid_events, stub_events);
    info!(
        "🔗 Matched {} event pair(s), {} unmatched",
        outcome.pairs.len(),
        outcome.unmatched_source.len() + outcome.unmatched_candidates.len()
    );

    let scraped_at = Utc::now();
    let opportunities = arbitrage::rank_opportunities(outcome, &config, scraped_at);

    for opp in &opportunities {
        utils::print_opportunity(opp);
    }

    let report = ArbitrageReport {
        scraped_at,
        opportunities,
    };
    utils::print_report_summary(&report);
    storage::save_report(&report, Path::new("output/reports"))?;

    Ok(())
}
