//! Display and printing utilities

use tracing::{info, warn};

use crate::types::{ArbitrageOpportunity, ArbitrageReport};

pub fn print_opportunity(opp: &ArbitrageOpportunity) {
    let tag = if opp.estimated { " (ESTIMATE)" } else { "" };
    warn!("\n🎯 ARBITRAGE OPPORTUNITY{} #{}", tag, opp.id);
    warn!("🎤 Event: {}", opp.event);
    if let Some(date) = &opp.date {
        warn!("📅 Date: {}", date);
    }
    if let Some(venue) = &opp.venue {
        warn!("📍 Venue: {}", venue);
    }
    warn!("💰 Profit Analysis:");
    warn!("   Buy:  {} @ ${:.2}", opp.buy_from, opp.buy_price);
    warn!("   Sell: {} @ ${:.2}", opp.sell_to, opp.sell_price);
    warn!("   Profit/Ticket: ${:.2}", opp.profit_per_ticket);
    warn!("   Margin: {:.2}%", opp.margin_percent);
    warn!("   Tickets Available: {}", opp.tickets_available);
}

pub fn print_report_summary(report: &ArbitrageReport) {
    let confirmed = report.opportunities.iter().filter(|o| !o.estimated).count();
    let estimated = report.opportunities.len() - confirmed;

    info!("\n📊 Scan Summary ({})", report.scraped_at.format("%Y-%m-%d %H:%M:%S UTC"));
    info!("   Confirmed cross-platform opportunities: {}", confirmed);
    info!("   Single-source estimates: {}", estimated);
    if let Some(best) = report.opportunities.first() {
        info!("   Best spread: {} (${:.2}/ticket)", best.event, best.profit_per_ticket);
    }
}
