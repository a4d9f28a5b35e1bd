//! Arbitrage opportunity and report types

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use super::Platform;

/// A buy-here/sell-there pair with positive fee-adjusted profit, or a
/// single-source estimate when `estimated` is set.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArbitrageOpportunity {
    pub id: String,
    pub event: String,
    pub date: Option<String>,
    pub venue: Option<String>,
    pub buy_from: Platform,
    pub buy_price: Decimal,
    pub sell_to: Platform,
    pub sell_price: Decimal,
    pub tickets_available: u32,
    pub profit_per_ticket: Decimal,
    pub margin_percent: Decimal,
    pub estimated: bool,
    pub generated_at: DateTime<Utc>,
}

/// The document handed to the persistence/reporting collaborator at the
/// end of a scan cycle.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArbitrageReport {
    pub scraped_at: DateTime<Utc>,
    pub opportunities: Vec<ArbitrageOpportunity>,
}
