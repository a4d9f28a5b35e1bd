//! Opportunity assembly, filtering, and deterministic ordering

use chrono::{DateTime, Utc};
use rust_decimal_macros::dec;
use tracing::debug;
use uuid::Uuid;

use crate::config::Config;
use crate::matching::{MatchOutcome, MatchedPair};
use crate::types::{ArbitrageOpportunity, Event};

use super::{compute_profit, estimate_profit};

/// Turn a matching pass into the final ranked opportunity list.
///
/// Matched pairs are evaluated buy-low/sell-high at each side's floor
/// price and kept only when fee-adjusted profit is positive. Unmatched
/// events become estimated entries when fallback mode is enabled,
/// dropped otherwise. Ordering: profit per ticket descending, ties
/// broken by case-insensitive event title.
pub fn rank_opportunities(
    outcome: MatchOutcome,
    config: &Config,
    generated_at: DateTime<Utc>,
) -> Vec<ArbitrageOpportunity> {
    let mut opportunities = Vec::new();

    for pair in &outcome.pairs {
        if let Some(opp) = evaluate_pair(pair, config, generated_at) {
            opportunities.push(opp);
        }
    }

    if config.enable_fallback_estimates {
        for event in outcome
            .unmatched_source
            .iter()
            .chain(outcome.unmatched_candidates.iter())
        {
            if let Some(opp) = estimate_for(event, config, generated_at) {
                opportunities.push(opp);
            }
        }
    }

    opportunities.sort_by(|a, b| {
        b.profit_per_ticket
            .cmp(&a.profit_per_ticket)
            .then_with(|| a.event.to_lowercase().cmp(&b.event.to_lowercase()))
    });

    opportunities
}

fn evaluate_pair(
    pair: &MatchedPair,
    config: &Config,
    generated_at: DateTime<Utc>,
) -> Option<ArbitrageOpportunity> {
    // Buy on the cheaper side, sell on the other.
    let (buy, sell) = if pair.source.min_price <= pair.candidate.min_price {
        (&pair.source, &pair.candidate)
    } else {
        (&pair.candidate, &pair.source)
    };

    let breakdown = compute_profit(buy.min_price, sell.min_price, &config.fees);
    if breakdown.profit <= dec!(0) {
        debug!(
            "No executable spread on '{}': profit {:.2}",
            buy.title, breakdown.profit
        );
        return None;
    }

    Some(ArbitrageOpportunity {
        id: Uuid::new_v4().to_string(),
        event: buy.title.clone(),
        date: buy.date.clone().or_else(|| sell.date.clone()),
        venue: buy.venue.clone().or_else(|| sell.venue.clone()),
        buy_from: buy.platform,
        buy_price: buy.min_price,
        sell_to: sell.platform,
        sell_price: sell.min_price,
        tickets_available: buy.tickets_available(),
        profit_per_ticket: breakdown.profit,
        margin_percent: breakdown.margin_percent,
        estimated: false,
        generated_at,
    })
}

fn estimate_for(
    event: &Event,
    config: &Config,
    generated_at: DateTime<Utc>,
) -> Option<ArbitrageOpportunity> {
    let breakdown = estimate_profit(event.min_price, config.estimated_margin_multiplier);
    if breakdown.profit <= dec!(0) {
        return None;
    }

    Some(ArbitrageOpportunity {
        id: Uuid::new_v4().to_string(),
        event: event.title.clone(),
        date: event.date.clone(),
        venue: event.venue.clone(),
        buy_from: event.platform,
        buy_price: event.min_price,
        sell_to: event.platform.counterpart(),
        sell_price: breakdown.net_sell_proceeds,
        tickets_available: event.tickets_available(),
        profit_per_ticket: breakdown.profit,
        margin_percent: breakdown.margin_percent,
        estimated: true,
        generated_at,
    })
}
