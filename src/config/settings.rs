//! Scanner configuration settings and environment variable handling

use rust_decimal::prelude::*;
use rust_decimal_macros::dec;
use std::env;
use std::str::FromStr;

use crate::errors::{ScannerError, ScannerResult};

// Configuration constants
pub const DEFAULT_BUYER_FEE_RATE: Decimal = dec!(0.18); // 18% buyer service fee
pub const DEFAULT_SELLER_FEE_RATE: Decimal = dec!(0.15); // 15% seller commission
pub const DEFAULT_ESTIMATED_MARGIN_MULTIPLIER: Decimal = dec!(1.20); // 20% assumed uplift
pub const DEFAULT_MAX_EVENTS_PER_PLATFORM: usize = 3; // free-tier listing depth

/// Buyer/seller fee rates for a buy-platform/sell-platform pair.
/// A configuration value, never mutated during a scan cycle.
#[derive(Debug, Clone, Copy)]
pub struct FeeSchedule {
    pub buyer_fee_rate: Decimal,
    pub seller_fee_rate: Decimal,
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self {
            buyer_fee_rate: DEFAULT_BUYER_FEE_RATE,
            seller_fee_rate: DEFAULT_SELLER_FEE_RATE,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub fees: FeeSchedule,
    pub estimated_margin_multiplier: Decimal,
    pub enable_fallback_estimates: bool,
    pub max_events_per_platform: usize,
    pub input_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fees: FeeSchedule::default(),
            estimated_margin_multiplier: DEFAULT_ESTIMATED_MARGIN_MULTIPLIER,
            enable_fallback_estimates: true,
            max_events_per_platform: DEFAULT_MAX_EVENTS_PER_PLATFORM,
            input_dir: "input".to_string(),
        }
    }
}

impl Config {
    pub fn load() -> Self {
        Self {
            fees: FeeSchedule {
                buyer_fee_rate: env::var("BUYER_FEE_RATE")
                    .ok()
                    .and_then(|s| Decimal::from_str(&s).ok())
                    .unwrap_or(DEFAULT_BUYER_FEE_RATE),
                seller_fee_rate: env::var("SELLER_FEE_RATE")
                    .ok()
                    .and_then(|s| Decimal::from_str(&s).ok())
                    .unwrap_or(DEFAULT_SELLER_FEE_RATE),
            },
            estimated_margin_multiplier: env::var("ESTIMATED_MARGIN_MULTIPLIER")
                .ok()
                .and_then(|s| Decimal::from_str(&s).ok())
                .unwrap_or(DEFAULT_ESTIMATED_MARGIN_MULTIPLIER),
            enable_fallback_estimates: env::var("ENABLE_FALLBACK_ESTIMATES")
                .unwrap_or_else(|_| "true".to_string())
                .parse()
                .unwrap_or(true),
            max_events_per_platform: env::var("MAX_EVENTS_PER_PLATFORM")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_MAX_EVENTS_PER_PLATFORM),
            input_dir: env::var("INPUT_DIR").unwrap_or_else(|_| "input".to_string()),
        }
    }

    /// Reject nonsensical parameters before any profit arithmetic runs.
    /// A fee rate outside [0, 1) would produce negative costs or
    /// proceeds; refusing up front beats emitting garbage numbers.
    pub fn validate(&self) -> ScannerResult<()> {
        validate_fee_rate("BUYER_FEE_RATE", self.fees.buyer_fee_rate)?;
        validate_fee_rate("SELLER_FEE_RATE", self.fees.seller_fee_rate)?;

        if self.estimated_margin_multiplier <= dec!(0) {
            return Err(ScannerError::Configuration {
                parameter: "ESTIMATED_MARGIN_MULTIPLIER",
                value: self.estimated_margin_multiplier.to_string(),
                reason: "must be positive".to_string(),
            });
        }

        if self.max_events_per_platform == 0 {
            return Err(ScannerError::Configuration {
                parameter: "MAX_EVENTS_PER_PLATFORM",
                value: "0".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }

        Ok(())
    }
}

fn validate_fee_rate(parameter: &'static str, rate: Decimal) -> ScannerResult<()> {
    if rate < dec!(0) || rate >= dec!(1) {
        return Err(ScannerError::Configuration {
            parameter,
            value: rate.to_string(),
            reason: "fee rate must be in [0, 1)".to_string(),
        });
    }
    Ok(())
}
