//! Fee split applied when an offer is accepted.
//!
//! The tenant pays the offer's `fee` in full. It is divided into
//!
//! * `leave_fee`: `leave_fee_per_asset × asset_count`, held in escrow and
//!   refunded to the rental on close,
//! * `service_fee`: `max(service_fee_min, (fee − leave_fee) × fee_percentage / 100)`,
//!   paid to the fee receiver,
//! * `lender_payout`: whatever remains, paid to the lender.
//!
//! All division floors. The three parts always sum to `fee`.

use soroban_sdk::contracttype;

use crate::{error::MarketError, storage::MarketConfig};

/// Hard cap on assets bundled into a single offer.
pub const MAX_ASSETS_PER_OFFER: u32 = 5;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeeSplit {
    pub leave_fee: i128,
    pub service_fee: i128,
    pub lender_payout: i128,
}

pub fn leave_fee(config: &MarketConfig, asset_count: u32) -> Result<i128, MarketError> {
    config
        .leave_fee_per_asset
        .checked_mul(asset_count as i128)
        .ok_or(MarketError::Overflow)
}

/// Smallest fee an offer with `asset_count` assets may ask for.
pub fn minimum_fee(config: &MarketConfig, asset_count: u32) -> Result<i128, MarketError> {
    leave_fee(config, asset_count)?
        .checked_add(config.service_fee_min)
        .ok_or(MarketError::Overflow)
}

pub fn split(config: &MarketConfig, fee: i128, asset_count: u32) -> Result<FeeSplit, MarketError> {
    let leave_fee = leave_fee(config, asset_count)?;
    if fee < minimum_fee(config, asset_count)? {
        return Err(MarketError::FeeBelowMinimum);
    }

    // fee >= leave_fee + service_fee_min >= leave_fee, so this cannot go negative
    let net = fee - leave_fee;
    let commission = net
        .checked_mul(config.fee_percentage as i128)
        .ok_or(MarketError::Overflow)?
        / 100;
    let service_fee = commission.max(config.service_fee_min);

    Ok(FeeSplit {
        leave_fee,
        service_fee,
        lender_payout: net - service_fee,
    })
}
