use soroban_sdk::{contracttype, Address, Env};
use stellar_contract_utils::pausable;

use crate::error::MarketError;

const TTL_THRESHOLD: u32 = 518_400; // ~30 days
const TTL_EXTEND: u32 = 1_036_800; // ~60 days

/// Everything the marketplace needs to run, kept in one record so that
/// configuration changes are all-or-nothing.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MarketConfig {
    pub owner: Address,
    pub currency: Address,
    pub asset: Address,
    pub fee_receiver: Address,
    /// Commission on the non-refundable part of the fee, strictly below 100.
    pub fee_percentage: u32,
    pub service_fee_min: i128,
    pub leave_fee_per_asset: i128,
    pub offer_registry: Address,
    pub rental_registry: Address,
    pub escrow: Address,
    pub factory: Address,
}

impl MarketConfig {
    pub fn validate(&self) -> Result<(), MarketError> {
        if self.fee_percentage >= 100 {
            return Err(MarketError::InvalidFeePercentage);
        }
        if self.service_fee_min < 0 || self.leave_fee_per_asset < 0 {
            return Err(MarketError::NegativeAmount);
        }
        Ok(())
    }
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,
    Lock,
}

pub fn has_config(e: &Env) -> bool {
    e.storage().instance().has(&DataKey::Config)
}

pub fn config(e: &Env) -> Result<MarketConfig, MarketError> {
    e.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(MarketError::NotInitialized)
}

pub fn put_config(e: &Env, config: &MarketConfig) {
    e.storage().instance().set(&DataKey::Config, config);
    e.storage().instance().extend_ttl(TTL_THRESHOLD, TTL_EXTEND);
}

pub fn require_not_paused(e: &Env) -> Result<(), MarketError> {
    if pausable::paused(e) {
        return Err(MarketError::Paused);
    }
    Ok(())
}

/// Run `op` holding the marketplace-wide operation lock.
///
/// Local registry effects are applied before any outbound call, and the lock
/// makes any nested attempt to enter another guarded operation fail instead of
/// observing the half-finished state.
pub fn guarded<T>(
    e: &Env,
    op: impl FnOnce() -> Result<T, MarketError>,
) -> Result<T, MarketError> {
    if e.storage().instance().has(&DataKey::Lock) {
        return Err(MarketError::Reentrant);
    }
    e.storage().instance().set(&DataKey::Lock, &true);
    let out = op();
    e.storage().instance().remove(&DataKey::Lock);
    out
}

#[cfg(test)]
pub fn hold_lock(e: &Env) {
    e.storage().instance().set(&DataKey::Lock, &true);
}
