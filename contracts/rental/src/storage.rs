use soroban_sdk::{contracttype, panic_with_error, Env};

use market_interface::RentalParams;

use crate::RentalError;

// Instances live for the whole rental; keep them well ahead of archival.
const TTL_THRESHOLD: u32 = 518_400;
const TTL_EXTEND: u32 = 1_036_800;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Params,
    StartTime,
    Closed,
}

pub fn is_configured(e: &Env) -> bool {
    e.storage().instance().has(&DataKey::Params)
}

pub fn configure(e: &Env, params: &RentalParams, start_time: u64) {
    e.storage().instance().set(&DataKey::Params, params);
    e.storage().instance().set(&DataKey::StartTime, &start_time);
    e.storage().instance().set(&DataKey::Closed, &false);
    e.storage().instance().extend_ttl(TTL_THRESHOLD, TTL_EXTEND);
}

pub fn params(e: &Env) -> RentalParams {
    e.storage()
        .instance()
        .get(&DataKey::Params)
        .unwrap_or_else(|| panic_with_error!(e, RentalError::NotInitialized))
}

pub fn start_time(e: &Env) -> u64 {
    e.storage()
        .instance()
        .get(&DataKey::StartTime)
        .unwrap_or_else(|| panic_with_error!(e, RentalError::NotInitialized))
}

pub fn is_closed(e: &Env) -> bool {
    e.storage().instance().get(&DataKey::Closed).unwrap_or(false)
}

pub fn mark_closed(e: &Env) {
    e.storage().instance().set(&DataKey::Closed, &true);
}
