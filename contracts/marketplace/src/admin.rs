//! Owner-only configuration.
//!
//! Every setter rewrites the whole [`MarketConfig`] record after validating
//! it, so the stored configuration is never half-updated.

use soroban_sdk::{log, symbol_short, Address, Env, Symbol};
use stellar_contract_utils::pausable;

use crate::{
    error::MarketError,
    events,
    storage::{self, MarketConfig},
};

pub fn init(e: &Env, config: MarketConfig) -> Result<(), MarketError> {
    if storage::has_config(e) {
        return Err(MarketError::AlreadyInitialized);
    }
    config.owner.require_auth();
    config.validate()?;

    storage::put_config(e, &config);
    log!(e, "marketplace initialized", config.owner);
    Ok(())
}

/// Load the configuration and check that `caller` is its owner.
fn authorize(e: &Env, caller: &Address) -> Result<MarketConfig, MarketError> {
    caller.require_auth();
    let config = storage::config(e)?;
    if config.owner != *caller {
        return Err(MarketError::NotOwner);
    }
    Ok(config)
}

fn update(
    e: &Env,
    caller: &Address,
    field: Symbol,
    apply: impl FnOnce(&mut MarketConfig),
) -> Result<(), MarketError> {
    let mut config = authorize(e, caller)?;
    apply(&mut config);
    config.validate()?;

    storage::put_config(e, &config);
    events::config_updated(e, field);
    Ok(())
}

pub fn set_leave_fee(e: &Env, caller: Address, leave_fee_per_asset: i128) -> Result<(), MarketError> {
    update(e, &caller, symbol_short!("leave_fee"), |c| {
        c.leave_fee_per_asset = leave_fee_per_asset
    })
}

pub fn set_service_fee(
    e: &Env,
    caller: Address,
    receiver: Address,
    percentage: u32,
    minimum: i128,
) -> Result<(), MarketError> {
    update(e, &caller, symbol_short!("svc_fee"), |c| {
        c.fee_receiver = receiver;
        c.fee_percentage = percentage;
        c.service_fee_min = minimum;
    })
}

pub fn set_offer_registry(e: &Env, caller: Address, registry: Address) -> Result<(), MarketError> {
    update(e, &caller, symbol_short!("offers"), |c| c.offer_registry = registry)
}

pub fn set_rental_registry(e: &Env, caller: Address, registry: Address) -> Result<(), MarketError> {
    update(e, &caller, symbol_short!("rentals"), |c| c.rental_registry = registry)
}

pub fn set_escrow(e: &Env, caller: Address, escrow: Address) -> Result<(), MarketError> {
    update(e, &caller, symbol_short!("escrow"), |c| c.escrow = escrow)
}

pub fn set_factory(e: &Env, caller: Address, factory: Address) -> Result<(), MarketError> {
    update(e, &caller, symbol_short!("factory"), |c| c.factory = factory)
}

pub fn transfer_ownership(e: &Env, caller: Address, new_owner: Address) -> Result<(), MarketError> {
    update(e, &caller, symbol_short!("owner"), |c| c.owner = new_owner)
}

/// No-op when already paused.
pub fn pause(e: &Env, caller: Address) -> Result<(), MarketError> {
    authorize(e, &caller)?;
    if !pausable::paused(e) {
        pausable::pause(e);
        log!(e, "marketplace paused");
    }
    Ok(())
}

/// No-op when not paused.
pub fn unpause(e: &Env, caller: Address) -> Result<(), MarketError> {
    authorize(e, &caller)?;
    if pausable::paused(e) {
        pausable::unpause(e);
        log!(e, "marketplace unpaused");
    }
    Ok(())
}
