//! Acceptance turns an offer into a live rental. Closure is reported by the
//! rental itself and releases its deposit.

use soroban_sdk::{log, token, Address, Env};

use market_interface::{
    EscrowClient, Offer, OfferRegistryClient, RentalFactoryClient, RentalParams,
    RentalRegistryClient,
};

use crate::{
    error::MarketError,
    events,
    fees::{self, FeeSplit},
    storage::{self, MarketConfig},
};

pub fn accept(e: &Env, tenant: Address, offer_id: u64) -> Result<Address, MarketError> {
    tenant.require_auth();

    let config = storage::config(e)?;
    storage::require_not_paused(e)?;

    let offers = OfferRegistryClient::new(e, &config.offer_registry);
    let offer = offers
        .fields_of(&offer_id)
        .ok_or(MarketError::UnknownOffer)?;
    if !offer.open_to(&tenant) {
        return Err(MarketError::NotExclusiveCounterparty);
    }

    // fee settings may have moved since the offer was created
    let split = fees::split(&config, offer.fee, offer.asset_count())?;
    let end_time = e
        .ledger()
        .timestamp()
        .checked_add(offer.duration)
        .ok_or(MarketError::Overflow)?;

    offers.remove(&offer_id);

    collect_fee(e, &config, &tenant, &offer.lender, &split);

    let rental = spawn(e, &config, &offer, &tenant, end_time, split.leave_fee);
    EscrowClient::new(e, &config.escrow).transfer_assets(&rental, &offer.asset_ids);

    events::offer_accepted(e, offer_id, &offer.lender, &tenant, &rental);
    log!(e, "offer accepted", offer_id, rental);
    Ok(rental)
}

/// Pull each leg of the fee from the tenant's allowance. Zero legs are skipped.
fn collect_fee(e: &Env, config: &MarketConfig, tenant: &Address, lender: &Address, split: &FeeSplit) {
    let currency = token::Client::new(e, &config.currency);
    let spender = e.current_contract_address();

    let legs = [
        (&config.escrow, split.leave_fee),
        (&config.fee_receiver, split.service_fee),
        (lender, split.lender_payout),
    ];
    for (to, amount) in legs {
        if amount > 0 {
            currency.transfer_from(&spender, tenant, to, &amount);
        }
    }
}

fn spawn(
    e: &Env,
    config: &MarketConfig,
    offer: &Offer,
    tenant: &Address,
    end_time: u64,
    deposit: i128,
) -> Address {
    let params = RentalParams {
        manager: e.current_contract_address(),
        currency: config.currency.clone(),
        asset: config.asset.clone(),
        lender: offer.lender.clone(),
        tenant: tenant.clone(),
        asset_ids: offer.asset_ids.clone(),
        end_time,
        lender_percentage: offer.lender_percentage,
    };
    let rental = RentalFactoryClient::new(e, &config.factory).instantiate(&params);

    RentalRegistryClient::new(e, &config.rental_registry).insert(
        &rental,
        &offer.lender,
        tenant,
        &deposit,
    );
    rental
}

/// Called by a rental instance while it closes. Only the instance itself can
/// authorize for its own address.
pub fn close(e: &Env, rental: Address) -> Result<(), MarketError> {
    rental.require_auth();

    let config = storage::config(e)?;
    let registry = RentalRegistryClient::new(e, &config.rental_registry);
    if !registry.contains(&rental) {
        return Err(MarketError::UnknownRental);
    }

    let entry = registry.remove(&rental);
    EscrowClient::new(e, &config.escrow).transfer_currency(&rental, &entry.deposit);

    events::rental_closed(e, &rental, &entry.lender, &entry.tenant);
    log!(e, "rental closed", rental);
    Ok(())
}
