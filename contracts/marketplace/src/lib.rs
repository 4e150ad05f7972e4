#![no_std]
//! Rental marketplace.
//!
//! Lenders escrow bundles of assets behind an offer, and tenants accept
//! offers by paying the asked fee. The fee is split into a refundable leave
//! fee, a service fee and the lender's payout, and acceptance spawns a
//! dedicated rental instance that holds the assets until it closes. The
//! marketplace stores only its configuration; offers, rentals and custody
//! live in the collaborator contracts it is wired to.

use soroban_sdk::{contract, contractimpl, panic_with_error, Address, Env, Vec};
use stellar_contract_utils::pausable;

use market_interface::{Offer, Rental, RentalManagerInterface};

mod admin;
mod error;
mod events;
mod fees;
mod offers;
mod queries;
mod rentals;
mod storage;

pub use error::MarketError;
pub use fees::{FeeSplit, MAX_ASSETS_PER_OFFER};
pub use storage::MarketConfig;

#[cfg(test)]
mod test_accept;
#[cfg(test)]
mod test_rentals;

#[contract]
pub struct RentalMarketplace;

#[contractimpl]
impl RentalMarketplace {
    // ---------- setup ----------

    pub fn init(e: Env, config: MarketConfig) -> Result<(), MarketError> {
        admin::init(&e, config)
    }

    pub fn config(e: Env) -> Result<MarketConfig, MarketError> {
        storage::config(&e)
    }

    pub fn paused(e: Env) -> bool {
        pausable::paused(&e)
    }

    // ---------- offers ----------

    /// Escrow `asset_ids` and publish an offer for them. Returns the offer id.
    pub fn create_offer(
        e: Env,
        lender: Address,
        asset_ids: Vec<u32>,
        duration: u64,
        lender_percentage: u32,
        fee: i128,
        exclusive: Option<Address>,
    ) -> Result<u64, MarketError> {
        storage::guarded(&e, || {
            offers::create(&e, lender, asset_ids, duration, lender_percentage, fee, exclusive)
        })
    }

    /// Withdraw an offer that nobody has accepted yet. Allowed while paused.
    pub fn cancel_offer(e: Env, lender: Address, offer_id: u64) -> Result<(), MarketError> {
        storage::guarded(&e, || offers::cancel(&e, lender, offer_id))
    }

    /// Pay for an offer and start the rental. Returns the rental id.
    ///
    /// `tenant` must have approved this contract to spend at least the
    /// offer's fee in the marketplace currency.
    pub fn accept_offer(e: Env, tenant: Address, offer_id: u64) -> Result<Address, MarketError> {
        storage::guarded(&e, || rentals::accept(&e, tenant, offer_id))
    }

    /// How a fee of `fee` for `asset_count` assets would be split today.
    pub fn quote_fees(e: Env, fee: i128, asset_count: u32) -> Result<FeeSplit, MarketError> {
        let config = storage::config(&e)?;
        fees::split(&config, fee, asset_count)
    }

    // ---------- queries ----------

    pub fn get_offer(e: Env, offer_id: u64) -> Result<Offer, MarketError> {
        queries::get_offer(&e, offer_id)
    }

    pub fn offers_of(e: Env, lender: Address) -> Result<Vec<Offer>, MarketError> {
        queries::offers_of(&e, lender)
    }

    pub fn offer_count(e: Env) -> Result<u32, MarketError> {
        queries::offer_count(&e)
    }

    pub fn offers_page(e: Env, start: u32, count: u32) -> Result<Vec<Offer>, MarketError> {
        queries::offers_page(&e, start, count)
    }

    pub fn get_rental(e: Env, rental: Address) -> Result<Rental, MarketError> {
        queries::get_rental(&e, rental)
    }

    pub fn rentals_of_lender(e: Env, lender: Address) -> Result<Vec<Rental>, MarketError> {
        queries::rentals_of_lender(&e, lender)
    }

    pub fn rentals_of_tenant(e: Env, tenant: Address) -> Result<Vec<Rental>, MarketError> {
        queries::rentals_of_tenant(&e, tenant)
    }

    pub fn rental_count(e: Env) -> Result<u32, MarketError> {
        queries::rental_count(&e)
    }

    pub fn rentals_page(e: Env, start: u32, count: u32) -> Result<Vec<Rental>, MarketError> {
        queries::rentals_page(&e, start, count)
    }

    // ---------- admin ----------

    pub fn set_leave_fee(e: Env, owner: Address, leave_fee_per_asset: i128) -> Result<(), MarketError> {
        admin::set_leave_fee(&e, owner, leave_fee_per_asset)
    }

    pub fn set_service_fee(
        e: Env,
        owner: Address,
        receiver: Address,
        percentage: u32,
        minimum: i128,
    ) -> Result<(), MarketError> {
        admin::set_service_fee(&e, owner, receiver, percentage, minimum)
    }

    pub fn set_offer_registry(e: Env, owner: Address, registry: Address) -> Result<(), MarketError> {
        admin::set_offer_registry(&e, owner, registry)
    }

    pub fn set_rental_registry(e: Env, owner: Address, registry: Address) -> Result<(), MarketError> {
        admin::set_rental_registry(&e, owner, registry)
    }

    pub fn set_escrow(e: Env, owner: Address, escrow: Address) -> Result<(), MarketError> {
        admin::set_escrow(&e, owner, escrow)
    }

    pub fn set_factory(e: Env, owner: Address, factory: Address) -> Result<(), MarketError> {
        admin::set_factory(&e, owner, factory)
    }

    pub fn transfer_ownership(e: Env, owner: Address, new_owner: Address) -> Result<(), MarketError> {
        admin::transfer_ownership(&e, owner, new_owner)
    }

    pub fn pause(e: Env, owner: Address) -> Result<(), MarketError> {
        admin::pause(&e, owner)
    }

    pub fn unpause(e: Env, owner: Address) -> Result<(), MarketError> {
        admin::unpause(&e, owner)
    }
}

#[contractimpl]
impl RentalManagerInterface for RentalMarketplace {
    /// Settle a closing rental. Only the rental instance can call this for itself.
    fn close_rental(e: Env, rental: Address) {
        if let Err(err) = storage::guarded(&e, || rentals::close(&e, rental)) {
            panic_with_error!(&e, err);
        }
    }
}
