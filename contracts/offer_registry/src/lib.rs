#![no_std]
//! Pending offers, keyed by id and indexed by lender.
//!
//! Only the configured owner (the marketplace) may insert or remove. Reads are
//! open so indexers can page through offers without going through the owner.

use soroban_sdk::{contract, contractimpl, log, Address, Env, Vec};

use market_interface::{Offer, OfferRegistryInterface, OfferTerms, RegistryError};

mod storage;


#[contract]
pub struct OfferRegistryContract;

#[contractimpl]
impl OfferRegistryContract {
    /// One-time initializer.
    pub fn init(e: Env, owner: Address) -> Result<(), RegistryError> {
        if storage::has_owner(&e) {
            return Err(RegistryError::AlreadyInitialized);
        }
        storage::set_owner(&e, &owner);
        Ok(())
    }

    pub fn owner(e: Env) -> Result<Address, RegistryError> {
        storage::owner(&e)
    }
}

#[contractimpl]
impl OfferRegistryInterface for OfferRegistryContract {
    fn insert(e: Env, terms: OfferTerms) -> Result<u64, RegistryError> {
        storage::owner(&e)?.require_auth();

        let id = storage::next_id(&e);
        let offer = Offer::from_terms(id, terms);
        storage::put_offer(&e, &offer);
        storage::link(&e, id, &offer.lender);

        log!(&e, "offer inserted", id);
        Ok(id)
    }

    fn remove(e: Env, id: u64) -> Result<(), RegistryError> {
        storage::owner(&e)?.require_auth();

        let offer = storage::get_offer(&e, id).ok_or(RegistryError::UnknownEntry)?;
        storage::drop_offer(&e, id);
        storage::unlink(&e, id, &offer.lender);

        log!(&e, "offer removed", id);
        Ok(())
    }

    fn contains(e: Env, id: u64) -> bool {
        storage::has_offer(&e, id)
    }

    fn fields_of(e: Env, id: u64) -> Option<Offer> {
        storage::get_offer(&e, id)
    }

    fn length(e: Env) -> u32 {
        storage::index(&e).len()
    }

    fn id_at(e: Env, index: u32) -> Result<u64, RegistryError> {
        storage::index(&e)
            .get(index)
            .ok_or(RegistryError::IndexOutOfRange)
    }

    fn ids_by_lender(e: Env, lender: Address) -> Vec<u64> {
        storage::by_lender(&e, &lender)
    }
}
