//! Client-side views of every contract the marketplace depends on.

use soroban_sdk::{contractclient, Address, Env, Vec};

use crate::types::{Offer, OfferTerms, RegistryError, RentalEntry, RentalParams};

/// The subset of a non-fungible token the marketplace needs for custody moves.
#[contractclient(name = "AssetClient")]
pub trait AssetInterface {
    fn owner_of(env: Env, token_id: u32) -> Address;

    /// Move `token_id` from `from` to `to`. `from` must authorize.
    fn transfer(env: Env, from: Address, to: Address, token_id: u32);
}

/// Keyed store of pending offers. Mutations are restricted to the registry owner.
#[contractclient(name = "OfferRegistryClient")]
pub trait OfferRegistryInterface {
    fn insert(env: Env, terms: OfferTerms) -> Result<u64, RegistryError>;
    fn remove(env: Env, id: u64) -> Result<(), RegistryError>;
    fn contains(env: Env, id: u64) -> bool;
    fn fields_of(env: Env, id: u64) -> Option<Offer>;
    fn length(env: Env) -> u32;
    fn id_at(env: Env, index: u32) -> Result<u64, RegistryError>;
    fn ids_by_lender(env: Env, lender: Address) -> Vec<u64>;
}

/// Keyed store of live rentals, indexed by lender and tenant.
#[contractclient(name = "RentalRegistryClient")]
pub trait RentalRegistryInterface {
    fn insert(
        env: Env,
        id: Address,
        lender: Address,
        tenant: Address,
        deposit: i128,
    ) -> Result<(), RegistryError>;
    /// Drop the entry and hand it back so the caller can settle it.
    fn remove(env: Env, id: Address) -> Result<RentalEntry, RegistryError>;
    fn contains(env: Env, id: Address) -> bool;
    fn entry_of(env: Env, id: Address) -> Option<RentalEntry>;
    fn length(env: Env) -> u32;
    fn id_at(env: Env, index: u32) -> Result<Address, RegistryError>;
    fn ids_by_lender(env: Env, lender: Address) -> Vec<Address>;
    fn ids_by_tenant(env: Env, tenant: Address) -> Vec<Address>;
}

/// Custody of assets and currency in transit between offer and rental.
#[contractclient(name = "EscrowClient")]
pub trait EscrowInterface {
    fn transfer_assets(env: Env, to: Address, asset_ids: Vec<u32>);
    fn transfer_currency(env: Env, to: Address, amount: i128);
}

/// Produces configured rental instances.
#[contractclient(name = "RentalFactoryClient")]
pub trait RentalFactoryInterface {
    fn instantiate(env: Env, params: RentalParams) -> Address;
}

/// Manager-facing surface of a rental instance.
#[contractclient(name = "RentalClient")]
pub trait RentalInterface {
    /// One-time configuration, called by the factory right after instantiation.
    fn init(env: Env, params: RentalParams);
    fn asset_ids(env: Env) -> Vec<u32>;
    fn lender(env: Env) -> Address;
    fn tenant(env: Env) -> Address;
    fn start_time(env: Env) -> u64;
    fn end_time(env: Env) -> u64;
    fn lender_percentage(env: Env) -> u32;
}

/// Callback a rental instance uses to close itself.
#[contractclient(name = "RentalManagerClient")]
pub trait RentalManagerInterface {
    /// Panics with the manager's contract error when `rental` cannot be settled.
    fn close_rental(env: Env, rental: Address);
}
