#![no_std]
//! Registry of live rentals.
//!
//! Each rental is keyed by the address of its instance contract and indexed
//! by lender and by tenant. Lender and tenant may be the same address, in
//! which case the rental shows up once in each index.

use soroban_sdk::{contract, contractimpl, log, Address, Env, Vec};

use market_interface::{RegistryError, RentalEntry, RentalRegistryInterface};

mod storage;

use storage::DataKey;


#[contract]
pub struct RentalRegistryContract;

#[contractimpl]
impl RentalRegistryContract {
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
impl RentalRegistryInterface for RentalRegistryContract {
    fn insert(
        e: Env,
        id: Address,
        lender: Address,
        tenant: Address,
        deposit: i128,
    ) -> Result<(), RegistryError> {
        storage::owner(&e)?.require_auth();

        if storage::has_entry(&e, &id) {
            return Err(RegistryError::DuplicateEntry);
        }

        let entry = RentalEntry { lender, tenant, deposit };
        storage::put_entry(&e, &id, &entry);
        storage::link(&e, &id, &entry);

        log!(&e, "rental registered", id);
        Ok(())
    }

    fn remove(e: Env, id: Address) -> Result<RentalEntry, RegistryError> {
        storage::owner(&e)?.require_auth();

        let entry = storage::get_entry(&e, &id).ok_or(RegistryError::UnknownEntry)?;
        storage::drop_entry(&e, &id);
        storage::unlink(&e, &id, &entry);

        log!(&e, "rental removed", id);
        Ok(entry)
    }

    fn contains(e: Env, id: Address) -> bool {
        storage::has_entry(&e, &id)
    }

    fn entry_of(e: Env, id: Address) -> Option<RentalEntry> {
        storage::get_entry(&e, &id)
    }

    fn length(e: Env) -> u32 {
        storage::ids(&e, &DataKey::Index).len()
    }

    fn id_at(e: Env, index: u32) -> Result<Address, RegistryError> {
        storage::ids(&e, &DataKey::Index)
            .get(index)
            .ok_or(RegistryError::IndexOutOfRange)
    }

    fn ids_by_lender(e: Env, lender: Address) -> Vec<Address> {
        storage::ids(&e, &DataKey::ByLender(lender))
    }

    fn ids_by_tenant(e: Env, tenant: Address) -> Vec<Address> {
        storage::ids(&e, &DataKey::ByTenant(tenant))
    }
}
