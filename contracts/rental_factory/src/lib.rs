#![no_std]
//! Rental instance factory.
//!
//! Every instance is a fresh deployment of the same uploaded wasm template,
//! salted with a monotonic counter so addresses never collide, and then
//! configured through its typed `init`.

use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, log, panic_with_error, symbol_short,
    Address, BytesN, Env,
};

use market_interface::{RentalClient, RentalFactoryInterface, RentalParams};


#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Owner,
    Template,
    Count,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum FactoryError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
}

#[contract]
pub struct RentalFactoryContract;

fn load_owner(e: &Env) -> Address {
    e.storage()
        .instance()
        .get(&DataKey::Owner)
        .unwrap_or_else(|| panic_with_error!(e, FactoryError::NotInitialized))
}

fn load_template(e: &Env) -> BytesN<32> {
    e.storage()
        .instance()
        .get(&DataKey::Template)
        .unwrap_or_else(|| panic_with_error!(e, FactoryError::NotInitialized))
}

/// Salt for the n-th deployment: big-endian counter in the low bytes.
fn salt_for(e: &Env, n: u64) -> BytesN<32> {
    let mut raw = [0u8; 32];
    raw[24..].copy_from_slice(&n.to_be_bytes());
    BytesN::from_array(e, &raw)
}

#[contractimpl]
impl RentalFactoryContract {
    /// One-time initializer. `template` is the hash of the uploaded rental wasm.
    pub fn init(e: Env, owner: Address, template: BytesN<32>) -> Result<(), FactoryError> {
        if e.storage().instance().has(&DataKey::Owner) {
            return Err(FactoryError::AlreadyInitialized);
        }
        e.storage().instance().set(&DataKey::Owner, &owner);
        e.storage().instance().set(&DataKey::Template, &template);
        e.storage().instance().set(&DataKey::Count, &0u64);
        Ok(())
    }

    pub fn owner(e: Env) -> Address {
        load_owner(&e)
    }

    pub fn template(e: Env) -> BytesN<32> {
        load_template(&e)
    }

    /// Number of instances deployed so far.
    pub fn instances(e: Env) -> u64 {
        e.storage().instance().get(&DataKey::Count).unwrap_or(0)
    }

    /// Point future deployments at a new template. Live instances are untouched.
    pub fn set_template(e: Env, template: BytesN<32>) {
        load_owner(&e).require_auth();
        e.storage().instance().set(&DataKey::Template, &template);
        e.events().publish((symbol_short!("template"),), template);
    }
}

#[contractimpl]
impl RentalFactoryInterface for RentalFactoryContract {
    fn instantiate(e: Env, params: RentalParams) -> Address {
        load_owner(&e).require_auth();

        let n: u64 = e.storage().instance().get(&DataKey::Count).unwrap_or(0);
        e.storage().instance().set(&DataKey::Count, &(n + 1));

        let instance = e
            .deployer()
            .with_current_contract(salt_for(&e, n))
            .deploy_v2(load_template(&e), ());
        RentalClient::new(&e, &instance).init(&params);

        log!(&e, "rental instance deployed", instance);
        e.events()
            .publish((symbol_short!("spawned"), instance.clone()), n);
        instance
    }
}
