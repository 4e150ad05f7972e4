#![no_std]
use soroban_sdk::{
    contract, contracterror, contractimpl, panic_with_error, symbol_short, token, Address, Env,
    Symbol, Vec,
};

use market_interface::{AssetClient, EscrowInterface};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum EscrowError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    NegativeAmount = 3,
}

/// Holds offered assets until their offer is cancelled or accepted, and
/// leave-fee deposits until the rental that paid them closes.
///
/// Every outbound move is gated on the owner, which is the marketplace.
#[contract]
pub struct EscrowVault;

// instance storage keys
fn k_owner() -> Symbol { symbol_short!("own") }
fn k_token() -> Symbol { symbol_short!("tok") }
fn k_asset() -> Symbol { symbol_short!("ast") }

fn load(e: &Env, key: &Symbol) -> Address {
    e.storage()
        .instance()
        .get(key)
        .unwrap_or_else(|| panic_with_error!(e, EscrowError::NotInitialized))
}

#[contractimpl]
impl EscrowVault {
    /// One-time initializer.
    pub fn init(e: Env, owner: Address, currency: Address, asset: Address) -> Result<(), EscrowError> {
        if e.storage().instance().has(&k_owner()) {
            return Err(EscrowError::AlreadyInitialized);
        }
        e.storage().instance().set(&k_owner(), &owner);
        e.storage().instance().set(&k_token(), &currency);
        e.storage().instance().set(&k_asset(), &asset);
        Ok(())
    }

    pub fn owner(e: Env) -> Address {
        load(&e, &k_owner())
    }

    pub fn currency(e: Env) -> Address {
        load(&e, &k_token())
    }

    pub fn asset(e: Env) -> Address {
        load(&e, &k_asset())
    }

    /// Hand custody control to another contract; used when the marketplace is redeployed.
    pub fn set_owner(e: Env, new_owner: Address) {
        load(&e, &k_owner()).require_auth();
        e.storage().instance().set(&k_owner(), &new_owner);
        e.events().publish((symbol_short!("owner"),), new_owner);
    }
}

#[contractimpl]
impl EscrowInterface for EscrowVault {
    fn transfer_assets(e: Env, to: Address, asset_ids: Vec<u32>) {
        load(&e, &k_owner()).require_auth();

        let asset = AssetClient::new(&e, &load(&e, &k_asset()));
        let me = e.current_contract_address();
        for id in asset_ids.iter() {
            asset.transfer(&me, &to, &id);
        }

        e.events().publish((symbol_short!("released"), to), asset_ids);
    }

    fn transfer_currency(e: Env, to: Address, amount: i128) {
        load(&e, &k_owner()).require_auth();

        if amount < 0 {
            panic_with_error!(&e, EscrowError::NegativeAmount);
        }
        if amount == 0 {
            return;
        }

        let token = token::Client::new(&e, &load(&e, &k_token()));
        token.transfer(&e.current_contract_address(), &to, &amount);

        e.events().publish((symbol_short!("paid"), to), amount);
    }
}
