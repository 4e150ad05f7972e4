#![no_std]
//! Enumerable NFT collection used as the rentable asset.
//!
//! Minting is restricted to the collection owner and ids are assigned
//! sequentially. Transfers, approvals and enumeration come from the
//! OpenZeppelin defaults.

use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, panic_with_error, Address, Env, String,
};
use stellar_macros::default_impl;
use stellar_tokens::non_fungible::{
    enumerable::{Enumerable, NonFungibleEnumerable},
    Base, NonFungibleToken,
};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Owner,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum AssetError {
    NotInitialized = 1,
}

#[contract]
pub struct RentalAsset;

#[contractimpl]
impl RentalAsset {
    pub fn __constructor(e: &Env, owner: Address, base_uri: String, name: String, symbol: String) {
        e.storage().instance().set(&DataKey::Owner, &owner);
        Base::set_metadata(e, base_uri, name, symbol);
    }

    pub fn mint(e: &Env, to: Address) -> u32 {
        let owner: Address = e
            .storage()
            .instance()
            .get(&DataKey::Owner)
            .unwrap_or_else(|| panic_with_error!(e, AssetError::NotInitialized));
        owner.require_auth();
        Enumerable::sequential_mint(e, &to)
    }
}

#[default_impl]
#[contractimpl]
impl NonFungibleToken for RentalAsset {
    type ContractType = Enumerable;
}

#[default_impl]
#[contractimpl]
impl NonFungibleEnumerable for RentalAsset {}
