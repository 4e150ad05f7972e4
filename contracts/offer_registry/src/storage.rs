use soroban_sdk::{contracttype, Address, Env, Vec};

use market_interface::{Offer, RegistryError};

// ~30 days of ledgers before a bump, extended to ~60 days.
const TTL_THRESHOLD: u32 = 518_400;
const TTL_EXTEND: u32 = 1_036_800;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Owner,
    NextId,
    /// Live offer ids in insertion order.
    Index,
    Offer(u64),
    ByLender(Address),
}

pub fn has_owner(e: &Env) -> bool {
    e.storage().instance().has(&DataKey::Owner)
}

pub fn set_owner(e: &Env, owner: &Address) {
    e.storage().instance().set(&DataKey::Owner, owner);
}

pub fn owner(e: &Env) -> Result<Address, RegistryError> {
    e.storage()
        .instance()
        .get(&DataKey::Owner)
        .ok_or(RegistryError::NotInitialized)
}

pub fn next_id(e: &Env) -> u64 {
    let mut n: u64 = e.storage().instance().get(&DataKey::NextId).unwrap_or(0);
    n += 1;
    e.storage().instance().set(&DataKey::NextId, &n);
    e.storage().instance().extend_ttl(TTL_THRESHOLD, TTL_EXTEND);
    n
}

pub fn get_offer(e: &Env, id: u64) -> Option<Offer> {
    e.storage().persistent().get(&DataKey::Offer(id))
}

pub fn put_offer(e: &Env, offer: &Offer) {
    let key = DataKey::Offer(offer.id);
    e.storage().persistent().set(&key, offer);
    e.storage().persistent().extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND);
}

pub fn drop_offer(e: &Env, id: u64) {
    e.storage().persistent().remove(&DataKey::Offer(id));
}

pub fn has_offer(e: &Env, id: u64) -> bool {
    e.storage().persistent().has(&DataKey::Offer(id))
}

fn get_ids(e: &Env, key: &DataKey) -> Vec<u64> {
    e.storage().persistent().get(key).unwrap_or(Vec::new(e))
}

fn put_ids(e: &Env, key: &DataKey, ids: &Vec<u64>) {
    if ids.is_empty() {
        e.storage().persistent().remove(key);
    } else {
        e.storage().persistent().set(key, ids);
        e.storage().persistent().extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND);
    }
}

pub fn index(e: &Env) -> Vec<u64> {
    get_ids(e, &DataKey::Index)
}

pub fn by_lender(e: &Env, lender: &Address) -> Vec<u64> {
    get_ids(e, &DataKey::ByLender(lender.clone()))
}

/// Append `id` to the global and lender indices.
pub fn link(e: &Env, id: u64, lender: &Address) {
    for key in [DataKey::Index, DataKey::ByLender(lender.clone())] {
        let mut ids = get_ids(e, &key);
        ids.push_back(id);
        put_ids(e, &key, &ids);
    }
}

/// Remove `id` from both indices, keeping the rest in insertion order.
pub fn unlink(e: &Env, id: u64, lender: &Address) {
    for key in [DataKey::Index, DataKey::ByLender(lender.clone())] {
        let mut ids = get_ids(e, &key);
        if let Some(pos) = ids.first_index_of(id) {
            ids.remove(pos);
        }
        put_ids(e, &key, &ids);
    }
}
