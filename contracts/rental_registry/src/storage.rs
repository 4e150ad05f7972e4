use soroban_sdk::{contracttype, Address, Env, Vec};

use market_interface::{RegistryError, RentalEntry};

const TTL_THRESHOLD: u32 = 518_400;
const TTL_EXTEND: u32 = 1_036_800;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Owner,
    /// Live rental ids in insertion order.
    Index,
    Rental(Address),
    ByLender(Address),
    ByTenant(Address),
}

pub fn has_owner(e: &Env) -> bool {
    e.storage().instance().has(&DataKey::Owner)
}

pub fn set_owner(e: &Env, owner: &Address) {
    e.storage().instance().set(&DataKey::Owner, owner);
    e.storage().instance().extend_ttl(TTL_THRESHOLD, TTL_EXTEND);
}

pub fn owner(e: &Env) -> Result<Address, RegistryError> {
    e.storage()
        .instance()
        .get(&DataKey::Owner)
        .ok_or(RegistryError::NotInitialized)
}

pub fn get_entry(e: &Env, id: &Address) -> Option<RentalEntry> {
    e.storage().persistent().get(&DataKey::Rental(id.clone()))
}

pub fn put_entry(e: &Env, id: &Address, entry: &RentalEntry) {
    let key = DataKey::Rental(id.clone());
    e.storage().persistent().set(&key, entry);
    e.storage().persistent().extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND);
}

pub fn drop_entry(e: &Env, id: &Address) {
    e.storage().persistent().remove(&DataKey::Rental(id.clone()));
}

pub fn has_entry(e: &Env, id: &Address) -> bool {
    e.storage().persistent().has(&DataKey::Rental(id.clone()))
}

pub fn ids(e: &Env, key: &DataKey) -> Vec<Address> {
    e.storage().persistent().get(key).unwrap_or(Vec::new(e))
}

fn put_ids(e: &Env, key: &DataKey, ids: &Vec<Address>) {
    if ids.is_empty() {
        e.storage().persistent().remove(key);
    } else {
        e.storage().persistent().set(key, ids);
        e.storage().persistent().extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND);
    }
}

fn keys_for(entry: &RentalEntry) -> [DataKey; 3] {
    [
        DataKey::Index,
        DataKey::ByLender(entry.lender.clone()),
        DataKey::ByTenant(entry.tenant.clone()),
    ]
}

pub fn link(e: &Env, id: &Address, entry: &RentalEntry) {
    for key in keys_for(entry) {
        let mut list = ids(e, &key);
        list.push_back(id.clone());
        put_ids(e, &key, &list);
    }
}

pub fn unlink(e: &Env, id: &Address, entry: &RentalEntry) {
    for key in keys_for(entry) {
        let mut list = ids(e, &key);
        if let Some(pos) = list.first_index_of(id.clone()) {
            list.remove(pos);
        }
        put_ids(e, &key, &list);
    }
}
