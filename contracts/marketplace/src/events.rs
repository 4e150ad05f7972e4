use soroban_sdk::{symbol_short, Address, Env, Symbol};

use market_interface::Offer;

pub const OFFER: Symbol = symbol_short!("offer");
pub const RENTAL: Symbol = symbol_short!("rental");
pub const CONFIG: Symbol = symbol_short!("config");

pub const CREATED: Symbol = symbol_short!("created");
pub const REMOVED: Symbol = symbol_short!("removed");
pub const ACCEPTED: Symbol = symbol_short!("accepted");
pub const CLOSED: Symbol = symbol_short!("closed");

/// data: (id, lender, asset_ids, lender_percentage, fee, exclusive)
pub fn offer_created(e: &Env, offer: &Offer) {
    e.events().publish(
        (OFFER, CREATED),
        (
            offer.id,
            offer.lender.clone(),
            offer.asset_ids.clone(),
            offer.lender_percentage,
            offer.fee,
            offer.exclusive.clone(),
        ),
    );
}

/// data: (id, lender)
pub fn offer_removed(e: &Env, id: u64, lender: &Address) {
    e.events().publish((OFFER, REMOVED), (id, lender.clone()));
}

/// data: (id, lender, tenant, rental_id)
pub fn offer_accepted(e: &Env, id: u64, lender: &Address, tenant: &Address, rental: &Address) {
    e.events().publish(
        (OFFER, ACCEPTED),
        (id, lender.clone(), tenant.clone(), rental.clone()),
    );
}

/// data: (rental_id, lender, tenant)
pub fn rental_closed(e: &Env, rental: &Address, lender: &Address, tenant: &Address) {
    e.events().publish(
        (RENTAL, CLOSED),
        (rental.clone(), lender.clone(), tenant.clone()),
    );
}

pub fn config_updated(e: &Env, field: Symbol) {
    e.events().publish((CONFIG, field), ());
}
