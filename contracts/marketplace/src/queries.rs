use soroban_sdk::{Address, Env, Vec};

use market_interface::{Offer, OfferRegistryClient, Rental, RentalClient, RentalRegistryClient};

use crate::{error::MarketError, storage};

pub fn get_offer(e: &Env, id: u64) -> Result<Offer, MarketError> {
    let config = storage::config(e)?;
    OfferRegistryClient::new(e, &config.offer_registry)
        .fields_of(&id)
        .ok_or(MarketError::UnknownOffer)
}

pub fn offers_of(e: &Env, lender: Address) -> Result<Vec<Offer>, MarketError> {
    let config = storage::config(e)?;
    let registry = OfferRegistryClient::new(e, &config.offer_registry);

    let mut out = Vec::new(e);
    for id in registry.ids_by_lender(&lender).iter() {
        out.push_back(registry.fields_of(&id).ok_or(MarketError::UnknownOffer)?);
    }
    Ok(out)
}

pub fn offer_count(e: &Env) -> Result<u32, MarketError> {
    let config = storage::config(e)?;
    Ok(OfferRegistryClient::new(e, &config.offer_registry).length())
}

pub fn offers_page(e: &Env, start: u32, count: u32) -> Result<Vec<Offer>, MarketError> {
    let config = storage::config(e)?;
    let registry = OfferRegistryClient::new(e, &config.offer_registry);
    check_page(start, count, registry.length())?;

    let mut out = Vec::new(e);
    for i in start..start + count {
        let id = registry.id_at(&i);
        out.push_back(registry.fields_of(&id).ok_or(MarketError::UnknownOffer)?);
    }
    Ok(out)
}

/// Rebuild the full view from the instance's own getters.
pub fn get_rental(e: &Env, id: Address) -> Result<Rental, MarketError> {
    let config = storage::config(e)?;
    if !RentalRegistryClient::new(e, &config.rental_registry).contains(&id) {
        return Err(MarketError::UnknownRental);
    }
    Ok(view(e, id))
}

pub fn rentals_of_lender(e: &Env, lender: Address) -> Result<Vec<Rental>, MarketError> {
    let config = storage::config(e)?;
    let ids = RentalRegistryClient::new(e, &config.rental_registry).ids_by_lender(&lender);
    Ok(views(e, ids))
}

pub fn rentals_of_tenant(e: &Env, tenant: Address) -> Result<Vec<Rental>, MarketError> {
    let config = storage::config(e)?;
    let ids = RentalRegistryClient::new(e, &config.rental_registry).ids_by_tenant(&tenant);
    Ok(views(e, ids))
}

pub fn rental_count(e: &Env) -> Result<u32, MarketError> {
    let config = storage::config(e)?;
    Ok(RentalRegistryClient::new(e, &config.rental_registry).length())
}

pub fn rentals_page(e: &Env, start: u32, count: u32) -> Result<Vec<Rental>, MarketError> {
    let config = storage::config(e)?;
    let registry = RentalRegistryClient::new(e, &config.rental_registry);
    check_page(start, count, registry.length())?;

    let mut out = Vec::new(e);
    for i in start..start + count {
        out.push_back(view(e, registry.id_at(&i)));
    }
    Ok(out)
}

fn check_page(start: u32, count: u32, len: u32) -> Result<(), MarketError> {
    match start.checked_add(count) {
        Some(end) if end <= len => Ok(()),
        _ => Err(MarketError::OutOfRange),
    }
}

fn views(e: &Env, ids: Vec<Address>) -> Vec<Rental> {
    let mut out = Vec::new(e);
    for id in ids.iter() {
        out.push_back(view(e, id));
    }
    out
}

fn view(e: &Env, id: Address) -> Rental {
    let rental = RentalClient::new(e, &id);
    Rental {
        asset_ids: rental.asset_ids(),
        lender: rental.lender(),
        tenant: rental.tenant(),
        start_time: rental.start_time(),
        end_time: rental.end_time(),
        lender_percentage: rental.lender_percentage(),
        id,
    }
}
