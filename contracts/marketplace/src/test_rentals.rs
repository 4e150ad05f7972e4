#![cfg(test)]

use soroban_sdk::{
    testutils::{Address as _, Ledger},
    vec, Address, Env, IntoVal, Vec,
};

use market_interface::Rental;
use rental::{RentalError, RentalInstanceClient};

use crate::{
    events::{CLOSED, RENTAL},
    testutils::{Market, DURATION, START},
    MarketError,
};

/// Lender with one open rental of `count` assets at the reference fee of 100_000.
fn rented(m: &Market, count: u32) -> (Address, Address, Vec<u32>, Address) {
    let (lender, ids) = m.lender_with_assets(count);
    let tenant = m.funded_tenant(100_000);
    let id = m.offer(&lender, &ids, 100_000);
    let rental = m.accept(&tenant, id);
    (lender, tenant, ids, rental)
}

fn ids_of(e: &Env, rentals: Vec<Rental>) -> Vec<Address> {
    let mut ids = Vec::new(e);
    for r in rentals.iter() {
        ids.push_back(r.id);
    }
    ids
}

#[test]
fn test_tenant_close_refunds_deposit_to_rental() {
    let e = Env::default();
    let m = Market::setup(&e);
    let (lender, tenant, ids, rental) = rented(&m, 2);

    RentalInstanceClient::new(&e, &rental).close(&tenant);

    for asset_id in ids.iter() {
        assert_eq!(m.asset.owner_of(&asset_id), lender);
    }
    assert_eq!(m.currency.balance(&rental), 20_000);
    assert_eq!(m.currency.balance(&m.escrow), 0);
    assert_eq!(m.client.rental_count(), 0);
    assert_eq!(
        m.client.try_get_rental(&rental),
        Err(Ok(MarketError::UnknownRental))
    );

    let data = m.last_event((RENTAL, CLOSED)).unwrap();
    let event: (Address, Address, Address) = data.into_val(&e);
    assert_eq!(event, (rental, lender, tenant));
}

#[test]
fn test_lender_closes_only_after_end() {
    let e = Env::default();
    let m = Market::setup(&e);
    let (lender, _tenant, ids, rental) = rented(&m, 1);
    let instance = RentalInstanceClient::new(&e, &rental);

    assert_eq!(
        instance.try_close(&lender),
        Err(Ok(RentalError::StillRunning))
    );

    e.ledger().with_mut(|l| l.timestamp = START + DURATION);
    instance.close(&lender);

    assert_eq!(m.asset.owner_of(&ids.get_unchecked(0)), lender);
    assert_eq!(m.client.rental_count(), 0);
    assert!(instance.closed());
}

#[test]
fn test_closing_one_rental_leaves_others() {
    let e = Env::default();
    let m = Market::setup(&e);
    let (_, first_tenant, _, first) = rented(&m, 1);
    let (_, _, second_ids, second) = rented(&m, 2);

    RentalInstanceClient::new(&e, &first).close(&first_tenant);

    assert_eq!(m.client.rental_count(), 1);
    assert_eq!(m.client.get_rental(&second).asset_ids, second_ids);
    for asset_id in second_ids.iter() {
        assert_eq!(m.asset.owner_of(&asset_id), second);
    }
    // the second rental's deposit is still escrowed
    assert_eq!(m.currency.balance(&m.escrow), 20_000);
    assert_eq!(m.currency.balance(&first), 10_000);
}

#[test]
fn test_close_from_unregistered_address_rejected() {
    let e = Env::default();
    let m = Market::setup(&e);
    rented(&m, 1);

    assert_eq!(
        m.client.try_close_rental(&Address::generate(&e)),
        Err(Ok(MarketError::UnknownRental.into()))
    );
    assert_eq!(m.client.rental_count(), 1);
    assert_eq!(m.currency.balance(&m.escrow), 10_000);
}

#[test]
fn test_close_is_single_shot() {
    let e = Env::default();
    let m = Market::setup(&e);
    let (_, tenant, _, rental) = rented(&m, 1);
    let instance = RentalInstanceClient::new(&e, &rental);

    instance.close(&tenant);

    assert_eq!(
        instance.try_close(&tenant),
        Err(Ok(RentalError::AlreadyClosed))
    );
    assert_eq!(
        m.client.try_close_rental(&rental),
        Err(Ok(MarketError::UnknownRental.into()))
    );
}

#[test]
fn test_close_allowed_while_paused() {
    let e = Env::default();
    let m = Market::setup(&e);
    let (lender, tenant, ids, rental) = rented(&m, 1);

    m.client.pause(&m.owner);
    RentalInstanceClient::new(&e, &rental).close(&tenant);

    assert_eq!(m.asset.owner_of(&ids.get_unchecked(0)), lender);
    assert_eq!(m.client.rental_count(), 0);
}

#[test]
fn test_rental_indexes_and_pages() {
    let e = Env::default();
    let m = Market::setup(&e);
    let (lender, ids) = m.lender_with_assets(3);
    let alice = m.funded_tenant(150_000);
    let bob = m.funded_tenant(50_000);

    let o1 = m.offer(&lender, &vec![&e, ids.get_unchecked(0)], 50_000);
    let o2 = m.offer(&lender, &vec![&e, ids.get_unchecked(1)], 50_000);
    let o3 = m.offer(&lender, &vec![&e, ids.get_unchecked(2)], 50_000);
    let r1 = m.accept(&alice, o1);
    let r2 = m.accept(&bob, o2);
    let r3 = m.accept(&alice, o3);

    assert_eq!(ids_of(&e, m.client.rentals_of_tenant(&alice)), vec![&e, r1.clone(), r3.clone()]);
    assert_eq!(ids_of(&e, m.client.rentals_of_tenant(&bob)), vec![&e, r2.clone()]);
    assert_eq!(
        ids_of(&e, m.client.rentals_of_lender(&lender)),
        vec![&e, r1.clone(), r2.clone(), r3.clone()]
    );

    RentalInstanceClient::new(&e, &r2).close(&bob);

    assert_eq!(ids_of(&e, m.client.rentals_page(&0, &2)), vec![&e, r1.clone(), r3.clone()]);
    assert_eq!(ids_of(&e, m.client.rentals_page(&1, &1)), vec![&e, r3]);
    assert_eq!(m.client.rentals_of_tenant(&bob).len(), 0);
    assert_eq!(
        m.client.try_rentals_page(&1, &2),
        Err(Ok(MarketError::OutOfRange))
    );
}
