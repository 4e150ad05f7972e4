#![cfg(test)]

use soroban_sdk::{testutils::Address as _, vec, Address, Env, IntoVal};

use crate::{
    events::{ACCEPTED, OFFER},
    testutils::{Market, DURATION, START},
    FeeSplit, MarketError,
};

#[test]
fn test_accept_splits_fee() {
    let e = Env::default();
    let m = Market::setup(&e);
    let (lender, ids) = m.lender_with_assets(2);
    let tenant = m.funded_tenant(100_000);
    let id = m.offer(&lender, &ids, 100_000);

    let rental = m.accept(&tenant, id);

    assert_eq!(m.currency.balance(&tenant), 0);
    assert_eq!(m.currency.balance(&m.escrow), 20_000);
    assert_eq!(m.currency.balance(&m.fee_receiver), 4_000);
    assert_eq!(m.currency.balance(&lender), 76_000);
    assert_eq!(m.currency.balance(&m.id), 0);

    for asset_id in ids.iter() {
        assert_eq!(m.asset.owner_of(&asset_id), rental);
    }
    assert_eq!(m.client.offer_count(), 0);
    assert_eq!(m.client.rental_count(), 1);
    assert_eq!(m.rentals.entry_of(&rental).unwrap().deposit, 20_000);
}

#[test]
fn test_accept_records_rental_terms() {
    let e = Env::default();
    let m = Market::setup(&e);
    let (lender, ids) = m.lender_with_assets(1);
    let tenant = m.funded_tenant(50_000);
    let id = m.offer(&lender, &ids, 50_000);

    let rental_id = m.accept(&tenant, id);

    let rental = m.client.get_rental(&rental_id);
    assert_eq!(rental.id, rental_id);
    assert_eq!(rental.lender, lender);
    assert_eq!(rental.tenant, tenant);
    assert_eq!(rental.asset_ids, ids);
    assert_eq!(rental.start_time, START);
    assert_eq!(rental.end_time, START + DURATION);
    assert_eq!(rental.lender_percentage, 30);

    let instance = rental::RentalInstanceClient::new(&e, &rental_id);
    assert_eq!(instance.manager(), m.id);
    assert_eq!(instance.currency(), m.currency.address);
}

#[test]
fn test_accept_publishes_event() {
    let e = Env::default();
    let m = Market::setup(&e);
    let (lender, ids) = m.lender_with_assets(1);
    let tenant = m.funded_tenant(50_000);
    let id = m.offer(&lender, &ids, 50_000);

    let rental = m.accept(&tenant, id);

    let data = m.last_event((OFFER, ACCEPTED)).unwrap();
    let event: (u64, Address, Address, Address) = data.into_val(&e);
    assert_eq!(event, (id, lender, tenant, rental));
}

#[test]
fn test_minimum_fee_leaves_lender_nothing() {
    let e = Env::default();
    let m = Market::setup(&e);
    let (lender, ids) = m.lender_with_assets(2);
    let tenant = m.funded_tenant(23_000);
    let id = m.offer(&lender, &ids, 23_000);

    m.accept(&tenant, id);

    assert_eq!(m.currency.balance(&m.escrow), 20_000);
    assert_eq!(m.currency.balance(&m.fee_receiver), 3_000);
    assert_eq!(m.currency.balance(&lender), 0);
}

#[test]
fn test_offer_accepted_at_most_once() {
    let e = Env::default();
    let m = Market::setup(&e);
    let (lender, ids) = m.lender_with_assets(1);
    let first = m.funded_tenant(50_000);
    let second = m.funded_tenant(50_000);
    let id = m.offer(&lender, &ids, 50_000);

    m.accept(&first, id);
    m.stage_rental();

    assert_eq!(
        m.client.try_accept_offer(&second, &id),
        Err(Ok(MarketError::UnknownOffer))
    );
    assert_eq!(
        m.client.try_cancel_offer(&lender, &id),
        Err(Ok(MarketError::UnknownOffer))
    );
    assert_eq!(m.currency.balance(&second), 50_000);
    assert_eq!(m.client.rental_count(), 1);
}

#[test]
fn test_exclusive_offer() {
    let e = Env::default();
    let m = Market::setup(&e);
    let (lender, ids) = m.lender_with_assets(1);
    let chosen = m.funded_tenant(50_000);
    let stranger = m.funded_tenant(50_000);
    let id = m
        .client
        .create_offer(&lender, &ids, &DURATION, &30, &50_000, &Some(chosen.clone()));
    m.stage_rental();

    assert_eq!(
        m.client.try_accept_offer(&stranger, &id),
        Err(Ok(MarketError::NotExclusiveCounterparty))
    );

    let rental = m.client.accept_offer(&chosen, &id);
    assert_eq!(m.client.get_rental(&rental).tenant, chosen);
}

#[test]
fn test_missing_allowance_rolls_back() {
    let e = Env::default();
    let m = Market::setup(&e);
    let (lender, ids) = m.lender_with_assets(2);
    let tenant = Address::generate(&e);
    m.mint_currency.mint(&tenant, &100_000);
    // enough for the deposit and the service fee but not the payout
    m.approve(&tenant, 30_000);
    let id = m.offer(&lender, &ids, 100_000);
    m.stage_rental();

    assert!(m.client.try_accept_offer(&tenant, &id).is_err());

    assert_eq!(m.currency.balance(&tenant), 100_000);
    assert_eq!(m.currency.balance(&m.escrow), 0);
    assert_eq!(m.currency.balance(&m.fee_receiver), 0);
    assert_eq!(m.client.get_offer(&id).id, id);
    assert_eq!(m.client.rental_count(), 0);
    for asset_id in ids.iter() {
        assert_eq!(m.asset.owner_of(&asset_id), m.escrow);
    }
}

#[test]
fn test_raised_fees_block_old_offers() {
    let e = Env::default();
    let m = Market::setup(&e);
    let (lender, ids) = m.lender_with_assets(2);
    let tenant = m.funded_tenant(25_000);
    let id = m.offer(&lender, &ids, 25_000);
    m.stage_rental();

    m.client.set_leave_fee(&m.owner, &12_000);

    assert_eq!(
        m.client.try_accept_offer(&tenant, &id),
        Err(Ok(MarketError::FeeBelowMinimum))
    );
    assert_eq!(m.client.get_offer(&id).fee, 25_000);

    m.client.cancel_offer(&lender, &id);
    assert_eq!(m.asset.owner_of(&ids.get_unchecked(0)), lender);
}

#[test]
fn test_accept_rejected_while_paused() {
    let e = Env::default();
    let m = Market::setup(&e);
    let (lender, ids) = m.lender_with_assets(1);
    let tenant = m.funded_tenant(50_000);
    let id = m.offer(&lender, &ids, 50_000);
    m.stage_rental();

    m.client.pause(&m.owner);
    assert_eq!(
        m.client.try_accept_offer(&tenant, &id),
        Err(Ok(MarketError::Paused))
    );

    m.client.unpause(&m.owner);
    m.client.accept_offer(&tenant, &id);
    assert_eq!(m.client.rental_count(), 1);
}

#[test]
fn test_unknown_offer() {
    let e = Env::default();
    let m = Market::setup(&e);
    let tenant = m.funded_tenant(50_000);

    assert_eq!(
        m.client.try_accept_offer(&tenant, &7),
        Err(Ok(MarketError::UnknownOffer))
    );
}

#[test]
fn test_overlong_duration_rejected() {
    let e = Env::default();
    let m = Market::setup(&e);
    let (lender, ids) = m.lender_with_assets(1);
    let tenant = m.funded_tenant(50_000);
    let id = m
        .client
        .create_offer(&lender, &ids, &u64::MAX, &30, &50_000, &None);
    m.stage_rental();

    assert_eq!(
        m.client.try_accept_offer(&tenant, &id),
        Err(Ok(MarketError::Overflow))
    );
}

#[test]
fn test_quote_matches_settlement() {
    let e = Env::default();
    let m = Market::setup(&e);

    assert_eq!(
        m.client.quote_fees(&100_000, &2),
        FeeSplit {
            leave_fee: 20_000,
            service_fee: 4_000,
            lender_payout: 76_000,
        }
    );
    assert_eq!(
        m.client.try_quote_fees(&22_000, &2),
        Err(Ok(MarketError::FeeBelowMinimum))
    );
}

#[test]
fn test_multiple_rentals_from_one_lender() {
    let e = Env::default();
    let m = Market::setup(&e);
    let (lender, ids) = m.lender_with_assets(2);
    let tenant = m.funded_tenant(100_000);
    let first = m.offer(&lender, &vec![&e, ids.get_unchecked(0)], 50_000);
    let second = m.offer(&lender, &vec![&e, ids.get_unchecked(1)], 50_000);

    let r1 = m.accept(&tenant, first);
    let r2 = m.accept(&tenant, second);

    assert_ne!(r1, r2);
    assert_eq!(m.client.rentals_of_lender(&lender).len(), 2);
    assert_eq!(m.client.rentals_of_tenant(&tenant).len(), 2);
    // 2 × (10_000 + 3_000) out of 100_000
    assert_eq!(m.currency.balance(&lender), 74_000);
}
