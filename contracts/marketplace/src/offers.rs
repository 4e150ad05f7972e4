//! Offer lifecycle: a lender escrows assets under published terms, and may
//! take them back for as long as nobody has accepted.

use soroban_sdk::{log, Address, Env, Vec};

use market_interface::{AssetClient, EscrowClient, Offer, OfferRegistryClient, OfferTerms};

use crate::{
    error::MarketError,
    events, fees,
    storage::{self, MarketConfig},
};

pub fn create(
    e: &Env,
    lender: Address,
    asset_ids: Vec<u32>,
    duration: u64,
    lender_percentage: u32,
    fee: i128,
    exclusive: Option<Address>,
) -> Result<u64, MarketError> {
    lender.require_auth();

    let config = storage::config(e)?;
    storage::require_not_paused(e)?;
    validate_terms(&config, &asset_ids, lender_percentage, fee)?;

    let terms = OfferTerms {
        asset_ids: asset_ids.clone(),
        lender: lender.clone(),
        duration,
        lender_percentage,
        fee,
        exclusive,
    };
    let registry = OfferRegistryClient::new(e, &config.offer_registry);
    let id = registry.insert(&terms);

    let asset = AssetClient::new(e, &config.asset);
    for asset_id in asset_ids.iter() {
        asset.transfer(&lender, &config.escrow, &asset_id);
    }

    events::offer_created(e, &Offer::from_terms(id, terms));
    log!(e, "offer created", id, lender);
    Ok(id)
}

pub fn cancel(e: &Env, lender: Address, offer_id: u64) -> Result<(), MarketError> {
    lender.require_auth();

    let config = storage::config(e)?;
    let registry = OfferRegistryClient::new(e, &config.offer_registry);
    let offer = registry
        .fields_of(&offer_id)
        .ok_or(MarketError::UnknownOffer)?;
    if offer.lender != lender {
        return Err(MarketError::NotLender);
    }

    registry.remove(&offer_id);
    EscrowClient::new(e, &config.escrow).transfer_assets(&lender, &offer.asset_ids);

    events::offer_removed(e, offer_id, &lender);
    log!(e, "offer cancelled", offer_id);
    Ok(())
}

fn validate_terms(
    config: &MarketConfig,
    asset_ids: &Vec<u32>,
    lender_percentage: u32,
    fee: i128,
) -> Result<(), MarketError> {
    if lender_percentage > 100 {
        return Err(MarketError::LenderPercentageTooHigh);
    }

    let count = asset_ids.len();
    if count == 0 {
        return Err(MarketError::NoAssets);
    }
    if count > fees::MAX_ASSETS_PER_OFFER {
        return Err(MarketError::TooManyAssets);
    }
    for i in 0..count {
        for j in (i + 1)..count {
            if asset_ids.get_unchecked(i) == asset_ids.get_unchecked(j) {
                return Err(MarketError::DuplicateAsset);
            }
        }
    }

    fees::split(config, fee, count).map(|_| ())
}
