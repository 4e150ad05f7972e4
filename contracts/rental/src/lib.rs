#![no_std]
//! A single active rental.
//!
//! Instances are produced by the rental factory and configured once with
//! [`RentalParams`]. While live they hold the rented assets. Closing hands the
//! assets back to the lender and reports to the manager, which refunds the
//! leave-fee deposit to this contract.

use soroban_sdk::{
    contract, contracterror, contractimpl, log, panic_with_error, symbol_short, Address, Env, Vec,
};

use market_interface::{AssetClient, RentalInterface, RentalManagerClient, RentalParams};

mod storage;


#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum RentalError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    AlreadyClosed = 3,
    NotParticipant = 4,
    /// The lender tried to close before `end_time`.
    StillRunning = 5,
}

#[contract]
pub struct RentalInstance;

#[contractimpl]
impl RentalInstance {
    pub fn manager(e: Env) -> Address {
        storage::params(&e).manager
    }

    pub fn currency(e: Env) -> Address {
        storage::params(&e).currency
    }

    pub fn closed(e: Env) -> bool {
        storage::is_closed(&e)
    }

    /// End the rental.
    ///
    /// The tenant may give the assets back at any time; the lender only once
    /// `end_time` has passed.
    pub fn close(e: Env, caller: Address) -> Result<(), RentalError> {
        caller.require_auth();

        let params = storage::params(&e);
        if storage::is_closed(&e) {
            return Err(RentalError::AlreadyClosed);
        }
        if caller != params.tenant {
            if caller != params.lender {
                return Err(RentalError::NotParticipant);
            }
            if e.ledger().timestamp() < params.end_time {
                return Err(RentalError::StillRunning);
            }
        }

        storage::mark_closed(&e);

        let me = e.current_contract_address();
        let asset = AssetClient::new(&e, &params.asset);
        for id in params.asset_ids.iter() {
            asset.transfer(&me, &params.lender, &id);
        }
        RentalManagerClient::new(&e, &params.manager).close_rental(&me);

        log!(&e, "rental closed by", caller);
        e.events()
            .publish((symbol_short!("closed"),), (params.lender, params.tenant));
        Ok(())
    }
}

#[contractimpl]
impl RentalInterface for RentalInstance {
    fn init(e: Env, params: RentalParams) {
        if storage::is_configured(&e) {
            panic_with_error!(&e, RentalError::AlreadyInitialized);
        }
        storage::configure(&e, &params, e.ledger().timestamp());
    }

    fn asset_ids(e: Env) -> Vec<u32> {
        storage::params(&e).asset_ids
    }

    fn lender(e: Env) -> Address {
        storage::params(&e).lender
    }

    fn tenant(e: Env) -> Address {
        storage::params(&e).tenant
    }

    fn start_time(e: Env) -> u64 {
        storage::start_time(&e)
    }

    fn end_time(e: Env) -> u64 {
        storage::params(&e).end_time
    }

    fn lender_percentage(e: Env) -> u32 {
        storage::params(&e).lender_percentage
    }
}
