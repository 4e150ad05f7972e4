use soroban_sdk::{contracterror, contracttype, Address, Vec};

/// Terms of an offer as submitted by a lender, before the registry assigns an id.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OfferTerms {
    pub asset_ids: Vec<u32>,
    pub lender: Address,
    /// Rental length in seconds.
    pub duration: u64,
    /// Share of downstream revenue kept by the lender, 0..=100.
    pub lender_percentage: u32,
    /// Total amount the tenant pays on acceptance.
    pub fee: i128,
    /// Only this address may accept when set.
    pub exclusive: Option<Address>,
}

/// A pending offer. Created once, never updated, deleted on cancel or accept.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Offer {
    pub id: u64,
    pub asset_ids: Vec<u32>,
    pub lender: Address,
    pub duration: u64,
    pub lender_percentage: u32,
    pub fee: i128,
    pub exclusive: Option<Address>,
}

impl Offer {
    pub fn from_terms(id: u64, terms: OfferTerms) -> Self {
        Offer {
            id,
            asset_ids: terms.asset_ids,
            lender: terms.lender,
            duration: terms.duration,
            lender_percentage: terms.lender_percentage,
            fee: terms.fee,
            exclusive: terms.exclusive,
        }
    }

    pub fn asset_count(&self) -> u32 {
        self.asset_ids.len()
    }

    /// True when `caller` may accept this offer.
    pub fn open_to(&self, caller: &Address) -> bool {
        match &self.exclusive {
            Some(counterparty) => counterparty == caller,
            None => true,
        }
    }
}

/// What the rental registry keeps for each live rental.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RentalEntry {
    pub lender: Address,
    pub tenant: Address,
    /// Leave fee held in escrow for this rental, refunded to the instance on close.
    pub deposit: i128,
}

/// Typed configuration handed to a freshly instantiated rental.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RentalParams {
    /// Contract to call back when the rental closes.
    pub manager: Address,
    pub currency: Address,
    pub asset: Address,
    pub lender: Address,
    pub tenant: Address,
    pub asset_ids: Vec<u32>,
    pub end_time: u64,
    pub lender_percentage: u32,
}

/// Read-only view of an active rental.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Rental {
    pub id: Address,
    pub asset_ids: Vec<u32>,
    pub lender: Address,
    pub tenant: Address,
    pub start_time: u64,
    pub end_time: u64,
    pub lender_percentage: u32,
}

/// Errors shared by the offer and rental registries.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum RegistryError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    UnknownEntry = 3,
    DuplicateEntry = 4,
    IndexOutOfRange = 5,
}
