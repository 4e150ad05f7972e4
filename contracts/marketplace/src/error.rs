use soroban_sdk::contracterror;

/// Every precondition the marketplace can reject, one code each.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum MarketError {
    // ---- setup and access ----
    AlreadyInitialized = 1,
    NotInitialized = 2,
    NotOwner = 3,
    Paused = 4,
    /// A guarded operation was entered while another one was still running.
    Reentrant = 5,

    // ---- unknown records / wrong caller ----
    UnknownOffer = 6,
    NotLender = 7,
    NotExclusiveCounterparty = 8,
    UnknownRental = 9,

    // ---- offer terms ----
    LenderPercentageTooHigh = 10,
    NoAssets = 11,
    TooManyAssets = 12,
    DuplicateAsset = 13,
    FeeBelowMinimum = 14,

    // ---- configuration ----
    InvalidFeePercentage = 15,
    NegativeAmount = 16,

    // ---- arithmetic / paging ----
    Overflow = 17,
    OutOfRange = 18,
}
