#![no_std]
//! Data model and collaborator interfaces shared by the rental marketplace
//! contracts.
//!
//! The orchestrator only ever talks to its collaborators through the clients
//! generated from the traits in [`interfaces`], so any contract exposing the
//! same functions can be wired in its place.

pub mod interfaces;
pub mod types;

pub use interfaces::{
    AssetClient, AssetInterface, EscrowClient, EscrowInterface, OfferRegistryClient,
    OfferRegistryInterface, RentalClient, RentalFactoryClient, RentalFactoryInterface,
    RentalInterface, RentalManagerClient, RentalManagerInterface, RentalRegistryClient,
    RentalRegistryInterface,
};
pub use types::{Offer, OfferTerms, RegistryError, Rental, RentalEntry, RentalParams};
