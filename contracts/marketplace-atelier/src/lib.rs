//! Atelier Marketplace — pull-payment NFT marketplace: mint, list, buy,
//! offer, transfer, and burn over a single contract state, with creator
//! royalties, platform fees, and a two-step admin handover. All proceeds
//! are claimed through `withdraw`; nothing is pushed to sellers, authors,
//! or outbid bidders inside the call that computed what they are owed.

use near_sdk::json_types::U128;
use near_sdk::store::{IterableMap, LookupMap};
use near_sdk::{env, near, AccountId, BorshStorageKey, NearToken, PanicOnDefault, Promise};

// --- Modules ---

mod admin;
pub mod constants;
mod errors;
mod events;
mod guards;
mod listing;
mod offer;
mod payments;
mod settlement;
mod token;
pub mod types;
mod views;

#[cfg(test)]
mod tests;

pub use constants::*;
pub use errors::{op, ErrorKind, MarketError};
pub use types::*;

// --- Storage Keys ---

#[near]
#[derive(BorshStorageKey)]
pub enum StorageKey {
    Tokens,
    Offers,
    PendingPayments,
}

// --- Contract State ---

#[near(
    contract_state,
    contract_metadata(
        version = "0.1.0",
        link = "https://github.com/atelier-market/atelier-protocol",
        standard(standard = "nep297", version = "1.0.0"),
    )
)]
#[derive(PanicOnDefault)]
pub struct Contract {
    /// From Cargo.toml; updated on each migration.
    pub version: String,

    pub admin: AccountId,
    /// Set by `propose_admin`, consumed by `accept_admin`. Never equal to
    /// `admin` while present.
    pub pending_admin: Option<AccountId>,
    /// Gates mutating operations; burn, cancel paths, and withdrawals stay
    /// available while paused.
    pub paused: bool,

    pub config: MarketConfig,

    pub tokens: IterableMap<u64, Token>,
    /// Ids are dense from 0 and never reused; the counter only grows.
    pub next_token_id: u64,

    /// Per-token offers; key = `"{token_id}\0{bidder}"`; deposits held in
    /// the contract balance until resolved.
    pub offers: IterableMap<String, Offer>,

    /// Pull-payment ledger: everything owed to sellers, authors, and
    /// refunded bidders, claimable via `withdraw`.
    pub pending_payments: LookupMap<AccountId, u128>,
    /// Platform revenue (mint proceeds + sale fees); claimable by the
    /// admin via `withdraw_fees`.
    pub collected_fees: u128,
}
