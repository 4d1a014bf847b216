//! JSON events for off-chain indexers, one emit function per mutating
//! operation. Layout follows NEP-297: a prefixed, single-line JSON log
//! with standard/version/event/data fields.

mod builder;
mod market;
mod types;

pub(crate) use market::*;

const STANDARD: &str = "atelier";
const VERSION: &str = "1.0.0";
const PREFIX: &str = "EVENT_JSON:";

// Event categories.
const TOKEN: &str = "token";
const SALE: &str = "sale";
const OFFER: &str = "offer";
const PAYOUT: &str = "payout";
const ADMIN: &str = "admin";
