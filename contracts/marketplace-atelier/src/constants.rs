//! Marketplace-wide constants.

/// Maximum creator royalty on secondary sales (percent of sale price).
pub const MAX_ROYALTY_PERCENT: u8 = 50;

/// Maximum platform fee (percent of sale price). Enforced at init and on
/// every `update_platform_fee`.
pub const MAX_PLATFORM_FEE_PERCENT: u8 = 20;

/// Smallest value `max_metadata_length` may be configured to. Anything
/// shorter cannot hold a usable content reference.
pub const MIN_METADATA_LENGTH: u32 = 10;

/// The reserved NEAR `system` account. It can never be created or sign a
/// transaction, so a token transferred to it would be frozen forever;
/// transfers to it are rejected outright.
pub const BURN_ACCOUNT: &str = "system";

/// Offer durations are given in seconds; `env::block_timestamp` is in
/// nanoseconds.
pub const NANOS_PER_SECOND: u64 = 1_000_000_000;
