//! Typed error handling for the marketplace contract.
//!
//! Uses `#[derive(near_sdk::FunctionError)]` from the NEAR SDK to enable
//! `#[handle_result]` on public methods. When a method returns
//! `Err(MarketError { .. })`, the SDK calls `env::panic_str()` with the
//! Display message, aborting the call and rolling back every state write
//! and the attached deposit — one tagged reason per abort.
//!
//! Reasons are a closed enumeration rather than free text: each kind
//! carries the ids and expected/actual values a caller needs to correct
//! the call, and the Display string is prefixed with the operation tag.

use near_sdk::AccountId;
use near_sdk_macros::NearSchema;

/// Operation tags used as the prefix of every abort reason.
pub mod op {
    pub const INIT: &str = "INIT";
    pub const MINT: &str = "MINT";
    pub const LIST: &str = "LIST";
    pub const UPDATE: &str = "UPDATE";
    pub const CANCEL: &str = "CANCEL";
    pub const BUY: &str = "BUY";
    pub const OFFER: &str = "OFFER";
    pub const CANCEL_OFFER: &str = "CANCEL_OFFER";
    pub const ACCEPT: &str = "ACCEPT";
    pub const TRANSFER: &str = "TRANSFER";
    pub const BURN: &str = "BURN";
    pub const WITHDRAW: &str = "WITHDRAW";
    pub const FEES: &str = "FEES";
    pub const PAUSE: &str = "PAUSE";
    pub const ADMIN: &str = "ADMIN";
    pub const FEE: &str = "FEE";
    pub const PRICE: &str = "PRICE";
}

#[derive(NearSchema, near_sdk::FunctionError)]
#[abi(borsh, json)]
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MarketError {
    /// The entry point that rejected the call, e.g. `"MINT"`.
    pub operation: String,
    pub kind: ErrorKind,
}

#[derive(NearSchema)]
#[abi(borsh, json)]
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// Mutating operations (except burn, cancel paths, and withdrawals)
    /// are rejected while the contract is paused.
    ContractPaused,
    /// A deposit was attached to a free operation.
    UnexpectedDeposit { attached: u128 },
    /// The attached deposit does not match the required amount exactly.
    DepositMismatch { expected: u128, attached: u128 },
    TokenNotFound { token_id: u64 },
    NotTokenOwner { token_id: u64, caller: AccountId },
    AlreadyListed { token_id: u64 },
    NotListed { token_id: u64 },
    /// Transfer/burn of a token that is currently listed for sale.
    TokenListed { token_id: u64 },
    PriceBelowMinimum { price: u128, minimum: u128 },
    EmptyMetadata,
    MetadataTooLong { length: u32, max: u32 },
    RoyaltyTooHigh { royalty_percent: u8, max: u8 },
    MaxSupplyReached { max_supply: u64 },
    OwnTokenPurchase { token_id: u64 },
    OwnTokenOffer { token_id: u64 },
    ZeroOfferDuration,
    OfferBelowMinimum { amount: u128, minimum: u128 },
    OfferNotFound { token_id: u64, bidder: AccountId },
    OfferExpired { expires_at: u64, now: u64 },
    BurnAddressTransfer,
    SelfTransfer,
    NothingPending,
    NoCollectedFees,
    NotAdmin { caller: AccountId },
    NoPendingAdmin,
    NotPendingAdmin { caller: AccountId },
    AdminUnchanged { admin: AccountId },
    FeeTooHigh { fee_percent: u8, max: u8 },
}

impl ErrorKind {
    /// Attaches the operation tag, producing the final abort reason.
    pub fn op(self, operation: &str) -> MarketError {
        MarketError {
            operation: operation.to_string(),
            kind: self,
        }
    }
}

impl std::fmt::Display for MarketError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.operation, self.kind)
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ContractPaused => write!(f, "Contract paused"),
            Self::UnexpectedDeposit { attached } => {
                write!(f, "No deposit expected, got {} yoctoNEAR", attached)
            }
            Self::DepositMismatch { expected, attached } => write!(
                f,
                "Invalid amount: expected {} yoctoNEAR, got {}",
                expected, attached
            ),
            Self::TokenNotFound { token_id } => write!(f, "Token {} not found", token_id),
            Self::NotTokenOwner { token_id, caller } => {
                write!(f, "{} is not the owner of token {}", caller, token_id)
            }
            Self::AlreadyListed { token_id } => {
                write!(f, "Token {} is already listed", token_id)
            }
            Self::NotListed { token_id } => write!(f, "Token {} is not listed", token_id),
            Self::TokenListed { token_id } => {
                write!(f, "Token {} is listed for sale", token_id)
            }
            Self::PriceBelowMinimum { price, minimum } => {
                write!(f, "Price {} is below the minimum of {}", price, minimum)
            }
            Self::EmptyMetadata => write!(f, "Metadata must not be empty"),
            Self::MetadataTooLong { length, max } => {
                write!(f, "Metadata is {} bytes, max {}", length, max)
            }
            Self::RoyaltyTooHigh {
                royalty_percent,
                max,
            } => write!(f, "Royalty {}% exceeds the {}% cap", royalty_percent, max),
            Self::MaxSupplyReached { max_supply } => {
                write!(f, "Max supply of {} reached", max_supply)
            }
            Self::OwnTokenPurchase { token_id } => {
                write!(f, "Cannot buy your own token {}", token_id)
            }
            Self::OwnTokenOffer { token_id } => {
                write!(f, "Cannot offer on your own token {}", token_id)
            }
            Self::ZeroOfferDuration => write!(f, "Offer duration must be positive"),
            Self::OfferBelowMinimum { amount, minimum } => {
                write!(f, "Offer of {} is below the minimum of {}", amount, minimum)
            }
            Self::OfferNotFound { token_id, bidder } => {
                write!(f, "No offer on token {} from {}", token_id, bidder)
            }
            Self::OfferExpired { expires_at, now } => {
                write!(f, "Offer expired at {}, now {}", expires_at, now)
            }
            Self::BurnAddressTransfer => write!(f, "Cannot transfer to the burn address"),
            Self::SelfTransfer => write!(f, "Cannot transfer to yourself"),
            Self::NothingPending => write!(f, "Nothing pending to withdraw"),
            Self::NoCollectedFees => write!(f, "No fees to withdraw"),
            Self::NotAdmin { caller } => write!(f, "{} is not the admin", caller),
            Self::NoPendingAdmin => write!(f, "No admin handover in progress"),
            Self::NotPendingAdmin { caller } => {
                write!(f, "{} is not the proposed admin", caller)
            }
            Self::AdminUnchanged { admin } => {
                write!(f, "New admin must differ from current admin {}", admin)
            }
            Self::FeeTooHigh { fee_percent, max } => {
                write!(f, "Platform fee {}% exceeds the {}% cap", fee_percent, max)
            }
        }
    }
}
