use near_sdk::json_types::U128;
use near_sdk::{near, AccountId};

// --- Stored types ---

/// A minted token. Removed from storage on burn; its id is never reused.
#[near(serializers = [borsh, json])]
#[derive(Clone)]
pub struct Token {
    /// Content reference (IPFS URI or inline JSON). Immutable after mint.
    pub metadata: String,
    /// Royalty recipient on every secondary sale. Immutable after mint.
    pub author: AccountId,
    pub owner: AccountId,
    /// yoctoNEAR; meaningful only while `for_sale` is true.
    pub price: u128,
    pub for_sale: bool,
    /// Percent of every sale price routed to `author` (0-50).
    pub royalty_percent: u8,
    /// Nanoseconds.
    pub created_at: u64,
}

/// A funded bid on a token; the deposit is held by the contract until the
/// offer is accepted, cancelled, replaced, or the token is burned.
/// Key: `"{token_id}\0{bidder}"`.
#[near(serializers = [borsh, json])]
#[derive(Clone)]
pub struct Offer {
    pub bidder: AccountId,
    /// NEAR deposited (yoctoNEAR).
    pub amount: u128,
    /// Nanoseconds. Expired offers stay in the book until cancelled.
    pub expires_at: u64,
    /// Nanoseconds.
    pub created_at: u64,
}

/// Admin-tunable marketplace parameters. Changes apply to subsequent
/// operations only, never retroactively.
#[near(serializers = [borsh, json])]
#[derive(Clone)]
pub struct MarketConfig {
    /// Percent of every sale price kept by the platform (0-20).
    pub platform_fee_percent: u8,
    /// Exact deposit required by `mint` (yoctoNEAR); mint proceeds are
    /// platform revenue.
    pub mint_price: u128,
    /// Floor for listed prices and new offers (yoctoNEAR).
    pub min_sale_price: u128,
    /// Bytes.
    pub max_metadata_length: u32,
    /// Hard cap on ids ever issued. 0 = unbounded.
    pub max_supply: u64,
}

// --- View types ---

#[near(serializers = [json])]
pub struct TokenView {
    pub token_id: u64,
    pub metadata: String,
    pub author: AccountId,
    pub owner: AccountId,
    pub price: U128,
    pub for_sale: bool,
    pub royalty_percent: u8,
    pub created_at: u64,
}

impl TokenView {
    pub(crate) fn from_token(token_id: u64, token: &Token) -> Self {
        Self {
            token_id,
            metadata: token.metadata.clone(),
            author: token.author.clone(),
            owner: token.owner.clone(),
            price: U128(token.price),
            for_sale: token.for_sale,
            royalty_percent: token.royalty_percent,
            created_at: token.created_at,
        }
    }
}

#[near(serializers = [json])]
pub struct OfferView {
    pub bidder: AccountId,
    pub amount: U128,
    pub expires_at: u64,
    pub created_at: u64,
}

impl OfferView {
    pub(crate) fn from_offer(offer: &Offer) -> Self {
        Self {
            bidder: offer.bidder.clone(),
            amount: U128(offer.amount),
            expires_at: offer.expires_at,
            created_at: offer.created_at,
        }
    }
}

/// Snapshot of the current configuration.
#[near(serializers = [json])]
pub struct ConfigView {
    pub platform_fee_percent: u8,
    pub mint_price: U128,
    pub min_sale_price: U128,
    pub max_metadata_length: u32,
    pub max_supply: u64,
}
