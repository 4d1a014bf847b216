//! Read-only query surface. Pure projections over contract state; lookups
//! return `None` for missing tokens, balance and flag queries fall back to
//! zero/false.

use crate::*;

#[near]
impl Contract {
    pub fn get_token(&self, token_id: u64) -> Option<TokenView> {
        self.tokens
            .get(&token_id)
            .map(|t| TokenView::from_token(token_id, t))
    }

    pub fn get_owner(&self, token_id: u64) -> Option<AccountId> {
        self.tokens.get(&token_id).map(|t| t.owner.clone())
    }

    pub fn is_for_sale(&self, token_id: u64) -> bool {
        self.tokens.get(&token_id).is_some_and(|t| t.for_sale)
    }

    /// Effective price: the listed price, or 0 when unlisted or unknown.
    pub fn get_price(&self, token_id: u64) -> U128 {
        let price = self
            .tokens
            .get(&token_id)
            .filter(|t| t.for_sale)
            .map_or(0, |t| t.price);
        U128(price)
    }

    pub fn get_pending(&self, account_id: AccountId) -> U128 {
        U128(self.pending_payments.get(&account_id).copied().unwrap_or(0))
    }

    /// Total ids ever issued, including burned tokens.
    pub fn get_total_minted(&self) -> u64 {
        self.next_token_id
    }

    pub fn get_collected_fees(&self) -> U128 {
        U128(self.collected_fees)
    }

    pub fn get_admin(&self) -> &AccountId {
        &self.admin
    }

    pub fn get_pending_admin(&self) -> &Option<AccountId> {
        &self.pending_admin
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn get_config(&self) -> ConfigView {
        ConfigView {
            platform_fee_percent: self.config.platform_fee_percent,
            mint_price: U128(self.config.mint_price),
            min_sale_price: U128(self.config.min_sale_price),
            max_metadata_length: self.config.max_metadata_length,
            max_supply: self.config.max_supply,
        }
    }

    pub fn get_offer(&self, token_id: u64, bidder: AccountId) -> Option<OfferView> {
        let key = offer::offer_key(token_id, &bidder);
        self.offers.get(&key).map(OfferView::from_offer)
    }

    /// Expired offers are included until explicitly cancelled.
    pub fn get_offers_for_token(
        &self,
        token_id: u64,
        from_index: Option<u64>,
        limit: Option<u64>,
    ) -> Vec<OfferView> {
        let prefix = offer::token_offer_prefix(token_id);
        let start = from_index.unwrap_or(0) as usize;
        let limit = limit.unwrap_or(50).min(100) as usize;

        self.offers
            .iter()
            .filter(|(key, _)| key.starts_with(&prefix))
            .skip(start)
            .take(limit)
            .map(|(_, o)| OfferView::from_offer(o))
            .collect()
    }

    pub fn get_tokens(&self, from_index: Option<u64>, limit: Option<u64>) -> Vec<TokenView> {
        let start = from_index.unwrap_or(0) as usize;
        let limit = limit.unwrap_or(50).min(100) as usize;

        self.tokens
            .iter()
            .skip(start)
            .take(limit)
            .map(|(id, t)| TokenView::from_token(*id, t))
            .collect()
    }

    pub fn get_version(&self) -> &str {
        &self.version
    }
}
