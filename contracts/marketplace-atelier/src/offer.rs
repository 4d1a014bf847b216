//! Offer book: funded, time-bounded bids on tokens, listed or not.

use crate::*;

/// Composite key into the flat offer map. `'\0'` cannot appear in a NEAR
/// account id, so keys never collide.
pub(crate) fn offer_key(token_id: u64, bidder: &AccountId) -> String {
    format!("{}\0{}", token_id, bidder)
}

/// Prefix matching every offer on one token.
pub(crate) fn token_offer_prefix(token_id: u64) -> String {
    format!("{}\0", token_id)
}

// --- Public entry points ---

#[near]
impl Contract {
    /// Places (or replaces) the caller's offer on a token. The attached
    /// deposit is the offer amount and is held by the contract until the
    /// offer is resolved; a replaced offer is refunded to the caller's
    /// pending balance first.
    #[payable]
    #[handle_result]
    pub fn make_offer(&mut self, token_id: u64, duration_secs: u64) -> Result<(), MarketError> {
        let bidder = env::predecessor_account_id();
        let amount = env::attached_deposit().as_yoctonear();
        self.internal_make_offer(&bidder, token_id, amount, duration_secs)
    }

    /// Withdraws the caller's offer; the full amount moves to their
    /// pending balance. Not pause-gated.
    #[payable]
    #[handle_result]
    pub fn cancel_offer(&mut self, token_id: u64) -> Result<(), MarketError> {
        guards::check_no_deposit(op::CANCEL_OFFER)?;
        let bidder = env::predecessor_account_id();
        self.internal_cancel_offer(&bidder, token_id)
    }

    /// Sells the token to `bidder` at their offered amount, using the same
    /// split as a direct purchase. Other bidders' offers stay live.
    #[payable]
    #[handle_result]
    pub fn accept_offer(&mut self, token_id: u64, bidder: AccountId) -> Result<(), MarketError> {
        guards::check_no_deposit(op::ACCEPT)?;
        let caller = env::predecessor_account_id();
        self.internal_accept_offer(&caller, token_id, &bidder)
    }
}

// --- Internal implementations ---

impl Contract {
    pub(crate) fn internal_make_offer(
        &mut self,
        bidder: &AccountId,
        token_id: u64,
        amount: u128,
        duration_secs: u64,
    ) -> Result<(), MarketError> {
        self.check_active(op::OFFER)?;
        let token = self
            .tokens
            .get(&token_id)
            .ok_or_else(|| ErrorKind::TokenNotFound { token_id }.op(op::OFFER))?;
        if duration_secs == 0 {
            return Err(ErrorKind::ZeroOfferDuration.op(op::OFFER));
        }
        if amount < self.config.min_sale_price {
            return Err(ErrorKind::OfferBelowMinimum {
                amount,
                minimum: self.config.min_sale_price,
            }
            .op(op::OFFER));
        }
        if &token.owner == bidder {
            return Err(ErrorKind::OwnTokenOffer { token_id }.op(op::OFFER));
        }

        let now = env::block_timestamp();
        let expires_at = now.saturating_add(duration_secs.saturating_mul(NANOS_PER_SECOND));
        let key = offer_key(token_id, bidder);

        // A prior offer from the same bidder is refunded before being
        // overwritten; its deposit never silently disappears.
        if let Some(old_offer) = self.offers.remove(&key) {
            self.internal_add_pending(bidder, old_offer.amount);
        }

        self.offers.insert(
            key,
            Offer {
                bidder: bidder.clone(),
                amount,
                expires_at,
                created_at: now,
            },
        );

        events::emit_offer_made(bidder, token_id, amount, expires_at);
        Ok(())
    }

    pub(crate) fn internal_cancel_offer(
        &mut self,
        bidder: &AccountId,
        token_id: u64,
    ) -> Result<(), MarketError> {
        let key = offer_key(token_id, bidder);
        let offer = self.offers.remove(&key).ok_or_else(|| {
            ErrorKind::OfferNotFound {
                token_id,
                bidder: bidder.clone(),
            }
            .op(op::CANCEL_OFFER)
        })?;

        self.internal_add_pending(bidder, offer.amount);

        events::emit_offer_cancelled(bidder, token_id, offer.amount);
        Ok(())
    }

    pub(crate) fn internal_accept_offer(
        &mut self,
        caller: &AccountId,
        token_id: u64,
        bidder: &AccountId,
    ) -> Result<(), MarketError> {
        self.check_active(op::ACCEPT)?;
        let token = self
            .tokens
            .get(&token_id)
            .ok_or_else(|| ErrorKind::TokenNotFound { token_id }.op(op::ACCEPT))?;
        if &token.owner != caller {
            return Err(ErrorKind::NotTokenOwner {
                token_id,
                caller: caller.clone(),
            }
            .op(op::ACCEPT));
        }

        let key = offer_key(token_id, bidder);
        let offer = self.offers.get(&key).ok_or_else(|| {
            ErrorKind::OfferNotFound {
                token_id,
                bidder: bidder.clone(),
            }
            .op(op::ACCEPT)
        })?;

        let now = env::block_timestamp();
        if now >= offer.expires_at {
            return Err(ErrorKind::OfferExpired {
                expires_at: offer.expires_at,
                now,
            }
            .op(op::ACCEPT));
        }

        // The floor is checked when an offer is made, not re-checked here:
        // a raised minimum must not strand an already-funded offer.
        let amount = offer.amount;
        let token = token.clone();
        self.offers.remove(&key);

        let split = self.internal_settle_sale(token_id, token, bidder, amount);

        events::emit_offer_accepted(caller, bidder, token_id, amount, split.royalty, split.fee);
        Ok(())
    }
}
