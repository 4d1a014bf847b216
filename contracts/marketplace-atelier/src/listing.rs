//! Listing manager: puts tokens up for sale, reprices, and delists.

use crate::*;

// --- Public entry points ---

#[near]
impl Contract {
    #[payable]
    #[handle_result]
    pub fn list_for_sale(&mut self, token_id: u64, price: U128) -> Result<(), MarketError> {
        guards::check_no_deposit(op::LIST)?;
        let caller = env::predecessor_account_id();
        self.internal_list(&caller, token_id, price.0)
    }

    /// Reprices an existing listing; live offers are untouched.
    #[payable]
    #[handle_result]
    pub fn update_price(&mut self, token_id: u64, new_price: U128) -> Result<(), MarketError> {
        guards::check_no_deposit(op::UPDATE)?;
        let caller = env::predecessor_account_id();
        self.internal_update_price(&caller, token_id, new_price.0)
    }

    /// Delists a token. Not pause-gated; owners may always delist.
    #[payable]
    #[handle_result]
    pub fn cancel_sale(&mut self, token_id: u64) -> Result<(), MarketError> {
        guards::check_no_deposit(op::CANCEL)?;
        let caller = env::predecessor_account_id();
        self.internal_cancel_sale(&caller, token_id)
    }
}

// --- Internal implementations ---

impl Contract {
    pub(crate) fn internal_list(
        &mut self,
        caller: &AccountId,
        token_id: u64,
        price: u128,
    ) -> Result<(), MarketError> {
        self.check_active(op::LIST)?;
        if price < self.config.min_sale_price {
            return Err(ErrorKind::PriceBelowMinimum {
                price,
                minimum: self.config.min_sale_price,
            }
            .op(op::LIST));
        }
        let token = self
            .tokens
            .get(&token_id)
            .ok_or_else(|| ErrorKind::TokenNotFound { token_id }.op(op::LIST))?;
        if &token.owner != caller {
            return Err(ErrorKind::NotTokenOwner {
                token_id,
                caller: caller.clone(),
            }
            .op(op::LIST));
        }
        if token.for_sale {
            return Err(ErrorKind::AlreadyListed { token_id }.op(op::LIST));
        }

        let mut token = token.clone();
        token.price = price;
        token.for_sale = true;
        self.tokens.insert(token_id, token);

        events::emit_list(caller, token_id, price);
        Ok(())
    }

    pub(crate) fn internal_update_price(
        &mut self,
        caller: &AccountId,
        token_id: u64,
        new_price: u128,
    ) -> Result<(), MarketError> {
        self.check_active(op::UPDATE)?;
        if new_price < self.config.min_sale_price {
            return Err(ErrorKind::PriceBelowMinimum {
                price: new_price,
                minimum: self.config.min_sale_price,
            }
            .op(op::UPDATE));
        }
        let token = self
            .tokens
            .get(&token_id)
            .ok_or_else(|| ErrorKind::TokenNotFound { token_id }.op(op::UPDATE))?;
        if &token.owner != caller {
            return Err(ErrorKind::NotTokenOwner {
                token_id,
                caller: caller.clone(),
            }
            .op(op::UPDATE));
        }
        if !token.for_sale {
            return Err(ErrorKind::NotListed { token_id }.op(op::UPDATE));
        }

        let mut token = token.clone();
        let old_price = token.price;
        token.price = new_price;
        self.tokens.insert(token_id, token);

        events::emit_price_update(caller, token_id, old_price, new_price);
        Ok(())
    }

    pub(crate) fn internal_cancel_sale(
        &mut self,
        caller: &AccountId,
        token_id: u64,
    ) -> Result<(), MarketError> {
        let token = self
            .tokens
            .get(&token_id)
            .ok_or_else(|| ErrorKind::TokenNotFound { token_id }.op(op::CANCEL))?;
        if &token.owner != caller {
            return Err(ErrorKind::NotTokenOwner {
                token_id,
                caller: caller.clone(),
            }
            .op(op::CANCEL));
        }
        if !token.for_sale {
            return Err(ErrorKind::NotListed { token_id }.op(op::CANCEL));
        }

        let mut token = token.clone();
        token.price = 0;
        token.for_sale = false;
        self.tokens.insert(token_id, token);

        events::emit_sale_cancelled(caller, token_id);
        Ok(())
    }
}
