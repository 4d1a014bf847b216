//! Settlement: the royalty/fee/seller split shared by direct purchase and
//! offer acceptance, and the `buy` entry point.

use crate::*;

/// Result of splitting a sale price. Floor division may leave a remainder
/// assigned to nobody; `royalty + fee + seller_amount <= price` always.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct SaleSplit {
    pub royalty: u128,
    pub fee: u128,
    pub seller_amount: u128,
}

// --- Public entry points ---

#[near]
impl Contract {
    /// Buys a listed token at its exact listed price.
    #[payable]
    #[handle_result]
    pub fn buy(&mut self, token_id: u64) -> Result<(), MarketError> {
        let buyer = env::predecessor_account_id();
        let deposit = env::attached_deposit().as_yoctonear();
        self.internal_buy(&buyer, token_id, deposit)
    }
}

// --- Internal implementations ---

impl Contract {
    /// Both percentages are capped (royalty <= 50, fee <= 20), so the
    /// seller amount can never underflow.
    pub(crate) fn split_price(&self, price: u128, royalty_percent: u8) -> SaleSplit {
        let royalty = price * royalty_percent as u128 / 100;
        let fee = price * self.config.platform_fee_percent as u128 / 100;
        SaleSplit {
            royalty,
            fee,
            seller_amount: price - royalty - fee,
        }
    }

    pub(crate) fn internal_buy(
        &mut self,
        buyer: &AccountId,
        token_id: u64,
        deposit: u128,
    ) -> Result<(), MarketError> {
        self.check_active(op::BUY)?;
        let token = self
            .tokens
            .get(&token_id)
            .ok_or_else(|| ErrorKind::TokenNotFound { token_id }.op(op::BUY))?;
        if !token.for_sale {
            return Err(ErrorKind::NotListed { token_id }.op(op::BUY));
        }
        if &token.owner == buyer {
            return Err(ErrorKind::OwnTokenPurchase { token_id }.op(op::BUY));
        }
        let price = token.price;
        if deposit != price {
            return Err(ErrorKind::DepositMismatch {
                expected: price,
                attached: deposit,
            }
            .op(op::BUY));
        }

        let seller = token.owner.clone();
        let token = token.clone();
        let split = self.internal_settle_sale(token_id, token, buyer, price);

        events::emit_sale(buyer, &seller, token_id, price, split.royalty, split.fee);
        Ok(())
    }

    /// Transfers ownership to `buyer`, clears the listing, and credits the
    /// split through the pending ledger. The caller has already validated
    /// the token and the payment.
    pub(crate) fn internal_settle_sale(
        &mut self,
        token_id: u64,
        mut token: Token,
        buyer: &AccountId,
        price: u128,
    ) -> SaleSplit {
        let split = self.split_price(price, token.royalty_percent);

        let author = token.author.clone();
        let seller = token.owner.clone();

        token.owner = buyer.clone();
        token.for_sale = false;
        token.price = 0;
        self.tokens.insert(token_id, token);

        self.collected_fees += split.fee;

        if author != seller {
            self.internal_add_pending(&author, split.royalty);
            self.internal_add_pending(&seller, split.seller_amount);
        } else {
            // Author is selling their own work: one combined credit, same
            // total.
            self.internal_add_pending(&seller, split.seller_amount + split.royalty);
        }

        split
    }
}
