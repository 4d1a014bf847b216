//! Token registry: mint, transfer, burn.

use crate::*;

// --- Public entry points ---

#[near]
impl Contract {
    /// Mints a new token to the caller. Requires the exact mint price as
    /// deposit; mint proceeds are platform revenue.
    #[payable]
    #[handle_result]
    pub fn mint(&mut self, metadata: String, royalty_percent: u8) -> Result<u64, MarketError> {
        let author = env::predecessor_account_id();
        let deposit = env::attached_deposit().as_yoctonear();
        self.internal_mint(&author, metadata, royalty_percent, deposit)
    }

    /// Free transfer to another account. The token must not be listed.
    #[payable]
    #[handle_result]
    pub fn transfer(&mut self, token_id: u64, to: AccountId) -> Result<(), MarketError> {
        guards::check_no_deposit(op::TRANSFER)?;
        let caller = env::predecessor_account_id();
        self.internal_transfer(&caller, token_id, &to)
    }

    /// Destroys a token permanently and refunds every live offer on it to
    /// the respective bidder's pending balance. Stays available while the
    /// contract is paused so owners can always exit.
    #[payable]
    #[handle_result]
    pub fn burn(&mut self, token_id: u64) -> Result<(), MarketError> {
        guards::check_no_deposit(op::BURN)?;
        let caller = env::predecessor_account_id();
        self.internal_burn(&caller, token_id)
    }
}

// --- Internal implementations ---

impl Contract {
    pub(crate) fn internal_mint(
        &mut self,
        author: &AccountId,
        metadata: String,
        royalty_percent: u8,
        deposit: u128,
    ) -> Result<u64, MarketError> {
        self.check_active(op::MINT)?;
        if deposit != self.config.mint_price {
            return Err(ErrorKind::DepositMismatch {
                expected: self.config.mint_price,
                attached: deposit,
            }
            .op(op::MINT));
        }
        if metadata.is_empty() {
            return Err(ErrorKind::EmptyMetadata.op(op::MINT));
        }
        if metadata.len() > self.config.max_metadata_length as usize {
            return Err(ErrorKind::MetadataTooLong {
                length: metadata.len() as u32,
                max: self.config.max_metadata_length,
            }
            .op(op::MINT));
        }
        if royalty_percent > MAX_ROYALTY_PERCENT {
            return Err(ErrorKind::RoyaltyTooHigh {
                royalty_percent,
                max: MAX_ROYALTY_PERCENT,
            }
            .op(op::MINT));
        }
        if self.config.max_supply > 0 && self.next_token_id >= self.config.max_supply {
            return Err(ErrorKind::MaxSupplyReached {
                max_supply: self.config.max_supply,
            }
            .op(op::MINT));
        }

        let token_id = self.next_token_id;
        self.tokens.insert(
            token_id,
            Token {
                metadata: metadata.clone(),
                author: author.clone(),
                owner: author.clone(),
                price: 0,
                for_sale: false,
                royalty_percent,
                created_at: env::block_timestamp(),
            },
        );
        self.next_token_id += 1;
        self.collected_fees += deposit;

        events::emit_mint(author, token_id, &metadata, royalty_percent);
        Ok(token_id)
    }

    pub(crate) fn internal_transfer(
        &mut self,
        caller: &AccountId,
        token_id: u64,
        to: &AccountId,
    ) -> Result<(), MarketError> {
        self.check_active(op::TRANSFER)?;
        if to.as_str() == BURN_ACCOUNT {
            return Err(ErrorKind::BurnAddressTransfer.op(op::TRANSFER));
        }
        if to == caller {
            return Err(ErrorKind::SelfTransfer.op(op::TRANSFER));
        }
        let token = self
            .tokens
            .get(&token_id)
            .ok_or_else(|| ErrorKind::TokenNotFound { token_id }.op(op::TRANSFER))?;
        if &token.owner != caller {
            return Err(ErrorKind::NotTokenOwner {
                token_id,
                caller: caller.clone(),
            }
            .op(op::TRANSFER));
        }
        if token.for_sale {
            return Err(ErrorKind::TokenListed { token_id }.op(op::TRANSFER));
        }

        let mut token = token.clone();
        token.owner = to.clone();
        self.tokens.insert(token_id, token);

        events::emit_transfer(caller, to, token_id);
        Ok(())
    }

    pub(crate) fn internal_burn(
        &mut self,
        caller: &AccountId,
        token_id: u64,
    ) -> Result<(), MarketError> {
        let token = self
            .tokens
            .get(&token_id)
            .ok_or_else(|| ErrorKind::TokenNotFound { token_id }.op(op::BURN))?;
        if &token.owner != caller {
            return Err(ErrorKind::NotTokenOwner {
                token_id,
                caller: caller.clone(),
            }
            .op(op::BURN));
        }
        if token.for_sale {
            return Err(ErrorKind::TokenListed { token_id }.op(op::BURN));
        }

        self.tokens.remove(&token_id);

        // Every live offer on the token is returned to its bidder through
        // the pending ledger, then dropped from the book.
        let prefix = offer::token_offer_prefix(token_id);
        let refunds: Vec<(String, AccountId, u128)> = self
            .offers
            .iter()
            .filter(|(key, _)| key.starts_with(&prefix))
            .map(|(key, o)| (key.clone(), o.bidder.clone(), o.amount))
            .collect();
        for (key, bidder, amount) in &refunds {
            self.offers.remove(key);
            self.internal_add_pending(bidder, *amount);
        }

        events::emit_burn(caller, token_id, refunds.len() as u32);
        Ok(())
    }
}
