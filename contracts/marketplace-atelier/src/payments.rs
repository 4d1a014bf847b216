//! Pull-payment ledger and the two withdrawal paths.
//!
//! Nothing in this contract transfers NEAR to a seller, author, or bidder
//! directly; every credit lands here and is claimed via `withdraw`. The
//! ledger entry is removed BEFORE the transfer promise is created, so a
//! reentrant call during the transfer observes no balance and aborts —
//! this ordering is a protocol rule, covered by an explicit test.

use crate::*;

// --- Public entry points ---

#[near]
impl Contract {
    /// Claims everything owed to the caller.
    #[payable]
    #[handle_result]
    pub fn withdraw(&mut self) -> Result<Promise, MarketError> {
        guards::check_no_deposit(op::WITHDRAW)?;
        let caller = env::predecessor_account_id();
        let amount = self.internal_withdraw(&caller)?;
        events::emit_withdrawal(&caller, amount);
        Ok(Promise::new(caller).transfer(NearToken::from_yoctonear(amount)))
    }

    /// Admin only. Claims the accumulated platform revenue; the
    /// accumulator is zeroed before the transfer, same ordering as
    /// `withdraw`.
    #[payable]
    #[handle_result]
    pub fn withdraw_fees(&mut self) -> Result<Promise, MarketError> {
        guards::check_no_deposit(op::FEES)?;
        self.check_admin(&env::predecessor_account_id(), op::FEES)?;
        let amount = self.internal_withdraw_fees()?;
        events::emit_fees_withdrawn(&self.admin, amount);
        Ok(Promise::new(self.admin.clone()).transfer(NearToken::from_yoctonear(amount)))
    }
}

// --- Internal implementations ---

impl Contract {
    /// Credits `amount` to `recipient`'s pending balance. Zero credits are
    /// dropped so the ledger never holds empty entries.
    pub(crate) fn internal_add_pending(&mut self, recipient: &AccountId, amount: u128) {
        if amount == 0 {
            return;
        }
        let balance = self.pending_payments.get(recipient).copied().unwrap_or(0);
        self.pending_payments.insert(recipient.clone(), balance + amount);
    }

    /// Removes and returns the caller's pending balance. After this
    /// returns, the ledger holds nothing for `caller`; the actual transfer
    /// happens strictly afterwards.
    pub(crate) fn internal_withdraw(&mut self, caller: &AccountId) -> Result<u128, MarketError> {
        let amount = self.pending_payments.get(caller).copied().unwrap_or(0);
        if amount == 0 {
            return Err(ErrorKind::NothingPending.op(op::WITHDRAW));
        }
        self.pending_payments.remove(caller);
        Ok(amount)
    }

    pub(crate) fn internal_withdraw_fees(&mut self) -> Result<u128, MarketError> {
        if self.collected_fees == 0 {
            return Err(ErrorKind::NoCollectedFees.op(op::FEES));
        }
        let amount = self.collected_fees;
        self.collected_fees = 0;
        Ok(amount)
    }
}
