//! Init, pause, two-step admin handover, and configuration setters.

use crate::*;
use near_sdk::require;

#[near]
impl Contract {
    // --- Init ---

    #[init]
    pub fn new(
        admin: AccountId,
        platform_fee_percent: u8,
        mint_price: U128,
        min_sale_price: U128,
        max_metadata_length: u32,
        max_supply: u64,
    ) -> Self {
        require!(
            platform_fee_percent <= MAX_PLATFORM_FEE_PERCENT,
            "INIT: Fee too high"
        );
        require!(
            max_metadata_length >= MIN_METADATA_LENGTH,
            "INIT: Metadata length cap too small"
        );

        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            admin,
            pending_admin: None,
            paused: false,
            config: MarketConfig {
                platform_fee_percent,
                mint_price: mint_price.0,
                min_sale_price: min_sale_price.0,
                max_metadata_length,
                max_supply,
            },
            tokens: IterableMap::new(StorageKey::Tokens),
            next_token_id: 0,
            offers: IterableMap::new(StorageKey::Offers),
            pending_payments: LookupMap::new(StorageKey::PendingPayments),
            collected_fees: 0,
        }
    }

    // --- Pause ---

    /// Admin only.
    #[payable]
    #[handle_result]
    pub fn set_pause(&mut self, paused: bool) -> Result<(), MarketError> {
        guards::check_no_deposit(op::PAUSE)?;
        self.check_admin(&env::predecessor_account_id(), op::PAUSE)?;
        self.paused = paused;
        events::emit_pause_changed(&self.admin, paused);
        Ok(())
    }

    // --- Two-step handover ---

    /// Admin only. Step 1: records the proposed admin; a later call
    /// replaces an earlier, not-yet-accepted proposal.
    #[payable]
    #[handle_result]
    pub fn propose_admin(&mut self, new_admin: AccountId) -> Result<(), MarketError> {
        guards::check_no_deposit(op::ADMIN)?;
        self.check_admin(&env::predecessor_account_id(), op::ADMIN)?;
        if new_admin == self.admin {
            return Err(ErrorKind::AdminUnchanged {
                admin: self.admin.clone(),
            }
            .op(op::ADMIN));
        }
        events::emit_admin_proposed(&self.admin, &new_admin);
        self.pending_admin = Some(new_admin);
        Ok(())
    }

    /// Step 2: only the proposed admin can call; the old admin loses its
    /// privileges in the same call.
    #[payable]
    #[handle_result]
    pub fn accept_admin(&mut self) -> Result<(), MarketError> {
        guards::check_no_deposit(op::ADMIN)?;
        let caller = env::predecessor_account_id();
        let pending = self
            .pending_admin
            .clone()
            .ok_or_else(|| ErrorKind::NoPendingAdmin.op(op::ADMIN))?;
        if pending != caller {
            return Err(ErrorKind::NotPendingAdmin { caller }.op(op::ADMIN));
        }

        let old_admin = std::mem::replace(&mut self.admin, caller);
        self.pending_admin = None;
        events::emit_admin_changed(&old_admin, &self.admin);
        Ok(())
    }

    /// Admin only. Aborts a pending handover; harmless when none is in
    /// progress.
    #[payable]
    #[handle_result]
    pub fn cancel_admin_change(&mut self) -> Result<(), MarketError> {
        guards::check_no_deposit(op::ADMIN)?;
        self.check_admin(&env::predecessor_account_id(), op::ADMIN)?;
        self.pending_admin = None;
        events::emit_admin_change_cancelled(&self.admin);
        Ok(())
    }

    // --- Configuration setters ---

    /// Admin only. Applies to subsequent sales, never retroactively.
    #[payable]
    #[handle_result]
    pub fn update_platform_fee(&mut self, new_fee_percent: u8) -> Result<(), MarketError> {
        guards::check_no_deposit(op::FEE)?;
        self.check_admin(&env::predecessor_account_id(), op::FEE)?;
        if new_fee_percent > MAX_PLATFORM_FEE_PERCENT {
            return Err(ErrorKind::FeeTooHigh {
                fee_percent: new_fee_percent,
                max: MAX_PLATFORM_FEE_PERCENT,
            }
            .op(op::FEE));
        }
        self.config.platform_fee_percent = new_fee_percent;
        events::emit_fee_updated(&self.admin, new_fee_percent);
        Ok(())
    }

    /// Admin only.
    #[payable]
    #[handle_result]
    pub fn update_mint_price(&mut self, new_price: U128) -> Result<(), MarketError> {
        guards::check_no_deposit(op::PRICE)?;
        self.check_admin(&env::predecessor_account_id(), op::PRICE)?;
        self.config.mint_price = new_price.0;
        events::emit_mint_price_updated(&self.admin, new_price.0);
        Ok(())
    }

    /// Admin only. Raising the floor does not invalidate live offers;
    /// they settle at the amount they were funded with.
    #[payable]
    #[handle_result]
    pub fn update_min_sale_price(&mut self, new_price: U128) -> Result<(), MarketError> {
        guards::check_no_deposit(op::PRICE)?;
        self.check_admin(&env::predecessor_account_id(), op::PRICE)?;
        self.config.min_sale_price = new_price.0;
        events::emit_min_sale_price_updated(&self.admin, new_price.0);
        Ok(())
    }

    // --- Upgrade ---

    /// Runs state migration on upgrade; called by the deploy transaction.
    #[private]
    #[init(ignore_state)]
    pub fn migrate() -> Self {
        let mut contract: Self = env::state_read().expect("State read failed");
        contract.version = env!("CARGO_PKG_VERSION").to_string();
        contract
    }
}
