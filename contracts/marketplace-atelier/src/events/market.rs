use near_sdk::AccountId;

use super::builder::EventBuilder;
use super::{ADMIN, OFFER, PAYOUT, SALE, TOKEN};

// --- Token lifecycle ---

pub(crate) fn emit_mint(
    author: &AccountId,
    token_id: u64,
    metadata: &str,
    royalty_percent: u8,
) {
    EventBuilder::new(TOKEN, "mint", author)
        .field("token_id", token_id)
        .field("metadata", metadata)
        .field("royalty_percent", u32::from(royalty_percent))
        .emit();
}

pub(crate) fn emit_transfer(from: &AccountId, to: &AccountId, token_id: u64) {
    EventBuilder::new(TOKEN, "transfer", from)
        .field("token_id", token_id)
        .field("from", from)
        .field("to", to)
        .emit();
}

pub(crate) fn emit_burn(owner: &AccountId, token_id: u64, refunded_offers: u32) {
    EventBuilder::new(TOKEN, "burn", owner)
        .field("token_id", token_id)
        .field("refunded_offers", refunded_offers)
        .emit();
}

// --- Listing and sales ---

pub(crate) fn emit_list(seller: &AccountId, token_id: u64, price: u128) {
    EventBuilder::new(SALE, "list", seller)
        .field("token_id", token_id)
        .field("price", price)
        .emit();
}

pub(crate) fn emit_price_update(
    seller: &AccountId,
    token_id: u64,
    old_price: u128,
    new_price: u128,
) {
    EventBuilder::new(SALE, "update_price", seller)
        .field("token_id", token_id)
        .field("old_price", old_price)
        .field("new_price", new_price)
        .emit();
}

pub(crate) fn emit_sale_cancelled(seller: &AccountId, token_id: u64) {
    EventBuilder::new(SALE, "cancel", seller)
        .field("token_id", token_id)
        .emit();
}

pub(crate) fn emit_sale(
    buyer: &AccountId,
    seller: &AccountId,
    token_id: u64,
    price: u128,
    royalty: u128,
    fee: u128,
) {
    EventBuilder::new(SALE, "purchase", buyer)
        .field("token_id", token_id)
        .field("buyer", buyer)
        .field("seller", seller)
        .field("price", price)
        .field("royalty", royalty)
        .field("fee", fee)
        .emit();
}

// --- Offers ---

pub(crate) fn emit_offer_made(
    bidder: &AccountId,
    token_id: u64,
    amount: u128,
    expires_at: u64,
) {
    EventBuilder::new(OFFER, "make", bidder)
        .field("token_id", token_id)
        .field("amount", amount)
        .field("expires_at", expires_at)
        .emit();
}

pub(crate) fn emit_offer_cancelled(bidder: &AccountId, token_id: u64, refunded: u128) {
    EventBuilder::new(OFFER, "cancel", bidder)
        .field("token_id", token_id)
        .field("refunded", refunded)
        .emit();
}

pub(crate) fn emit_offer_accepted(
    seller: &AccountId,
    bidder: &AccountId,
    token_id: u64,
    price: u128,
    royalty: u128,
    fee: u128,
) {
    EventBuilder::new(OFFER, "accept", seller)
        .field("token_id", token_id)
        .field("buyer", bidder)
        .field("seller", seller)
        .field("price", price)
        .field("royalty", royalty)
        .field("fee", fee)
        .emit();
}

// --- Withdrawals ---

pub(crate) fn emit_withdrawal(recipient: &AccountId, amount: u128) {
    EventBuilder::new(PAYOUT, "withdraw", recipient)
        .field("recipient", recipient)
        .field("amount", amount)
        .emit();
}

pub(crate) fn emit_fees_withdrawn(admin: &AccountId, amount: u128) {
    EventBuilder::new(PAYOUT, "withdraw_fees", admin)
        .field("amount", amount)
        .emit();
}

// --- Administration ---

pub(crate) fn emit_pause_changed(admin: &AccountId, paused: bool) {
    EventBuilder::new(ADMIN, "set_pause", admin)
        .field("paused", paused)
        .emit();
}

pub(crate) fn emit_admin_proposed(admin: &AccountId, proposed: &AccountId) {
    EventBuilder::new(ADMIN, "propose", admin)
        .field("proposed", proposed)
        .emit();
}

pub(crate) fn emit_admin_changed(old_admin: &AccountId, new_admin: &AccountId) {
    EventBuilder::new(ADMIN, "accept", new_admin)
        .field("old_admin", old_admin)
        .field("new_admin", new_admin)
        .emit();
}

pub(crate) fn emit_admin_change_cancelled(admin: &AccountId) {
    EventBuilder::new(ADMIN, "cancel_handover", admin).emit();
}

pub(crate) fn emit_fee_updated(admin: &AccountId, fee_percent: u8) {
    EventBuilder::new(ADMIN, "update_platform_fee", admin)
        .field("fee_percent", u32::from(fee_percent))
        .emit();
}

pub(crate) fn emit_mint_price_updated(admin: &AccountId, price: u128) {
    EventBuilder::new(ADMIN, "update_mint_price", admin)
        .field("price", price)
        .emit();
}

pub(crate) fn emit_min_sale_price_updated(admin: &AccountId, price: u128) {
    EventBuilder::new(ADMIN, "update_min_sale_price", admin)
        .field("price", price)
        .emit();
}
