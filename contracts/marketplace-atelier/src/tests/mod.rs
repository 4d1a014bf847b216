
// --- Unit Tests ---
pub mod unit {
    pub mod admin_test;
    pub mod listing_test;
    pub mod mint_test;
    pub mod offer_test;
    pub mod payments_test;
    pub mod purchase_test;
    pub mod token_test;
    pub mod views_test;
}
