use crate::tests::test_utils::*;
use crate::*;

fn burn_account() -> near_sdk::AccountId {
    BURN_ACCOUNT.parse().unwrap()
}

// --- transfer ---

#[test]
fn transfer_reassigns_owner_only() {
    let mut contract = new_contract();
    let token_id = mint_token(&mut contract, &author());

    contract
        .internal_transfer(&author(), token_id, &buyer())
        .unwrap();

    let token = contract.tokens.get(&token_id).unwrap();
    assert_eq!(token.owner, buyer());
    assert_eq!(token.author, author());
    assert_eq!(token.royalty_percent, 10);
}

#[test]
fn transfer_to_burn_address_fails() {
    let mut contract = new_contract();
    let token_id = mint_token(&mut contract, &author());

    let err = contract
        .internal_transfer(&author(), token_id, &burn_account())
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::BurnAddressTransfer);
    assert_eq!(contract.get_owner(token_id), Some(author()));
}

#[test]
fn transfer_to_self_fails() {
    let mut contract = new_contract();
    let token_id = mint_token(&mut contract, &author());

    let err = contract
        .internal_transfer(&author(), token_id, &author())
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::SelfTransfer);
}

#[test]
fn transfer_of_listed_token_fails() {
    let mut contract = new_contract();
    let token_id = mint_token(&mut contract, &author());
    contract.internal_list(&author(), token_id, 150).unwrap();

    let err = contract
        .internal_transfer(&author(), token_id, &buyer())
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::TokenListed { token_id });
}

#[test]
fn transfer_by_non_owner_fails() {
    let mut contract = new_contract();
    let token_id = mint_token(&mut contract, &author());

    let err = contract
        .internal_transfer(&buyer(), token_id, &other())
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::NotTokenOwner { .. }));
}

#[test]
fn transfer_while_paused_fails() {
    let mut contract = new_contract();
    let token_id = mint_token(&mut contract, &author());
    contract.paused = true;

    let err = contract
        .internal_transfer(&author(), token_id, &buyer())
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::ContractPaused);
}

#[test]
fn transfer_unknown_token_fails() {
    let mut contract = new_contract();

    let err = contract
        .internal_transfer(&author(), 3, &buyer())
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::TokenNotFound { token_id: 3 });
}

// --- burn ---

#[test]
fn burn_deletes_the_token() {
    let mut contract = new_contract();
    let token_id = mint_token(&mut contract, &author());

    contract.internal_burn(&author(), token_id).unwrap();

    assert!(contract.get_token(token_id).is_none());
    assert!(contract.get_owner(token_id).is_none());
}

#[test]
fn burn_refunds_every_live_offer() {
    let mut contract = new_contract();
    let token_id = mint_token(&mut contract, &author());
    contract
        .internal_make_offer(&bidder(), token_id, 150, 3600)
        .unwrap();
    contract
        .internal_make_offer(&other(), token_id, 260, 3600)
        .unwrap();

    contract.internal_burn(&author(), token_id).unwrap();

    assert_eq!(contract.get_pending(bidder()).0, 150);
    assert_eq!(contract.get_pending(other()).0, 260);
    assert!(contract.get_offers_for_token(token_id, None, None).is_empty());
}

#[test]
fn burn_leaves_offers_on_other_tokens_alone() {
    let mut contract = new_contract();
    let first = mint_token(&mut contract, &author());
    let second = mint_token(&mut contract, &author());
    contract
        .internal_make_offer(&bidder(), first, 150, 3600)
        .unwrap();
    contract
        .internal_make_offer(&bidder(), second, 170, 3600)
        .unwrap();

    contract.internal_burn(&author(), first).unwrap();

    assert_eq!(contract.get_pending(bidder()).0, 150);
    let surviving = contract.get_offer(second, bidder()).expect("untouched");
    assert_eq!(surviving.amount.0, 170);
}

#[test]
fn burn_of_listed_token_fails() {
    let mut contract = new_contract();
    let token_id = mint_token(&mut contract, &author());
    contract.internal_list(&author(), token_id, 150).unwrap();

    let err = contract.internal_burn(&author(), token_id).unwrap_err();
    assert_eq!(err.kind, ErrorKind::TokenListed { token_id });
}

#[test]
fn burn_by_non_owner_fails() {
    let mut contract = new_contract();
    let token_id = mint_token(&mut contract, &author());

    let err = contract.internal_burn(&buyer(), token_id).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::NotTokenOwner { .. }));
}

#[test]
fn burn_works_while_paused() {
    let mut contract = new_contract();
    let token_id = mint_token(&mut contract, &author());
    contract
        .internal_make_offer(&bidder(), token_id, 150, 3600)
        .unwrap();
    contract.paused = true;

    contract.internal_burn(&author(), token_id).unwrap();

    assert!(contract.get_token(token_id).is_none());
    assert_eq!(contract.get_pending(bidder()).0, 150);
}
