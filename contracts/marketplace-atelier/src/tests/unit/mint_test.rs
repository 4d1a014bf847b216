use crate::tests::test_utils::*;
use crate::*;

// --- Success paths ---

#[test]
fn mint_assigns_dense_ids_and_records_fields() {
    let mut contract = new_contract();

    let first = contract
        .internal_mint(&author(), "ipfs://QmA".to_string(), 10, MINT_PRICE)
        .unwrap();
    let second = contract
        .internal_mint(&author(), "ipfs://QmB".to_string(), 0, MINT_PRICE)
        .unwrap();
    assert_eq!((first, second), (0, 1));

    let token = contract.tokens.get(&first).unwrap();
    assert_eq!(token.author, author());
    assert_eq!(token.owner, author());
    assert_eq!(token.price, 0);
    assert!(!token.for_sale);
    assert_eq!(token.royalty_percent, 10);
    assert_eq!(contract.get_total_minted(), 2);
}

#[test]
fn mint_proceeds_accrue_to_collected_fees() {
    let mut contract = new_contract();
    mint_token(&mut contract, &author());
    mint_token(&mut contract, &buyer());
    assert_eq!(contract.collected_fees, 2 * MINT_PRICE);
}

#[test]
fn mint_entry_point_uses_attached_deposit() {
    let mut contract = new_contract();
    set_caller_with_deposit(&author(), MINT_PRICE);
    let token_id = contract.mint("ipfs://QmEntry".to_string(), 5).unwrap();
    assert_eq!(token_id, 0);
    assert_eq!(contract.get_owner(token_id), Some(author()));
}

#[test]
fn mint_accepts_maximum_royalty() {
    let mut contract = new_contract();
    contract
        .internal_mint(&author(), "ipfs://QmMax".to_string(), 50, MINT_PRICE)
        .unwrap();
}

// --- Failure paths ---

#[test]
fn mint_while_paused_fails() {
    let mut contract = new_contract();
    contract.paused = true;

    let err = contract
        .internal_mint(&author(), "ipfs://QmA".to_string(), 10, MINT_PRICE)
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::ContractPaused);
    assert_eq!(err.operation, op::MINT);
}

#[test]
fn mint_wrong_deposit_fails() {
    let mut contract = new_contract();

    let err = contract
        .internal_mint(&author(), "ipfs://QmA".to_string(), 10, MINT_PRICE - 1)
        .unwrap_err();
    assert_eq!(
        err.kind,
        ErrorKind::DepositMismatch {
            expected: MINT_PRICE,
            attached: MINT_PRICE - 1,
        }
    );
}

#[test]
fn mint_empty_metadata_fails() {
    let mut contract = new_contract();

    let err = contract
        .internal_mint(&author(), String::new(), 10, MINT_PRICE)
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::EmptyMetadata);
}

#[test]
fn mint_oversized_metadata_fails() {
    let mut contract = new_contract();

    let metadata = "a".repeat(METADATA_CAP as usize + 1);
    let err = contract
        .internal_mint(&author(), metadata, 10, MINT_PRICE)
        .unwrap_err();
    assert_eq!(
        err.kind,
        ErrorKind::MetadataTooLong {
            length: METADATA_CAP + 1,
            max: METADATA_CAP,
        }
    );
}

#[test]
fn mint_excessive_royalty_fails() {
    let mut contract = new_contract();

    let err = contract
        .internal_mint(&author(), "ipfs://QmA".to_string(), 51, MINT_PRICE)
        .unwrap_err();
    assert_eq!(
        err.kind,
        ErrorKind::RoyaltyTooHigh {
            royalty_percent: 51,
            max: 50,
        }
    );
}

// --- Supply cap ---

#[test]
fn mint_respects_max_supply_for_every_caller() {
    let mut contract = new_contract_with(FEE_PERCENT, MIN_SALE_PRICE, 3);

    mint_token(&mut contract, &author());
    mint_token(&mut contract, &buyer());
    mint_token(&mut contract, &author());

    // Fourth mint fails regardless of who calls.
    for caller in [author(), buyer(), other()] {
        let err = contract
            .internal_mint(&caller, "ipfs://QmOverflow".to_string(), 0, MINT_PRICE)
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::MaxSupplyReached { max_supply: 3 });
    }
}

#[test]
fn burned_ids_are_never_reused() {
    let mut contract = new_contract();

    let first = mint_token(&mut contract, &author());
    contract.internal_burn(&author(), first).unwrap();

    let next = mint_token(&mut contract, &author());
    assert_eq!(next, 1);
    assert_eq!(contract.get_total_minted(), 2);
    assert!(contract.get_token(first).is_none());
}
