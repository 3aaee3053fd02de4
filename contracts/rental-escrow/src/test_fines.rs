//! Overdue fines: assessment at first turn-in and settlement via `pay_fee`.

#![cfg(test)]

use soroban_sdk::testutils::Address as _;
use soroban_sdk::Address;

use rental_lib::{ContractError, FineRate, ListingStatus};

use crate::test::{EscrowTest, PRICE, STARTING_FUNDS};

#[test]
fn test_fine_is_zero_when_returned_before_expiry() {
    let t = EscrowTest::setup();
    t.list();
    let expiry = t.rent(0);

    t.set_time(expiry - 1);
    let outcome = t.escrow.turn_in_by_owner(&t.asset_id, &t.owner);
    assert_eq!(outcome.fine, 0);
    assert_eq!(t.escrow.get_fine_listings(&t.asset_id, &t.borrower), 0);
}

#[test]
fn test_fine_is_zero_at_expiry() {
    let t = EscrowTest::setup();
    t.list();
    let expiry = t.rent(0);

    t.set_time(expiry);
    let outcome = t.escrow.turn_in_by_borrower(&t.asset_id, &t.borrower);
    assert_eq!(outcome.fine, 0);
}

#[test]
fn test_late_turn_in_charges_per_overdue_second() {
    let t = EscrowTest::setup();
    t.list();
    let expiry = t.rent(PRICE);

    t.set_time(expiry + 100);
    let outcome = t.escrow.turn_in_by_owner(&t.asset_id, &t.owner);
    assert_eq!(outcome.fine, 100 * PRICE);
    assert_eq!(t.escrow.get_fine_listings(&t.asset_id, &t.borrower), 100 * PRICE);
}

#[test]
fn test_fine_uses_updated_listing_price() {
    let t = EscrowTest::setup();
    t.list();
    t.escrow.update_listing(&t.asset_id, &t.owner, &7, &2, &60);
    let expiry = t.rent(0);

    t.set_time(expiry + 10);
    let outcome = t.escrow.turn_in_by_borrower(&t.asset_id, &t.borrower);
    assert_eq!(outcome.fine, 70);
}

#[test]
fn test_only_first_turn_in_assesses_fine() {
    let t = EscrowTest::setup();
    t.list();
    let expiry = t.rent(0);

    t.set_time(expiry + 100);
    t.escrow.turn_in_by_owner(&t.asset_id, &t.owner);

    t.set_time(expiry + 10_000);
    let outcome = t.escrow.turn_in_by_borrower(&t.asset_id, &t.borrower);
    assert_eq!(outcome.fine, 0);
    assert!(outcome.settled);
    assert_eq!(t.escrow.get_fine_listings(&t.asset_id, &t.borrower), 100 * PRICE);
}

#[test]
fn test_late_borrower_can_still_turn_in() {
    let t = EscrowTest::setup();
    t.list();
    let expiry = t.rent(0);

    t.set_time(expiry + 50);
    // Delegation has lapsed in the registry.
    assert_eq!(t.assets.user_of(&t.asset_id), None);

    let outcome = t.escrow.turn_in_by_borrower(&t.asset_id, &t.borrower);
    assert_eq!(outcome.fine, 50 * PRICE);
}

#[test]
fn test_flat_fine_rate() {
    let t = EscrowTest::setup_with(FineRate::PerSecond(25));
    t.list();
    let expiry = t.rent(0);

    t.set_time(expiry + 4);
    let outcome = t.escrow.turn_in_by_owner(&t.asset_id, &t.owner);
    assert_eq!(outcome.fine, 100);
}

#[test]
fn test_admin_switches_fine_rate() {
    let t = EscrowTest::setup();
    t.escrow.set_fine_rate(&t.admin, &FineRate::PerSecond(3));
    assert_eq!(t.escrow.get_config().fine_rate, FineRate::PerSecond(3));

    let stranger = Address::generate(&t.env);
    let result = t
        .escrow
        .try_set_fine_rate(&stranger, &FineRate::ListingPrice);
    assert_eq!(result, Err(Ok(ContractError::Unauthorized)));

    let result = t.escrow.try_set_fine_rate(&t.admin, &FineRate::PerSecond(-1));
    assert_eq!(result, Err(Ok(ContractError::InvalidPrice)));
}

#[test]
fn test_pay_fee_credits_owner_and_clears_fine() {
    let t = EscrowTest::setup();
    t.list();
    let expiry = t.rent(PRICE);

    t.set_time(expiry + 100);
    t.escrow.turn_in_by_owner(&t.asset_id, &t.owner);
    t.escrow.turn_in_by_borrower(&t.asset_id, &t.borrower);

    let paid = t.escrow.pay_fee(&t.asset_id, &t.borrower);
    assert_eq!(paid, 100 * PRICE);
    assert_eq!(t.escrow.get_fine_listings(&t.asset_id, &t.borrower), 0);
    assert_eq!(t.escrow.view_balance(&t.owner), PRICE + 100 * PRICE);
    assert_eq!(t.token.balance(&t.borrower), STARTING_FUNDS - PRICE - 100 * PRICE);
    assert_eq!(t.token.balance(&t.escrow_id), PRICE + 100 * PRICE);
}

#[test]
fn test_pay_fee_while_rental_still_open() {
    let t = EscrowTest::setup();
    t.list();
    let expiry = t.rent(0);

    t.set_time(expiry + 20);
    t.escrow.turn_in_by_borrower(&t.asset_id, &t.borrower);

    assert_eq!(t.escrow.pay_fee(&t.asset_id, &t.borrower), 20 * PRICE);
    assert_eq!(t.listing().status, ListingStatus::Rented);
}

#[test]
fn test_pay_fee_by_someone_else() {
    let t = EscrowTest::setup();
    t.list();
    let expiry = t.rent(0);
    t.set_time(expiry + 100);
    t.escrow.turn_in_by_owner(&t.asset_id, &t.owner);
    t.escrow.turn_in_by_borrower(&t.asset_id, &t.borrower);

    let result = t.escrow.try_pay_fee(&t.asset_id, &t.owner);
    assert_eq!(result, Err(Ok(ContractError::NotBorrower)));
    assert_eq!(t.escrow.get_fine_listings(&t.asset_id, &t.borrower), 100 * PRICE);
}

#[test]
fn test_pay_fee_with_nothing_owed() {
    let t = EscrowTest::setup();
    t.list();
    t.rent(0);
    t.escrow.turn_in_by_owner(&t.asset_id, &t.owner);
    t.escrow.turn_in_by_borrower(&t.asset_id, &t.borrower);

    let result = t.escrow.try_pay_fee(&t.asset_id, &t.borrower);
    assert_eq!(result, Err(Ok(ContractError::NoFineOwed)));
}

#[test]
fn test_pay_fee_twice() {
    let t = EscrowTest::setup();
    t.list();
    let expiry = t.rent(0);
    t.set_time(expiry + 5);
    t.escrow.turn_in_by_borrower(&t.asset_id, &t.borrower);

    t.escrow.pay_fee(&t.asset_id, &t.borrower);
    let result = t.escrow.try_pay_fee(&t.asset_id, &t.borrower);
    assert_eq!(result, Err(Ok(ContractError::NoFineOwed)));
}

#[test]
fn test_unpaid_fines_accumulate() {
    let t = EscrowTest::setup();
    t.list();

    let expiry = t.rent(0);
    t.set_time(expiry + 30);
    t.escrow.turn_in_by_owner(&t.asset_id, &t.owner);
    t.escrow.turn_in_by_borrower(&t.asset_id, &t.borrower);

    let expiry = t.rent(0);
    t.set_time(expiry + 70);
    t.escrow.turn_in_by_borrower(&t.asset_id, &t.borrower);

    assert_eq!(t.escrow.get_fine_listings(&t.asset_id, &t.borrower), 100 * PRICE);
}

#[test]
fn test_new_owner_turns_in_after_transfer() {
    let t = EscrowTest::setup();
    t.list();
    let expiry = t.rent(PRICE);

    let buyer = Address::generate(&t.env);
    t.registry.transfer(&t.owner, &buyer, &t.asset_id);

    let result = t.escrow.try_turn_in_by_owner(&t.asset_id, &t.owner);
    assert_eq!(result, Err(Ok(ContractError::NotOwner)));

    t.set_time(expiry + 10);
    t.escrow.turn_in_by_owner(&t.asset_id, &buyer);
    t.escrow.turn_in_by_borrower(&t.asset_id, &t.borrower);

    // Rent and fine still belong to the owner who rented the asset out.
    t.escrow.pay_fee(&t.asset_id, &t.borrower);
    assert_eq!(t.escrow.view_balance(&t.owner), PRICE + 10 * PRICE);
    assert_eq!(t.escrow.view_balance(&buyer), 0);
}

#[test]
fn test_unpaid_fine_stays_with_previous_owner() {
    let t = EscrowTest::setup();
    t.list();
    let expiry = t.rent(0);
    t.set_time(expiry + 100);
    t.escrow.turn_in_by_owner(&t.asset_id, &t.owner);
    t.escrow.turn_in_by_borrower(&t.asset_id, &t.borrower);

    let buyer = Address::generate(&t.env);
    t.registry.transfer(&t.owner, &buyer, &t.asset_id);
    t.registry.approve(&buyer, &t.asset_id, &t.escrow_id);

    let result = t
        .escrow
        .try_rent_car(&t.asset_id, &t.borrower, &(t.now() + 60), &0);
    assert_eq!(result, Err(Ok(ContractError::UnpaidFine)));
    assert_eq!(t.listing().status, ListingStatus::Listed);

    t.escrow.pay_fee(&t.asset_id, &t.borrower);
    assert_eq!(t.escrow.view_balance(&t.owner), 100 * PRICE);
    assert_eq!(t.escrow.view_balance(&buyer), 0);

    t.escrow
        .rent_car(&t.asset_id, &t.borrower, &(t.now() + 60), &PRICE);
    assert_eq!(t.escrow.view_balance(&buyer), PRICE);
    assert_eq!(t.escrow.view_balance(&t.owner), 100 * PRICE);
}
