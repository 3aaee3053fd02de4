use soroban_sdk::{Address, Env, Symbol};

use rental_lib::{ActiveRental, EscrowConfig, Listing, TurnInOutcome};

pub fn initialized(env: &Env, config: &EscrowConfig) {
    env.events().publish(
        (Symbol::new(env, "initialized"),),
        (
            config.admin.clone(),
            config.asset_registry.clone(),
            config.payment_token.clone(),
        ),
    );
}

pub fn admin_changed(env: &Env, previous: &Address, next: &Address) {
    env.events().publish(
        (Symbol::new(env, "admin_changed"),),
        (previous.clone(), next.clone()),
    );
}

pub fn config_updated(env: &Env, config: &EscrowConfig) {
    env.events().publish(
        (Symbol::new(env, "config_updated"),),
        (config.fine_rate.clone(), config.withdraw_policy),
    );
}

pub fn car_listed(env: &Env, asset_id: u64, owner: &Address, listing: &Listing) {
    env.events().publish(
        (Symbol::new(env, "car_listed"),),
        (
            asset_id,
            owner.clone(),
            listing.hourly_price,
            listing.max_days,
            listing.advance_time,
        ),
    );
}

pub fn listing_updated(env: &Env, asset_id: u64, listing: &Listing) {
    env.events().publish(
        (Symbol::new(env, "listing_updated"),),
        (asset_id, listing.hourly_price, listing.max_days, listing.advance_time),
    );
}

pub fn listing_cancelled(env: &Env, asset_id: u64, owner: &Address) {
    env.events().publish(
        (Symbol::new(env, "listing_cancelled"),),
        (asset_id, owner.clone()),
    );
}

pub fn car_rented(env: &Env, asset_id: u64, rental: &ActiveRental, payment: i128) {
    env.events().publish(
        (Symbol::new(env, "car_rented"),),
        (asset_id, rental.borrower.clone(), rental.expiry, payment),
    );
}

pub fn turned_in(env: &Env, asset_id: u64, party: &Address, outcome: &TurnInOutcome) {
    env.events().publish(
        (Symbol::new(env, "turned_in"),),
        (asset_id, party.clone(), outcome.fine),
    );
    if outcome.settled {
        env.events()
            .publish((Symbol::new(env, "rental_settled"),), (asset_id,));
    }
}

pub fn fee_paid(env: &Env, asset_id: u64, borrower: &Address, amount: i128) {
    env.events().publish(
        (Symbol::new(env, "fee_paid"),),
        (asset_id, borrower.clone(), amount),
    );
}

pub fn withdrawn(env: &Env, party: &Address, amount: i128) {
    env.events()
        .publish((Symbol::new(env, "withdrawn"),), (party.clone(), amount));
}
